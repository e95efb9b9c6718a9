//! Error types for WFS capabilities loading.

use ogc_common::OgcError;
use thiserror::Error;

/// Result type alias using WfsError.
pub type WfsResult<T> = Result<T, WfsError>;

/// Heading shown to the user when a document fails validation.
pub const INVALID_CAPABILITIES_TITLE: &str = "Invalid GetCapabilities";

/// Errors raised while loading a capabilities document.
///
/// Only whole-document failures are errors. Missing or malformed fields inside
/// a valid document surface as `None` or NaN values in the projections.
///
/// The type is `Clone` because one failed load is shared by every caller
/// waiting on the same URL.
#[derive(Debug, Clone, Error)]
pub enum WfsError {
    /// The loader could not retrieve the document.
    #[error("Failed to retrieve {url}: {message}")]
    Transport { url: String, message: String },

    /// The body was retrieved but is not well-formed XML.
    #[error("Malformed XML from {url}: {message}")]
    MalformedXml { url: String, message: String },

    /// The document parsed but has no ServiceIdentification section.
    #[error("{title}: {message}")]
    InvalidCapabilitiesDocument {
        url: String,
        title: String,
        message: String,
    },

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl WfsError {
    /// Build the validation failure for a document retrieved from `url`.
    pub fn invalid_capabilities(url: &str) -> Self {
        WfsError::InvalidCapabilitiesDocument {
            url: url.to_string(),
            title: INVALID_CAPABILITIES_TITLE.to_string(),
            message: format!(
                "The WFS GetCapabilities document at {} was retrieved but does not look like \
                 a valid WFS capabilities document. Either the catalog file has been set up \
                 incorrectly, or the server address has changed.",
                url
            ),
        }
    }

    pub(crate) fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        WfsError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// URL of the document the error refers to, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            WfsError::Transport { url, .. }
            | WfsError::MalformedXml { url, .. }
            | WfsError::InvalidCapabilitiesDocument { url, .. } => Some(url),
            WfsError::HttpClient(_) => None,
        }
    }

    /// Short heading for display above the message.
    pub fn title(&self) -> &str {
        match self {
            WfsError::Transport { .. } => "Network error",
            WfsError::MalformedXml { .. } => "Malformed XML",
            WfsError::InvalidCapabilitiesDocument { title, .. } => title.as_str(),
            WfsError::HttpClient(_) => "HTTP client error",
        }
    }
}

impl From<WfsError> for OgcError {
    fn from(err: WfsError) -> Self {
        OgcError::ServiceError {
            title: err.title().to_string(),
            message: match &err {
                WfsError::InvalidCapabilitiesDocument { message, .. } => message.clone(),
                other => other.to_string(),
            },
        }
    }
}
