//! Error types shared across the OGC crates.

use thiserror::Error;

use crate::bbox::BboxParseError;

/// Errors a catalog consumer can surface when talking to an OGC service.
#[derive(Debug, Error)]
pub enum OgcError {
    #[error("Invalid BBOX: {0}")]
    InvalidBbox(#[from] BboxParseError),

    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    #[error("{title}: {message}")]
    ServiceError { title: String, message: String },
}

impl OgcError {
    /// Short heading suitable for showing the user above the message.
    pub fn title(&self) -> &str {
        match self {
            OgcError::InvalidBbox(_) => "Invalid bounding box",
            OgcError::LayerNotFound(_) => "Layer not found",
            OgcError::ServiceError { title, .. } => title.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_title_is_passed_through() {
        let err = OgcError::ServiceError {
            title: "Invalid GetCapabilities".to_string(),
            message: "bad document".to_string(),
        };
        assert_eq!(err.title(), "Invalid GetCapabilities");
        assert_eq!(err.to_string(), "Invalid GetCapabilities: bad document");
    }

    #[test]
    fn test_bbox_error_converts() {
        let err: OgcError = BboxParseError::InvalidFormat("1,2".to_string()).into();
        assert_eq!(err.title(), "Invalid bounding box");
    }
}
