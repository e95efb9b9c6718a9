//! WFS GetCapabilities document.

use std::sync::OnceLock;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{WfsError, WfsResult};
use crate::feature_type::{find_layer, FeatureType};
use crate::loader::XmlLoader;
use crate::service::ServiceMetadata;
use crate::tree::{self, child};
use crate::xml::xml_to_tree;

/// A validated capabilities document.
///
/// The converted tree is never modified after construction, so every
/// projection is a pure function of it. The feature type list is computed on
/// first use and then shared.
#[derive(Debug)]
pub struct CapabilitiesDocument {
    url: String,
    tree: Value,
    feature_types: OnceLock<Vec<FeatureType>>,
}

impl CapabilitiesDocument {
    /// Retrieve, convert and validate the document at `url`.
    ///
    /// This does not memoize; use [`crate::CapabilitiesCache`] for that.
    #[instrument(skip(loader), fields(url = %url))]
    pub async fn from_url(url: &str, loader: &dyn XmlLoader) -> WfsResult<Self> {
        let xml = loader.load_xml(url).await?;
        Self::from_xml(url, &xml)
    }

    /// Convert and validate an XML body retrieved from `url`.
    pub fn from_xml(url: &str, xml: &str) -> WfsResult<Self> {
        let tree = xml_to_tree(xml).map_err(|e| WfsError::MalformedXml {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Self::from_tree(url, tree)
    }

    /// Validate an already converted tree.
    ///
    /// A document without a non-empty `ServiceIdentification` section is
    /// rejected with [`WfsError::InvalidCapabilitiesDocument`].
    pub fn from_tree(url: &str, tree: Value) -> WfsResult<Self> {
        if !tree::is_present(child(&tree, "ServiceIdentification")) {
            warn!(url = %url, "Document has no ServiceIdentification section");
            metrics::counter!("wfs_capabilities_invalid_total").increment(1);
            return Err(WfsError::invalid_capabilities(url));
        }

        debug!(url = %url, "Capabilities document validated");
        Ok(Self {
            url: url.to_string(),
            tree,
            feature_types: OnceLock::new(),
        })
    }

    /// URL the document was loaded from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The converted tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }

    /// Protocol version from the root `version` attribute.
    pub fn version(&self) -> Option<String> {
        child(&self.tree, "version").and_then(tree::text)
    }

    /// Service identification and contact details.
    pub fn service(&self) -> ServiceMetadata {
        ServiceMetadata::from_tree(&self.tree)
    }

    /// Advertised feature types in document order.
    pub fn feature_types(&self) -> &[FeatureType] {
        self.feature_types.get_or_init(|| FeatureType::list_from_tree(&self.tree))
    }

    /// Resolve a layer by name. See [`find_layer`] for the matching rules.
    pub fn find_layer(&self, name: &str) -> Option<&FeatureType> {
        find_layer(self.feature_types(), name)
    }
}
