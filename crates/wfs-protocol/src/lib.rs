//! OGC WFS GetCapabilities support.
//!
//! Loads a WFS GetCapabilities document, checks that it really is one, and
//! exposes read-only projections over it:
//! - service identification and provider contact details
//! - the advertised feature types (layers) with their WGS84 extents
//! - layer lookup by name with namespace and title fallbacks
//!
//! Documents are normally obtained through [`CapabilitiesCache`], which makes
//! sure each URL is fetched and parsed at most once.

pub mod cache;
pub mod capabilities;
pub mod error;
pub mod feature_type;
pub mod loader;
pub mod service;
mod tree;
pub mod xml;

pub use cache::{CacheStats, CapabilitiesCache};
pub use capabilities::CapabilitiesDocument;
pub use error::{WfsError, WfsResult};
pub use feature_type::{all_keywords, find_layer, FeatureType, Keywords, Wgs84BoundingBox};
pub use loader::{HttpXmlLoader, LoaderConfig, XmlLoader};
pub use service::{ContactAddress, ServiceContact, ServiceMetadata};
pub use xml::xml_to_tree;
