//! Service metadata projection.
//!
//! Reads the OWS `ServiceIdentification` and `ServiceProvider` sections.
//! Every field is independently optional.

use serde::Serialize;
use serde_json::Value;

use crate::tree::{child, keyword_values, text_at};

/// Service identification and provider details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceMetadata {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_: Option<String>,
    pub fees: Option<String>,
    pub access_constraints: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub contact: Option<ServiceContact>,
}

/// Who to contact about the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceContact {
    pub individual_name: Option<String>,
    pub organization: Option<String>,
    pub position_name: Option<String>,
    pub address: Option<ContactAddress>,
    pub voice: Option<String>,
    pub facsimile: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactAddress {
    pub delivery_point: Option<String>,
    pub city: Option<String>,
    pub administrative_area: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl ServiceMetadata {
    /// Project service metadata from a capabilities tree.
    pub fn from_tree(tree: &Value) -> Self {
        let identification = child(tree, "ServiceIdentification");
        let field = |name: &str| identification.and_then(|node| text_at(node, &[name]));

        let keywords = identification
            .and_then(|node| child(node, "Keywords"))
            .map(keyword_values);

        Self {
            title: field("Title"),
            abstract_: field("Abstract"),
            fees: field("Fees"),
            access_constraints: field("AccessConstraints"),
            keywords,
            contact: child(tree, "ServiceProvider").map(ServiceContact::from_provider),
        }
    }
}

impl ServiceContact {
    fn from_provider(provider: &Value) -> Self {
        let contact = child(provider, "ServiceContact");
        let info = contact.and_then(|node| child(node, "ContactInfo"));
        let address = info.and_then(|node| child(node, "Address"));

        let from = |node: Option<&Value>, path: &[&str]| node.and_then(|n| text_at(n, path));

        Self {
            individual_name: from(contact, &["IndividualName"]),
            organization: text_at(provider, &["ProviderName"]),
            position_name: from(contact, &["PositionName"]),
            address: address.map(ContactAddress::from_node),
            voice: from(info, &["Phone", "Voice"]),
            facsimile: from(info, &["Phone", "Facsimile"]),
            email: from(address, &["ElectronicMailAddress"]),
        }
    }
}

impl ContactAddress {
    fn from_node(address: &Value) -> Self {
        Self {
            delivery_point: text_at(address, &["DeliveryPoint"]),
            city: text_at(address, &["City"]),
            administrative_area: text_at(address, &["AdministrativeArea"]),
            postal_code: text_at(address, &["PostalCode"]),
            country: text_at(address, &["Country"]),
        }
    }
}
