//! Feature type (layer) projection and name resolution.

use std::collections::HashSet;

use ogc_common::BoundingBox;
use serde::Serialize;
use serde_json::Value;

use crate::tree::{at, child, first, keyword_values, text, text_at};

/// A layer advertised under `FeatureTypeList`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureType {
    /// Layer identifier, possibly namespace qualified (`prefix:local`).
    pub name: Option<String>,
    /// Display title.
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_: Option<String>,
    pub keywords: Option<Keywords>,
    pub wgs84_bounding_box: Option<Wgs84BoundingBox>,
    /// `DefaultCRS` (WFS 2.0) or `DefaultSRS` (WFS 1.1).
    pub default_crs: Option<String>,
}

/// Keywords keep the shape they had in the document: one keyword is a bare
/// string, several are a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Keywords {
    Single(String),
    Multiple(Vec<String>),
}

impl Keywords {
    fn from_node(keywords: &Value) -> Option<Self> {
        match keywords {
            // Repeated <Keywords> blocks are merged into one list.
            Value::Array(_) => Some(Keywords::Multiple(keyword_values(keywords))),
            block => match child(block, "Keyword")? {
                Value::Array(items) => {
                    Some(Keywords::Multiple(items.iter().filter_map(text).collect()))
                }
                single => text(single).map(Keywords::Single),
            },
        }
    }

    /// Keywords as a list regardless of shape.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Keywords::Single(keyword) => vec![keyword.clone()],
            Keywords::Multiple(keywords) => keywords.clone(),
        }
    }
}

/// WGS84 extent of a feature type, in degrees.
///
/// Bounds come from the whitespace separated `LowerCorner` ("west south") and
/// `UpperCorner` ("east north") texts. A corner that is missing, does not hold
/// exactly two tokens, or holds a token that is not a number yields NaN in
/// the affected positions. Malformed text is never read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wgs84BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Wgs84BoundingBox {
    fn from_node(node: &Value) -> Self {
        let (west, south) = parse_corner(text_at(node, &["LowerCorner"]).as_deref());
        let (east, north) = parse_corner(text_at(node, &["UpperCorner"]).as_deref());
        Self {
            west,
            south,
            east,
            north,
        }
    }
}

fn parse_corner(corner: Option<&str>) -> (f64, f64) {
    let Some(corner) = corner else {
        return (f64::NAN, f64::NAN);
    };
    let tokens: Vec<&str> = corner.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => (parse_number(x), parse_number(y)),
        _ => (f64::NAN, f64::NAN),
    }
}

fn parse_number(token: &str) -> f64 {
    token.parse().unwrap_or(f64::NAN)
}

impl FeatureType {
    /// Project one `FeatureType` element.
    pub fn from_node(node: &Value) -> Self {
        Self {
            name: text_at(node, &["Name"]),
            title: text_at(node, &["Title"]),
            abstract_: text_at(node, &["Abstract"]),
            keywords: child(node, "Keywords").and_then(Keywords::from_node),
            wgs84_bounding_box: child(node, "WGS84BoundingBox")
                .and_then(first)
                .map(Wgs84BoundingBox::from_node),
            default_crs: text_at(node, &["DefaultCRS"])
                .or_else(|| text_at(node, &["DefaultSRS"])),
        }
    }

    /// Project the feature type list of a capabilities tree, in document
    /// order.
    ///
    /// Only an array under `FeatureTypeList/FeatureType` is read. A single
    /// bare `FeatureType` object, which is what a one-layer document converts
    /// to, yields an empty list.
    pub fn list_from_tree(tree: &Value) -> Vec<FeatureType> {
        match at(tree, &["FeatureTypeList", "FeatureType"]) {
            Some(Value::Array(items)) => items.iter().map(FeatureType::from_node).collect(),
            _ => Vec::new(),
        }
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(|name| name.split_once(':').map_or(name, |(_, local)| local))
    }

    /// Keywords as a flat list.
    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords.as_ref().map(Keywords::to_vec).unwrap_or_default()
    }

    /// WGS84 extent as a catalog rectangle, `None` when the layer has none.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.wgs84_bounding_box
            .map(|bbox| BoundingBox::from_degrees(bbox.west, bbox.south, bbox.east, bbox.north))
    }
}

/// Resolve a requested layer name against a feature type list.
///
/// Tried in order, first hit wins, document order breaks ties:
/// 1. a feature type whose Name equals `name`
/// 2. if `name` has a namespace prefix, one whose Name equals the part after
///    the first colon
/// 3. a feature type whose Title equals `name`
///
/// Entries without a Name or Title never match on the missing field.
pub fn find_layer<'a>(feature_types: &'a [FeatureType], name: &str) -> Option<&'a FeatureType> {
    let by_name = |wanted: &str| {
        feature_types
            .iter()
            .find(|ft| ft.name.as_deref() == Some(wanted))
    };

    by_name(name)
        .or_else(|| name.split_once(':').and_then(|(_, local)| by_name(local)))
        .or_else(|| {
            feature_types
                .iter()
                .find(|ft| ft.title.as_deref() == Some(name))
        })
}

/// Keywords found on any feature type, deduplicated in first-seen order.
pub fn all_keywords(feature_types: &[FeatureType]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for keyword in feature_types.iter().flat_map(FeatureType::keyword_list) {
        if seen.insert(keyword.clone()) {
            keywords.push(keyword);
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layer(name: Option<&str>, title: &str) -> FeatureType {
        FeatureType {
            name: name.map(str::to_owned),
            title: Some(title.to_string()),
            abstract_: None,
            keywords: None,
            wgs84_bounding_box: None,
            default_crs: None,
        }
    }

    #[test]
    fn test_parse_bounding_box() {
        let ft = FeatureType::from_node(&json!({
            "Name": "ns:Roads",
            "Title": "Roads",
            "WGS84BoundingBox": { "LowerCorner": "10.5 -20.25", "UpperCorner": "15.0 -10.0" }
        }));
        let bbox = ft.wgs84_bounding_box.unwrap();
        assert_eq!(bbox.west, 10.5);
        assert_eq!(bbox.south, -20.25);
        assert_eq!(bbox.east, 15.0);
        assert_eq!(bbox.north, -10.0);
        assert_eq!(ft.bounding_box(), Some(BoundingBox::new(10.5, -20.25, 15.0, -10.0)));
    }

    #[test]
    fn test_malformed_corner_is_nan_not_zero() {
        let ft = FeatureType::from_node(&json!({
            "Title": "Broken",
            "WGS84BoundingBox": { "LowerCorner": "abc 5", "UpperCorner": "1 2 3" }
        }));
        let bbox = ft.wgs84_bounding_box.unwrap();
        assert!(bbox.west.is_nan());
        assert_eq!(bbox.south, 5.0);
        assert!(bbox.east.is_nan());
        assert!(bbox.north.is_nan());
    }

    #[test]
    fn test_missing_corner_is_nan() {
        let ft = FeatureType::from_node(&json!({
            "Title": "Half",
            "WGS84BoundingBox": { "LowerCorner": "1 2" }
        }));
        let bbox = ft.wgs84_bounding_box.unwrap();
        assert_eq!((bbox.west, bbox.south), (1.0, 2.0));
        assert!(bbox.east.is_nan() && bbox.north.is_nan());
    }

    #[test]
    fn test_no_bounding_box_is_absent() {
        let ft = FeatureType::from_node(&json!({ "Name": "a", "Title": "A" }));
        assert_eq!(ft.wgs84_bounding_box, None);
        assert_eq!(ft.bounding_box(), None);
    }

    #[test]
    fn test_keywords_keep_shape() {
        let one = FeatureType::from_node(&json!({
            "Title": "x",
            "Keywords": { "Keyword": "roads" }
        }));
        assert_eq!(one.keywords, Some(Keywords::Single("roads".to_string())));
        assert_eq!(one.keyword_list(), vec!["roads"]);

        let many = FeatureType::from_node(&json!({
            "Title": "x",
            "Keywords": { "Keyword": ["a", "b"] }
        }));
        assert_eq!(
            many.keywords,
            Some(Keywords::Multiple(vec!["a".to_string(), "b".to_string()]))
        );

        let none = FeatureType::from_node(&json!({ "Title": "x" }));
        assert_eq!(none.keywords, None);
        assert!(none.keyword_list().is_empty());
    }

    #[test]
    fn test_default_crs_falls_back_to_srs() {
        let wfs2 = FeatureType::from_node(&json!({
            "Title": "x",
            "DefaultCRS": "urn:ogc:def:crs:EPSG::4326"
        }));
        assert_eq!(wfs2.default_crs.as_deref(), Some("urn:ogc:def:crs:EPSG::4326"));
        let wfs11 = FeatureType::from_node(&json!({ "Title": "x", "DefaultSRS": "EPSG:4283" }));
        assert_eq!(wfs11.default_crs.as_deref(), Some("EPSG:4283"));
    }

    #[test]
    fn test_missing_title_is_absent() {
        let ft = FeatureType::from_node(&json!({ "Name": "x" }));
        assert_eq!(ft.title, None);
    }

    #[test]
    fn test_single_feature_type_object_yields_empty_list() {
        let tree = json!({
            "FeatureTypeList": { "FeatureType": { "Name": "only", "Title": "Only" } }
        });
        assert!(FeatureType::list_from_tree(&tree).is_empty());
    }

    #[test]
    fn test_list_preserves_order() {
        let tree = json!({ "FeatureTypeList": { "FeatureType": [
            { "Name": "b", "Title": "B" },
            { "Name": "a", "Title": "A" }
        ] } });
        let names: Vec<_> = FeatureType::list_from_tree(&tree)
            .into_iter()
            .map(|ft| ft.name.unwrap())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(layer(Some("ns:Roads"), "").local_name(), Some("Roads"));
        assert_eq!(layer(Some("Roads"), "").local_name(), Some("Roads"));
        assert_eq!(layer(None, "").local_name(), None);
    }

    #[test]
    fn test_find_layer_tiers() {
        let layers = vec![
            layer(Some("ns:Roads"), "Roads"),
            layer(Some("Rivers"), "Rivers"),
            layer(Some("Lakes"), "ns:Roads"),
        ];

        // exact
        assert_eq!(find_layer(&layers, "ns:Roads"), Some(&layers[0]));
        assert_eq!(find_layer(&layers, "Rivers"), Some(&layers[1]));
        // namespace stripped from the query
        assert_eq!(find_layer(&layers, "foo:Rivers"), Some(&layers[1]));
        // title
        assert_eq!(find_layer(&layers, "Roads"), Some(&layers[0]));
        assert_eq!(find_layer(&layers, "Unknown"), None);
    }

    #[test]
    fn test_find_layer_title_tier_when_no_name_matches() {
        let layers = vec![layer(Some("Lakes"), "ns:Roads")];
        assert_eq!(find_layer(&layers, "ns:Roads"), Some(&layers[0]));
    }

    #[test]
    fn test_find_layer_strips_only_first_colon() {
        let layers = vec![layer(Some("b:c"), "t")];
        assert_eq!(find_layer(&layers, "a:b:c"), Some(&layers[0]));
    }

    #[test]
    fn test_find_layer_first_in_document_order_wins() {
        let layers = vec![layer(Some("dup"), "first"), layer(Some("dup"), "second")];
        assert_eq!(
            find_layer(&layers, "dup").unwrap().title.as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_find_layer_empty_query_ignores_missing_titles() {
        let mut untitled = layer(Some("a"), "");
        untitled.title = None;
        let layers = vec![untitled, layer(Some("b"), "B")];
        assert_eq!(find_layer(&layers, ""), None);
        assert_eq!(find_layer(&layers, "B"), Some(&layers[1]));
    }

    #[test]
    fn test_find_layer_skips_untitled_in_title_tier() {
        let tree = json!({ "FeatureTypeList": { "FeatureType": [
            { "Name": "a" },
            { "Name": "b", "Title": "B" }
        ] } });
        let layers = FeatureType::list_from_tree(&tree);
        assert_eq!(layers[0].title, None);
        assert!(find_layer(&layers, "").is_none());
    }

    #[test]
    fn test_all_keywords_dedup() {
        let mut a = layer(Some("a"), "A");
        a.keywords = Some(Keywords::Multiple(vec!["x".into(), "y".into()]));
        let mut b = layer(Some("b"), "B");
        b.keywords = Some(Keywords::Single("x".into()));
        assert_eq!(all_keywords(&[a, b]), vec!["x", "y"]);
    }
}
