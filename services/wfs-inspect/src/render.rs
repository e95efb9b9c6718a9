//! Text and JSON rendering of capabilities projections.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ogc_common::BoundingBox;
use serde::Serialize;
use wfs_protocol::{all_keywords, CapabilitiesDocument, FeatureType};

use crate::OutputFormat;

#[derive(Serialize)]
struct ServiceReport<'a> {
    url: &'a str,
    version: Option<String>,
    service: wfs_protocol::ServiceMetadata,
    feature_type_count: usize,
    layer_keywords: Vec<String>,
}

#[derive(Serialize)]
struct Resolution<'a> {
    requested: &'a str,
    feature_type: &'a FeatureType,
    bounding_box: Option<BoundingBox>,
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// One aligned "Label: value" line.
fn field(label: &str, value: Option<&str>) -> String {
    format!("{:<20}{}", format!("{}:", label), or_dash(value))
}

/// Feature types, optionally limited to those intersecting `within`.
///
/// Layers without an extent, or with NaN bounds, never intersect.
pub fn select_layers<'a>(
    feature_types: &'a [FeatureType],
    within: Option<&BoundingBox>,
) -> Vec<&'a FeatureType> {
    feature_types
        .iter()
        .filter(|ft| match within {
            None => true,
            Some(area) => ft.bounding_box().is_some_and(|bbox| bbox.intersects(area)),
        })
        .collect()
}

pub fn service(doc: &CapabilitiesDocument, format: OutputFormat) -> Result<String> {
    let service = doc.service();

    if format == OutputFormat::Json {
        let report = ServiceReport {
            url: doc.url(),
            version: doc.version(),
            service,
            feature_type_count: doc.feature_types().len(),
            layer_keywords: all_keywords(doc.feature_types()),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let keywords = service.keywords.as_ref().map(|k| k.join(", "));
    let mut lines = vec![
        field("URL", Some(doc.url())),
        field("Version", doc.version().as_deref()),
        field("Title", service.title.as_deref()),
        field("Abstract", service.abstract_.as_deref()),
        field("Fees", service.fees.as_deref()),
        field("Access constraints", service.access_constraints.as_deref()),
        field("Keywords", keywords.as_deref()),
    ];

    if let Some(contact) = &service.contact {
        lines.push(field("Organization", contact.organization.as_deref()));
        lines.push(field("Contact", contact.individual_name.as_deref()));
        lines.push(field("Position", contact.position_name.as_deref()));
        lines.push(field("Voice", contact.voice.as_deref()));
        lines.push(field("Fax", contact.facsimile.as_deref()));
        lines.push(field("Email", contact.email.as_deref()));
        if let Some(address) = &contact.address {
            let parts: Vec<&str> = [
                &address.delivery_point,
                &address.city,
                &address.administrative_area,
                &address.postal_code,
                &address.country,
            ]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
            lines.push(field("Address", Some(parts.join(", ").as_str())));
        }
    }

    let count = doc.feature_types().len().to_string();
    lines.push(field("Feature types", Some(count.as_str())));
    Ok(lines.join("\n"))
}

fn format_extent(ft: &FeatureType) -> String {
    match ft.wgs84_bounding_box {
        Some(bbox) => format!(
            "{} {} {} {}",
            bbox.west, bbox.south, bbox.east, bbox.north
        ),
        None => "-".to_string(),
    }
}

pub fn layers(feature_types: &[&FeatureType], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(feature_types)?);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Name", "Title", "Keywords", "WGS84 extent (W S E N)"]);

    for ft in feature_types {
        table.add_row(vec![
            or_dash(ft.name.as_deref()).to_string(),
            or_dash(ft.title.as_deref()).to_string(),
            ft.keyword_list().join(", "),
            format_extent(ft),
        ]);
    }

    Ok(table.to_string())
}

pub fn layer(requested: &str, ft: &FeatureType, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        let resolution = Resolution {
            requested,
            feature_type: ft,
            bounding_box: ft.bounding_box(),
        };
        return Ok(serde_json::to_string_pretty(&resolution)?);
    }

    Ok(format!(
        "{} -> {} ({})\n  abstract: {}\n  crs:      {}\n  extent:   {}",
        requested,
        or_dash(ft.name.as_deref()),
        or_dash(ft.title.as_deref()),
        or_dash(ft.abstract_.as_deref()),
        or_dash(ft.default_crs.as_deref()),
        format_extent(ft),
    ))
}
