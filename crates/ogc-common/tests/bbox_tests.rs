//! Tests for BoundingBox operations.

use ogc_common::bbox::{BboxParseError, BoundingBox};

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_from_degrees_maps_west_south_east_north() {
    let bbox = BoundingBox::from_degrees(10.5, -20.25, 15.0, -10.0);
    assert_eq!(bbox, BoundingBox::new(10.5, -20.25, 15.0, -10.0));
}

// ============================================================================
// from_kvp_string tests
// ============================================================================

#[test]
fn test_parse_kvp_bbox_with_spaces() {
    let bbox = BoundingBox::from_kvp_string(" -10, -5 , 10 ,5").unwrap();
    assert_eq!(bbox, BoundingBox::new(-10.0, -5.0, 10.0, 5.0));
}

#[test]
fn test_parse_kvp_bbox_scientific_notation() {
    let bbox = BoundingBox::from_kvp_string("1e-6,2e-6,1e6,2e6").unwrap();
    assert!((bbox.min_x - 1e-6).abs() < 1e-10);
    assert!((bbox.max_x - 1e6).abs() < 0.001);
}

#[test]
fn test_parse_kvp_bbox_wrong_count() {
    let result = BoundingBox::from_kvp_string("0,0,10");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_kvp_bbox_bad_number() {
    match BoundingBox::from_kvp_string("0,abc,10,10") {
        Err(BboxParseError::InvalidNumber(n)) => assert_eq!(n, "abc"),
        other => panic!("expected InvalidNumber, got {:?}", other),
    }
}

// ============================================================================
// Spatial predicates
// ============================================================================

#[test]
fn test_intersects() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
    let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);

    assert!(a.intersects(&b));
    assert!(b.intersects(&a));
    assert!(!a.intersects(&c));
}

#[test]
fn test_nan_box_never_intersects() {
    let a = BoundingBox::new(f64::NAN, 0.0, 10.0, 10.0);
    let world = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert!(!a.intersects(&world));
}
