//! Common types shared by the OGC protocol crates and their consumers.

pub mod bbox;
pub mod error;

pub use bbox::{BboxParseError, BoundingBox};
pub use error::OgcError;
