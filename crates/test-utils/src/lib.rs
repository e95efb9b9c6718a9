//! Shared test utilities for the wfs-catalog workspace.
//!
//! This crate provides:
//! - Canned GetCapabilities documents (WFS 1.1 and 2.0, edge cases)
//! - An in-memory [`XmlLoader`](wfs_protocol::XmlLoader) that counts calls
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! ```ignore
//! use test_utils::{fixtures, MockLoader};
//! ```

pub mod fixtures;
pub mod loader;

pub use fixtures::*;
pub use loader::MockLoader;
