//! Common utilities for Tabula.
//!
//! This crate provides shared infrastructure used by the tree, renderer and
//! builder crates:
//! - **Logger** - a small `log` backend with coloured level tags
//! - **Warning System** - deduplicated warnings for known limitations

pub mod logger;
pub mod warning;
