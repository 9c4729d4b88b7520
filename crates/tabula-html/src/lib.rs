//! HTML renderer for Tabula element trees.
//!
//! # Scope
//!
//! This crate implements:
//! - **Renderer** - depth-first serialization of elements and text to HTML
//!   - attribute fragments in a fixed order: id, classes, attributes, styles
//!   - children visited through the tree's restartable child cursor
//! - **Escaping** - text and attribute values escaped exactly once, at render time
//! - **Outline** - an indented debug listing of a tree
//!
//! # Not Implemented
//!
//! - Void elements: `<br>` and `<hr>` are rendered with an explicit closing
//!   tag (a warning is logged once per tag)
//! - Comments: the renderer rejects them

/// HTML escaping.
pub mod escape;
/// Rendering errors.
pub mod error;
/// Debug listing of a tree.
pub mod outline;
/// The HTML renderer.
pub mod renderer;

pub use error::RenderError;
pub use escape::escape_html;
pub use outline::outline;
pub use renderer::{HtmlRenderer, render};
