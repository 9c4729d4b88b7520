//! Table assembly for Tabula.
//!
//! A [`TableDirector`] drives a [`TableAssembler`] (normally a
//! [`TableBuilder`]) through the header, body and footer steps and hands
//! back a [`TableDocument`] ready to render:
//!
//! ```
//! use tabula_table::{Dataset, TableBuilder, TableDirector, TableTheme};
//!
//! let dataset = Dataset::from_json(r#"{"headers": ["A"], "rows": [["1"]]}"#).unwrap();
//! let mut director = TableDirector::new(TableBuilder::with_theme(TableTheme::plain()));
//! let table = director.make_from_dataset(&dataset).unwrap();
//! assert_eq!(
//!     table.render().unwrap(),
//!     "<table><thead><tr><th>A</th></tr></thead><tbody><tr><td>1</td></tr></tbody></table>"
//! );
//! ```

pub mod builder;
pub mod dataset;
pub mod director;
pub mod error;
pub mod theme;

pub use builder::{TableAssembler, TableBuilder, TableDocument};
pub use dataset::{Cell, Dataset};
pub use director::TableDirector;
pub use error::{BuildError, DatasetError};
pub use theme::{Decoration, TableTheme};
