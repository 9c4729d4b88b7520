//! Drives a builder through the fixed header, body, footer sequence.

use crate::builder::{TableAssembler, TableBuilder, TableDocument};
use crate::dataset::{Cell, Dataset};
use crate::error::BuildError;

/// Produces whole tables from plain data using a [`TableAssembler`].
#[derive(Debug, Clone, Default)]
pub struct TableDirector<B: TableAssembler = TableBuilder> {
    builder: B,
}

impl<B: TableAssembler> TableDirector<B> {
    /// Director driving `builder`.
    #[must_use]
    pub const fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Reset the builder, then add header, body and footer in that order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingBody`] when `rows` is `None` or empty,
    /// whatever the headers and footers.
    pub fn make_simple_table(
        &mut self,
        headers: Option<&[Cell]>,
        rows: Option<&[Vec<Cell>]>,
        footers: Option<&[Cell]>,
    ) -> Result<TableDocument, BuildError> {
        self.builder.reset();
        self.builder.set_table_header(headers)?;
        self.builder.set_table_body(rows)?;
        self.builder.set_table_footer(footers)?;
        self.builder.build()
    }

    /// Build a table from the sections present in `dataset`.
    ///
    /// # Errors
    ///
    /// Same as [`TableDirector::make_simple_table`].
    pub fn make_from_dataset(&mut self, dataset: &Dataset) -> Result<TableDocument, BuildError> {
        self.make_simple_table(dataset.headers(), dataset.rows(), dataset.footers())
    }
}
