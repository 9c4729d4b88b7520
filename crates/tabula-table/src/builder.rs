//! Step-by-step table assembly.

use tabula_dom::{DomTree, ElementKind, NodeId, NodeKind};
use tabula_html::{HtmlRenderer, RenderError};

use crate::dataset::Cell;
use crate::error::BuildError;
use crate::theme::{Decoration, TableTheme};

/// A finished table: the tree that owns it and the `<table>` node.
#[derive(Debug, Clone)]
pub struct TableDocument {
    tree: DomTree,
    root: NodeId,
}

impl TableDocument {
    /// The tree holding the table.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The `<table>` element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Render the table to HTML.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`]; a tree produced by the builder only
    /// contains elements and text, so this does not fail in practice.
    pub fn render(&self) -> Result<String, RenderError> {
        HtmlRenderer::new().render(&self.tree, self.root)
    }
}

/// The builder interface a [`crate::TableDirector`] drives.
pub trait TableAssembler {
    /// Discard the table in progress and start a fresh one.
    fn reset(&mut self);

    /// Add a header section with one header cell per value. Does nothing for
    /// `None` or an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Dom`] if the tree rejects a node.
    fn set_table_header(&mut self, headers: Option<&[Cell]>) -> Result<(), BuildError>;

    /// Add a body section with one row per input row. Does nothing for
    /// `None` or an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Dom`] if the tree rejects a node.
    fn set_table_body(&mut self, rows: Option<&[Vec<Cell>]>) -> Result<(), BuildError>;

    /// Add a footer section with one data cell per value. Does nothing for
    /// `None` or an empty slice.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Dom`] if the tree rejects a node.
    fn set_table_footer(&mut self, footers: Option<&[Cell]>) -> Result<(), BuildError>;

    /// Return the table assembled so far. The builder keeps its state; call
    /// [`TableAssembler::reset`] before starting another table.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingBody`] if no body section was added.
    fn build(&self) -> Result<TableDocument, BuildError>;
}

/// Builds one table at a time, decorating it with a [`TableTheme`].
#[derive(Debug, Clone)]
pub struct TableBuilder {
    theme: TableTheme,
    tree: DomTree,
    table: NodeId,
}

impl TableBuilder {
    /// Builder using the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::with_theme(TableTheme::default())
    }

    /// Builder using `theme` for every table it produces.
    #[must_use]
    pub fn with_theme(theme: TableTheme) -> Self {
        let mut tree = DomTree::new();
        let table = tree.create_element_with(ElementKind::Table, theme.table.to_init());
        Self { theme, tree, table }
    }

    /// The theme in use.
    #[must_use]
    pub const fn theme(&self) -> &TableTheme {
        &self.theme
    }

    /// The tree being assembled.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// The `<table>` element being assembled.
    #[must_use]
    pub const fn table(&self) -> NodeId {
        self.table
    }

    /// One `<tr>` holding a cell of `cell_kind` with a text node per value.
    fn row_of(
        tree: &mut DomTree,
        theme: &TableTheme,
        cell_kind: ElementKind,
        cell_decoration: &Decoration,
        values: &[Cell],
    ) -> Result<NodeId, BuildError> {
        let row = tree.create_element_with(ElementKind::TableRow, theme.row.to_init());
        for value in values {
            let cell = tree.create_element_with(cell_kind, cell_decoration.to_init());
            let text = tree.create_text(value.to_string());
            tree.append_child(cell, text)?;
            tree.append_child(row, cell)?;
        }
        Ok(row)
    }

    fn has_body(&self) -> bool {
        self.tree
            .children(self.table)
            .iter()
            .any(|&child| self.tree.kind(child) == Some(NodeKind::Element(ElementKind::TableBody)))
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableAssembler for TableBuilder {
    fn reset(&mut self) {
        log::debug!(target: "builder", "reset");
        self.tree = DomTree::new();
        self.table = self
            .tree
            .create_element_with(ElementKind::Table, self.theme.table.to_init());
    }

    fn set_table_header(&mut self, headers: Option<&[Cell]>) -> Result<(), BuildError> {
        let Some(headers) = headers.filter(|h| !h.is_empty()) else {
            return Ok(());
        };
        log::debug!(target: "builder", "header with {} cells", headers.len());

        let theme = &self.theme;
        let thead = self
            .tree
            .create_element_with(ElementKind::TableHeader, theme.header.to_init());
        let row = Self::row_of(
            &mut self.tree,
            theme,
            ElementKind::HeaderCell,
            &theme.header_cell,
            headers,
        )?;
        self.tree.append_child(thead, row)?;
        self.tree.append_child(self.table, thead)?;
        Ok(())
    }

    fn set_table_body(&mut self, rows: Option<&[Vec<Cell>]>) -> Result<(), BuildError> {
        let Some(rows) = rows.filter(|r| !r.is_empty()) else {
            return Ok(());
        };
        log::debug!(target: "builder", "body with {} rows", rows.len());

        let theme = &self.theme;
        let tbody = self
            .tree
            .create_element_with(ElementKind::TableBody, theme.body.to_init());
        for values in rows {
            let row = Self::row_of(
                &mut self.tree,
                theme,
                ElementKind::DataCell,
                &theme.body_cell,
                values,
            )?;
            self.tree.append_child(tbody, row)?;
        }
        self.tree.append_child(self.table, tbody)?;
        Ok(())
    }

    fn set_table_footer(&mut self, footers: Option<&[Cell]>) -> Result<(), BuildError> {
        let Some(footers) = footers.filter(|f| !f.is_empty()) else {
            return Ok(());
        };
        log::debug!(target: "builder", "footer with {} cells", footers.len());

        let theme = &self.theme;
        let tfoot = self
            .tree
            .create_element_with(ElementKind::TableFooter, theme.footer.to_init());
        let row = Self::row_of(
            &mut self.tree,
            theme,
            ElementKind::DataCell,
            &theme.footer_cell,
            footers,
        )?;
        self.tree.append_child(tfoot, row)?;
        self.tree.append_child(self.table, tfoot)?;
        Ok(())
    }

    fn build(&self) -> Result<TableDocument, BuildError> {
        if !self.has_body() {
            return Err(BuildError::MissingBody);
        }
        log::debug!(
            target: "builder",
            "built table with {} sections",
            self.tree.children(self.table).len()
        );
        Ok(TableDocument {
            tree: self.tree.clone(),
            root: self.table,
        })
    }
}
