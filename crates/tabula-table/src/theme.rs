//! Decoration applied by the builder to each part of a table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tabula_dom::ElementInit;

/// Id, classes, inline styles and attributes for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decoration {
    /// Element id.
    pub id: Option<String>,
    /// Class names, in order.
    pub classes: Vec<String>,
    /// Inline styles, property to value.
    pub styles: IndexMap<String, String>,
    /// Attributes, name to value.
    pub attributes: IndexMap<String, String>,
}

impl Decoration {
    /// Decoration with only inline styles.
    #[must_use]
    pub fn styled<'a>(styles: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            styles: styles
                .into_iter()
                .map(|(property, value)| (property.to_string(), value.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Convert to the element initializer the tree understands.
    #[must_use]
    pub fn to_init(&self) -> ElementInit {
        let mut init = ElementInit::new().classes(self.classes.iter().cloned());
        if let Some(id) = &self.id {
            init = init.id(id.clone());
        }
        for (property, value) in &self.styles {
            init = init.style(property.clone(), value.clone());
        }
        for (name, value) in &self.attributes {
            init = init.attribute(name.clone(), value.clone());
        }
        init
    }
}

/// Decoration for every part of a table built by [`crate::TableBuilder`].
///
/// Missing fields in a deserialized theme fall back to the default theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTheme {
    /// The `<table>` element.
    pub table: Decoration,
    /// The `<thead>` section.
    pub header: Decoration,
    /// Each `<th>` in the header row.
    pub header_cell: Decoration,
    /// The `<tbody>` section.
    pub body: Decoration,
    /// Each `<tr>` in any section.
    pub row: Decoration,
    /// Each `<td>` in the body.
    pub body_cell: Decoration,
    /// The `<tfoot>` section.
    pub footer: Decoration,
    /// Each `<td>` in the footer row.
    pub footer_cell: Decoration,
}

impl TableTheme {
    /// No decoration at all.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            table: Decoration::default(),
            header: Decoration::default(),
            header_cell: Decoration::default(),
            body: Decoration::default(),
            row: Decoration::default(),
            body_cell: Decoration::default(),
            footer: Decoration::default(),
            footer_cell: Decoration::default(),
        }
    }
}

impl Default for TableTheme {
    fn default() -> Self {
        let border = [("border", "1px solid black")];
        Self {
            table: Decoration {
                classes: vec!["table".to_string(), "table-bordered".to_string()],
                attributes: IndexMap::from([
                    ("data-source".to_string(), "dataset".to_string()),
                    ("title".to_string(), "Example table".to_string()),
                ]),
                ..Decoration::styled(border)
            },
            header: Decoration::styled([("background", "lightblue")]),
            header_cell: Decoration::styled(border),
            body_cell: Decoration::styled(border),
            ..Self::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_falls_back_to_default() {
        let theme: TableTheme =
            serde_json::from_str(r#"{"table": {"classes": ["grid"]}}"#).unwrap();
        assert_eq!(theme.table.classes, ["grid"]);
        assert!(theme.table.styles.is_empty());
        assert_eq!(theme.header, TableTheme::default().header);
    }

    #[test]
    fn test_plain_theme_is_empty() {
        let plain = TableTheme::plain();
        assert_eq!(plain.table, Decoration::default());
        assert_eq!(plain.body_cell, Decoration::default());
    }
}
