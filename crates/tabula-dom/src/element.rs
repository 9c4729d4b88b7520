//! Element data: tag names, concrete element kinds and their allow-lists,
//! plus the id / class / style / attribute bags every element carries.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use strum_macros::{AsRefStr, Display, EnumString};

/// Ordered map of attribute names to values.
///
/// A `None` value is a flag attribute and renders as the bare name.
pub type AttributesMap = IndexMap<String, Option<String>>;

/// Ordered map of inline style properties (lowercase) to values.
pub type StyleMap = IndexMap<String, String>;

/// Ordered set of class names.
pub type ClassList = IndexSet<String>;

/// The fixed set of tags an element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TagName {
    /// `<table>`
    Table,
    /// `<thead>`
    Thead,
    /// `<tbody>`
    Tbody,
    /// `<tfoot>`
    Tfoot,
    /// `<tr>`
    Tr,
    /// `<td>`
    Td,
    /// `<th>`
    Th,
    /// `<div>`
    Div,
    /// `<span>`
    Span,
    /// `<p>`
    P,
    /// `<h1>`
    H1,
    /// `<h2>`
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
    /// `<br>`
    Br,
    /// `<hr>`
    Hr,
}

impl TagName {
    /// Every tag, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::Table,
        Self::Thead,
        Self::Tbody,
        Self::Tfoot,
        Self::Tr,
        Self::Td,
        Self::Th,
        Self::Div,
        Self::Span,
        Self::P,
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
        Self::Br,
        Self::Hr,
    ];

    /// Returns true for tags that HTML defines as void (no content, no
    /// closing tag). The renderer still emits a closing tag for them.
    #[must_use]
    pub const fn is_void(self) -> bool {
        matches!(self, Self::Br | Self::Hr)
    }
}

/// Concrete element kinds.
///
/// Allow-lists are expressed in terms of kinds, not tags: a
/// `Generic(TagName::Td)` is a plain element that happens to use the `td`
/// tag and is not accepted where a [`ElementKind::DataCell`] is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<table>`, accepts header, body and footer sections.
    Table,
    /// `<thead>`, accepts rows.
    TableHeader,
    /// `<tbody>`, accepts rows.
    TableBody,
    /// `<tfoot>`, accepts rows.
    TableFooter,
    /// `<tr>`, accepts data and header cells.
    TableRow,
    /// `<td>`, unrestricted.
    DataCell,
    /// `<th>`, unrestricted.
    HeaderCell,
    /// Any other element, unrestricted.
    Generic(TagName),
}

const SECTION_CHILDREN: &[NodeKind] = &[NodeKind::Element(ElementKind::TableRow)];
const TABLE_CHILDREN: &[NodeKind] = &[
    NodeKind::Element(ElementKind::TableHeader),
    NodeKind::Element(ElementKind::TableBody),
    NodeKind::Element(ElementKind::TableFooter),
];
const ROW_CHILDREN: &[NodeKind] = &[
    NodeKind::Element(ElementKind::DataCell),
    NodeKind::Element(ElementKind::HeaderCell),
];

impl ElementKind {
    /// The tag this kind renders as.
    #[must_use]
    pub const fn tag_name(self) -> TagName {
        match self {
            Self::Table => TagName::Table,
            Self::TableHeader => TagName::Thead,
            Self::TableBody => TagName::Tbody,
            Self::TableFooter => TagName::Tfoot,
            Self::TableRow => TagName::Tr,
            Self::DataCell => TagName::Td,
            Self::HeaderCell => TagName::Th,
            Self::Generic(tag) => tag,
        }
    }

    /// Kinds of node that may be attached as children. Empty means any.
    #[must_use]
    pub const fn allowed_children(self) -> &'static [NodeKind] {
        match self {
            Self::Table => TABLE_CHILDREN,
            Self::TableHeader | Self::TableBody | Self::TableFooter => SECTION_CHILDREN,
            Self::TableRow => ROW_CHILDREN,
            Self::DataCell | Self::HeaderCell | Self::Generic(_) => &[],
        }
    }

    /// Returns true if a child of kind `child` may be attached.
    #[must_use]
    pub fn allows(self, child: NodeKind) -> bool {
        let allowed = self.allowed_children();
        allowed.is_empty() || allowed.contains(&child)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic(tag) => write!(f, "<{tag}>"),
            kind => write!(f, "{kind:?} <{}>", kind.tag_name()),
        }
    }
}

/// Kind of any node in the tree, the unit of allow-list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A text node.
    Text,
    /// A comment node.
    Comment,
    /// An element of the given kind.
    Element(ElementKind),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Comment => f.write_str("comment"),
            Self::Element(kind) => write!(f, "{kind}"),
        }
    }
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    kind: ElementKind,
    id: Option<String>,
    classes: ClassList,
    styles: StyleMap,
    attrs: AttributesMap,
}

impl ElementData {
    /// Create undecorated element data of the given kind.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            classes: ClassList::new(),
            styles: StyleMap::new(),
            attrs: AttributesMap::new(),
        }
    }

    /// The concrete kind of this element.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The tag this element renders as.
    #[must_use]
    pub const fn tag_name(&self) -> TagName {
        self.kind.tag_name()
    }

    /// Returns the element's id if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the element's id.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Remove the element's id.
    pub fn remove_id(&mut self) {
        self.id = None;
    }

    /// Classes in insertion order.
    #[must_use]
    pub const fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Returns true if the class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Add a class. Adding an existing class keeps its original position.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let _ = self.classes.insert(class.into());
    }

    /// Remove a class, keeping the order of the others.
    pub fn remove_class(&mut self, class: &str) {
        let _ = self.classes.shift_remove(class);
    }

    /// Inline styles in insertion order, keys lowercase.
    #[must_use]
    pub const fn styles(&self) -> &StyleMap {
        &self.styles
    }

    /// Look up an inline style, case-insensitively.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .get(&property.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Set an inline style. The property name is stored lowercase; setting an
    /// existing property replaces its value in place.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let _ = self
            .styles
            .insert(property.to_ascii_lowercase(), value.into());
    }

    /// Remove an inline style, case-insensitively.
    pub fn remove_style(&mut self, property: &str) {
        let _ = self.styles.shift_remove(&property.to_ascii_lowercase());
    }

    /// Attributes in insertion order.
    #[must_use]
    pub const fn attributes(&self) -> &AttributesMap {
        &self.attrs
    }

    /// Look up an attribute. Flag attributes yield `Some(None)`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        self.attrs.get(name).map(Option::as_deref)
    }

    /// Set an attribute with a value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.attrs.insert(name.into(), Some(value.into()));
    }

    /// Set a valueless attribute such as `hidden`.
    pub fn set_flag_attribute(&mut self, name: impl Into<String>) {
        let _ = self.attrs.insert(name.into(), None);
    }

    /// Remove an attribute.
    pub fn remove_attribute(&mut self, name: &str) {
        let _ = self.attrs.shift_remove(name);
    }
}

/// Decoration applied when an element is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementInit {
    id: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
}

impl ElementInit {
    /// Empty decoration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add several classes.
    #[must_use]
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Add an inline style.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Add an attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Apply the decoration to fresh element data.
    #[must_use]
    pub fn apply(self, kind: ElementKind) -> ElementData {
        let mut data = ElementData::new(kind);
        if let Some(id) = self.id {
            data.set_id(id);
        }
        for class in self.classes {
            data.add_class(class);
        }
        for (property, value) in &self.styles {
            data.set_style(property, value.as_str());
        }
        for (name, value) in self.attrs {
            data.set_attribute(name, value);
        }
        data
    }
}
