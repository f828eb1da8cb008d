//! Element tree produced by the parser

use std::mem;

/// Name given to the caller's root record before parsing starts.
pub const ROOT_NAME: &str = "root";

/// A name/value pair attached to an [`Element`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    value: Option<String>,
}

/// A named node with optional body text, attributes and child elements
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    body: Option<String>,
    attributes: Vec<Attribute>,
    children: Vec<Element>,
}

impl Attribute {
    /// Creates an attribute whose value has not been parsed yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value, or `""` if it was never set.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Sets the value. Returns `false` without touching it if it was already set.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(value.into());
        true
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An empty record named [`ROOT_NAME`], ready to be handed to the parser.
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Replaces the body text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
    }

    /// Appends one child after the existing ones.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Appends one attribute after the existing ones. Duplicate names are kept.
    pub fn append_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.set_body(body);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append_attribute(Attribute::with_value(name, value));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    /// First attribute whose name equals `name`.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// First attribute whose name starts with `prefix`, so `"id"` also finds
    /// `"identity"`.
    pub fn attribute_by_prefix(&self, prefix: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attr| attr.name.starts_with(prefix))
    }

    /// True when the element has no name, body, attributes or children.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.body.is_none()
            && self.attributes.is_empty()
            && self.children.is_empty()
    }

    /// Releases everything this element owns, depth first and post-order:
    /// attributes, then each child subtree, then the name and body. The
    /// record itself stays usable and ends up empty.
    pub fn clear(&mut self) {
        drop(mem::take(&mut self.attributes));

        let mut children = mem::take(&mut self.children);
        for child in &mut children {
            child.clear();
        }
        drop(children);

        self.name = String::new();
        self.body = None;
    }
}
