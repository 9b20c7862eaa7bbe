//! Owned element tree built from a parsed response document.
//!
//! Only elements, attributes and text survive the conversion; comments and
//! processing instructions are dropped. Element names are matched exactly.

use super::DecodeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse an XML document and return its root element.
    pub fn parse(xml: &str) -> Result<Self, DecodeError> {
        let document = roxmltree::Document::parse(xml)?;
        Ok(Self::from_node(document.root_element()))
    }

    fn from_node(node: roxmltree::Node<'_, '_>) -> Self {
        let mut text = String::new();
        let mut children = Vec::new();
        for child in node.children() {
            if child.is_element() {
                children.push(Self::from_node(child));
            } else if child.is_text() {
                text.push_str(child.text().unwrap_or_default());
            }
        }
        Self {
            name: node.tag_name().name().to_owned(),
            attributes: node
                .attributes()
                .map(|attr| (attr.name().to_owned(), attr.value().to_owned()))
                .collect(),
            text,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct text content, excluding text of child elements.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Every direct child named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Walk a path of direct children.
    pub fn path(&self, segments: &[&str]) -> Option<&XmlElement> {
        segments
            .iter()
            .try_fold(self, |element, segment| element.child(segment))
    }

    /// First element named `name` in this subtree (including `self`),
    /// depth-first in document order.
    pub fn find(&self, name: &str) -> Option<&XmlElement> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Every element named `name` in this subtree, in document order.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a XmlElement> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a XmlElement>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }

    /// A direct child named `name` if there is one, otherwise the first match
    /// anywhere in the subtree. Row elements often repeat their parent's field
    /// names, so the parent's own field wins.
    pub fn lookup(&self, name: &str) -> Option<&XmlElement> {
        self.child(name).or_else(|| self.find(name))
    }

    /// Trimmed text of [`XmlElement::lookup`]; `None` when the element is
    /// missing or blank.
    pub fn find_text(&self, name: &str) -> Option<&str> {
        self.lookup(name)
            .map(|element| element.text.trim())
            .filter(|text| !text.is_empty())
    }
}
