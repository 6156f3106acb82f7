//! Structured element construction and the page surface the renderer writes to.
//! Markup is always built as a tree of elements and text nodes; data never
//! gets parsed as HTML.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::LoadError;

pub use memory::MemoryDom;

/// Tags serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source"];

/// What the renderer needs from a page: containers by id and the title.
pub trait Dom {
    fn has_container(&self, id: &str) -> bool;

    /// Drop whatever the container holds and append `nodes` in order.
    /// Fails with `MissingContainer` when `id` is absent.
    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<(), LoadError>;

    fn set_title(&mut self, title: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    pub fn text_content(&self) -> String {
        match self {
            Node::Element(el) => el.text_content(),
            Node::Text(t) => t.clone(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(t) => out.push_str(&html_escape(t)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Set an attribute, replacing an earlier value of the same name.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn child(mut self, el: Element) -> Self {
        self.children.push(Node::Element(el));
        self
    }

    pub fn children<I: IntoIterator<Item = Element>>(mut self, els: I) -> Self {
        self.children.extend(els.into_iter().map(Node::Element));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search for the first descendant with `tag`.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        for child in self.child_elements() {
            if child.tag == tag {
                return Some(child);
            }
            if let Some(found) = child.find(tag) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in self.child_elements() {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
