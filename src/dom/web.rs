use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{Dom, Node};
use crate::error::LoadError;

/// The live browser document.
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    pub fn new(document: Document) -> Self {
        BrowserDom { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn build(&self, node: &Node) -> Result<web_sys::Node, JsValue> {
        match node {
            Node::Text(text) => Ok(self.document.create_text_node(text).into()),
            Node::Element(el) => {
                let element = self.document.create_element(&el.tag)?;
                for (name, value) in &el.attrs {
                    element.set_attribute(name, value)?;
                }
                for child in &el.children {
                    element.append_child(&self.build(child)?)?;
                }
                Ok(element.into())
            }
        }
    }
}

impl Dom for BrowserDom {
    fn has_container(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<(), LoadError> {
        let container = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| LoadError::MissingContainer(id.to_string()))?;

        // Build detached first so a failure never leaves the container half-filled.
        let built = nodes
            .iter()
            .map(|n| self.build(n))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LoadError::Dom(format!("{:?}", e)))?;

        container.set_text_content(None);
        for node in &built {
            container
                .append_child(node)
                .map_err(|e| LoadError::Dom(format!("{:?}", e)))?;
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }
}
