use std::collections::BTreeMap;

use super::{Dom, Node};
use crate::error::LoadError;

/// In-process page: a title plus a set of named containers.
/// Serializes container contents as escaped HTML.
#[derive(Debug, Default, Clone)]
pub struct MemoryDom {
    title: String,
    containers: BTreeMap<String, Vec<Node>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_containers(ids: &[&str]) -> Self {
        let mut dom = Self::new();
        for id in ids {
            dom.add_container(id);
        }
        dom
    }

    pub fn add_container(&mut self, id: &str) {
        self.containers.entry(id.to_string()).or_default();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self, id: &str) -> Option<&[Node]> {
        self.containers.get(id).map(|c| c.as_slice())
    }

    pub fn child_count(&self, id: &str) -> usize {
        self.children(id).map(|c| c.len()).unwrap_or(0)
    }

    pub fn container_html(&self, id: &str) -> Option<String> {
        self.children(id)
            .map(|nodes| nodes.iter().map(Node::to_html).collect())
    }

    pub fn container_text(&self, id: &str) -> Option<String> {
        self.children(id)
            .map(|nodes| nodes.iter().map(Node::text_content).collect())
    }
}

impl Dom for MemoryDom {
    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn replace_children(&mut self, id: &str, nodes: Vec<Node>) -> Result<(), LoadError> {
        match self.containers.get_mut(id) {
            Some(children) => {
                *children = nodes;
                Ok(())
            }
            None => Err(LoadError::MissingContainer(id.to_string())),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
