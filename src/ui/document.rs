use crate::domain::ports::{Document, Element};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    inner_html: String,
}

impl MemoryElement {
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

impl Element for MemoryElement {
    fn set_inner_html(&mut self, html: &str) {
        self.inner_html = html.to_string();
    }
}

/// A page held in memory, keyed by element id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty element, replacing any element with the same id.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), MemoryElement::default());
        self
    }

    pub fn inner_html(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(MemoryElement::inner_html)
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&mut self, id: &str) -> Option<&mut MemoryElement> {
        self.elements.get_mut(id)
    }
}
