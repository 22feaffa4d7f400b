//! Host document the default adapter mounts dialog elements into

use super::{element::DialogElement, types::DialogResult};
use crate::utils::sync::lock;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Body of mounted dialog elements, in mount order
#[derive(Default)]
pub struct Document {
    body: Mutex<Vec<Arc<DialogElement>>>,
}

impl Document {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Append an element to the body and attach it
    pub fn append(self: &Arc<Self>, element: Arc<DialogElement>) -> DialogResult<()> {
        lock(&self.body).push(Arc::clone(&element));
        debug!("Mounted <{}> into document", element.tag_name());
        element.connect(Some(Arc::downgrade(self)))
    }

    /// Detach an element; unknown elements are ignored
    pub fn remove(&self, element: &DialogElement) {
        lock(&self.body).retain(|mounted| !std::ptr::eq(Arc::as_ptr(mounted), element));
    }

    pub fn elements(&self) -> Vec<Arc<DialogElement>> {
        lock(&self.body).clone()
    }

    pub fn contains(&self, element: &DialogElement) -> bool {
        lock(&self.body)
            .iter()
            .any(|mounted| std::ptr::eq(Arc::as_ptr(mounted), element))
    }

    /// Element whose `id` attribute matches a dialog id
    pub fn find_by_id(&self, id: &str) -> Option<Arc<DialogElement>> {
        lock(&self.body)
            .iter()
            .find(|element| element.attribute("id").as_deref() == Some(id))
            .cloned()
    }

    /// Most recently mounted element
    pub fn last(&self) -> Option<Arc<DialogElement>> {
        lock(&self.body).last().cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.body).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_html(&self) -> String {
        let body: String = self.elements().iter().map(|element| element.to_html()).collect();
        format!("<body>{}</body>", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{registry, types::ElementState};

    #[tokio::test]
    async fn test_append_connects_and_remove_detaches() {
        let document = Document::new();
        let element = registry::create_element(registry::ensure_registered()).unwrap();
        element.set_attribute("id", "dlg-doc");

        document.append(Arc::clone(&element)).unwrap();
        assert_eq!(element.state(), ElementState::Initialized);
        assert!(document.contains(&element));
        assert!(document.find_by_id("dlg-doc").is_some());
        assert!(document.to_html().starts_with("<body><internal-dialog-"));

        document.remove(&element);
        assert!(document.is_empty());
        assert!(document.find_by_id("dlg-doc").is_none());
    }
}
