//! Adapter seam between the controller and whatever hosts the dialog
//!
//! The controller never touches the host directly. It hands the adapter an
//! element tag, a dialog id, the slot contents and a cancel hook, and gets
//! back a handle it can close once the user has chosen.

use super::{
    document::Document,
    element::{DialogElement, DialogProperties},
    registry,
    render::{convert_to_nodes, ClickHandler},
    types::{ActionButtonType, DialogKind, DialogResult, PromptField, SlotContents},
};
use crate::markup::{CssContent, Node, SvgContent};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Invoked when the host dismisses a dialog without a button choice
pub type CancelHook = Arc<dyn Fn() + Send + Sync>;

/// Everything an adapter needs to mount one dialog
pub struct OpenDialogParams<C = Node> {
    pub id: String,
    pub custom_dialog_tag_name: String,
    pub slot_contents: SlotContents<C>,
    pub properties: DialogProperties,
    pub cancel: CancelHook,
}

/// Handle to a mounted dialog
#[async_trait]
pub trait DialogHandle: Send + Sync {
    /// Close the dialog; resolves once it is fully torn down
    async fn close_dialog(&self);
}

/// Host integration used by the controller
///
/// Only `open_dialog` is required. Every renderer returning `None` makes the
/// controller fall back to its built-in rendering for that piece.
pub trait DialogAdapter<C = Node>: Send + Sync {
    fn open_dialog(&self, params: OpenDialogParams<C>) -> DialogResult<Box<dyn DialogHandle>>;

    fn render_close_button(&self, _title: &str, _on_click: ClickHandler) -> Option<C> {
        None
    }

    fn render_action_button(
        &self,
        _button_type: ActionButtonType,
        _text: &str,
        _on_click: ClickHandler,
    ) -> Option<C> {
        None
    }

    fn render_prompt_input(&self, _label: &str, _field: PromptField) -> Option<C> {
        None
    }

    /// Extra stylesheet adopted once for the registered element tag
    fn styles(&self, _tag_name: &str) -> Option<CssContent> {
        None
    }

    /// Icon shown for a dialog kind, given the configured default
    fn dialog_icon(&self, _kind: DialogKind, default: Option<SvgContent>) -> Option<SvgContent> {
        default
    }
}

/// Mounts dialog elements into a [`Document`]
#[derive(Clone)]
pub struct DefaultAdapter {
    document: Arc<Document>,
}

impl DefaultAdapter {
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    pub fn with_document(document: Arc<Document>) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    fn fill_slots(element: &DialogElement, slot_contents: SlotContents<Node>) -> DialogResult<()> {
        for (slot, content) in slot_contents {
            let nodes = convert_to_nodes(content)?;
            if !nodes.is_empty() {
                element.append_to_slot(slot, nodes)?;
            }
        }
        Ok(())
    }
}

impl Default for DefaultAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogAdapter<Node> for DefaultAdapter {
    fn open_dialog(&self, params: OpenDialogParams<Node>) -> DialogResult<Box<dyn DialogHandle>> {
        let element = registry::create_element(&params.custom_dialog_tag_name)?;
        element.set_attribute("id", &params.id);
        element.apply_properties(params.properties);
        element.on_cancel(params.cancel);

        self.document.append(Arc::clone(&element))?;
        if let Err(e) = Self::fill_slots(&element, params.slot_contents) {
            element.remove();
            return Err(e);
        }

        debug!("Opened dialog {} in document", params.id);
        Ok(Box::new(ElementHandle { element }))
    }
}

/// Handle closing a mounted [`DialogElement`]
pub struct ElementHandle {
    element: Arc<DialogElement>,
}

impl ElementHandle {
    pub fn new(element: Arc<DialogElement>) -> Self {
        Self { element }
    }
}

#[async_trait]
impl DialogHandle for ElementHandle {
    async fn close_dialog(&self) {
        self.element.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::{
        element::ElementTiming,
        types::{ElementState, Renderable, Slot},
    };
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn params(id: &str, cancel: CancelHook) -> OpenDialogParams<Node> {
        let mut properties = DialogProperties::new(DialogKind::Info);
        properties.timing = ElementTiming {
            close_animation: Duration::from_millis(5),
            settle_delay: Duration::from_millis(1),
        };

        OpenDialogParams {
            id: id.to_string(),
            custom_dialog_tag_name: registry::ensure_registered().to_string(),
            slot_contents: vec![
                (Slot::Title, Renderable::Text("Saved".into())),
                (Slot::Subtitle, Renderable::Empty),
                (Slot::Content, Renderable::Text("All good".into())),
            ],
            properties,
            cancel,
        }
    }

    #[tokio::test]
    async fn test_default_adapter_mounts_and_closes() {
        let adapter = DefaultAdapter::new();
        let handle = adapter.open_dialog(params("dlg-a", Arc::new(|| {}))).unwrap();

        let element = adapter.document().find_by_id("dlg-a").unwrap();
        assert_eq!(element.attribute("data-dialog-type").as_deref(), Some("info"));
        assert_eq!(element.slot_text(Slot::Title).as_deref(), Some("Saved"));
        assert_eq!(element.slot_text(Slot::Content).as_deref(), Some("All good"));
        assert!(element.slot_text(Slot::Subtitle).is_none());

        handle.close_dialog().await;
        assert!(adapter.document().is_empty());
        assert_eq!(element.state(), ElementState::Removed);
    }

    #[tokio::test]
    async fn test_dismiss_reaches_cancel_hook() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cancels);
        let adapter = DefaultAdapter::new();
        adapter
            .open_dialog(params(
                "dlg-b",
                Arc::new(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            ))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let element = adapter.document().find_by_id("dlg-b").unwrap();
        element.dismiss().await;

        assert_eq!(cancels.load(Ordering::SeqCst), 1);
        assert!(adapter.document().is_empty());
    }

    #[test]
    fn test_unregistered_tag_is_rejected() {
        let adapter = DefaultAdapter::new();
        let mut params = params("dlg-c", Arc::new(|| {}));
        params.custom_dialog_tag_name = "x-unknown".into();

        assert!(adapter.open_dialog(params).is_err());
        assert!(adapter.document().is_empty());
    }
}
