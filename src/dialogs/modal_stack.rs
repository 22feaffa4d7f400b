//! Adapter for hosts that manage their own stack of modals
//!
//! The host owns presentation: the dialog element is mounted as a plain
//! container, slot content is projected through `<div slot=...>` wrappers and
//! the host renders its own close and action buttons. Modals are kept in a
//! stack; the topmost one has focus.

use super::{
    adapter::{CancelHook, DialogAdapter, DialogHandle, OpenDialogParams},
    element::DialogElement,
    icons, registry,
    render::{convert_to_nodes, ClickHandler},
    types::{ActionButtonType, DialogResult},
};
use crate::markup::{h, to_html_element, Element, EventKind, Node};
use crate::utils::sync::lock;
use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing::debug;

const BASE_Z_INDEX: u32 = 200;

struct ModalEntry {
    modal_id: String,
    element: Arc<DialogElement>,
    z_index: u32,
    cancel: CancelHook,
}

#[derive(Default)]
struct ModalStack {
    /// Open modals, last = topmost
    modals: Vec<ModalEntry>,
    /// Modal id to position in `modals`
    id_map: HashMap<String, usize>,
    focused_index: Option<usize>,
    /// Number of modals ever pushed; z-indexes only grow
    pushed: u32,
}

impl ModalStack {
    fn push(&mut self, modal_id: String, element: Arc<DialogElement>, cancel: CancelHook) {
        let index = self.modals.len();
        self.modals.push(ModalEntry {
            modal_id: modal_id.clone(),
            element,
            z_index: BASE_Z_INDEX + self.pushed,
            cancel,
        });
        self.pushed += 1;
        self.id_map.insert(modal_id, index);
        self.focused_index = Some(index);
    }

    fn remove(&mut self, modal_id: &str) -> Option<ModalEntry> {
        let index = self.id_map.remove(modal_id)?;
        let entry = self.modals.remove(index);

        for position in self.id_map.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }

        if let Some(focused) = self.focused_index {
            if focused == index {
                self.focused_index = self.modals.len().checked_sub(1);
            } else if focused > index {
                self.focused_index = Some(focused - 1);
            }
        }

        Some(entry)
    }
}

/// Adapter mounting dialogs into a host-managed modal stack
#[derive(Clone)]
pub struct ModalStackAdapter {
    stack: Arc<Mutex<ModalStack>>,
    transition: Duration,
}

impl ModalStackAdapter {
    pub fn new() -> Self {
        Self::with_transition(Duration::from_millis(200))
    }

    /// Use a custom host close transition duration
    pub fn with_transition(transition: Duration) -> Self {
        Self {
            stack: Arc::new(Mutex::new(ModalStack::default())),
            transition,
        }
    }

    pub fn open_count(&self) -> usize {
        lock(&self.stack).modals.len()
    }

    pub fn modal_ids(&self) -> Vec<String> {
        lock(&self.stack)
            .modals
            .iter()
            .map(|entry| entry.modal_id.clone())
            .collect()
    }

    /// Id of the topmost modal
    pub fn topmost(&self) -> Option<String> {
        lock(&self.stack).modals.last().map(|entry| entry.modal_id.clone())
    }

    pub fn focused(&self) -> Option<String> {
        let stack = lock(&self.stack);
        stack
            .focused_index
            .and_then(|index| stack.modals.get(index))
            .map(|entry| entry.modal_id.clone())
    }

    pub fn z_index(&self, modal_id: &str) -> Option<u32> {
        let stack = lock(&self.stack);
        stack
            .id_map
            .get(modal_id)
            .and_then(|&index| stack.modals.get(index))
            .map(|entry| entry.z_index)
    }

    pub fn element(&self, modal_id: &str) -> Option<Arc<DialogElement>> {
        let stack = lock(&self.stack);
        stack
            .id_map
            .get(modal_id)
            .and_then(|&index| stack.modals.get(index))
            .map(|entry| Arc::clone(&entry.element))
    }

    /// Host-side dismissal of the topmost modal (overlay click, Escape)
    pub fn dismiss_top(&self) -> bool {
        let entry = {
            let mut stack = lock(&self.stack);
            let Some(modal_id) = stack.modals.last().map(|entry| entry.modal_id.clone()) else {
                return false;
            };
            stack.remove(&modal_id)
        };

        match entry {
            Some(entry) => {
                debug!("Host dismissed modal {}", entry.modal_id);
                entry.element.remove();
                (entry.cancel)();
                true
            }
            None => false,
        }
    }
}

impl Default for ModalStackAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogAdapter<Node> for ModalStackAdapter {
    fn open_dialog(&self, params: OpenDialogParams<Node>) -> DialogResult<Box<dyn DialogHandle>> {
        let element = registry::create_element(&params.custom_dialog_tag_name)?;
        element.set_attribute("id", &params.id);
        element.set_use_native_dialog(false);
        element.apply_properties(params.properties);

        for (slot, content) in params.slot_contents {
            let nodes = convert_to_nodes(content)?;
            if nodes.is_empty() {
                continue;
            }
            let wrapper = h("div", &[("slot", slot.as_str())], nodes.into_iter().map(Some));
            element.append_child(wrapper.into());
        }
        element.connect(None)?;

        lock(&self.stack).push(params.id.clone(), element, params.cancel);
        debug!("Opened modal {} ({} open)", params.id, self.open_count());

        Ok(Box::new(ModalHandle {
            modal_id: params.id,
            stack: Arc::clone(&self.stack),
            transition: self.transition,
        }))
    }

    fn render_close_button(&self, title: &str, on_click: ClickHandler) -> Option<Node> {
        let icon = to_html_element(icons::close_icon().svg_text()).ok()?;
        let button = Element::new("button")
            .attr("class", "modal-close")
            .attr("title", title)
            .child(icon)
            .on(EventKind::Click, move |_| on_click());
        Some(button.into())
    }

    fn render_action_button(
        &self,
        button_type: ActionButtonType,
        text: &str,
        on_click: ClickHandler,
    ) -> Option<Node> {
        let variant = match button_type {
            ActionButtonType::Primary | ActionButtonType::Danger => "filled",
            ActionButtonType::Secondary => "default",
        };

        let mut button = Element::new("button")
            .attr("data-variant", variant)
            .child(Node::text(text))
            .on(EventKind::Click, move |_| on_click());
        if button_type == ActionButtonType::Danger {
            button.set_attribute("data-color", "red.9");
        }
        Some(button.into())
    }
}

/// Handle to a modal in a [`ModalStackAdapter`]
struct ModalHandle {
    modal_id: String,
    stack: Arc<Mutex<ModalStack>>,
    transition: Duration,
}

#[async_trait]
impl DialogHandle for ModalHandle {
    async fn close_dialog(&self) {
        let entry = lock(&self.stack).remove(&self.modal_id);
        if let Some(entry) = entry {
            entry.element.remove();
        }
        tokio::time::sleep(self.transition).await;
        debug!("Closed modal {}", self.modal_id);
    }
}
