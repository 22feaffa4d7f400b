//! Dialog element: the modal surface with named slots
//!
//! The element moves through an explicit lifecycle:
//! `Unattached -> Initialized -> Open -> Closing -> Removed`.
//!
//! - [`DialogElement::connect`] builds the shadow markup once and, for native
//!   dialogs, shows the modal on the next scheduler tick so slot content
//!   appended right after mounting is present before the first paint.
//! - [`DialogElement::close`] marks the container `closing`, waits for the close
//!   animation, tears the element down and resolves after a settle delay.
//! - [`DialogElement::dismiss`] is the native Escape gesture: it runs the same
//!   close sequence and then notifies cancel listeners exactly once.

use super::{
    document::Document,
    types::{DialogError, DialogKind, DialogResult, ElementState, Slot},
};
use crate::html;
use crate::markup::{content_to_element, DomEvent, Element, EventKind, Node};
use crate::utils::sync::lock;
use std::{
    sync::{Arc, Mutex, Weak},
    time::Duration,
};
use tokio::sync::{watch, Notify};
use tracing::debug;

/// Hook run once with the freshly built container, before it is shown
pub type InitHook = Box<dyn FnOnce(&mut Element) + Send>;

/// Listener for the synthetic `cancel` notification
pub type CancelListener = Arc<dyn Fn() + Send + Sync>;

/// Durations of the two-phase close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementTiming {
    /// Upper bound on the close animation if the host never reports its end
    pub close_animation: Duration,
    /// Delay after teardown before the close completes
    pub settle_delay: Duration,
}

impl Default for ElementTiming {
    fn default() -> Self {
        Self {
            close_animation: Duration::from_millis(250),
            settle_delay: Duration::from_millis(100),
        }
    }
}

/// Properties an adapter applies to the element it mounts
pub struct DialogProperties {
    pub dialog_type: DialogKind,
    pub init: Option<InitHook>,
    pub timing: ElementTiming,
    pub use_native_dialog: Option<bool>,
}

impl DialogProperties {
    pub fn new(dialog_type: DialogKind) -> Self {
        Self {
            dialog_type,
            init: None,
            timing: ElementTiming::default(),
            use_native_dialog: None,
        }
    }
}

struct ElementInner {
    state: ElementState,
    use_native_dialog: bool,
    attributes: Vec<(String, String)>,
    init: Option<InitHook>,
    timing: ElementTiming,
    container: Option<Element>,
    light_children: Vec<Node>,
    cancel_listeners: Vec<CancelListener>,
    document: Option<Weak<Document>>,
}

impl ElementInner {
    fn find<P>(&self, predicate: P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        self.container
            .as_ref()
            .and_then(|container| container.find(predicate))
            .or_else(|| {
                self.light_children
                    .iter()
                    .filter_map(Node::as_element)
                    .find_map(|child| child.find(predicate))
            })
    }

    fn find_mut<P>(&mut self, predicate: P) -> Option<&mut Element>
    where
        P: Fn(&Element) -> bool + Copy,
    {
        if let Some(found) = self
            .container
            .as_mut()
            .and_then(|container| container.find_mut(predicate))
        {
            return Some(found);
        }

        self.light_children.iter_mut().find_map(|child| match child {
            Node::Element(element) => element.find_mut(predicate),
            Node::Text(_) => None,
        })
    }
}

/// A dialog element instance
pub struct DialogElement {
    tag_name: String,
    inner: Mutex<ElementInner>,
    animation_end: Notify,
    closed: watch::Sender<bool>,
}

impl DialogElement {
    pub(crate) fn new(tag_name: &str) -> Arc<Self> {
        let (closed, _) = watch::channel(false);

        Arc::new(Self {
            tag_name: tag_name.to_string(),
            inner: Mutex::new(ElementInner {
                state: ElementState::Unattached,
                use_native_dialog: true,
                attributes: Vec::new(),
                init: None,
                timing: ElementTiming::default(),
                container: None,
                light_children: Vec::new(),
                cancel_listeners: Vec::new(),
                document: None,
            }),
            animation_end: Notify::new(),
            closed,
        })
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn state(&self) -> ElementState {
        lock(&self.inner).state
    }

    pub fn use_native_dialog(&self) -> bool {
        lock(&self.inner).use_native_dialog
    }

    /// Choose between a native modal and a plain container; only honoured
    /// before the element is connected
    pub fn set_use_native_dialog(&self, use_native_dialog: bool) {
        lock(&self.inner).use_native_dialog = use_native_dialog;
    }

    /// Whether the native modal primitive is currently shown
    pub fn is_modal_open(&self) -> bool {
        lock(&self.inner)
            .container
            .as_ref()
            .map(|container| container.tag() == "dialog" && container.attribute("open").is_some())
            .unwrap_or(false)
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        let mut inner = lock(&self.inner);
        match inner.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => inner.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        lock(&self.inner)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    pub fn apply_properties(&self, properties: DialogProperties) {
        self.set_attribute("data-dialog-type", properties.dialog_type.as_str());

        let mut inner = lock(&self.inner);
        inner.init = properties.init;
        inner.timing = properties.timing;
        if let Some(use_native_dialog) = properties.use_native_dialog {
            inner.use_native_dialog = use_native_dialog;
        }
    }

    pub fn on_cancel(&self, listener: CancelListener) {
        lock(&self.inner).cancel_listeners.push(listener);
    }

    /// Attach the element; the first call builds the markup, later calls do nothing
    pub fn connect(self: &Arc<Self>, document: Option<Weak<Document>>) -> DialogResult<()> {
        let (use_native_dialog, init) = {
            let mut inner = lock(&self.inner);
            if inner.state != ElementState::Unattached {
                debug!("<{}> already initialized", self.tag_name);
                return Ok(());
            }
            inner.state = ElementState::Initialized;
            inner.document = document;
            (inner.use_native_dialog, inner.init.take())
        };

        let mut container = build_container(use_native_dialog)?;
        if let Some(init) = init {
            init(&mut container);
        }
        lock(&self.inner).container = Some(container);

        if use_native_dialog {
            let element = Arc::clone(self);
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    handle.spawn(async move {
                        tokio::task::yield_now().await;
                        element.show_modal();
                    });
                }
                Err(_) => element.show_modal(),
            }
        } else {
            self.show_modal();
        }

        Ok(())
    }

    fn show_modal(&self) {
        let mut inner = lock(&self.inner);
        if inner.state != ElementState::Initialized {
            return;
        }

        if inner.use_native_dialog {
            if let Some(container) = inner.container.as_mut() {
                container.set_attribute("open", "");
            }
        }
        inner.state = ElementState::Open;
        debug!("<{}> opened", self.tag_name);
    }

    /// Append nodes to a slot of the shadow markup
    pub fn append_to_slot(&self, slot: Slot, nodes: Vec<Node>) -> DialogResult<()> {
        let mut inner = lock(&self.inner);
        let container = inner.container.as_mut().ok_or(DialogError::NotConnected)?;
        let target = container
            .slot_mut(slot.as_str())
            .ok_or(DialogError::SlotNotFound(slot))?;
        target.extend(nodes);
        Ok(())
    }

    /// Append a light-DOM child, projected through its `slot` attribute
    pub fn append_child(&self, node: Node) {
        lock(&self.inner).light_children.push(node);
    }

    /// Report that the container's close animation finished
    pub fn notify_animation_end(&self) {
        if self.state() == ElementState::Closing {
            self.animation_end.notify_one();
        }
    }

    /// Run the close sequence; concurrent callers wait for the same completion
    pub async fn close(&self) {
        match self.begin_close(false) {
            Some(was_open) => self.finish_close(was_open).await,
            None => self.wait_closed().await,
        }
    }

    /// Native dismiss gesture (Escape)
    pub async fn dismiss(&self) {
        if !self.use_native_dialog() {
            return;
        }

        let Some(was_open) = self.begin_close(true) else {
            debug!("<{}> ignoring dismiss in state {:?}", self.tag_name, self.state());
            return;
        };

        self.finish_close(was_open).await;

        let listeners = lock(&self.inner).cancel_listeners.clone();
        debug!("<{}> dismissed, notifying {} cancel listener(s)", self.tag_name, listeners.len());
        for listener in listeners {
            listener();
        }
    }

    /// Tear down immediately, without the close animation
    pub fn remove(&self) {
        self.teardown();
        self.closed.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Returns whether the element was open, or `None` if a close is
    /// already underway or the element is gone
    fn begin_close(&self, require_open: bool) -> Option<bool> {
        let mut inner = lock(&self.inner);
        let was_open = match inner.state {
            ElementState::Open => true,
            ElementState::Unattached | ElementState::Initialized if !require_open => false,
            _ => return None,
        };

        inner.state = ElementState::Closing;
        if let Some(container) = inner.container.as_mut() {
            container.add_class("closing");
        }
        debug!("<{}> closing", self.tag_name);
        Some(was_open)
    }

    async fn finish_close(&self, was_open: bool) {
        let timing = lock(&self.inner).timing;

        if was_open {
            tokio::select! {
                _ = self.animation_end.notified() => {
                    debug!("<{}> close animation ended", self.tag_name);
                }
                _ = tokio::time::sleep(timing.close_animation) => {
                    debug!("<{}> close animation elapsed", self.tag_name);
                }
            }
        }

        self.teardown();
        tokio::time::sleep(timing.settle_delay).await;
        self.closed.send_replace(true);
    }

    fn teardown(&self) {
        let document = {
            let mut inner = lock(&self.inner);
            if inner.state == ElementState::Removed {
                return;
            }
            if let Some(container) = inner.container.as_mut() {
                container.remove_attribute("open");
            }
            inner.state = ElementState::Removed;
            inner.document.take()
        };

        if let Some(document) = document.and_then(|weak| weak.upgrade()) {
            document.remove(self);
        }
        debug!("<{}> removed", self.tag_name);
    }

    async fn wait_closed(&self) {
        let mut closed = self.closed.subscribe();
        let _ = closed.wait_for(|closed| *closed).await;
    }

    // Interaction

    /// Deliver an event to the first matching element; only open dialogs react
    pub fn dispatch<P>(&self, predicate: P, event: DomEvent) -> bool
    where
        P: Fn(&Element) -> bool + Copy,
    {
        let listeners = {
            let inner = lock(&self.inner);
            if inner.state != ElementState::Open {
                return false;
            }
            match inner.find(predicate) {
                Some(target) => target.listeners(event.kind),
                None => return false,
            }
        };

        for listener in listeners {
            listener(&event);
        }
        true
    }

    /// Click the button whose label or title matches
    pub fn click_button(&self, label: &str) -> bool {
        self.dispatch(
            |el| {
                el.tag() == "button"
                    && (el.text_content().trim() == label || el.attribute("title") == Some(label))
            },
            DomEvent::new(EventKind::Click),
        )
    }

    /// Type into the named input, replacing its value
    pub fn fill_input(&self, name: &str, value: &str) -> bool {
        let listeners = {
            let mut inner = lock(&self.inner);
            if inner.state != ElementState::Open {
                return false;
            }
            match inner.find_mut(|el| el.tag() == "input" && el.attribute("name") == Some(name)) {
                Some(input) => {
                    input.set_attribute("value", value);
                    input.listeners(EventKind::Input)
                }
                None => return false,
            }
        };

        let event = DomEvent::input(value);
        for listener in listeners {
            listener(&event);
        }
        true
    }

    // Inspection

    pub fn with_container<R>(&self, f: impl FnOnce(&Element) -> R) -> Option<R> {
        lock(&self.inner).container.as_ref().map(f)
    }

    /// Text content placed into a slot, from either the shadow markup or
    /// slotted light-DOM children
    pub fn slot_text(&self, slot: Slot) -> Option<String> {
        let inner = lock(&self.inner);
        let name = slot.as_str();

        let mut texts: Vec<String> = inner
            .container
            .as_ref()
            .and_then(|container| container.slot(name))
            .filter(|target| !target.children().is_empty())
            .map(|target| vec![target.text_content()])
            .unwrap_or_default();

        texts.extend(
            inner
                .light_children
                .iter()
                .filter_map(Node::as_element)
                .filter(|child| child.attribute("slot") == Some(name))
                .map(Element::text_content),
        );

        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// Serialise the element with a declarative shadow root
    pub fn to_html(&self) -> String {
        let inner = lock(&self.inner);

        let mut host = Element::new(self.tag_name.as_str());
        for (name, value) in &inner.attributes {
            host.set_attribute(name.as_str(), value.as_str());
        }

        if let Some(container) = &inner.container {
            let template = Element::new("template")
                .attr("shadowrootmode", "open")
                .child(container.clone());
            host.append(template);
        }
        host.extend(inner.light_children.iter().cloned());
        host.to_html()
    }
}

fn build_container(use_native_dialog: bool) -> DialogResult<Element> {
    let tag = if use_native_dialog { "dialog" } else { "div" };

    let markup = html!(
        r#"
<{}>
  <div class="dialog-content">
    <div class="header">
      <div id="icon">
        <slot name="dialog-icon"></slot>
      </div>
      <div class="titles">
        <slot name="title" class="title"></slot>
        <slot name="subtitle" class="subtitle"></slot>
      </div>
      <slot name="close-button"></slot>
    </div>
    <div class="body">
      <slot name="intro" class="intro"></slot>
      <slot name="content" class="content"></slot>
      <slot name="extra-content" class="extra-content"></slot>
      <slot name="outro" class="outro"></slot>
    </div>
    <div class="footer">
      <div class="action-buttons">
        <slot name="action-button"></slot>
      </div>
    </div>
  </div>
</{}>"#,
        tag,
        tag
    );

    Ok(content_to_element(&markup)?)
}
