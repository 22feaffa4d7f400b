//! Dialog controller
//!
//! One method per dialog kind. Each fixes the kind and its button set and
//! delegates to [`DialogController::open`], which assembles slot content,
//! mounts the dialog through the adapter and resolves once the user responds
//! and the dialog has been torn down.

use super::{
    adapter::{CancelHook, DefaultAdapter, DialogAdapter, OpenDialogParams},
    element::{DialogProperties, InitHook},
    plugins::{apply_plugins, DialogControllerConfig, Plugin},
    registry,
    render::{default_action_button, default_close_button, default_prompt_input, ClickHandler},
    types::{
        ActionButtonType, ButtonId, ButtonSpec, DialogKind, DialogOutcome, DialogRequest,
        DialogResult, PromptField, Renderable, Slot, SlotContents,
    },
};
use crate::config::DialogSettings;
use crate::markup::{to_html_element, Element, Node};
use std::{
    marker::PhantomData,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

type ButtonSender = mpsc::UnboundedSender<(ButtonId, Option<String>)>;

/// Action buttons for a dialog kind, with the default labels
pub fn buttons_for(kind: DialogKind, settings: &DialogSettings) -> Vec<ButtonSpec> {
    let confirm = |button_type| ButtonSpec::new(ButtonId::Confirm, button_type, &settings.confirm_text);
    let decline = ButtonSpec::new(
        ButtonId::Decline,
        ActionButtonType::Secondary,
        &settings.cancel_text,
    );

    match kind {
        DialogKind::Info | DialogKind::Success => vec![confirm(ActionButtonType::Primary)],
        DialogKind::Warn | DialogKind::Error => vec![confirm(ActionButtonType::Danger)],
        DialogKind::Confirm | DialogKind::Prompt => {
            vec![confirm(ActionButtonType::Primary), decline]
        }
        DialogKind::Approve => vec![confirm(ActionButtonType::Danger), decline],
    }
}

/// Opens dialogs through an adapter and reports how they ended
pub struct DialogController<C = Node, A = DefaultAdapter> {
    adapter: A,
    settings: DialogSettings,
    config: DialogControllerConfig,
    plugins: Vec<Arc<dyn Plugin>>,
    styles_adopted: AtomicBool,
    _content: PhantomData<fn(C)>,
}

impl DialogController<Node, DefaultAdapter> {
    /// Controller mounting into a fresh document
    pub fn new() -> Self {
        Self::with_adapter(DefaultAdapter::new())
    }
}

impl Default for DialogController<Node, DefaultAdapter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A> DialogController<C, A>
where
    C: Send + 'static,
    A: DialogAdapter<C>,
{
    pub fn with_adapter(adapter: A) -> Self {
        Self {
            adapter,
            settings: DialogSettings::default(),
            config: DialogControllerConfig::default(),
            plugins: Vec::new(),
            styles_adopted: AtomicBool::new(false),
            _content: PhantomData,
        }
    }

    pub fn with_settings(mut self, settings: DialogSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Register plugins; each rewrites the configuration in order
    pub fn with_plugins(mut self, plugins: Vec<Arc<dyn Plugin>>) -> Self {
        self.config = apply_plugins(self.config, &plugins);
        self.plugins.extend(plugins);
        self
    }

    pub fn with_plugin(self, plugin: impl Plugin + 'static) -> Self {
        self.with_plugins(vec![Arc::new(plugin)])
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn settings(&self) -> &DialogSettings {
        &self.settings
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    pub async fn info(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Info, request).await
    }

    pub async fn success(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Success, request).await
    }

    pub async fn warn(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Warn, request).await
    }

    pub async fn error(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Error, request).await
    }

    pub async fn confirm(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Confirm, request).await
    }

    pub async fn approve(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Approve, request).await
    }

    pub async fn prompt(&self, request: DialogRequest<C>) -> DialogResult<DialogOutcome> {
        self.open(DialogKind::Prompt, request).await
    }

    /// Open a dialog of any kind and wait for its outcome
    ///
    /// Errors only arise while assembling the dialog; once it is shown the
    /// outcome always resolves.
    pub async fn open(
        &self,
        kind: DialogKind,
        mut request: DialogRequest<C>,
    ) -> DialogResult<DialogOutcome> {
        let tag_name = registry::ensure_registered();
        self.adopt_styles(tag_name);

        let buttons = request
            .button_texts
            .apply(&buttons_for(kind, &self.settings));
        let id = format!("dlg-{}", Uuid::new_v4());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let prompt_field = (kind == DialogKind::Prompt)
            .then(|| PromptField::new(request.value.clone().unwrap_or_default()));

        let mut slot_contents: SlotContents<C> = request.take_text_slots();
        let mut internal: Vec<(Slot, Node)> = Vec::new();

        let icon = self
            .adapter
            .dialog_icon(kind, self.config.icon_for(kind));
        if let Some(icon) = icon {
            internal.push((Slot::DialogIcon, to_html_element(icon.svg_text())?.into()));
        }

        if let Some(field) = &prompt_field {
            let label = request.label.clone().unwrap_or_default();
            match self.adapter.render_prompt_input(&label, field.clone()) {
                Some(input) => slot_contents.push((Slot::ExtraContent, Renderable::Native(input))),
                None => internal.push((
                    Slot::ExtraContent,
                    default_prompt_input(&label, field.clone())?.into(),
                )),
            }
        }

        let close_text = self.settings.close_text.as_str();
        let on_close = button_handler(&tx, ButtonId::Cancel, None);
        match self.adapter.render_close_button(close_text, Arc::clone(&on_close)) {
            Some(button) => slot_contents.push((Slot::CloseButton, Renderable::Native(button))),
            None => internal.push((
                Slot::CloseButton,
                default_close_button(close_text, on_close)?.into(),
            )),
        }

        for button in &buttons {
            let field = match button.id {
                ButtonId::Confirm => prompt_field.clone(),
                _ => None,
            };
            let on_click = button_handler(&tx, button.id, field);
            match self
                .adapter
                .render_action_button(button.button_type, &button.text, Arc::clone(&on_click))
            {
                Some(rendered) => {
                    slot_contents.push((Slot::ActionButton, Renderable::Native(rendered)))
                }
                None => internal.push((
                    Slot::ActionButton,
                    default_action_button(button.button_type, &button.text, on_click).into(),
                )),
            }
        }

        let cancel_tx = tx.clone();
        let cancel: CancelHook = Arc::new(move || {
            let _ = cancel_tx.send((ButtonId::Cancel, None));
        });

        let mut properties = DialogProperties::new(kind);
        properties.init = Some(init_internal_slots(internal));
        properties.timing = self.settings.timing();
        if !self.settings.use_native_dialog {
            properties.use_native_dialog = Some(false);
        }

        let handle = self.adapter.open_dialog(OpenDialogParams {
            id: id.clone(),
            custom_dialog_tag_name: tag_name.to_string(),
            slot_contents,
            properties,
            cancel,
        })?;
        drop(tx);
        info!("Opened {} dialog {}", kind, id);

        let (button, data) = match rx.recv().await {
            Some(response) => response,
            None => {
                warn!("Dialog {} went away without a response", id);
                (ButtonId::Cancel, None)
            }
        };
        debug!("Dialog {} answered with {:?}", id, button);

        handle.close_dialog().await;

        let outcome = DialogOutcome::from_button(button, data);
        info!(
            "Closed {} dialog {} (confirmed: {}, declined: {}, aborted: {})",
            kind, id, outcome.confirmed, outcome.declined, outcome.aborted
        );
        Ok(outcome)
    }

    fn adopt_styles(&self, tag_name: &str) {
        if self.styles_adopted.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(styles) = self.adapter.styles(tag_name) {
            if registry::adopt_stylesheet(styles) {
                info!("Adopted adapter stylesheet for <{}>", tag_name);
            }
        }
    }
}

fn button_handler(tx: &ButtonSender, button: ButtonId, field: Option<PromptField>) -> ClickHandler {
    let tx = tx.clone();
    Arc::new(move || {
        let data = field.as_ref().map(PromptField::value);
        let _ = tx.send((button, data));
    })
}

fn init_internal_slots(internal: Vec<(Slot, Node)>) -> InitHook {
    Box::new(move |container: &mut Element| {
        for (slot, node) in internal {
            match container.slot_mut(slot.as_str()) {
                Some(target) => target.append(node),
                None => warn!("Dialog markup has no '{}' slot", slot),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css;
    use crate::dialogs::{
        adapter::DialogHandle,
        document::Document,
        element::DialogElement,
        icons,
        modal_stack::ModalStackAdapter,
        plugins::NoIconsPlugin,
        types::ElementState,
    };
    use crate::markup::{CssContent, EventKind, SvgContent};
    use std::{sync::Mutex, time::Duration};

    fn fast_settings() -> DialogSettings {
        DialogSettings {
            close_animation_ms: 5,
            settle_delay_ms: 1,
            host_transition_ms: 1,
            ..DialogSettings::default()
        }
    }

    fn controller() -> Arc<DialogController> {
        Arc::new(DialogController::new().with_settings(fast_settings()))
    }

    /// Wait until `count` dialogs are mounted and open
    async fn open_dialogs(document: &Document, count: usize) -> Vec<Arc<DialogElement>> {
        for _ in 0..500 {
            let elements = document.elements();
            if elements.len() == count
                && elements.iter().all(|el| el.state() == ElementState::Open)
            {
                return elements;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("expected {} open dialogs", count);
    }

    fn action_labels(element: &DialogElement) -> Vec<String> {
        element
            .with_container(|container| {
                container
                    .find_all(|el| el.has_class("action-button"))
                    .into_iter()
                    .map(|el| el.text_content())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_button_sets() {
        let settings = DialogSettings::default();
        assert_eq!(buttons_for(DialogKind::Info, &settings).len(), 1);
        assert_eq!(
            buttons_for(DialogKind::Error, &settings)[0].button_type,
            ActionButtonType::Danger
        );

        let approve = buttons_for(DialogKind::Approve, &settings);
        assert_eq!(approve[0].button_type, ActionButtonType::Danger);
        assert_eq!(approve[1].id, ButtonId::Decline);
        assert_eq!(approve[1].text, "Cancel");
    }

    #[tokio::test]
    async fn test_info_confirmed() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.info(
                DialogRequest::new()
                    .with_title("Welcome")
                    .with_content("Hello, Jane Doe!"),
            )
            .await
        });

        let element = open_dialogs(&document, 1).await.remove(0);
        assert!(element.attribute("id").unwrap().starts_with("dlg-"));
        assert_eq!(element.slot_text(Slot::Title).as_deref(), Some("Welcome"));
        assert_eq!(element.slot_text(Slot::Content).as_deref(), Some("Hello, Jane Doe!"));
        assert_eq!(action_labels(&element), vec!["Ok"]);
        assert!(element.click_button("Ok"));

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome, DialogOutcome::from_button(ButtonId::Confirm, None));
        assert!(document.is_empty());
        assert_eq!(element.state(), ElementState::Removed);
    }

    #[tokio::test]
    async fn test_confirm_text_override_and_decline() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.confirm(
                DialogRequest::new()
                    .with_title("Delete?")
                    .with_confirm_text("Delete"),
            )
            .await
        });

        let element = open_dialogs(&document, 1).await.remove(0);
        assert_eq!(action_labels(&element), vec!["Delete", "Cancel"]);
        assert!(element.click_button("Cancel"));

        let outcome = task.await.unwrap().unwrap();
        assert!(!outcome.confirmed);
        assert!(outcome.declined);
        assert!(!outcome.aborted);

        // the override did not leak into the defaults
        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.confirm(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        assert_eq!(action_labels(&element), vec!["Ok", "Cancel"]);
        assert!(element.click_button("Ok"));
        assert!(task.await.unwrap().unwrap().confirmed);
    }

    #[tokio::test]
    async fn test_prompt_reads_value_at_confirm() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.prompt(DialogRequest::new().with_label("Name").with_value("Jane"))
                .await
        });

        let element = open_dialogs(&document, 1).await.remove(0);
        let prefilled = element
            .with_container(|c| {
                c.find(|el| el.tag() == "input")
                    .and_then(|input| input.attribute("value").map(str::to_string))
            })
            .flatten();
        assert_eq!(prefilled.as_deref(), Some("Jane"));

        assert!(element.fill_input("input", "John"));
        assert!(element.click_button("Ok"));

        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.confirmed);
        assert_eq!(outcome.data.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn test_prompt_decline_has_no_data() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.prompt(DialogRequest::new().with_value("Jane")).await
        });

        let element = open_dialogs(&document, 1).await.remove(0);
        assert!(element.click_button("Cancel"));

        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.declined);
        assert!(outcome.data.is_none());
    }

    #[tokio::test]
    async fn test_dismiss_and_close_button_abort() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.approve(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        element.dismiss().await;

        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.aborted);
        assert!(!outcome.confirmed);

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.warn(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        assert!(element.click_button("Close"));

        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome, DialogOutcome::aborted());
    }

    #[tokio::test]
    async fn test_concurrent_dialogs_resolve_independently() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let first = tokio::spawn(async move {
            c.confirm(DialogRequest::new().with_title("First")).await
        });
        open_dialogs(&document, 1).await;
        let c = Arc::clone(&controller);
        let second = tokio::spawn(async move {
            c.confirm(DialogRequest::new().with_title("Second")).await
        });

        let elements = open_dialogs(&document, 2).await;
        assert_eq!(elements[1].slot_text(Slot::Title).as_deref(), Some("Second"));
        assert!(elements[1].click_button("Ok"));
        assert!(second.await.unwrap().unwrap().confirmed);
        assert!(!first.is_finished());

        assert!(elements[0].click_button("Cancel"));
        assert!(first.await.unwrap().unwrap().declined);
    }

    #[tokio::test]
    async fn test_icons_follow_configuration() {
        let controller = controller();
        let document = Arc::clone(controller.adapter().document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.success(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        let has_icon = element
            .with_container(|c| c.slot("dialog-icon").map(|slot| !slot.children().is_empty()))
            .flatten();
        assert_eq!(has_icon, Some(true));
        element.click_button("Ok");
        task.await.unwrap().unwrap();

        let controller = Arc::new(
            DialogController::new()
                .with_settings(fast_settings())
                .with_plugin(NoIconsPlugin),
        );
        assert_eq!(controller.plugin_names(), vec!["no-icons"]);
        let document = Arc::clone(controller.adapter().document());
        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.success(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        let has_icon = element
            .with_container(|c| c.slot("dialog-icon").map(|slot| !slot.children().is_empty()))
            .flatten();
        assert_eq!(has_icon, Some(false));
        element.click_button("Ok");
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_malformed_content_is_rejected() {
        let controller = controller();
        let request = DialogRequest::new().with_content(Renderable::Html(crate::html!(
            "<b>{}</b><i>{}</i>",
            "one",
            "two"
        )));

        assert!(controller.info(request).await.is_err());
        assert!(controller.adapter().document().is_empty());
    }

    #[tokio::test]
    async fn test_modal_stack_host() {
        let adapter = ModalStackAdapter::with_transition(fast_settings().host_transition());
        let controller = Arc::new(
            DialogController::with_adapter(adapter.clone()).with_settings(fast_settings()),
        );

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.approve(DialogRequest::new().with_title("Drop table?")).await
        });
        while adapter.open_count() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let modal_id = adapter.topmost().unwrap();
        let element = adapter.element(&modal_id).unwrap();
        assert!(!element.use_native_dialog());
        assert_eq!(element.slot_text(Slot::Title).as_deref(), Some("Drop table?"));
        assert!(element.to_html().contains(r#"data-color="red.9""#));
        assert!(element.click_button("Ok"));

        assert!(task.await.unwrap().unwrap().confirmed);
        assert_eq!(adapter.open_count(), 0);

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.confirm(DialogRequest::new()).await });
        while adapter.open_count() == 0 {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert!(adapter.dismiss_top());
        assert!(task.await.unwrap().unwrap().aborted);
    }

    struct StyledAdapter {
        inner: DefaultAdapter,
    }

    impl DialogAdapter<Node> for StyledAdapter {
        fn open_dialog(
            &self,
            params: OpenDialogParams<Node>,
        ) -> DialogResult<Box<dyn DialogHandle>> {
            self.inner.open_dialog(params)
        }

        fn styles(&self, tag_name: &str) -> Option<CssContent> {
            Some(css!("{} .controller-test { order: 1; }", tag_name))
        }
    }

    #[tokio::test]
    async fn test_adapter_styles_adopted_once() {
        let adapter = StyledAdapter {
            inner: DefaultAdapter::new(),
        };
        let document = Arc::clone(adapter.inner.document());
        let controller =
            Arc::new(DialogController::with_adapter(adapter).with_settings(fast_settings()));

        for _ in 0..2 {
            let c = Arc::clone(&controller);
            let task = tokio::spawn(async move { c.info(DialogRequest::new()).await });
            let element = open_dialogs(&document, 1).await.remove(0);
            element.click_button("Ok");
            task.await.unwrap().unwrap();
        }

        let adopted = registry::adopted_stylesheets();
        let ours: Vec<_> = adopted
            .iter()
            .filter(|sheet| sheet.css_text().contains(".controller-test"))
            .collect();
        assert_eq!(ours.len(), 1);
    }

    /// Host that renders its own prompt input and picks its own icons
    struct HostInputAdapter {
        inner: DefaultAdapter,
        icon: Option<SvgContent>,
        seen_slots: Mutex<Vec<Slot>>,
    }

    impl HostInputAdapter {
        fn new(icon: Option<SvgContent>) -> Self {
            Self {
                inner: DefaultAdapter::new(),
                icon,
                seen_slots: Mutex::new(Vec::new()),
            }
        }
    }

    impl DialogAdapter<Node> for HostInputAdapter {
        fn open_dialog(
            &self,
            params: OpenDialogParams<Node>,
        ) -> DialogResult<Box<dyn DialogHandle>> {
            self.seen_slots
                .lock()
                .unwrap()
                .extend(params.slot_contents.iter().map(|(slot, _)| *slot));
            self.inner.open_dialog(params)
        }

        fn render_prompt_input(&self, label: &str, field: PromptField) -> Option<Node> {
            let input = Element::new("input")
                .attr("name", "host-input")
                .attr("aria-label", label)
                .attr("value", &field.value())
                .on(EventKind::Input, move |event| {
                    field.set_value(event.value.clone().unwrap_or_default())
                });
            Some(input.into())
        }

        fn dialog_icon(&self, _kind: DialogKind, _default: Option<SvgContent>) -> Option<SvgContent> {
            self.icon.clone()
        }
    }

    fn icon_paths(element: &DialogElement) -> Option<String> {
        element
            .with_container(|c| c.slot("dialog-icon").map(|slot| slot.to_html()))
            .flatten()
    }

    #[tokio::test]
    async fn test_host_rendered_prompt_input() {
        let controller = Arc::new(
            DialogController::with_adapter(HostInputAdapter::new(None))
                .with_settings(fast_settings()),
        );
        let document = Arc::clone(controller.adapter().inner.document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move {
            c.prompt(DialogRequest::new().with_label("Name").with_value("Jane"))
                .await
        });

        let element = open_dialogs(&document, 1).await.remove(0);
        let seen = controller.adapter().seen_slots.lock().unwrap().clone();
        assert_eq!(seen.last(), Some(&Slot::ExtraContent));
        assert!(!seen.contains(&Slot::ActionButton));
        assert!(!seen.contains(&Slot::CloseButton));
        let has_builtin_input = element
            .with_container(|c| c.find(|el| el.has_class("prompt-text-field")).is_some())
            .unwrap_or(false);
        assert!(!has_builtin_input);

        assert!(element.fill_input("host-input", "John"));
        assert!(element.click_button("Ok"));

        let outcome = task.await.unwrap().unwrap();
        assert!(outcome.confirmed);
        assert_eq!(outcome.data.as_deref(), Some("John"));
    }

    #[tokio::test]
    async fn test_adapter_icon_overrides_configuration() {
        let warn_icon = icons::warn_icon();
        let controller = Arc::new(
            DialogController::with_adapter(HostInputAdapter::new(Some(warn_icon.clone())))
                .with_settings(fast_settings()),
        );
        let document = Arc::clone(controller.adapter().inner.document());

        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.success(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        let expected = to_html_element(warn_icon.svg_text()).unwrap().to_html();
        assert!(icon_paths(&element).unwrap().contains(&expected));
        element.click_button("Ok");
        task.await.unwrap().unwrap();

        // a host returning no icon suppresses the built-in one
        let controller = Arc::new(
            DialogController::with_adapter(HostInputAdapter::new(None))
                .with_settings(fast_settings()),
        );
        let document = Arc::clone(controller.adapter().inner.document());
        let c = Arc::clone(&controller);
        let task = tokio::spawn(async move { c.error(DialogRequest::new()).await });
        let element = open_dialogs(&document, 1).await.remove(0);
        let has_icon = element
            .with_container(|c| c.slot("dialog-icon").map(|slot| !slot.children().is_empty()))
            .flatten();
        assert_eq!(has_icon, Some(false));
        element.click_button("Ok");
        task.await.unwrap().unwrap();
    }
}
