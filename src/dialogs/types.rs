//! Core dialog types
//!
//! This module defines the vocabulary shared by the controller, the dialog
//! element and adapters: dialog kinds, button identities, requests, outcomes
//! and slot content.

use crate::markup::{HtmlContent, MarkupError, Node};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

/// Semantic kind of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Info,
    Success,
    Warn,
    Error,
    Confirm,
    Approve,
    Prompt,
}

impl DialogKind {
    pub const ALL: [DialogKind; 7] = [
        Self::Info,
        Self::Success,
        Self::Warn,
        Self::Error,
        Self::Confirm,
        Self::Approve,
        Self::Prompt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Confirm => "confirm",
            Self::Approve => "approve",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogKind {
    type Err = DialogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DialogError::UnknownKind(s.to_string()))
    }
}

/// Identity of a button, compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonId {
    Confirm,
    Decline,
    Cancel,
}

/// Visual style of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionButtonType {
    Primary,
    Secondary,
    Danger,
}

impl ActionButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

/// An action button: identity, style and label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSpec {
    pub id: ButtonId,
    pub button_type: ActionButtonType,
    pub text: String,
}

impl ButtonSpec {
    pub fn new(id: ButtonId, button_type: ActionButtonType, text: impl Into<String>) -> Self {
        Self {
            id,
            button_type,
            text: text.into(),
        }
    }
}

/// Per-dialog label overrides, keyed by button role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonTexts {
    pub confirm: Option<String>,
    pub cancel: Option<String>,
}

impl ButtonTexts {
    /// Apply the overrides to a copy of `buttons`; the input is left untouched
    pub fn apply(&self, buttons: &[ButtonSpec]) -> Vec<ButtonSpec> {
        buttons
            .iter()
            .map(|button| {
                let override_text = match button.id {
                    ButtonId::Confirm => self.confirm.as_ref(),
                    ButtonId::Decline => self.cancel.as_ref(),
                    ButtonId::Cancel => None,
                };

                let mut button = button.clone();
                if let Some(text) = override_text.filter(|text| !text.is_empty()) {
                    button.text = text.clone();
                }
                button
            })
            .collect()
    }
}

/// Anything that can be placed in a slot
#[derive(Clone)]
pub enum Renderable<C = Node> {
    Empty,
    Text(String),
    Html(HtmlContent),
    Native(C),
}

impl<C> Renderable<C> {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Html(content) => content.is_empty(),
            Self::Native(_) => false,
        }
    }

    /// Plain-text view, used where only a string fits (labels, logs)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Html(content) => Some(content.as_str()),
            Self::Empty | Self::Native(_) => None,
        }
    }
}

impl<C> Default for Renderable<C> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<C: fmt::Debug> fmt::Debug for Renderable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Html(content) => f.debug_tuple("Html").field(&content.as_str()).finish(),
            Self::Native(native) => f.debug_tuple("Native").field(native).finish(),
        }
    }
}

impl<C> From<&str> for Renderable<C> {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl<C> From<String> for Renderable<C> {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<C> From<HtmlContent> for Renderable<C> {
    fn from(content: HtmlContent) -> Self {
        Self::Html(content)
    }
}

impl<C> From<i64> for Renderable<C> {
    fn from(number: i64) -> Self {
        Self::Text(number.to_string())
    }
}

impl<C> From<f64> for Renderable<C> {
    fn from(number: f64) -> Self {
        Self::Text(number.to_string())
    }
}

/// Named insertion points of the dialog markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    DialogIcon,
    Title,
    Subtitle,
    CloseButton,
    Intro,
    Content,
    ExtraContent,
    Outro,
    ActionButton,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DialogIcon => "dialog-icon",
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::CloseButton => "close-button",
            Self::Intro => "intro",
            Self::Content => "content",
            Self::ExtraContent => "extra-content",
            Self::Outro => "outro",
            Self::ActionButton => "action-button",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered `(slot, content)` pairs handed to an adapter
pub type SlotContents<C> = Vec<(Slot, Renderable<C>)>;

/// Input of a single dialog invocation
#[derive(Debug, Clone)]
pub struct DialogRequest<C = Node> {
    pub title: Renderable<C>,
    pub subtitle: Renderable<C>,
    pub intro: Renderable<C>,
    pub content: Renderable<C>,
    pub outro: Renderable<C>,
    pub button_texts: ButtonTexts,
    /// Prompt dialogs only
    pub label: Option<String>,
    /// Prompt dialogs only
    pub value: Option<String>,
}

impl<C> Default for DialogRequest<C> {
    fn default() -> Self {
        Self {
            title: Renderable::Empty,
            subtitle: Renderable::Empty,
            intro: Renderable::Empty,
            content: Renderable::Empty,
            outro: Renderable::Empty,
            button_texts: ButtonTexts::default(),
            label: None,
            value: None,
        }
    }
}

impl<C> DialogRequest<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<Renderable<C>>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<Renderable<C>>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_intro(mut self, intro: impl Into<Renderable<C>>) -> Self {
        self.intro = intro.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<Renderable<C>>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_outro(mut self, outro: impl Into<Renderable<C>>) -> Self {
        self.outro = outro.into();
        self
    }

    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.button_texts.confirm = Some(text.into());
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.button_texts.cancel = Some(text.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Take the text slots out of the request, in display order
    pub(crate) fn take_text_slots(&mut self) -> SlotContents<C> {
        vec![
            (Slot::Title, std::mem::take(&mut self.title)),
            (Slot::Subtitle, std::mem::take(&mut self.subtitle)),
            (Slot::Intro, std::mem::take(&mut self.intro)),
            (Slot::Content, std::mem::take(&mut self.content)),
            (Slot::Outro, std::mem::take(&mut self.outro)),
        ]
    }
}

/// Outcome of a dialog interaction
///
/// Exactly one of `confirmed`, `declined` and `aborted` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogOutcome {
    pub confirmed: bool,
    pub declined: bool,
    pub aborted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl DialogOutcome {
    /// Outcome for the button that ended the dialog
    pub fn from_button(button: ButtonId, data: Option<String>) -> Self {
        Self {
            confirmed: button == ButtonId::Confirm,
            declined: button == ButtonId::Decline,
            aborted: button == ButtonId::Cancel,
            data: if button == ButtonId::Confirm { data } else { None },
        }
    }

    pub fn aborted() -> Self {
        Self::from_button(ButtonId::Cancel, None)
    }
}

/// Shared value of a prompt input
///
/// The host writes edits into the field; the controller reads it when the
/// confirm button fires.
#[derive(Debug, Clone, Default)]
pub struct PromptField {
    value: Arc<Mutex<String>>,
}

impl PromptField {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(initial.into())),
        }
    }

    pub fn value(&self) -> String {
        crate::utils::sync::lock(&self.value).clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *crate::utils::sync::lock(&self.value) = value.into();
    }
}

/// Lifecycle of a dialog element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    /// Created but never attached
    #[default]
    Unattached,
    /// Markup built, waiting to be shown
    Initialized,
    /// Visible
    Open,
    /// Close animation running
    Closing,
    /// Torn down and detached
    Removed,
}

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    #[error(transparent)]
    Markup(#[from] MarkupError),

    #[error("Unknown dialog element '{0}'")]
    UnknownElement(String),

    #[error("Unknown dialog kind '{0}'")]
    UnknownKind(String),

    #[error("Slot '{0}' not found in dialog markup")]
    SlotNotFound(Slot),

    #[error("Dialog element is not connected")]
    NotConnected,
}
