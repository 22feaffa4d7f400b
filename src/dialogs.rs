//! Dialog system
//!
//! - [`element`]: the dialog element and its open/close lifecycle
//! - [`controller`]: one method per dialog kind, resolving to a [`DialogOutcome`]
//! - [`adapter`]: the seam to the host, with [`DefaultAdapter`] mounting into a
//!   [`Document`] and [`ModalStackAdapter`] delegating to a modal stack

pub mod adapter;
pub mod controller;
pub mod document;
pub mod element;
pub mod icons;
pub mod modal_stack;
pub mod plugins;
pub mod registry;
pub mod render;
pub mod styles;
pub mod types;

pub use adapter::{CancelHook, DefaultAdapter, DialogAdapter, DialogHandle, OpenDialogParams};
pub use controller::{buttons_for, DialogController};
pub use document::Document;
pub use element::{DialogElement, DialogProperties, ElementTiming, InitHook};
pub use modal_stack::ModalStackAdapter;
pub use plugins::{DefaultIconsPlugin, DialogControllerConfig, NoIconsPlugin, Plugin};
pub use render::ClickHandler;
pub use types::*;
