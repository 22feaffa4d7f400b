//! Modal dialogs: message boxes, confirmations and prompts rendered through
//! pluggable host adapters.

pub mod config;
pub mod dialogs;
pub mod markup;
pub mod utils;

pub use config::DialogSettings;
pub use dialogs::{DialogController, DialogKind, DialogOutcome, DialogRequest};
