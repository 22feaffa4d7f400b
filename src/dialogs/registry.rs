//! Process-wide dialog element registration and adopted stylesheets.
//!
//! Both are initialise-once / append-only, so callers never need to tear
//! anything down.

use super::{
    element::DialogElement,
    styles,
    types::{DialogError, DialogResult},
};
use crate::markup::CssContent;
use crate::utils::sync::lock;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::debug;

static TAG_NAME: OnceLock<String> = OnceLock::new();
static ADOPTED_STYLESHEETS: Mutex<Vec<CssContent>> = Mutex::new(Vec::new());

/// Register the dialog element tag on first use and return it.
///
/// Registration also adopts the built-in dialog stylesheet.
pub fn ensure_registered() -> &'static str {
    TAG_NAME.get_or_init(|| {
        let tag_name = format!("internal-dialog-{}", chrono::Utc::now().timestamp_millis());
        adopt_stylesheet(styles::dialog_styles().clone());
        debug!("Registered dialog element <{}>", tag_name);
        tag_name
    })
}

pub fn is_registered(tag_name: &str) -> bool {
    TAG_NAME.get().map(|registered| registered == tag_name).unwrap_or(false)
}

/// Instantiate the registered dialog element
pub fn create_element(tag_name: &str) -> DialogResult<Arc<DialogElement>> {
    if !is_registered(tag_name) {
        return Err(DialogError::UnknownElement(tag_name.to_string()));
    }
    Ok(DialogElement::new(tag_name))
}

/// Add a stylesheet to the process-wide list; returns false if already adopted
pub fn adopt_stylesheet(stylesheet: CssContent) -> bool {
    let mut sheets = lock(&ADOPTED_STYLESHEETS);
    if sheets.iter().any(|sheet| sheet == &stylesheet) {
        return false;
    }

    debug!("Adopting stylesheet ({} bytes)", stylesheet.css_text().len());
    sheets.push(stylesheet);
    true
}

pub fn adopted_stylesheets() -> Vec<CssContent> {
    lock(&ADOPTED_STYLESHEETS).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css;

    #[test]
    fn test_registration_is_idempotent() {
        let first = ensure_registered();
        let second = ensure_registered();

        assert_eq!(first, second);
        assert!(first.starts_with("internal-dialog-"));
        assert!(is_registered(first));
        assert!(!is_registered("internal-dialog-0"));
    }

    #[test]
    fn test_registration_adopts_builtin_styles() {
        ensure_registered();
        let adopted = adopted_stylesheets();
        assert!(adopted.contains(styles::dialog_styles()));
        assert!(!adopt_stylesheet(styles::dialog_styles().clone()));
    }

    #[test]
    fn test_create_element_requires_registered_tag() {
        let tag_name = ensure_registered();
        assert_eq!(create_element(tag_name).unwrap().tag_name(), tag_name);
        assert!(matches!(
            create_element("x-dialog"),
            Err(DialogError::UnknownElement(tag)) if tag == "x-dialog"
        ));
    }

    #[test]
    fn test_adopt_stylesheet_once() {
        let sheet = css!(".registry-test { order: {}; }", 7);
        assert!(adopt_stylesheet(sheet.clone()));
        assert!(!adopt_stylesheet(sheet.clone()));

        let adopted = adopted_stylesheets();
        assert_eq!(adopted.iter().filter(|s| **s == sheet).count(), 1);
    }
}
