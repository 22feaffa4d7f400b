//! Stylesheet fragments and the `css!` template builder.
//!
//! Values are interpolated through their `Display` implementation without
//! escaping; a nested [`CssContent`] displays as its own stylesheet text.

use super::html::PLACEHOLDER;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssContent {
    css_text: String,
}

impl CssContent {
    pub fn new(css_text: impl Into<String>) -> Self {
        Self {
            css_text: css_text.into(),
        }
    }

    /// Fill the `{}` placeholders of `template` with already stringified values
    pub fn from_template(template: &str, values: &[String]) -> Self {
        let mut out = String::with_capacity(template.len());
        let mut values = values.iter();

        for (idx, segment) in template.split(PLACEHOLDER).enumerate() {
            if idx > 0 {
                if let Some(value) = values.next() {
                    out.push_str(value);
                }
            }
            out.push_str(segment);
        }

        Self::new(out)
    }

    pub fn css_text(&self) -> &str {
        &self.css_text
    }

    pub fn is_empty(&self) -> bool {
        self.css_text.trim().is_empty()
    }
}

impl fmt::Display for CssContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css_text)
    }
}

/// Build a [`CssContent`] from a template literal with `{}` placeholders
#[macro_export]
macro_rules! css {
    ($template:literal $(, $value:expr)* $(,)?) => {
        $crate::markup::CssContent::from_template(
            $template,
            &[$(::std::string::ToString::to_string(&$value)),*],
        )
    };
}
