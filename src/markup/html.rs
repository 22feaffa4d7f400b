//! Trusted HTML fragments and the `html!` template builder.
//!
//! A template is a string literal whose `{}` placeholders are filled, in order,
//! with values implementing [`HtmlValue`]. Plain text and numbers are escaped,
//! trusted fragments ([`HtmlContent`], [`SvgContent`]) are inserted verbatim and
//! collections are flattened recursively.

use super::svg::SvgContent;
use crate::utils::text::{escape, string};
use std::fmt;

/// Placeholder marking an interpolation point in a template literal
pub(crate) const PLACEHOLDER: &str = "{}";

/// A value that can be interpolated into an `html!` template
pub trait HtmlValue {
    /// Append the value's markup to `out`
    fn write_html(&self, out: &mut String);
}

/// A trusted HTML fragment that is never re-escaped when nested
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HtmlContent {
    text: String,
}

impl HtmlContent {
    /// Mark `text` as trusted markup
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into().trim().to_string(),
        }
    }

    /// Fill the `{}` placeholders of `template` with `values`
    pub fn from_template(template: &str, values: &[&dyn HtmlValue]) -> Self {
        let mut out = String::with_capacity(template.len());
        let mut values = values.iter();

        for (idx, segment) in template.split(PLACEHOLDER).enumerate() {
            if idx > 0 {
                if let Some(value) = values.next() {
                    value.write_html(&mut out);
                }
            }
            out.push_str(segment);
        }

        debug_assert!(values.next().is_none(), "more values than placeholders");
        Self::raw(out)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for HtmlContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HtmlContent({})", string::limit_string_length(&self.text, 20))
    }
}

impl HtmlValue for HtmlContent {
    fn write_html(&self, out: &mut String) {
        out.push_str(&self.text);
    }
}

impl HtmlValue for SvgContent {
    fn write_html(&self, out: &mut String) {
        out.push_str(self.svg_text());
    }
}

impl HtmlValue for str {
    fn write_html(&self, out: &mut String) {
        escape::push_escaped(out, self);
    }
}

impl HtmlValue for String {
    fn write_html(&self, out: &mut String) {
        escape::push_escaped(out, self);
    }
}

impl HtmlValue for char {
    fn write_html(&self, out: &mut String) {
        let mut buf = [0u8; 4];
        escape::push_escaped(out, self.encode_utf8(&mut buf));
    }
}

macro_rules! impl_html_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl HtmlValue for $ty {
                fn write_html(&self, out: &mut String) {
                    escape::push_escaped(out, &self.to_string());
                }
            }
        )*
    };
}

impl_html_value_display!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: HtmlValue + ?Sized> HtmlValue for &T {
    fn write_html(&self, out: &mut String) {
        (**self).write_html(out);
    }
}

impl<T: HtmlValue> HtmlValue for Option<T> {
    fn write_html(&self, out: &mut String) {
        if let Some(value) = self {
            value.write_html(out);
        }
    }
}

impl<T: HtmlValue> HtmlValue for [T] {
    fn write_html(&self, out: &mut String) {
        for item in self {
            item.write_html(out);
        }
    }
}

impl<T: HtmlValue, const N: usize> HtmlValue for [T; N] {
    fn write_html(&self, out: &mut String) {
        self.as_slice().write_html(out);
    }
}

impl<T: HtmlValue> HtmlValue for Vec<T> {
    fn write_html(&self, out: &mut String) {
        self.as_slice().write_html(out);
    }
}

/// Build an [`HtmlContent`] from a template literal with `{}` placeholders.
///
/// ```
/// use modal_dialogs::html;
///
/// let name = "<Jane>";
/// let greeting = html!("<b>Hello, {}!</b>", name);
/// assert_eq!(greeting.as_str(), "<b>Hello, &lt;Jane&gt;!</b>");
/// ```
#[macro_export]
macro_rules! html {
    ($template:literal $(, $value:expr)* $(,)?) => {
        $crate::markup::HtmlContent::from_template(
            $template,
            &[$(&$value as &dyn $crate::markup::HtmlValue),*],
        )
    };
}
