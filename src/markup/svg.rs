//! SVG fragments for statically trusted design-time content.
//!
//! Values are substituted raw, without escaping.

use super::html::PLACEHOLDER;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SvgContent {
    content: String,
}

impl SvgContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Fill the `{}` placeholders of `template`; `None` renders as nothing
    pub fn from_template(template: &str, values: &[Option<String>]) -> Self {
        let mut out = String::with_capacity(template.len());
        let mut values = values.iter();

        for (idx, segment) in template.split(PLACEHOLDER).enumerate() {
            if idx > 0 {
                if let Some(Some(value)) = values.next() {
                    out.push_str(value);
                }
            }
            out.push_str(segment);
        }

        Self::new(out)
    }

    pub fn svg_text(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for SvgContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// A value that can be substituted into an `svg!` template
pub trait SvgValue {
    /// Raw text of the value; `None` renders as nothing
    fn to_svg_value(&self) -> Option<String>;
}

impl SvgValue for SvgContent {
    fn to_svg_value(&self) -> Option<String> {
        Some(self.content.clone())
    }
}

impl SvgValue for str {
    fn to_svg_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl SvgValue for String {
    fn to_svg_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

macro_rules! impl_svg_value_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SvgValue for $ty {
                fn to_svg_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_svg_value_display!(char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: SvgValue + ?Sized> SvgValue for &T {
    fn to_svg_value(&self) -> Option<String> {
        (**self).to_svg_value()
    }
}

impl<T: SvgValue> SvgValue for Option<T> {
    fn to_svg_value(&self) -> Option<String> {
        self.as_ref().and_then(SvgValue::to_svg_value)
    }
}

/// Build an [`SvgContent`] from a template literal with `{}` placeholders
#[macro_export]
macro_rules! svg {
    ($template:literal $(, $value:expr)* $(,)?) => {
        $crate::markup::SvgContent::from_template(
            $template,
            &[$($crate::markup::svg::SvgValue::to_svg_value(&$value)),*],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_substitution() {
        let size = "1em";
        let icon = crate::svg!("<svg width=\"{}\" height=\"{}\"><b>&</b></svg>", size, size);
        assert_eq!(icon.svg_text(), "<svg width=\"1em\" height=\"1em\"><b>&</b></svg>");
    }

    #[test]
    fn test_missing_value_is_empty() {
        let stroke: Option<&str> = None;
        let width: Option<u32> = Some(2);
        let path = crate::svg!("<path stroke=\"{}\" stroke-width=\"{}\"/>", stroke, width);
        assert_eq!(path.svg_text(), "<path stroke=\"\" stroke-width=\"2\"/>");
    }

    #[test]
    fn test_nested_fragment_is_raw() {
        let inner = crate::svg!("<path d=\"{}\"/>", "M0 0");
        let outer = crate::svg!("<svg>{}</svg>", inner);
        assert_eq!(outer.svg_text(), "<svg><path d=\"M0 0\"/></svg>");
    }
}
