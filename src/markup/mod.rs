//! Markup building blocks: trusted HTML/CSS/SVG fragments and the node tree
//! they are mounted into.

pub mod css;
pub mod dom;
pub mod html;
pub mod svg;

pub use css::CssContent;
pub use dom::{content_to_element, h, to_html_element, DomEvent, Element, EventKind, Listener, Node};
pub use html::{HtmlContent, HtmlValue};
pub use svg::SvgContent;

/// Result type for markup operations
pub type MarkupResult<T> = std::result::Result<T, MarkupError>;

/// Errors raised while turning fragments into nodes
#[derive(Debug, thiserror::Error)]
pub enum MarkupError {
    #[error("Malformed content: expected exactly one root element, found {found}")]
    MalformedContent { found: usize },
}
