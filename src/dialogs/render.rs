//! Default renderers for slot content, buttons and the prompt input

use super::{
    icons,
    types::{ActionButtonType, PromptField, Renderable},
};
use crate::html;
use crate::markup::{
    content_to_element, to_html_element, EventKind, Element, MarkupResult, Node,
};
use crate::utils::text::string::split_lines;
use std::sync::Arc;

/// Callback invoked when a rendered button is clicked
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// Convert a renderable into a single node
///
/// Text with line breaks becomes a `<span>` holding one `<div>` per line.
pub fn to_node(content: Renderable<Node>) -> MarkupResult<Option<Node>> {
    let node = match content {
        Renderable::Empty => return Ok(None),
        Renderable::Text(text) => {
            let lines = split_lines(&text);
            if lines.len() > 1 {
                let mut span = Element::new("span");
                for line in lines {
                    span.append(Element::new("div").child(Node::text(line)));
                }
                span.into()
            } else {
                Node::text(text)
            }
        }
        Renderable::Html(content) => content_to_element(&content)?.into(),
        Renderable::Native(node) => node,
    };
    Ok(Some(node))
}

/// Nodes to append for a renderable; empty content yields none
pub fn convert_to_nodes(content: Renderable<Node>) -> MarkupResult<Vec<Node>> {
    Ok(to_node(content)?.into_iter().collect())
}

pub fn default_close_button(title: &str, on_click: ClickHandler) -> MarkupResult<Element> {
    let icon = to_html_element(icons::close_icon().svg_text())?;

    Ok(Element::new("button")
        .attr("class", "close-button")
        .attr("title", title)
        .child(icon)
        .on(EventKind::Click, move |_| on_click()))
}

pub fn default_action_button(
    button_type: ActionButtonType,
    text: &str,
    on_click: ClickHandler,
) -> Element {
    Element::new("button")
        .attr("class", "action-button")
        .attr("data-type", button_type.as_str())
        .child(Node::text(text))
        .on(EventKind::Click, move |_| on_click())
}

/// Labelled text input that writes every edit into `field`
pub fn default_prompt_input(label: &str, field: PromptField) -> MarkupResult<Element> {
    let markup = html!(
        r#"
<label class="prompt-label">
  <div>{}</div>
  <input name="input" autofocus autocomplete="off" class="prompt-text-field" value="{}">
</label>"#,
        label,
        field.value()
    );
    let mut element = content_to_element(&markup)?;

    if let Some(input) = element.find_mut(|el| el.tag() == "input") {
        input.add_listener(
            EventKind::Input,
            Arc::new(move |event| field.set_value(event.value.clone().unwrap_or_default())),
        );
    }
    Ok(element)
}
