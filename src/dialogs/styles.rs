//! Built-in dialog stylesheet
//!
//! The close sequence relies on the `closing` class triggering the
//! `dialog-fade-out` animation; its duration matches the element's close
//! animation timing.

use crate::css;
use crate::markup::CssContent;
use std::sync::OnceLock;

/// Colours and sizes used by the stylesheet
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary_text_color: &'static str,
    pub primary_background_color: &'static str,
    pub secondary_text_color: &'static str,
    pub secondary_background_color: &'static str,
    pub secondary_border_color: &'static str,
    pub danger_text_color: &'static str,
    pub danger_background_color: &'static str,
    pub border_color: &'static str,
    pub dialog_border_radius: &'static str,
    pub action_button_border_radius: &'static str,
    pub text_color: &'static str,
    pub dialog_background_color: &'static str,
    pub animation_duration: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_text_color: "white",
            primary_background_color: "oklch(50% 0.134 242.749)",
            secondary_text_color: "black",
            secondary_background_color: "white",
            secondary_border_color: "#b0b0b0",
            danger_text_color: "white",
            danger_background_color: "#BE4545FF",
            border_color: "#eee",
            dialog_border_radius: "6px",
            action_button_border_radius: "3px",
            text_color: "light-dark(black, white)",
            dialog_background_color: "light-dark(white, #333)",
            animation_duration: "0.25s",
        }
    }
}

/// Built-in dialog stylesheet, adopted when the element tag is registered
pub fn dialog_styles() -> &'static CssContent {
    static STYLES: OnceLock<CssContent> = OnceLock::new();
    STYLES.get_or_init(|| build_dialog_styles(&Theme::default()))
}

pub fn build_dialog_styles(theme: &Theme) -> CssContent {
    css!(
        r#"
  dialog {
    position: fixed;
    top: 18%;
    color: {};
    background-color: {};
    border: none;
    border-radius: {};
    outline: none;
    min-width: 23em;
    box-sizing: border-box;
    padding: 0;
    margin: 0 auto;

    &[open]:not(.closing) {
      animation: dialog-fade-in {} ease-in-out;
    }

    &[open].closing {
      animation: dialog-fade-out {} ease-in-out;
    }

    &[open]::backdrop {
      background-color: rgba(0, 0, 0, 0.5);
    }
  }

  #icon {
    display: flex;
    justify-content: center;
    align-items: center;
    aspect-ratio: 1 / 1;
    border-radius: 50%;
    font-size: 150%;
    padding: 0.25em;
  }

  :host([data-dialog-type='info']) #icon,
  :host([data-dialog-type='success']) #icon,
  :host([data-dialog-type='confirm']) #icon,
  :host([data-dialog-type='prompt']) #icon {
    color: {};
  }

  :host([data-dialog-type='warn']) #icon,
  :host([data-dialog-type='error']) #icon,
  :host([data-dialog-type='approve']) #icon {
    color: {};
  }

  .header {
    display: flex;
    gap: 0.75em;
    padding: 1em 1em 0 1em;
  }

  .body {
    padding: 0.5em 1em 1em 1em;
  }

  .footer {
    border-top: 1px solid {};
    padding: 0.75em 1em;
  }

  .action-buttons {
    display: flex;
    justify-content: flex-end;
    gap: 0.5em;
  }

  .action-button {
    border-radius: {};
    padding: 0.375em 1.25em;
    cursor: pointer;
  }

  .action-button[data-type='primary'] {
    color: {};
    background-color: {};
    border: none;
  }

  .action-button[data-type='secondary'] {
    color: {};
    background-color: {};
    border: 1px solid {};
  }

  .action-button[data-type='danger'] {
    color: {};
    background-color: {};
    border: none;
  }

  .prompt-label {
    display: flex;
    flex-direction: column;
    gap: 0.25em;
  }

  @keyframes dialog-fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
  }

  @keyframes dialog-fade-out {
    from { opacity: 1; }
    to { opacity: 0; }
  }
"#,
        theme.text_color,
        theme.dialog_background_color,
        theme.dialog_border_radius,
        theme.animation_duration,
        theme.animation_duration,
        theme.primary_background_color,
        theme.danger_background_color,
        theme.border_color,
        theme.action_button_border_radius,
        theme.primary_text_color,
        theme.primary_background_color,
        theme.secondary_text_color,
        theme.secondary_background_color,
        theme.secondary_border_color,
        theme.danger_text_color,
        theme.danger_background_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_values_interpolated() {
        let styles = dialog_styles().css_text();
        assert!(styles.contains("animation: dialog-fade-out 0.25s ease-in-out;"));
        assert!(styles.contains("background-color: #BE4545FF;"));
        assert!(!styles.contains("{}"));
    }
}
