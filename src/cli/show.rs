use anyhow::{anyhow, Result};
use clap::Args;
use modal_dialogs::{
    dialogs::{buttons_for, ButtonId, ButtonTexts, DialogElement, Document, ElementState},
    DialogController, DialogKind, DialogRequest, DialogSettings,
};
use std::{str::FromStr, sync::Arc, time::Duration};
use tracing::{debug, info};

const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// How the simulated user answers the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Confirm,
    Cancel,
    Close,
    Dismiss,
    /// Type into the prompt input, then confirm
    Type(String),
}

impl FromStr for Response {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix("type:") {
            return Ok(Self::Type(text.to_string()));
        }

        match s.trim().to_lowercase().as_str() {
            "confirm" => Ok(Self::Confirm),
            "cancel" => Ok(Self::Cancel),
            "close" => Ok(Self::Close),
            "dismiss" => Ok(Self::Dismiss),
            other => Err(format!(
                "unknown response '{}' (expected confirm, cancel, close, dismiss or type:<text>)",
                other
            )),
        }
    }
}

/// Open a dialog and answer it
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Dialog kind: info, success, warn, error, confirm, approve or prompt
    pub kind: DialogKind,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub subtitle: Option<String>,

    /// Body text; line breaks become separate blocks
    #[arg(long)]
    pub content: Option<String>,

    /// Label of the confirm button
    #[arg(long)]
    pub confirm_text: Option<String>,

    /// Label of the secondary button
    #[arg(long)]
    pub cancel_text: Option<String>,

    /// Prompt input label
    #[arg(long)]
    pub label: Option<String>,

    /// Prompt input initial value
    #[arg(long)]
    pub value: Option<String>,

    /// confirm, cancel, close, dismiss or type:<text>
    #[arg(long, default_value = "confirm")]
    pub respond: Response,
}

impl ShowCommand {
    pub async fn execute(&self, settings: &DialogSettings) -> Result<()> {
        debug!("Executing show command for {}", self.kind);

        let controller = Arc::new(DialogController::new().with_settings(settings.clone()));
        let document = Arc::clone(controller.adapter().document());

        let kind = self.kind;
        let request = self.request();
        let task = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.open(kind, request).await })
        };

        let element = match tokio::time::timeout(OPEN_TIMEOUT, wait_for_open(&document)).await {
            Ok(element) => element,
            Err(_) => {
                // surface the controller's own error if it gave up
                task.await??;
                return Err(anyhow!("Dialog did not open within {:?}", OPEN_TIMEOUT));
            }
        };

        println!("{}", document.to_html());

        self.respond(&element, settings).await?;

        let outcome = task.await??;
        info!("Dialog finished");
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        Ok(())
    }

    fn request(&self) -> DialogRequest {
        let mut request = DialogRequest::new();
        if let Some(title) = &self.title {
            request = request.with_title(title.as_str());
        }
        if let Some(subtitle) = &self.subtitle {
            request = request.with_subtitle(subtitle.as_str());
        }
        if let Some(content) = &self.content {
            request = request.with_content(content.as_str());
        }
        if let Some(text) = &self.confirm_text {
            request = request.with_confirm_text(text.as_str());
        }
        if let Some(text) = &self.cancel_text {
            request = request.with_cancel_text(text.as_str());
        }
        if let Some(label) = &self.label {
            request = request.with_label(label.as_str());
        }
        if let Some(value) = &self.value {
            request = request.with_value(value.as_str());
        }
        request
    }

    fn button_label(&self, settings: &DialogSettings, id: ButtonId) -> Option<String> {
        let texts = ButtonTexts {
            confirm: self.confirm_text.clone(),
            cancel: self.cancel_text.clone(),
        };
        texts
            .apply(&buttons_for(self.kind, settings))
            .into_iter()
            .find(|button| button.id == id)
            .map(|button| button.text)
    }

    async fn respond(&self, element: &DialogElement, settings: &DialogSettings) -> Result<()> {
        let click = |id: ButtonId| -> Result<()> {
            let label = self
                .button_label(settings, id)
                .ok_or_else(|| anyhow!("{} dialogs have no {:?} button", self.kind, id))?;
            if !element.click_button(&label) {
                return Err(anyhow!("Button '{}' is not clickable", label));
            }
            Ok(())
        };

        match &self.respond {
            Response::Confirm => click(ButtonId::Confirm),
            Response::Cancel => click(ButtonId::Decline),
            Response::Close => {
                if !element.click_button(&settings.close_text) {
                    return Err(anyhow!("Close button is not clickable"));
                }
                Ok(())
            }
            Response::Dismiss => {
                if !element.use_native_dialog() {
                    return Err(anyhow!("Only native dialogs can be dismissed"));
                }
                element.dismiss().await;
                Ok(())
            }
            Response::Type(text) => {
                if !element.fill_input("input", text) {
                    return Err(anyhow!("{} dialogs have no text input", self.kind));
                }
                click(ButtonId::Confirm)
            }
        }
    }
}

async fn wait_for_open(document: &Document) -> Arc<DialogElement> {
    loop {
        if let Some(element) = document.last() {
            if element.state() == ElementState::Open {
                return element;
            }
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response() {
        assert_eq!("confirm".parse::<Response>().unwrap(), Response::Confirm);
        assert_eq!(" Dismiss ".parse::<Response>().unwrap(), Response::Dismiss);
        assert_eq!(
            "type:John Doe".parse::<Response>().unwrap(),
            Response::Type("John Doe".to_string())
        );
        assert!("later".parse::<Response>().is_err());
    }
}
