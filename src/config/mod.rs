use crate::dialogs::ElementTiming;
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

/// Longest close animation or delay accepted from configuration
const MAX_DURATION_MS: u64 = 10_000;

/// Dialog settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DialogSettings {
    /// Default label of the confirm button
    pub confirm_text: String,

    /// Default label of the secondary (decline) button
    pub cancel_text: String,

    /// Title of the close button
    pub close_text: String,

    /// Upper bound on the close animation in milliseconds
    pub close_animation_ms: u64,

    /// Delay after teardown before a close completes
    pub settle_delay_ms: u64,

    /// Close transition of hosts that manage their own modals
    pub host_transition_ms: u64,

    /// Mount dialogs as native modals
    pub use_native_dialog: bool,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            confirm_text: "Ok".to_string(),
            cancel_text: "Cancel".to_string(),
            close_text: "Close".to_string(),
            close_animation_ms: 250,
            settle_delay_ms: 100,
            host_transition_ms: 200,
            use_native_dialog: true,
        }
    }
}

impl DialogSettings {
    /// Initialize settings from configuration files and the environment.
    ///
    /// `DIALOGS_*` variables take precedence over `dialogs.json`.
    pub async fn init() -> Result<Self> {
        debug!("Initializing dialog settings");
        Self::load(&Self::config_paths(), |name| std::env::var(name).ok()).await
    }

    /// Build settings from the first existing file in `paths`, then apply
    /// variables from `lookup` on top
    pub async fn load<F>(paths: &[PathBuf], lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(file_settings) = Self::load_from_file(paths).await? {
            settings.merge_with(file_settings);
        }
        settings.load_from_vars(lookup);

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a variable lookup; unparsable values are ignored
    pub fn load_from_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(text) = lookup("DIALOGS_CONFIRM_TEXT") {
            self.confirm_text = text;
        }

        if let Some(text) = lookup("DIALOGS_CANCEL_TEXT") {
            self.cancel_text = text;
        }

        if let Some(text) = lookup("DIALOGS_CLOSE_TEXT") {
            self.close_text = text;
        }

        if let Some(ms) = lookup("DIALOGS_CLOSE_ANIMATION_MS").and_then(|v| v.parse().ok()) {
            self.close_animation_ms = ms;
        }

        if let Some(ms) = lookup("DIALOGS_SETTLE_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.settle_delay_ms = ms;
        }

        if let Some(ms) = lookup("DIALOGS_HOST_TRANSITION_MS").and_then(|v| v.parse().ok()) {
            self.host_transition_ms = ms;
        }

        if let Some(native) = lookup("DIALOGS_NATIVE_DIALOG") {
            self.use_native_dialog = native.to_lowercase() == "true";
        }
    }

    /// Candidate locations of dialogs.json, highest priority first
    pub fn config_paths() -> Vec<PathBuf> {
        // 1. ./dialogs.json
        // 2. $CONFIG_DIR/modal-dialogs/dialogs.json
        let mut config_paths = vec![PathBuf::from("./dialogs.json")];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("modal-dialogs").join("dialogs.json"));
        }

        config_paths
    }

    /// Load the first of `paths` that exists; `None` when there is none.
    /// A file that exists but cannot be read or parsed is an error.
    pub async fn load_from_file(paths: &[PathBuf]) -> Result<Option<Self>> {
        for path in paths {
            if path.exists() {
                let settings = Self::load_from_path(path)
                    .await
                    .with_context(|| format!("Invalid settings file {}", path.display()))?;
                return Ok(Some(settings));
            }
        }

        debug!("No dialogs.json found, using defaults");
        Ok(None)
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        debug!("Loading dialog settings from: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Merge another configuration into this one; default values in `other`
    /// do not override
    pub fn merge_with(&mut self, other: Self) {
        let defaults = Self::default();

        if other.confirm_text != defaults.confirm_text {
            self.confirm_text = other.confirm_text;
        }
        if other.cancel_text != defaults.cancel_text {
            self.cancel_text = other.cancel_text;
        }
        if other.close_text != defaults.close_text {
            self.close_text = other.close_text;
        }
        if other.close_animation_ms != defaults.close_animation_ms {
            self.close_animation_ms = other.close_animation_ms;
        }
        if other.settle_delay_ms != defaults.settle_delay_ms {
            self.settle_delay_ms = other.settle_delay_ms;
        }
        if other.host_transition_ms != defaults.host_transition_ms {
            self.host_transition_ms = other.host_transition_ms;
        }
        if other.use_native_dialog != defaults.use_native_dialog {
            self.use_native_dialog = other.use_native_dialog;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, text) in [
            ("confirm_text", &self.confirm_text),
            ("cancel_text", &self.cancel_text),
            ("close_text", &self.close_text),
        ] {
            if text.trim().is_empty() {
                return Err(anyhow::anyhow!("{} must not be empty", name));
            }
        }

        for (name, ms) in [
            ("close_animation_ms", self.close_animation_ms),
            ("settle_delay_ms", self.settle_delay_ms),
            ("host_transition_ms", self.host_transition_ms),
        ] {
            if ms > MAX_DURATION_MS {
                return Err(anyhow::anyhow!(
                    "{} must be at most {} (got {})",
                    name,
                    MAX_DURATION_MS,
                    ms
                ));
            }
        }

        Ok(())
    }

    /// Close timing for dialog elements
    pub fn timing(&self) -> ElementTiming {
        ElementTiming {
            close_animation: Duration::from_millis(self.close_animation_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
        }
    }

    pub fn host_transition(&self) -> Duration {
        Duration::from_millis(self.host_transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DialogSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.timing(), ElementTiming::default());
        assert_eq!(settings.host_transition(), Duration::from_millis(200));
    }

    #[test]
    fn test_load_from_vars() {
        let vars: HashMap<&str, &str> = [
            ("DIALOGS_CONFIRM_TEXT", "Yes"),
            ("DIALOGS_CLOSE_ANIMATION_MS", "40"),
            ("DIALOGS_SETTLE_DELAY_MS", "soon"),
            ("DIALOGS_NATIVE_DIALOG", "FALSE"),
        ]
        .into_iter()
        .collect();

        let mut settings = DialogSettings::default();
        settings.load_from_vars(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(settings.confirm_text, "Yes");
        assert_eq!(settings.close_animation_ms, 40);
        assert_eq!(settings.settle_delay_ms, 100);
        assert!(!settings.use_native_dialog);
        assert_eq!(settings.cancel_text, "Cancel");
    }

    #[tokio::test]
    async fn test_load_partial_file_and_merge() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dialogs.json");
        std::fs::write(&path, r#"{ "cancel_text": "Abbrechen", "settle_delay_ms": 20 }"#).unwrap();

        let file_settings = DialogSettings::load_from_path(&path).await.unwrap();
        assert_eq!(file_settings.confirm_text, "Ok");

        let mut settings = DialogSettings {
            confirm_text: "Yes".to_string(),
            ..DialogSettings::default()
        };
        settings.merge_with(file_settings);

        assert_eq!(settings.confirm_text, "Yes");
        assert_eq!(settings.cancel_text, "Abbrechen");
        assert_eq!(settings.settle_delay_ms, 20);
    }

    #[tokio::test]
    async fn test_invalid_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dialogs.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(DialogSettings::load_from_path(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_file_fails_init() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dialogs.json");
        std::fs::write(&path, r#"{ "confirm_text": "#).unwrap();

        let result = DialogSettings::load(&[path], |_| None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = vec![dir.path().join("dialogs.json")];

        assert!(DialogSettings::load_from_file(&paths).await.unwrap().is_none());
        let settings = DialogSettings::load(&paths, |_| None).await.unwrap();
        assert_eq!(settings, DialogSettings::default());
    }

    #[tokio::test]
    async fn test_environment_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dialogs.json");
        std::fs::write(&path, r#"{ "confirm_text": "Proceed", "cancel_text": "Back" }"#).unwrap();

        let settings = DialogSettings::load(&[dir.path().join("absent.json"), path], |name| {
            (name == "DIALOGS_CONFIRM_TEXT").then(|| "Yes".to_string())
        })
        .await
        .unwrap();

        assert_eq!(settings.confirm_text, "Yes");
        assert_eq!(settings.cancel_text, "Back");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = DialogSettings {
            close_text: "  ".to_string(),
            ..DialogSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = DialogSettings {
            close_animation_ms: 60_000,
            ..DialogSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
