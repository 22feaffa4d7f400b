//! Controller configuration and plugins that rewrite it

use super::{icons, types::DialogKind};
use crate::markup::SvgContent;
use std::{fmt, sync::Arc};

/// Lookup from dialog kind to icon
pub type IconLookup = Arc<dyn Fn(DialogKind) -> Option<SvgContent> + Send + Sync>;

/// Configuration plugins may rewrite before the controller uses it
#[derive(Clone, Default)]
pub struct DialogControllerConfig {
    /// `None` uses the built-in icons
    pub dialog_icon: Option<IconLookup>,
}

impl DialogControllerConfig {
    /// Icon for a kind, falling back to the built-in set
    pub fn icon_for(&self, kind: DialogKind) -> Option<SvgContent> {
        match &self.dialog_icon {
            Some(lookup) => lookup(kind),
            None => icons::default_dialog_icon(kind),
        }
    }
}

impl fmt::Debug for DialogControllerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogControllerConfig")
            .field("dialog_icon", &self.dialog_icon.is_some())
            .finish()
    }
}

/// Transforms the controller configuration; applied in registration order
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn map_config(&self, config: DialogControllerConfig) -> DialogControllerConfig;
}

/// Installs the built-in icon set
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIconsPlugin;

impl Plugin for DefaultIconsPlugin {
    fn name(&self) -> &str {
        "default-icons"
    }

    fn map_config(&self, mut config: DialogControllerConfig) -> DialogControllerConfig {
        config.dialog_icon = Some(Arc::new(icons::default_dialog_icon));
        config
    }
}

/// Removes all icons
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIconsPlugin;

impl Plugin for NoIconsPlugin {
    fn name(&self) -> &str {
        "no-icons"
    }

    fn map_config(&self, mut config: DialogControllerConfig) -> DialogControllerConfig {
        config.dialog_icon = Some(Arc::new(|_| None));
        config
    }
}

/// Apply plugins to a configuration in order
pub fn apply_plugins(
    config: DialogControllerConfig,
    plugins: &[Arc<dyn Plugin>],
) -> DialogControllerConfig {
    plugins
        .iter()
        .fold(config, |config, plugin| plugin.map_config(config))
}
