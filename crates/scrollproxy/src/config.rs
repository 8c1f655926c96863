//! Scroll proxy configuration presets.

use serde::{Deserialize, Serialize};

use crate::alignment::Alignment;
use crate::error::Result;
use crate::{ScrollBehavior, ScrollOptions};

/// Defaults applied by a scroll proxy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollProxyConfig {
    /// Alignment used by `scroll_to` when none is given.
    pub default_alignment: Alignment,
    /// Behavior used by `scroll_to` and `scroll_to_edge` when none is given.
    pub behavior: ScrollBehavior,
    /// Whether scrolling to an unregistered region logs a warning.
    pub warn_on_missing_region: bool,
}

impl Default for ScrollProxyConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScrollProxyConfig {
    /// Top alignment, animated scrolls, warnings on.
    pub fn standard() -> Self {
        Self {
            default_alignment: Alignment::Top,
            behavior: ScrollBehavior::Smooth,
            warn_on_missing_region: true,
        }
    }

    /// Like `standard`, but scrolls jump without animation.
    pub fn instant() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            ..Self::standard()
        }
    }

    /// Like `standard`, but missing regions are not logged.
    pub fn quiet() -> Self {
        Self {
            warn_on_missing_region: false,
            ..Self::standard()
        }
    }

    /// Parse a config from TOML; missing keys take their `standard` values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Set the default alignment.
    pub fn with_default_alignment(mut self, alignment: Alignment) -> Self {
        self.default_alignment = alignment;
        self
    }

    /// Set the default scroll behavior.
    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Enable or disable missing-region warnings.
    pub fn with_missing_region_warnings(mut self, warn: bool) -> Self {
        self.warn_on_missing_region = warn;
        self
    }

    /// Scroll options built from the defaults.
    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            alignment: self.default_alignment,
            behavior: self.behavior,
        }
    }
}
