//! Overlay configuration.
//!
//! Plain data with serde support so hosts can persist the settings in their
//! own config files. Missing fields fall back to the values in
//! [`crate::defaults`].

use crate::defaults;
use crate::geometry::Platform;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable settings for a [`TrackMarkerOverlay`](crate::overlay::TrackMarkerOverlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Resize quiescence window in milliseconds before stored marks are
    /// re-laid out.
    pub resize_idle_ms: u64,
    /// Platform whose scrollbar chrome the track geometry accounts for.
    pub platform: Platform,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            resize_idle_ms: defaults::resize_idle_ms(),
            platform: defaults::platform(),
        }
    }
}

impl OverlayConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resize idle window in milliseconds.
    pub fn with_resize_idle_ms(mut self, ms: u64) -> Self {
        self.resize_idle_ms = ms;
        self
    }

    /// Set the platform whose scrollbar chrome is accounted for.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Resize idle window as a [`Duration`].
    pub fn resize_idle(&self) -> Duration {
        Duration::from_millis(self.resize_idle_ms)
    }

    /// Parse a config from YAML. Fields absent from the document keep their
    /// defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Serialize the config to YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml_ng::Error> {
        serde_yaml_ng::to_string(self)
    }
}
