// SPDX-License-Identifier: MPL-2.0
//! This module handles the feedback configuration, including loading and saving
//! store preferences to a `feedback.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use admin_feedback::config::{self, FeedbackConfig};
//! use admin_feedback::feedback::{Anchor, FeedbackStore};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.default_anchor = Some(Anchor::BottomLeft);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Build a store from it
//! let store = FeedbackStore::from_config(&config);
//! assert_eq!(store.settings().default_anchor, Anchor::BottomLeft);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::feedback::MaxItems;
use crate::error::Result;
use crate::feedback::{Anchor, StoreSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "feedback.toml";
const APP_NAME: &str = "AdminFeedback";

/// User-editable store preferences. Unset fields fall back to [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub default_anchor: Option<Anchor>,
    #[serde(default)]
    pub max_items: Option<usize>,
    #[serde(default)]
    pub error_duration_ms: Option<u64>,
    #[serde(default)]
    pub warning_duration_ms: Option<u64>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            default_anchor: Some(DEFAULT_ANCHOR),
            max_items: Some(DEFAULT_MAX_ITEMS),
            error_duration_ms: Some(DEFAULT_ERROR_DURATION_MS),
            warning_duration_ms: Some(DEFAULT_WARNING_DURATION_MS),
        }
    }
}

impl FeedbackConfig {
    /// Resolves the configuration into concrete store settings.
    ///
    /// `max_items` is clamped to the accepted capacity range.
    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        StoreSettings {
            default_duration_ms: self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            default_anchor: self.default_anchor.unwrap_or(DEFAULT_ANCHOR),
            max_items: self.max_items.map(MaxItems::new).unwrap_or_default(),
            error_duration_ms: self
                .error_duration_ms
                .unwrap_or(DEFAULT_ERROR_DURATION_MS),
            warning_duration_ms: self
                .warning_duration_ms
                .unwrap_or(DEFAULT_WARNING_DURATION_MS),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<FeedbackConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(FeedbackConfig::default())
}

pub fn save(config: &FeedbackConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<FeedbackConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &FeedbackConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
