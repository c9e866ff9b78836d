//! Page configuration, optionally overridden from an inline JSON block.
//!
//! The page may embed
//! `<script type="application/json" id="portfolio-config">{...}</script>`;
//! every field is optional and falls back to the built-in default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::page::Theme;
use crate::util::form::DEFAULT_SUCCESS_MESSAGE;
use crate::util::particles::{DEFAULT_PARTICLE_COUNT, MAX_PARTICLE_COUNT};
use crate::util::scroll_spy::{DEFAULT_HEADER_THRESHOLD, DEFAULT_SPY_OFFSET};

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

pub const DEFAULT_STORAGE_KEY: &str = "portfolio-theme";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const DEFAULT_SCROLL_SETTLE_TIMEOUT_MS: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PortfolioConfig {
    pub storage_key: String,
    pub default_theme: Theme,
    pub scroll_spy_offset: f64,
    pub header_scrolled_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub particle_count: usize,
    pub scroll_settle_timeout_ms: u32,
    pub success_message: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            default_theme: Theme::Dark,
            scroll_spy_offset: DEFAULT_SPY_OFFSET,
            header_scrolled_threshold: DEFAULT_HEADER_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            particle_count: DEFAULT_PARTICLE_COUNT,
            scroll_settle_timeout_ms: DEFAULT_SCROLL_SETTLE_TIMEOUT_MS,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_owned(),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON override block.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `raw` if present, logging and falling back to defaults on error.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "storageKey", reason: "must not be empty".into() });
        }
        non_negative("scrollSpyOffset", self.scroll_spy_offset)?;
        non_negative("headerScrolledThreshold", self.header_scrolled_threshold)?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Invalid {
                field: "revealThreshold",
                reason: format!("{} is outside [0, 1]", self.reveal_threshold),
            });
        }
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::Invalid {
                field: "particleCount",
                reason: format!("{} exceeds the limit of {MAX_PARTICLE_COUNT}", self.particle_count),
            });
        }
        Ok(())
    }

    /// Read the inline configuration block from the current document.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_json_or_default(raw.as_deref())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("{value} must be a finite non-negative number") })
    }
}
