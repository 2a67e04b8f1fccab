use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

/// Google Apps Script web app that receives contact requests.
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzwvKKR6TOkOARb1SPmFBOc9ymzIHgLoKPxmASzAkonEYuoCMzGfnmvpgu24lWJW6LV/exec";

/// Id of the optional inline `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    pub contact_endpoint: String,
    pub step_interval_ms: u32,
    pub step_cooldown_ms: u32,
    pub status_hide_ms: u32,
    pub back_to_top_threshold: f64,
    pub nav_elevation_threshold: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            step_interval_ms: 4_000,
            step_cooldown_ms: 8_000,
            status_hide_ms: 5_000,
            back_to_top_threshold: 600.0,
            nav_elevation_threshold: 8.0,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads overrides from the page, falling back to defaults.
    pub fn load() -> Self {
        let raw = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
