//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Environment variable consulted when the prefixed key is absent.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Google Gemini API key
    pub gemini_api_key: Option<String>,

    /// Model override (defaults to `gemini-2.5-flash`)
    pub model: Option<String>,

    /// Base URL override, mainly for proxies and local stubs
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sampling temperature sent with generation requests
    pub temperature: Option<f32>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key.as_ref().is_some_and(|k| !k.trim().is_empty())
    }

    /// Fills the key when it was not set through the prefixed variable.
    pub fn fill_missing_keys(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if !self.has_gemini() {
            self.gemini_api_key = lookup(GEMINI_API_KEY_VAR);
        }
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_gemini() {
            return Err(ValidationError::MissingRequired(GEMINI_API_KEY_VAR));
        }

        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidTimeout);
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ValidationError::InvalidTemperature);
            }
        }

        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            temperature: None,
        }
    }
}

fn default_timeout() -> u64 {
    120
}
