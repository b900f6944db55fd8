use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const KEYRING_SERVICE: &str = "mood2music";
const KEYRING_USER: &str = "gemini_api_key";

/// Settings for the content generator client.
///
/// `api_key` is the credential used to authenticate to the generative
/// service. It is optional here so a missing key becomes a failed generation
/// rather than a startup error.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Reads the environment, falling back to the OS keyring for the key.
    pub fn from_env() -> Self {
        let api_key = env_non_empty("GEMINI_API_KEY")
            .or_else(|| env_non_empty("API_KEY"))
            .or_else(keyring_api_key);

        if api_key.is_none() {
            warn!("no Gemini API key configured, generation will fail");
        }

        Self {
            api_key,
            model: env_non_empty("MOOD2MUSIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: env_non_empty("MOOD2MUSIC_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub copy_feedback: Duration,
    pub tick_rate: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            copy_feedback: Duration::from_secs(2),
            tick_rate: Duration::from_millis(33),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
fn keyring_api_key() -> Option<String> {
    let entry = match keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        Ok(entry) => entry,
        Err(e) => {
            warn!(error = %e, "keyring unavailable");
            return None;
        }
    };

    match entry.get_password() {
        Ok(key) => {
            info!("using API key from keyring");
            Some(key)
        }
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(error = %e, "failed to read API key from keyring");
            None
        }
    }
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn keyring_api_key() -> Option<String> {
    let _ = (KEYRING_SERVICE, KEYRING_USER);
    None
}
