use serde::{Deserialize, Serialize};
use std::env;

/// Configuration for the analysis server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API key for the Gemini generation service
    pub api_key: String,

    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origin allowed to call the analysis endpoint
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,
}

/// Default listening port
fn default_port() -> u16 {
    5000
}

/// Default value for allowed_origin
fn default_allowed_origin() -> String {
    "http://localhost:3000".to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

impl ServerConfig {
    /// Create a new configuration with default values
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            port: default_port(),
            allowed_origin: default_allowed_origin(),
            webdriver_url: default_webdriver_url(),
        }
    }

    /// Build a configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is required; the server must not start without it.
    /// `WEBDRIVER_URL` overrides the default WebDriver endpoint if set.
    pub fn from_env() -> Result<Self, env::VarError> {
        let api_key = env::var("GEMINI_API_KEY")?;
        let mut config = Self::new(api_key);

        if let Ok(webdriver_url) = env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        Ok(config)
    }
}
