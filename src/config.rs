use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the patterns backend, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            api_base_url: env("DASHBOARD_API_BASE_URL", "http://127.0.0.1:8000"),
            request_timeout_secs: env("REQUEST_TIMEOUT_SECS", "30").parse().unwrap_or(30),
            log_level: env("LOG_LEVEL", "INFO"),
        }
    }
}
