use std::env;

use tracing::info;

/// Runtime configuration, loaded from environment variables.
pub struct Config {
    /// Base URL of the PassVault backend.
    pub api_url: String,
    /// Optional login credentials for the console client.
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_url: load_or_default("PASSVAULT_API_URL", "http://localhost:5000"),
            email: env::var("PASSVAULT_EMAIL").ok(),
            password: env::var("PASSVAULT_PASSWORD").ok(),
        }
    }
}

fn load_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}
