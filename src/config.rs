use std::env;

/// Runtime configuration, read from the environment with local-dev defaults.
pub struct Config {
    pub partner_base_url: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            partner_base_url: env::var("PARTNER_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3031".to_string()),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:4040".to_string()),
        }
    }
}
