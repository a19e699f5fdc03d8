//! Environment-driven configuration.

use std::path::PathBuf;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub admin_token: String,
    pub terms_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = std::env::var("GATEHOUSE_DB_URL")
            .unwrap_or_else(|_| "sqlite://gatehouse.db".to_string());
        let bind_addr =
            std::env::var("GATEHOUSE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let admin_token = std::env::var("GATEHOUSE_ADMIN_TOKEN").unwrap_or_else(|_| {
            tracing::warn!("GATEHOUSE_ADMIN_TOKEN not set; using insecure dev default");
            "change-me".to_string()
        });
        let terms_path = std::env::var("GATEHOUSE_TERMS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("terms.txt"));

        Self {
            database_url,
            bind_addr,
            admin_token,
            terms_path,
        }
    }
}
