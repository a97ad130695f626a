// src/config.rs
use std::env;
use std::path::PathBuf;

use crate::shared::storage::LocalPersistence;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub local_store_path: PathBuf,
    pub learning_planner_storage: LocalPersistence,
    pub resume_storage: LocalPersistence,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            local_store_path: PathBuf::from(".portfolio/local_storage.json"),
            learning_planner_storage: LocalPersistence::Ephemeral,
            resume_storage: LocalPersistence::Ephemeral,
        }
    }
}

impl SiteConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let port = match read("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?,
            None => defaults.port,
        };

        let persistence = |name: &'static str| -> Result<LocalPersistence, ConfigError> {
            match read(name) {
                Some(raw) => raw
                    .parse()
                    .map_err(|reason| ConfigError::Invalid { name, reason }),
                None => Ok(LocalPersistence::Ephemeral),
            }
        };

        Ok(Self {
            api_base_url: read("API_BASE_URL").unwrap_or(defaults.api_base_url),
            host: read("HOST").unwrap_or(defaults.host),
            port,
            local_store_path: read("LOCAL_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.local_store_path),
            learning_planner_storage: persistence("LEARNING_PLANNER_STORAGE")?,
            resume_storage: persistence("RESUME_STORAGE")?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
