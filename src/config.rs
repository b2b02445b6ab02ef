//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::str::FromStr;

/// Which document store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Google Cloud Firestore (or its emulator when `FIRESTORE_EMULATOR_HOST` is set).
    Firestore,
    /// Process-local store; contents are lost on restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "firestore" => Ok(StoreBackend::Firestore),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid("STORE_BACKEND", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project holding the Firestore database
    pub gcp_project_id: String,
    /// Document store backend
    pub store_backend: StoreBackend,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
}

impl Config {
    /// Config for tests: in-memory store, default port.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            store_backend: StoreBackend::Memory,
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match env::var("STORE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => StoreBackend::Firestore,
        };

        // The in-memory store never talks to GCP, so the project is optional there.
        let gcp_project_id = match (env::var("GCP_PROJECT_ID"), store_backend) {
            (Ok(project), _) => project.trim().to_string(),
            (Err(_), StoreBackend::Memory) => "local-dev".to_string(),
            (Err(_), StoreBackend::Firestore) => {
                return Err(ConfigError::Missing("GCP_PROJECT_ID"))
            }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw.clone()))?,
            Err(_) => 8080,
        };

        Ok(Self {
            gcp_project_id,
            store_backend,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
