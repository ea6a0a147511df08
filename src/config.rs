//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use crate::services::budget::DEFAULT_MONTHLY_BUDGET;
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// JSON document holding all users, quiz questions and teams
    pub data_path: PathBuf,
    /// Directory of static frontend assets served outside `/api`
    pub static_dir: PathBuf,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Firebase project whose ID tokens are accepted. Without it, requests
    /// identify themselves with a plain `userId`.
    pub firebase_project_id: Option<String>,
    /// Monthly budget used to derive metrics from logged expenses
    pub monthly_budget: f64,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 3000,
            data_path: PathBuf::from("data.json"),
            static_dir: PathBuf::from("public"),
            frontend_url: "http://localhost:3000".to_string(),
            firebase_project_id: None,
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            firebase_project_id: env::var("FIREBASE_PROJECT_ID")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            monthly_budget: match parse_var::<f64>("MONTHLY_BUDGET")? {
                Some(budget) if budget > 0.0 => budget,
                Some(_) => {
                    return Err(ConfigError::Invalid {
                        name: "MONTHLY_BUDGET",
                        value: env::var("MONTHLY_BUDGET").unwrap_or_default(),
                    })
                }
                None => defaults.monthly_budget,
            },
        })
    }
}

/// Parse an optional environment variable, rejecting unparseable values.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
