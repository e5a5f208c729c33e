use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub pages_dir: PathBuf,
    /// Lowercase hex SHA-256 digest of the admin password.
    pub admin_password_sha256: String,
    pub session_ttl: Duration,
    pub seed_demo: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let pages_dir = env_map
            .get("PAGES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./pages"));

        let admin_password_sha256 = env_map
            .get("ADMIN_PASSWORD_SHA256")
            .ok_or_else(|| ConfigError::MissingEnv("ADMIN_PASSWORD_SHA256".to_string()))?
            .trim()
            .to_ascii_lowercase();
        if admin_password_sha256.len() != 64 || hex::decode(&admin_password_sha256).is_err() {
            return Err(ConfigError::InvalidValue(
                "ADMIN_PASSWORD_SHA256".to_string(),
                "must be 64 hex characters".to_string(),
            ));
        }

        let session_ttl_secs = env_map
            .get("SESSION_TTL_SECS")
            .map(|s| s.as_str())
            .unwrap_or("86400")
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SESSION_TTL_SECS".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        let seed_demo = match env_map
            .get("SEED_DEMO")
            .map(|s| s.as_str())
            .unwrap_or("false")
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "SEED_DEMO".to_string(),
                    format!("must be true or false, got {}", other),
                ))
            }
        };

        Ok(Config {
            port,
            pages_dir,
            admin_password_sha256,
            session_ttl: Duration::from_secs(session_ttl_secs),
            seed_demo,
        })
    }
}
