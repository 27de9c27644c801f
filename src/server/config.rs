use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://bloodbank.db?mode=rwc";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "dist";

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` and `STATIC_DIR` fall back to hardcoded defaults when
    /// unset; `PORT` falls back to 5000 and fails when set but unparseable.
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port,
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string()),
        })
    }
}
