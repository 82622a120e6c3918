use dotenv::dotenv;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::env;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub api_host: String,
    pub api_port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment, after applying `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from the
    /// `DB_*` parts.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let db_port: u16 = parse_port("DB_PORT", &var("DB_PORT", "3306"))?;
                format!(
                    "mysql://{}:{}@{}:{}/{}",
                    utf8_percent_encode(&var("DB_USER", "root"), NON_ALPHANUMERIC),
                    utf8_percent_encode(&var("DB_PASSWORD", ""), NON_ALPHANUMERIC),
                    var("DB_HOST", "localhost"),
                    db_port,
                    var("DB_NAME", "crud"),
                )
            }
        };

        Ok(Self {
            database_url,
            api_host: var("API_HOST", "0.0.0.0"),
            api_port: parse_port("API_PORT", &var("API_PORT", "3030"))?,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        name,
        reason: format!("{:?}: {}", value, e),
    })
}
