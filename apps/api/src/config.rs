use std::str::FromStr;

use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// Every key has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Longest skill string (in characters) the HTTP layer will normalize.
    pub max_skill_len: usize,
    pub max_batch_size: usize,
    /// Default for requests that do not pass `remove_stopwords`.
    pub remove_stopwords: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_skill_len: 512,
            max_batch_size: 1000,
            remove_stopwords: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: env_or("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            max_skill_len: env_or("MAX_SKILL_LEN", defaults.max_skill_len)?,
            max_batch_size: env_or("MAX_BATCH_SIZE", defaults.max_batch_size)?,
            remove_stopwords: env_or("REMOVE_STOPWORDS", defaults.remove_stopwords)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} has an invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_skill_len, 512);
        assert!(config.remove_stopwords);
    }

    #[test]
    fn test_parse_value_trims() {
        let port: u16 = parse_value("PORT", " 9000 ").unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_value_error_names_key() {
        let err = parse_value::<bool>("REMOVE_STOPWORDS", "maybe").unwrap_err();
        assert!(err.to_string().contains("REMOVE_STOPWORDS"));
    }
}
