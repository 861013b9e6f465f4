use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if the model API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub model_timeout: Duration,
    pub max_upload_bytes: usize,
    pub session_idle_timeout: Duration,
    pub session_sweep_interval: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.0-pro".to_string()),
            model_timeout: Duration::from_secs(parse_env("MODEL_TIMEOUT_SECS", 60)?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            session_idle_timeout: Duration::from_secs(parse_env(
                "SESSION_IDLE_TIMEOUT_SECS",
                1800,
            )?),
            session_sweep_interval: Duration::from_secs(parse_env("SESSION_SWEEP_SECS", 60)?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            google_api_key: "test-key".to_string(),
            gemini_model: "gemini-1.0-pro".to_string(),
            model_timeout: Duration::from_secs(5),
            max_upload_bytes: 1024 * 1024,
            session_idle_timeout: Duration::from_secs(60),
            session_sweep_interval: Duration::from_secs(10),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let port: u16 = parse_env("TALENTSCOUT_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("TALENTSCOUT_TEST_BAD_TIMEOUT", "soon");
        let result: Result<u64> = parse_env("TALENTSCOUT_TEST_BAD_TIMEOUT", 60);
        assert!(result.is_err());
    }

    #[test]
    fn test_require_env_rejects_blank_value() {
        std::env::set_var("TALENTSCOUT_TEST_BLANK_KEY", "   ");
        assert!(require_env("TALENTSCOUT_TEST_BLANK_KEY").is_err());
    }
}
