use std::{env, str::FromStr, time::Duration};

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 60;
const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub model_timeout: Duration,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_ttl_minutes: i64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// `OPENAI_API_KEY` is required; every other key has a default.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                AppError::ConfigError(
                    "OPENAI_API_KEY is not set. Export it or add it to a .env file.".to_string(),
                )
            })?;

        Ok(Self {
            openai_api_key: SecretString::from(openai_api_key),
            openai_api_base: lookup("OPENAI_API_BASE").filter(|b| !b.trim().is_empty()),
            openai_model: lookup("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            openai_temperature: parse_or(&lookup, "OPENAI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            model_timeout: Duration::from_secs(parse_or(
                &lookup,
                "MODEL_TIMEOUT_SECS",
                DEFAULT_MODEL_TIMEOUT_SECS,
            )?),
            web_server_host: lookup("WEB_SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            web_server_port: parse_or(&lookup, "WEB_SERVER_PORT", 8080)?,
            session_ttl_minutes: parse_or(
                &lookup,
                "SESSION_TTL_MINUTES",
                DEFAULT_SESSION_TTL_MINUTES,
            )?,
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Rejects values that would make the service unusable.
    pub fn validate(&self) -> AppResult<()> {
        if self.openai_api_key.expose_secret().is_empty() {
            return Err(AppError::ConfigError("OPENAI_API_KEY is empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.openai_temperature) {
            return Err(AppError::ConfigError(format!(
                "OPENAI_TEMPERATURE must be between 0 and 2, got {}",
                self.openai_temperature
            )));
        }
        if self.model_timeout.is_zero() {
            return Err(AppError::ConfigError(
                "MODEL_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        if self.session_ttl_minutes <= 0 {
            return Err(AppError::ConfigError(
                "SESSION_TTL_MINUTES must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test".to_string()),
            openai_api_base: None,
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_temperature: DEFAULT_TEMPERATURE,
            model_timeout: Duration::from_secs(5),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_ttl_minutes: DEFAULT_SESSION_TTL_MINUTES,
            cors_allowed_origins: Vec::new(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::ConfigError(format!("{} has an invalid value: '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
