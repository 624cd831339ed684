use std::env;
use log::{info, warn};

pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}

pub const API_KEY_VAR: &str = "GENAI_API_KEY";
pub const EMAIL_USERNAME_VAR: &str = "EMAIL_USERNAME";
pub const EMAIL_PASSWORD_VAR: &str = "EMAIL_PASSWORD";

pub const MODEL_NAME: &str = "gemini-1.5-flash";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/";
pub const EMAIL_SUBJECT: &str = "Generated Content from Generative AI App";

const SMTP_HOST: &str = "smtp.gmail.com";
const SMTP_PORT: u16 = 587;

pub fn smtp_host() -> String {
    String::from(SMTP_HOST)
}

pub fn smtp_port() -> u16 {
    SMTP_PORT
}

const OLLAMA_HOST: &str = "http://localhost";
const OLLAMA_PORT: u16 = 11434;
const SERVER_HOST: &str = "127.0.0.1";
const SERVER_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Gemini API key not found. Please set {} in your .env file.", API_KEY_VAR)]
    MissingApiKey,

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

/// Which hosted model service answers `generate` calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Backend {
    Gemini,
    Ollama { host: String, port: u16 },
}

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub email_username: Option<String>,
    pub email_password: Option<String>,
    pub model: String,
    pub api_base: String,
    pub backend: Backend,
    pub server_host: String,
    pub server_port: u16,
}

// Hand-written so the secrets never reach the logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("email_username", &self.email_username)
            .field("email_password", &self.email_password.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("backend", &self.backend)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl AppConfig {
    /// Loads `.env` (when present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_err() {
            info!("No .env file found; using the process environment only");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Only the model API key is checked here; missing mail credentials
    /// surface later as a delivery failure.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = read(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let email_username = read(EMAIL_USERNAME_VAR);
        let email_password = read(EMAIL_PASSWORD_VAR);
        if email_username.is_none() || email_password.is_none() {
            warn!("Mail credentials are not fully configured; sending email will fail");
        }

        let backend = match read("GENAI_BACKEND").as_deref() {
            None | Some("gemini") => Backend::Gemini,
            Some("ollama") => Backend::Ollama {
                host: read("OLLAMA_HOST").unwrap_or_else(|| OLLAMA_HOST.to_string()),
                port: parse_port("OLLAMA_PORT", read("OLLAMA_PORT"), OLLAMA_PORT)?,
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "GENAI_BACKEND".to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(AppConfig {
            api_key,
            email_username,
            email_password,
            model: read("GENAI_MODEL").unwrap_or_else(|| MODEL_NAME.to_string()),
            api_base: read("GENAI_API_BASE").unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            backend,
            server_host: read("SERVER_HOST").unwrap_or_else(|| SERVER_HOST.to_string()),
            server_port: parse_port("SERVER_PORT", read("SERVER_PORT"), SERVER_PORT)?,
        })
    }
}

fn parse_port(name: &str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            value: v,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("EMAIL_USERNAME", "me@example.com"),
            ("EMAIL_PASSWORD", "secret"),
        ]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_empty_api_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[("GENAI_API_KEY", "   ")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_mail_credentials_are_optional() {
        let config = AppConfig::from_lookup(lookup_from(&[("GENAI_API_KEY", "key-123")])).unwrap();
        assert_eq!(config.api_key, "key-123");
        assert!(config.email_username.is_none());
        assert!(config.email_password.is_none());
        assert_eq!(config.model, MODEL_NAME);
        assert_eq!(config.backend, Backend::Gemini);
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn test_ollama_backend_selection() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "key-123"),
            ("GENAI_BACKEND", "ollama"),
            ("OLLAMA_PORT", "11435"),
        ]))
        .unwrap();
        assert_eq!(
            config.backend,
            Backend::Ollama { host: "http://localhost".to_string(), port: 11435 }
        );
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "key-123"),
            ("SERVER_PORT", "eighty"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GENAI_API_KEY", "key-123"),
            ("EMAIL_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("key-123"));
        assert!(!printed.contains("hunter2"));
    }
}
