use std::env;
use std::str::FromStr;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP bind host (e.g., 0.0.0.0)
    pub app_host: String,
    /// HTTP bind port (PORT env, e.g., 5000)
    pub app_port: u16,

    /// Gemini API key. Required; startup fails without it.
    pub gemini_api_key: String,
    /// Model identifier (e.g., models/gemini-flash-latest)
    pub gemini_model: String,
    /// Generative-language API base URL
    pub gemini_base_url: Url,
    /// Timeout for the chat and smart-reply model calls
    pub gemini_timeout: Duration,
    /// Tighter timeout for the health-assistant path
    pub ask_timeout: Duration,

    /// Disease-predictor base URL (e.g., http://localhost:8001).
    /// Optional; /ask-ai symptom recomputation fails when unset.
    pub predictor_base_url: Option<Url>,
    /// Timeout for the predictor call
    pub predictor_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env if present
        let _ = dotenv();

        let app_host = env_or_default("APP_HOST", "0.0.0.0");
        let app_port = parse_or_default::<u16>("PORT", 5000)?;

        let gemini_api_key =
            env::var("GEMINI_API_KEY").map_err(|_| ConfigError::MissingVar("GEMINI_API_KEY"))?;
        let gemini_model = env_or_default("GEMINI_MODEL", "models/gemini-flash-latest");
        let gemini_base_url = parse_url_or_default(
            "GEMINI_BASE_URL",
            "https://generativelanguage.googleapis.com",
        )?;

        let gemini_timeout =
            Duration::from_secs(parse_or_default::<u64>("GEMINI_TIMEOUT_SECS", 30)?);
        let ask_timeout = Duration::from_secs(parse_or_default::<u64>("ASK_TIMEOUT_SECS", 20)?);

        let predictor_base_url = parse_url_optional("PREDICTOR_BASE_URL")?;
        let predictor_timeout =
            Duration::from_secs(parse_or_default::<u64>("PREDICTOR_TIMEOUT_SECS", 10)?);

        Ok(Self {
            app_host,
            app_port,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            gemini_timeout,
            ask_timeout,
            predictor_base_url,
            predictor_timeout,
        })
    }
}

/* --------------------------- helpers --------------------------- */

fn env_or_default(key: &'static str, default: &'static str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_or_default<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(v) => v.parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name: key,
            value: v,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_url_or_default(key: &'static str, default: &'static str) -> Result<Url, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
        name: key,
        value: raw,
    })
}

fn parse_url_optional(key: &'static str) -> Result<Option<Url>, ConfigError> {
    match env::var(key) {
        Ok(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(|_| ConfigError::InvalidUrl {
                name: key,
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}
