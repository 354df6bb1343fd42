use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    config::Config,
    models::gemini::{GenerateContentRequest, GenerateContentResponse},
};

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("request error: {0}")]
    Http(String),
    #[error("gemini status {0}")]
    Status(StatusCode),
    #[error("json error: {0}")]
    Decode(String),
    #[error("no text in model response")]
    Empty,
}

/// One `generateContent` round trip. Single attempt, no retries; the given
/// timeout bounds the whole call.
pub async fn generate_text(
    http: &reqwest::Client,
    cfg: &Config,
    prompt: &str,
    timeout: Duration,
) -> Result<String, GeminiError> {
    let url = cfg
        .gemini_base_url
        .join(&format!("/v1beta/{}:generateContent", cfg.gemini_model))
        .map_err(|e| GeminiError::Endpoint(e.to_string()))?;

    let body = GenerateContentRequest::from_prompt(prompt);
    let res = http
        .post(url)
        .query(&[("key", cfg.gemini_api_key.as_str())])
        .json(&body)
        .timeout(timeout)
        .send()
        .await
        // without_url: the request URL carries the API key
        .map_err(|e| GeminiError::Http(e.without_url().to_string()))?;
    if !res.status().is_success() {
        return Err(GeminiError::Status(res.status()));
    }

    let decoded = res
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| GeminiError::Decode(e.without_url().to_string()))?;
    decoded.into_text().ok_or(GeminiError::Empty)
}
