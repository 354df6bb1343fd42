use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::{config::Config, models::health::PredictionSummary};

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    symptoms: &'a [String],
}

#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("PREDICTOR_BASE_URL is not configured")]
    NotConfigured,
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
    #[error("request error: {0}")]
    Http(String),
    #[error("predictor status {0}")]
    Status(StatusCode),
    #[error("json error: {0}")]
    Decode(String),
}

/// Recompute a disease prediction from a symptom list via the external
/// predictor service. Single attempt, bounded by the predictor timeout.
pub async fn make_prediction(
    http: &reqwest::Client,
    cfg: &Config,
    symptoms: &[String],
) -> Result<PredictionSummary, PredictorError> {
    let base = cfg
        .predictor_base_url
        .as_ref()
        .ok_or(PredictorError::NotConfigured)?;
    let url = base
        .join("/predict")
        .map_err(|e| PredictorError::Endpoint(e.to_string()))?;

    let res = http
        .post(url)
        .json(&PredictRequest { symptoms })
        .timeout(cfg.predictor_timeout)
        .send()
        .await
        .map_err(|e| PredictorError::Http(e.to_string()))?;
    if !res.status().is_success() {
        return Err(PredictorError::Status(res.status()));
    }

    res.json::<PredictionSummary>()
        .await
        .map_err(|e| PredictorError::Decode(e.to_string()))
}
