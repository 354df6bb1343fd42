use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /ask-ai. Either `prediction` comes pre-computed from the app,
/// or `symptoms` alone triggers a fresh call to the predictor service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub prediction: Option<PredictionSummary>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AskResponse {
    pub answer: String,
}

/// Output of the external disease predictor. Confidence is a fraction in
/// [0, 1]; `top_predictions` is the ranked runner-up list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionSummary {
    pub disease: String,
    pub confidence: f64,
    #[serde(default)]
    pub top_predictions: Vec<AlternativePrediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlternativePrediction {
    pub disease: String,
    pub confidence: f64,
}
