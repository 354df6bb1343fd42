use thiserror::Error;
use tracing::info;

use crate::{
    AppState,
    models::health::PredictionSummary,
    prompt,
    services::{
        gemini::{self, GeminiError},
        predictor::{self, PredictorError},
    },
};

#[derive(Debug, Error)]
pub enum AskHandleError {
    #[error("ai call failed: {0}")]
    Ai(#[from] GeminiError),
    #[error("prediction failed: {0}")]
    Predictor(#[from] PredictorError),
}

/// Health-assistant path. A prediction supplied by the app is used as-is;
/// with only symptoms, the predictor service recomputes it first. The model
/// call runs under the tighter ask timeout.
pub async fn handle_ask(
    state: &AppState,
    question: &str,
    prediction: Option<PredictionSummary>,
    symptoms: &[String],
) -> Result<String, AskHandleError> {
    let prediction = match prediction {
        Some(p) => Some(p),
        None if !symptoms.is_empty() => {
            info!("No prediction supplied, recomputing from {} symptoms", symptoms.len());
            Some(predictor::make_prediction(&state.http, &state.cfg, symptoms).await?)
        }
        None => None,
    };

    let prompt = prompt::health_prompt(question, prediction.as_ref(), symptoms);
    let answer =
        gemini::generate_text(&state.http, &state.cfg, &prompt, state.cfg.ask_timeout).await?;
    Ok(answer)
}
