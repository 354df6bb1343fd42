use thiserror::Error;

use crate::{
    AppState, prompt,
    services::gemini::{self, GeminiError},
    suggestions::extract_suggestions,
};

#[derive(Debug, Error)]
pub enum SuggestHandleError {
    #[error("ai call failed: {0}")]
    Ai(#[from] GeminiError),
}

/// Asks the model for three short replies and extracts them from whatever it
/// actually returned. Malformed output is absorbed by the extractor; only the
/// model call itself can fail here.
pub async fn handle_smart_reply(
    state: &AppState,
    history: &str,
    last_message: &str,
) -> Result<Vec<String>, SuggestHandleError> {
    let prompt = prompt::smart_reply_prompt(history, last_message);
    let raw =
        gemini::generate_text(&state.http, &state.cfg, &prompt, state.cfg.gemini_timeout).await?;
    Ok(extract_suggestions(&raw))
}
