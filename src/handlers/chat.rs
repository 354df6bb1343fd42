use thiserror::Error;
use tracing::info;

use crate::{
    AppState, prompt,
    services::gemini::{self, GeminiError},
    utils::preview,
};

#[derive(Debug, Error)]
pub enum ChatHandleError {
    #[error("ai call failed: {0}")]
    Ai(#[from] GeminiError),
}

/// Builds the chat prompt and runs one model call. The caller has already
/// rejected empty messages.
pub async fn handle_chat(
    state: &AppState,
    message: &str,
    history: &str,
) -> Result<String, ChatHandleError> {
    let prompt = prompt::chat_prompt(message, history);
    let reply =
        gemini::generate_text(&state.http, &state.cfg, &prompt, state.cfg.gemini_timeout).await?;

    info!("AI reply: {}...", preview(&reply, 80));
    Ok(reply)
}
