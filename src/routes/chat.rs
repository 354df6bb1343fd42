use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};

use crate::{
    AppState,
    handlers::chat::handle_chat,
    models::chat::{ChatReply, ChatRequest},
    utils::preview,
};

#[utoipa::path(
    post,
    path = "/intelli-ai",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Model reply, or a placeholder when the message is empty", body = ChatReply),
        (status = 500, description = "Model call failed", body = ChatReply)
    )
)]
pub async fn intelli_ai(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ChatReply>) {
    let message = req.message.trim();
    if message.is_empty() {
        // Soft success, the model is never invoked for an empty message
        return (
            StatusCode::OK,
            Json(ChatReply {
                reply: "No message received from app.".to_string(),
            }),
        );
    }

    info!("Incoming from app: {}", preview(message, 80));

    match handle_chat(&state, message, &req.history).await {
        Ok(reply) => (StatusCode::OK, Json(ChatReply { reply })),
        Err(err) => {
            warn!("intelli-ai failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatReply {
                    reply: format!("AI error: {err}"),
                }),
            )
        }
    }
}
