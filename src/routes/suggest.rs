use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::{
    AppState,
    handlers::suggest::handle_smart_reply,
    models::chat::{SmartReplyRequest, SmartReplyResponse},
};

#[utoipa::path(
    post,
    path = "/smart-reply",
    tag = "chat",
    request_body = SmartReplyRequest,
    responses(
        (status = 200, description = "Reply suggestions; empty when lastMessage is empty", body = SmartReplyResponse),
        (status = 500, description = "Model call failed", body = SmartReplyResponse)
    )
)]
pub async fn smart_reply(
    State(state): State<AppState>,
    Json(req): Json<SmartReplyRequest>,
) -> (StatusCode, Json<SmartReplyResponse>) {
    let last_message = req.last_message.trim();
    if last_message.is_empty() {
        return (
            StatusCode::OK,
            Json(SmartReplyResponse {
                suggestions: Vec::new(),
            }),
        );
    }

    match handle_smart_reply(&state, &req.history, last_message).await {
        Ok(suggestions) => (StatusCode::OK, Json(SmartReplyResponse { suggestions })),
        Err(err) => {
            warn!("smart-reply failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SmartReplyResponse {
                    suggestions: Vec::new(),
                }),
            )
        }
    }
}
