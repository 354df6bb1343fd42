use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::{
    AppState,
    handlers::assistant::handle_ask,
    models::{
        common::ErrorMessage,
        health::{AskRequest, AskResponse},
    },
};

#[utoipa::path(
    post,
    path = "/ask-ai",
    tag = "health-assistant",
    request_body = AskRequest,
    responses(
        (status = 200, description = "General health information", body = AskResponse),
        (status = 500, description = "Model or predictor call failed", body = ErrorMessage)
    )
)]
pub async fn ask_ai(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorMessage>)> {
    match handle_ask(&state, &req.question, req.prediction, &req.symptoms).await {
        Ok(answer) => Ok(Json(AskResponse { answer })),
        Err(err) => {
            warn!("ask-ai failed: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorMessage {
                    error: "AI assistant is not available right now.".to_string(),
                }),
            ))
        }
    }
}
