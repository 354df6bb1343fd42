use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Intelli AI Server",
        version = "0.1.0",
        description = "Relay between the IntelliChat app and the Gemini API. Builds prompts, calls the model, and formats replies."
    ),
    servers(
        (url = "http://localhost:5000", description = "Local dev")
    ),
    tags(
        (name = "chat", description = "Chat relay and reply suggestions"),
        (name = "health-assistant", description = "Disease-prediction Q&A")
    ),
    // Handlers (paths)
    paths(
        crate::routes::chat::intelli_ai,
        crate::routes::suggest::smart_reply,
        crate::routes::assistant::ask_ai,
    ),
    // Schemas used in requests/responses
    components(
        schemas(
            crate::models::chat::ChatRequest,
            crate::models::chat::ChatReply,
            crate::models::chat::SmartReplyRequest,
            crate::models::chat::SmartReplyResponse,
            crate::models::health::AskRequest,
            crate::models::health::AskResponse,
            crate::models::health::PredictionSummary,
            crate::models::health::AlternativePrediction,
            crate::models::common::ErrorMessage
        )
    )
)]
pub struct ApiDoc;
