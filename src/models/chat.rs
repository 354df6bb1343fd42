use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of POST /intelli-ai. `history` is an opaque serialized transcript the
/// app sends wholesale; nothing in it is parsed here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatReply {
    pub reply: String,
}

/// Body of POST /smart-reply.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SmartReplyRequest {
    #[serde(default)]
    pub history: String,
    #[serde(default, rename = "lastMessage")]
    pub last_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SmartReplyResponse {
    pub suggestions: Vec<String>,
}
