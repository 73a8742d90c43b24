use nutriscope_core::domain::completion::entities::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompletionValidator {
    #[validate(length(min = 1, message = "at least one message is required"))]
    pub messages: Vec<ChatMessage>,

    /// Parse the reply as a JSON object instead of returning raw text.
    #[serde(default)]
    pub want_json: bool,
}
