use crate::domain::completion::entities::ChatMessage;

#[derive(Debug, Clone)]
pub struct CompleteInput {
    pub messages: Vec<ChatMessage>,
    pub want_json: bool,
}
