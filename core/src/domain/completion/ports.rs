use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    completion::{
        entities::{ChatMessage, CompletionOutput, ResponseFormat},
        value_objects::CompleteInput,
    },
};

/// Hosted chat-completion provider. Returns the raw text content of the
/// first generated message.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn create_chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        response_format: ResponseFormat,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait CompletionService: Send + Sync {
    fn complete(
        &self,
        input: CompleteInput,
    ) -> impl Future<Output = Result<CompletionOutput, CoreError>> + Send;
}
