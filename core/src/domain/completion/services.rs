use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::{
        entities::{CompletionOutput, ResponseFormat},
        ports::{CompletionService, LLMClient},
        value_objects::CompleteInput,
    },
};

impl<LLM> CompletionService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn complete(&self, input: CompleteInput) -> Result<CompletionOutput, CoreError> {
        if input.messages.is_empty() {
            return Err(CoreError::Invalid);
        }

        let response_format = if input.want_json {
            ResponseFormat::JsonObject
        } else {
            ResponseFormat::Text
        };

        let raw_response = self
            .llm_client
            .create_chat_completion(input.messages, response_format)
            .await?;

        tracing::info!(response = %raw_response, "completion response received");

        if !input.want_json {
            return Ok(CompletionOutput::Text(raw_response));
        }

        // No retry and no repair: a malformed body fails the call.
        match serde_json::from_str(&raw_response) {
            Ok(value) => Ok(CompletionOutput::Json(value)),
            Err(e) => {
                tracing::error!(
                    response = %raw_response,
                    "Failed to parse JSON completion: {}",
                    e
                );
                Err(CoreError::MalformedCompletion {
                    raw: raw_response,
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::{
        completion::entities::ChatMessage,
        dataset::entities::{Table, TableSchema},
    };

    #[derive(Clone)]
    struct StubLLMClient {
        response: Result<String, CoreError>,
        calls: Arc<Mutex<Vec<(Vec<ChatMessage>, ResponseFormat)>>>,
    }

    impl StubLLMClient {
        fn replying(response: &str) -> Self {
            Self {
                response: Ok(response.to_string()),
                calls: Arc::default(),
            }
        }

        fn failing(error: CoreError) -> Self {
            Self {
                response: Err(error),
                calls: Arc::default(),
            }
        }
    }

    impl LLMClient for StubLLMClient {
        async fn create_chat_completion(
            &self,
            messages: Vec<ChatMessage>,
            response_format: ResponseFormat,
        ) -> Result<String, CoreError> {
            self.calls
                .lock()
                .unwrap()
                .push((messages, response_format));
            self.response.clone()
        }
    }

    fn service(client: StubLLMClient) -> Service<StubLLMClient> {
        Service::new(Table::empty(TableSchema::dishes()), client)
    }

    fn input(want_json: bool) -> CompleteInput {
        CompleteInput {
            messages: vec![
                ChatMessage::system("You answer in JSON."),
                ChatMessage::user("List two dishes."),
            ],
            want_json,
        }
    }

    #[tokio::test]
    async fn test_text_completion_is_returned_unmodified() {
        let raw = "  Pizza and Ramen.\n\n{not json}  ";
        let client = StubLLMClient::replying(raw);
        let output = service(client.clone()).complete(input(false)).await.unwrap();

        assert_eq!(output, CompletionOutput::Text(raw.to_string()));
        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, ResponseFormat::Text);
        assert_eq!(calls[0].0.len(), 2);
    }

    #[tokio::test]
    async fn test_json_completion_is_decoded() {
        let client = StubLLMClient::replying(r#"{"dishes": ["Pizza", "Ramen"]}"#);
        let output = service(client.clone()).complete(input(true)).await.unwrap();

        assert_eq!(
            output,
            CompletionOutput::Json(json!({"dishes": ["Pizza", "Ramen"]}))
        );
        assert_eq!(client.calls.lock().unwrap()[0].1, ResponseFormat::JsonObject);
    }

    #[tokio::test]
    async fn test_malformed_json_surfaces_raw_text() {
        let raw = r#"{"dishes": ["Pizza", "#;
        let error = service(StubLLMClient::replying(raw))
            .complete(input(true))
            .await
            .unwrap_err();

        match &error {
            CoreError::MalformedCompletion { raw: surfaced, .. } => assert_eq!(surfaced, raw),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(error.to_string().contains(raw));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let client = StubLLMClient::failing(CoreError::ExternalServiceError("boom".to_string()));
        let error = service(client.clone())
            .complete(input(true))
            .await
            .unwrap_err();

        assert_eq!(error, CoreError::ExternalServiceError("boom".to_string()));
        assert_eq!(client.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_conversation_is_rejected_before_calling_provider() {
        let client = StubLLMClient::replying("unused");
        let error = service(client.clone())
            .complete(CompleteInput {
                messages: vec![],
                want_json: false,
            })
            .await
            .unwrap_err();

        assert_eq!(error, CoreError::Invalid);
        assert!(client.calls.lock().unwrap().is_empty());
    }
}
