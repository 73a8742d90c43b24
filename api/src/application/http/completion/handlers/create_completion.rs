use axum::extract::State;
use nutriscope_core::domain::completion::{
    entities::CompletionOutput, ports::CompletionService, value_objects::CompleteInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    completion::validators::CreateCompletionValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCompletionResponse {
    /// `{"kind": "text", "content": "..."}` or `{"kind": "json", "content": {...}}`.
    #[schema(value_type = Object)]
    pub data: CompletionOutput,
}

#[utoipa::path(
    post,
    path = "",
    tag = "completion",
    summary = "Create chat completion",
    description = "Sends the conversation to the configured chat completion provider. With want_json the reply is parsed as a JSON object.",
    responses(
        (status = 200, body = CreateCompletionResponse),
        (status = 422, description = "Empty conversation or malformed body"),
        (status = 502, description = "Provider failed or returned malformed JSON"),
        (status = 503, description = "No provider credential configured")
    ),
    request_body = CreateCompletionValidator
)]
pub async fn create_completion(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateCompletionValidator>,
) -> Result<Response<CreateCompletionResponse>, ApiError> {
    let output = state
        .service
        .complete(CompleteInput {
            messages: payload.messages,
            want_json: payload.want_json,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CreateCompletionResponse { data: output }))
}

#[cfg(test)]
mod tests {
    use std::{
        net::SocketAddr,
        sync::{Arc, Mutex},
    };

    use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    use crate::application::http::test::server_with;

    #[derive(Clone)]
    struct StubProvider {
        status: StatusCode,
        body: Value,
        requests: Arc<Mutex<Vec<Value>>>,
    }

    async fn chat_completions(
        State(stub): State<StubProvider>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        stub.requests.lock().unwrap().push(body);
        (stub.status, Json(stub.body))
    }

    /// Serves one canned chat completion reply on an ephemeral local port.
    async fn spawn_reply(
        status: StatusCode,
        body: Value,
    ) -> (SocketAddr, Arc<Mutex<Vec<Value>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let stub = StubProvider {
            status,
            body,
            requests: requests.clone(),
        };
        let app = Router::new()
            .route("/chat/completions", post(chat_completions))
            .with_state(stub);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        (addr, requests)
    }

    async fn spawn_provider(content: &str) -> (SocketAddr, Arc<Mutex<Vec<Value>>>) {
        spawn_reply(
            StatusCode::OK,
            json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }]
            }),
        )
        .await
    }

    async fn post_hello(server: &axum_test::TestServer) -> axum_test::TestResponse {
        server
            .post("/completions")
            .json(&json!({
                "messages": [{ "role": "user", "content": "Hello" }]
            }))
            .expect_failure()
            .await
    }

    fn completion_server(addr: SocketAddr) -> axum_test::TestServer {
        let base_url = format!("http://{addr}");
        server_with(&[
            "--dataset-source",
            "sample",
            "--openai-api-key",
            "test-key",
            "--openai-base-url",
            &base_url,
        ])
    }

    #[tokio::test]
    async fn test_text_completion_is_returned_verbatim() {
        let (addr, requests) = spawn_provider("Try a lentil curry.").await;
        let server = completion_server(addr);

        let response = server
            .post("/completions")
            .json(&json!({
                "messages": [{ "role": "user", "content": "Dinner idea?" }]
            }))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["data"]["kind"], "text");
        assert_eq!(body["data"]["content"], "Try a lentil curry.");

        let sent = requests.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0]["messages"][0]["content"], "Dinner idea?");
        assert!(sent[0].get("response_format").is_none());
    }

    #[tokio::test]
    async fn test_json_completion_is_parsed() {
        let (addr, requests) = spawn_provider(r#"{"dish": "ramen", "kcal": 450}"#).await;
        let server = completion_server(addr);

        let response = server
            .post("/completions")
            .json(&json!({
                "messages": [
                    { "role": "system", "content": "Answer in JSON." },
                    { "role": "user", "content": "One dish please" }
                ],
                "want_json": true
            }))
            .await;
        response.assert_status_ok();

        let body = response.json::<Value>();
        assert_eq!(body["data"]["kind"], "json");
        assert_eq!(body["data"]["content"], json!({"dish": "ramen", "kcal": 450}));
        assert_eq!(
            requests.lock().unwrap()[0]["response_format"]["type"],
            "json_object"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_gateway_with_raw_text() {
        let (addr, _) = spawn_provider(r#"{"dish": "ramen""#).await;
        let server = completion_server(addr);

        let response = server
            .post("/completions")
            .json(&json!({
                "messages": [{ "role": "user", "content": "One dish please" }],
                "want_json": true
            }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let message = response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(message.contains(r#"{"dish": "ramen""#));
    }

    #[tokio::test]
    async fn test_provider_error_status_is_bad_gateway() {
        let (addr, requests) = spawn_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": { "message": "overloaded" } }),
        )
        .await;
        let server = completion_server(addr);

        let response = post_hello(&server).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let message = response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(message.contains("500"));
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reply_without_choices_is_bad_gateway() {
        let (addr, _) = spawn_reply(StatusCode::OK, json!({ "choices": [] })).await;
        let server = completion_server(addr);

        let response = post_hello(&server).await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        assert!(
            response.json::<Value>()["message"]
                .as_str()
                .unwrap()
                .contains("No response from LLM")
        );
    }

    #[tokio::test]
    async fn test_reply_with_null_content_is_bad_gateway() {
        let (addr, _) = spawn_reply(
            StatusCode::OK,
            json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }),
        )
        .await;
        let server = completion_server(addr);

        post_hello(&server)
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_bad_gateway() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap()
        };
        let server = completion_server(addr);

        post_hello(&server)
            .await
            .assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_empty_conversation_is_rejected() {
        let server = server_with(&["--dataset-source", "sample"]);

        let response = server
            .post("/completions")
            .json(&json!({ "messages": [] }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_credential_is_service_unavailable() {
        let server = server_with(&["--dataset-source", "sample", "--openai-api-key", " "]);

        post_hello(&server)
            .await
            .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
