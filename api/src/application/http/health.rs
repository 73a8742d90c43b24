use axum::{Router, extract::State, routing::get};
use nutriscope_core::domain::health::{entities::DatasetHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    )
)]
pub async fn health_live() -> Result<Response<LivenessResponse>, ApiError> {
    Ok(Response::OK(LivenessResponse {
        status: "ok".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports the dataset held in memory. The table is loaded before the listener binds, so a served request is always ready.",
    responses(
        (status = 200, body = DatasetHealthStatus)
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatasetHealthStatus>, ApiError> {
    Ok(Response::OK(state.service.readiness()))
}

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health/live", state.args.server.root_path),
            get(health_live),
        )
        .route(
            &format!("{}/health/ready", state.args.server.root_path),
            get(health_ready),
        )
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::application::http::test::sample_server;

    #[tokio::test]
    async fn test_live_and_ready() {
        let server = sample_server();

        server.get("/health/live").await.assert_status_ok();

        let ready = server.get("/health/ready").await.json::<Value>();
        assert_eq!(ready["status"], "ok");
        assert_eq!(ready["dataset_kind"], "dishes");
        assert_eq!(ready["dataset_rows"], 50);
    }
}
