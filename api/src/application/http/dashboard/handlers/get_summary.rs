use axum::extract::State;
use nutriscope_core::domain::view::{ports::DashboardService, value_objects::DatasetSummary};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSummaryResponse {
    pub data: DatasetSummary,
}

#[utoipa::path(
    get,
    path = "/summary",
    tag = "dashboard",
    summary = "Get dataset summary",
    description = "Describes the loaded table: kind, row count, column titles, the sorted group names and the observed metric bounds.",
    responses(
        (status = 200, body = GetSummaryResponse)
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Response<GetSummaryResponse>, ApiError> {
    Ok(Response::OK(GetSummaryResponse {
        data: state.service.dataset_summary(),
    }))
}
