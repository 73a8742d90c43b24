use axum::extract::State;
use nutriscope_core::domain::view::{ports::DashboardService, value_objects::RenderedView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetViewResponse {
    pub data: RenderedView,
}

#[utoipa::path(
    get,
    path = "/view",
    tag = "dashboard",
    summary = "Get initial view",
    description = "Returns the initial view state (every group selected, full metric range, default point size) with its rendered figure.",
    responses(
        (status = 200, body = GetViewResponse)
    )
)]
pub async fn get_view(
    State(state): State<AppState>,
) -> Result<Response<GetViewResponse>, ApiError> {
    let view = state
        .service
        .render_view(state.service.initial_view())
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetViewResponse { data: view }))
}
