use axum::extract::State;
use nutriscope_core::domain::view::{ports::DashboardService, value_objects::RenderedView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    dashboard::validators::ViewStateValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RenderViewResponse {
    pub data: RenderedView,
}

#[utoipa::path(
    post,
    path = "/render",
    tag = "dashboard",
    summary = "Render a view state",
    description = "Filters the table by the given view state and returns the figure together with the number of plotted points.",
    responses(
        (status = 200, body = RenderViewResponse),
        (status = 400, description = "Filter does not apply to this dataset or range is invalid"),
        (status = 422, description = "Malformed view state")
    ),
    request_body = ViewStateValidator
)]
pub async fn render_view(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ViewStateValidator>,
) -> Result<Response<RenderViewResponse>, ApiError> {
    let view = state
        .service
        .render_view(payload.into())
        .map_err(ApiError::from)?;

    Ok(Response::OK(RenderViewResponse { data: view }))
}
