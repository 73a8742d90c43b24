use axum::extract::State;
use nutriscope_core::domain::view::{ports::DashboardService, value_objects::RenderedView};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::application::http::{
    dashboard::validators::DispatchEventValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DispatchEventResponse {
    pub data: RenderedView,
}

#[utoipa::path(
    post,
    path = "/events",
    tag = "dashboard",
    summary = "Apply a control event",
    description = "Applies one control change to the current view state and re-renders. The response carries the next state, which the page sends back with the following event.",
    responses(
        (status = 200, body = DispatchEventResponse),
        (status = 400, description = "Filter does not apply to this dataset or range is invalid"),
        (status = 422, description = "Malformed state or event")
    ),
    request_body = DispatchEventValidator
)]
pub async fn dispatch_event(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<DispatchEventValidator>,
) -> Result<Response<DispatchEventResponse>, ApiError> {
    debug!(event = ?payload.event, "dashboard event");

    let view = state
        .service
        .dispatch(payload.state.into(), payload.event)
        .map_err(ApiError::from)?;

    Ok(Response::OK(DispatchEventResponse { data: view }))
}
