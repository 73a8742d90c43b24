use nutriscope_core::domain::view::value_objects::{
    MAX_MARKER_SIZE, MIN_MARKER_SIZE, MetricRange, ViewEvent, ViewState,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// View state as the page holds it between requests.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ViewStateValidator {
    #[serde(default)]
    pub selected_groups: Option<Vec<String>>,

    #[serde(default)]
    pub metric_range: Option<MetricRange>,

    #[validate(range(
        min = MIN_MARKER_SIZE,
        max = MAX_MARKER_SIZE,
        message = "marker_size must be between 4 and 20"
    ))]
    pub marker_size: u32,

    #[serde(default)]
    pub cube_aspect: bool,
}

impl From<ViewStateValidator> for ViewState {
    fn from(payload: ViewStateValidator) -> Self {
        Self {
            selected_groups: payload.selected_groups,
            metric_range: payload.metric_range,
            marker_size: payload.marker_size,
            cube_aspect: payload.cube_aspect,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DispatchEventValidator {
    #[validate(nested)]
    pub state: ViewStateValidator,

    pub event: ViewEvent,
}
