use crate::domain::{
    common::entities::app_errors::CoreError,
    view::value_objects::{DatasetSummary, RenderedView, ViewEvent, ViewState},
};

/// Dashboard operations over the table loaded at startup. Rendering is pure:
/// the same view state always yields the same figure.
#[cfg_attr(test, mockall::automock)]
pub trait DashboardService: Send + Sync {
    fn dataset_summary(&self) -> DatasetSummary;

    fn initial_view(&self) -> ViewState;

    fn render_view(&self, view: ViewState) -> Result<RenderedView, CoreError>;

    fn dispatch(&self, view: ViewState, event: ViewEvent) -> Result<RenderedView, CoreError>;
}
