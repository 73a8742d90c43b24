use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    completion::ports::LLMClient,
    dataset::entities::Table,
    figure::{
        entities::Figure,
        services::{FigureOptions, build},
    },
    transform::{assign_colors, normalize_axes},
    view::{
        ports::DashboardService,
        value_objects::{DatasetSummary, MetricRange, RenderedView, ViewEvent, ViewState},
    },
};

/// Rows whose group is one of `selected_groups`. An empty selection yields
/// an empty table.
pub fn apply_category_filter(
    table: &Table,
    selected_groups: &[String],
) -> Result<Table, CoreError> {
    if !table.has_groups() {
        return Err(CoreError::MissingColumn("group".to_string()));
    }

    Ok(table.filtered(|record| {
        record
            .group
            .as_ref()
            .is_some_and(|group| selected_groups.contains(group))
    }))
}

/// Rows with `low <= metric <= high`.
pub fn apply_range_filter(table: &Table, range: MetricRange) -> Result<Table, CoreError> {
    if !table.has_metric() {
        return Err(CoreError::MissingColumn("metric".to_string()));
    }
    if !range.low.is_finite() || !range.high.is_finite() || range.low > range.high {
        return Err(CoreError::InvalidRange {
            low: range.low,
            high: range.high,
        });
    }

    Ok(table.filtered(|record| record.metric.is_some_and(|value| range.contains(value))))
}

/// Applies every active filter of `view` to the source table.
pub fn on_change(table: &Table, view: &ViewState) -> Result<Table, CoreError> {
    let filtered = match &view.selected_groups {
        Some(groups) => apply_category_filter(table, groups)?,
        None => table.clone(),
    };

    match view.metric_range {
        Some(range) => apply_range_filter(&filtered, range),
        None => Ok(filtered),
    }
}

pub fn render(table: &Table, view: &ViewState) -> Result<Figure, CoreError> {
    let filtered = on_change(table, view)?;
    let scale_factors = normalize_axes(&filtered);
    let colors = assign_colors(&filtered)?;

    Ok(build(
        &filtered,
        &scale_factors,
        &colors,
        FigureOptions {
            marker_size: view.marker_size,
            cube_aspect: view.cube_aspect,
        },
    ))
}

impl<LLM> DashboardService for Service<LLM>
where
    LLM: LLMClient,
{
    fn dataset_summary(&self) -> DatasetSummary {
        DatasetSummary::from_table(&self.table)
    }

    fn initial_view(&self) -> ViewState {
        ViewState::initial(&self.table)
    }

    fn render_view(&self, view: ViewState) -> Result<RenderedView, CoreError> {
        let figure = render(&self.table, &view)?;
        let point_count = figure.point_count();

        tracing::debug!(point_count, "rendered view");

        Ok(RenderedView {
            state: view,
            figure,
            point_count,
        })
    }

    fn dispatch(&self, view: ViewState, event: ViewEvent) -> Result<RenderedView, CoreError> {
        tracing::debug!(?event, "dispatching view event");
        self.render_view(view.apply(event, &self.table))
    }
}
