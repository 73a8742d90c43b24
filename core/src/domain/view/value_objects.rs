use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    dataset::entities::{DatasetKind, Table},
    figure::{entities::Figure, services::DEFAULT_MARKER_SIZE},
};

pub const MIN_MARKER_SIZE: u32 = 4;
pub const MAX_MARKER_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MetricRange {
    pub low: f64,
    pub high: f64,
}

impl MetricRange {
    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Current widget selection. `None` filters are inactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ViewState {
    pub selected_groups: Option<Vec<String>>,
    pub metric_range: Option<MetricRange>,
    pub marker_size: u32,
    pub cube_aspect: bool,
}

impl ViewState {
    /// Every group selected, the full observed metric range, default size.
    pub fn initial(table: &Table) -> Self {
        let selected_groups = table.has_groups().then(|| sorted_groups(table));
        let metric_range = table
            .metric_bounds()
            .map(|(low, high)| MetricRange { low, high });

        Self {
            selected_groups,
            metric_range,
            marker_size: DEFAULT_MARKER_SIZE,
            cube_aspect: table.schema().kind == DatasetKind::Macronutrients,
        }
    }

    pub fn apply(self, event: ViewEvent, table: &Table) -> Self {
        match event {
            ViewEvent::SelectGroups { groups } => Self {
                selected_groups: Some(groups),
                ..self
            },
            ViewEvent::SetMetricRange { low, high } => Self {
                metric_range: Some(MetricRange { low, high }),
                ..self
            },
            ViewEvent::SetMarkerSize { size } => Self {
                marker_size: size.clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE),
                ..self
            },
            ViewEvent::SetCubeAspect { enabled } => Self {
                cube_aspect: enabled,
                ..self
            },
            ViewEvent::Reset => Self::initial(table),
        }
    }
}

/// One user interaction on the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    SelectGroups { groups: Vec<String> },
    SetMetricRange { low: f64, high: f64 },
    SetMarkerSize { size: u32 },
    SetCubeAspect { enabled: bool },
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RenderedView {
    pub state: ViewState,
    pub figure: Figure,
    pub point_count: usize,
}

/// What the controls need to know about the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatasetSummary {
    pub kind: DatasetKind,
    pub row_count: usize,
    pub label_title: String,
    pub axis_titles: Vec<String>,
    pub group_title: Option<String>,
    /// Sorted, as offered by the multiselect.
    pub groups: Vec<String>,
    pub metric_title: Option<String>,
    pub metric_bounds: Option<MetricRange>,
}

impl DatasetSummary {
    pub fn from_table(table: &Table) -> Self {
        let schema = table.schema();
        Self {
            kind: schema.kind,
            row_count: table.len(),
            label_title: schema.label_title.clone(),
            axis_titles: schema.axis_titles.to_vec(),
            group_title: schema.group_title.clone(),
            groups: sorted_groups(table),
            metric_title: schema.metric_title.clone(),
            metric_bounds: table
                .metric_bounds()
                .map(|(low, high)| MetricRange { low, high }),
        }
    }
}

fn sorted_groups(table: &Table) -> Vec<String> {
    let mut groups: Vec<String> = table
        .groups_in_order()
        .into_iter()
        .map(str::to_string)
        .collect();
    groups.sort();
    groups
}
