use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, dataset::entities::Table};

pub const CONTINUOUS_COLORSCALE: &str = "Viridis";
pub const UNIFORM_COLOR: &str = "hsl(210, 70%, 50%)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupColor {
    pub group: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorAssignment {
    /// One hue per group, in the order the groups first appear.
    Discrete { groups: Vec<GroupColor> },
    /// Linear mapping of a metric onto a named colorscale.
    Continuous {
        colorscale: String,
        title: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    Uniform { color: String },
}

pub fn hsl_color(index: usize, count: usize) -> String {
    let hue = 360.0 * index as f64 / count as f64;
    format!("hsl({}, 70%, 50%)", hue)
}

pub fn assign_discrete_colors(table: &Table) -> Result<ColorAssignment, CoreError> {
    if !table.has_groups() {
        return Err(CoreError::MissingColumn("group".to_string()));
    }

    let groups = table.groups_in_order();
    let count = groups.len();
    let groups = groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| GroupColor {
            group: group.to_string(),
            color: hsl_color(index, count),
        })
        .collect();

    Ok(ColorAssignment::Discrete { groups })
}

pub fn assign_continuous_colors(table: &Table) -> Result<ColorAssignment, CoreError> {
    let title = table
        .schema()
        .metric_title
        .clone()
        .ok_or_else(|| CoreError::MissingColumn("metric".to_string()))?;
    let bounds = table.metric_bounds();

    Ok(ColorAssignment::Continuous {
        colorscale: CONTINUOUS_COLORSCALE.to_string(),
        title,
        min: bounds.map(|(min, _)| min),
        max: bounds.map(|(_, max)| max),
    })
}

/// Discrete colors when the table is grouped, otherwise a metric colorscale,
/// otherwise a single color.
pub fn assign_colors(table: &Table) -> Result<ColorAssignment, CoreError> {
    if table.has_groups() {
        assign_discrete_colors(table)
    } else if table.has_metric() {
        assign_continuous_colors(table)
    } else {
        Ok(ColorAssignment::Uniform {
            color: UNIFORM_COLOR.to_string(),
        })
    }
}
