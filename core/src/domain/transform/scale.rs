use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dataset::entities::{Axis, Record, Table};

/// Display multipliers that stretch each axis to the widest axis' spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AxisScaleFactors {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for AxisScaleFactors {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

impl AxisScaleFactors {
    pub fn factor(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn apply(&self, record: &Record) -> [f64; 3] {
        Axis::ALL.map(|axis| record.coordinate(axis) * self.factor(axis))
    }
}

/// `max_range / range` per axis; an axis with zero spread keeps factor 1.
///
/// Spreads are taken as half-ranges so bounds near `f64::MAX` cannot
/// overflow. Any factor that is still not finite falls back to 1.
pub fn normalize_axes(table: &Table) -> AxisScaleFactors {
    let half_ranges = Axis::ALL.map(|axis| {
        table
            .axis_bounds(axis)
            .map(|(min, max)| max / 2.0 - min / 2.0)
            .unwrap_or(0.0)
    });
    let max_range = half_ranges.iter().copied().fold(0.0_f64, f64::max);

    let [x, y, z] = half_ranges.map(|range| {
        let factor = max_range / range;
        if range == 0.0 || !factor.is_finite() {
            1.0
        } else {
            factor
        }
    });

    tracing::debug!(x, y, z, max_range, "computed axis scale factors");

    AxisScaleFactors { x, y, z }
}
