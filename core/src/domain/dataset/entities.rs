use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// What the rows describe. Drives hover formatting and aspect defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Dishes placed in an abstract latent space, grouped by cuisine.
    Dishes,
    /// Ingredients placed by grams of fat/protein/carbohydrates, colored by kcal.
    Macronutrients,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TableSchema {
    pub kind: DatasetKind,
    #[schema(value_type = Vec<String>)]
    pub axis_titles: [String; 3],
    pub label_title: String,
    pub group_title: Option<String>,
    pub metric_title: Option<String>,
}

impl TableSchema {
    pub fn dishes() -> Self {
        Self {
            kind: DatasetKind::Dishes,
            axis_titles: ["X".to_string(), "Y".to_string(), "Z".to_string()],
            label_title: "Dish".to_string(),
            group_title: Some("Cuisine".to_string()),
            metric_title: None,
        }
    }

    pub fn axis_title(&self, axis: Axis) -> &str {
        &self.axis_titles[axis.index()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    #[schema(value_type = Vec<f64>)]
    pub coordinates: [f64; 3],
    pub label: String,
    pub group: Option<String>,
    pub metric: Option<f64>,
}

impl Record {
    pub fn coordinate(&self, axis: Axis) -> f64 {
        self.coordinates[axis.index()]
    }
}

/// Ordered rows sharing one schema. Never mutated once built; filters
/// derive new tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    schema: TableSchema,
    records: Vec<Record>,
}

impl Table {
    pub fn new(schema: TableSchema, records: Vec<Record>) -> Result<Self, CoreError> {
        for (index, record) in records.iter().enumerate() {
            validate_record(&schema, record)
                .map_err(|reason| CoreError::InvalidRecord(format!("row {}: {}", index, reason)))?;
        }

        Ok(Self { schema, records })
    }

    pub fn empty(schema: TableSchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_groups(&self) -> bool {
        self.schema.group_title.is_some()
    }

    pub fn has_metric(&self) -> bool {
        self.schema.metric_title.is_some()
    }

    /// Distinct group values in the order they first appear.
    pub fn groups_in_order(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for group in self.records.iter().filter_map(|r| r.group.as_deref()) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    pub fn axis_bounds(&self, axis: Axis) -> Option<(f64, f64)> {
        bounds(self.records.iter().map(|r| r.coordinate(axis)))
    }

    pub fn metric_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.records.iter().filter_map(|r| r.metric))
    }

    /// Derives a table with the same schema holding the rows that match.
    pub fn filtered<F>(&self, predicate: F) -> Table
    where
        F: Fn(&Record) -> bool,
    {
        Table {
            schema: self.schema.clone(),
            records: self
                .records
                .iter()
                .filter(|r| predicate(r))
                .cloned()
                .collect(),
        }
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}

fn validate_record(schema: &TableSchema, record: &Record) -> Result<(), String> {
    if record.label.trim().is_empty() {
        return Err("label is empty".to_string());
    }

    if let Some(axis) = Axis::ALL
        .iter()
        .find(|axis| !record.coordinate(**axis).is_finite())
    {
        return Err(format!("{} is not finite", schema.axis_title(*axis)));
    }

    match (&schema.group_title, &record.group) {
        (Some(title), None) => return Err(format!("missing {}", title)),
        (None, Some(_)) => return Err("unexpected group value".to_string()),
        (Some(title), Some(group)) if group.trim().is_empty() => {
            return Err(format!("{} is empty", title));
        }
        _ => {}
    }

    match (&schema.metric_title, record.metric) {
        (Some(title), None) => Err(format!("missing {}", title)),
        (None, Some(_)) => Err("unexpected metric value".to_string()),
        (Some(title), Some(metric)) if !metric.is_finite() => {
            Err(format!("{} is not finite", title))
        }
        _ => Ok(()),
    }
}
