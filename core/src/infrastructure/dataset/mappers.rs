use csv::StringRecord;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dataset::entities::{DatasetKind, Record, TableSchema},
};

/// Column names of a macronutrient file. The defaults match the bundled
/// `Macronutrients.csv`, including its `Carohydrates` spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacronutrientColumns {
    pub label: String,
    pub axes: [String; 3],
    pub metric: String,
}

impl Default for MacronutrientColumns {
    fn default() -> Self {
        Self {
            label: "Ingredient".to_string(),
            axes: [
                "Fat".to_string(),
                "Protein".to_string(),
                "Carohydrates".to_string(),
            ],
            metric: "Kilocalories".to_string(),
        }
    }
}

impl MacronutrientColumns {
    pub fn schema(&self) -> TableSchema {
        TableSchema {
            kind: DatasetKind::Macronutrients,
            axis_titles: self.axes.clone(),
            label_title: self.label.clone(),
            group_title: None,
            metric_title: Some(self.metric.clone()),
        }
    }
}

/// Header positions of the configured columns.
#[derive(Debug, Clone, Copy)]
pub struct ColumnPositions {
    label: usize,
    axes: [usize; 3],
    metric: usize,
}

impl ColumnPositions {
    pub fn resolve(
        headers: &StringRecord,
        columns: &MacronutrientColumns,
    ) -> Result<Self, CoreError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            label: position(&columns.label)?,
            axes: [
                position(&columns.axes[0])?,
                position(&columns.axes[1])?,
                position(&columns.axes[2])?,
            ],
            metric: position(&columns.metric)?,
        })
    }
}

pub fn map_macronutrient_row(
    row: &StringRecord,
    positions: &ColumnPositions,
    columns: &MacronutrientColumns,
    line: usize,
) -> Result<Record, CoreError> {
    let field = |index: usize| row.get(index).map(str::trim).unwrap_or_default();
    let number = |index: usize, name: &str| {
        let raw = field(index);
        raw.parse::<f64>().map_err(|_| {
            CoreError::DatasetError(format!(
                "line {}: column {}: invalid number '{}'",
                line, name, raw
            ))
        })
    };

    Ok(Record {
        coordinates: [
            number(positions.axes[0], &columns.axes[0])?,
            number(positions.axes[1], &columns.axes[1])?,
            number(positions.axes[2], &columns.axes[2])?,
        ],
        label: field(positions.label).to_string(),
        group: None,
        metric: Some(number(positions.metric, &columns.metric)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> StringRecord {
        StringRecord::from(vec![
            "Ingredient",
            "Fat",
            "Protein",
            "Carohydrates",
            "Kilocalories",
        ])
    }

    #[test]
    fn test_maps_row_by_header_name() {
        let columns = MacronutrientColumns::default();
        let positions = ColumnPositions::resolve(&headers(), &columns).unwrap();
        let row = StringRecord::from(vec!["Almonds", " 49.9", "21.2", "21.6 ", "579"]);

        let record = map_macronutrient_row(&row, &positions, &columns, 2).unwrap();
        assert_eq!(record.label, "Almonds");
        assert_eq!(record.coordinates, [49.9, 21.2, 21.6]);
        assert_eq!(record.metric, Some(579.0));
        assert_eq!(record.group, None);
    }

    #[test]
    fn test_missing_header_is_reported() {
        let headers = StringRecord::from(vec!["Ingredient", "Fat", "Protein", "Carbohydrates"]);
        let result = ColumnPositions::resolve(&headers, &MacronutrientColumns::default());
        assert!(matches!(result, Err(CoreError::MissingColumn(name)) if name == "Carohydrates"));
    }

    #[test]
    fn test_invalid_number_names_line_and_column() {
        let columns = MacronutrientColumns::default();
        let positions = ColumnPositions::resolve(&headers(), &columns).unwrap();
        let row = StringRecord::from(vec!["Butter", "81", "n/a", "0.1", "717"]);

        let error = map_macronutrient_row(&row, &positions, &columns, 7).unwrap_err();
        assert_eq!(
            error,
            CoreError::DatasetError("line 7: column Protein: invalid number 'n/a'".to_string())
        );
    }
}
