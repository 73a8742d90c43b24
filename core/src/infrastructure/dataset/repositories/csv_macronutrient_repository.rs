use std::{io, path::PathBuf};

use tracing::{error, info};

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dataset::{entities::Table, ports::DatasetRepository},
    },
    infrastructure::dataset::mappers::{
        ColumnPositions, MacronutrientColumns, map_macronutrient_row,
    },
};

#[derive(Debug, Clone)]
pub struct CsvMacronutrientRepository {
    path: PathBuf,
    columns: MacronutrientColumns,
}

impl CsvMacronutrientRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_columns(path, MacronutrientColumns::default())
    }

    pub fn with_columns(path: impl Into<PathBuf>, columns: MacronutrientColumns) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

/// Reads a macronutrient table from any CSV source with a header row.
pub fn read_macronutrients<R: io::Read>(
    reader: R,
    columns: &MacronutrientColumns,
) -> Result<Table, CoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| CoreError::DatasetError(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let positions = ColumnPositions::resolve(&headers, columns)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = row.map_err(|e| {
            CoreError::DatasetError(format!("Failed to read line {}: {}", line, e))
        })?;
        records.push(map_macronutrient_row(&row, &positions, columns, line)?);
    }

    Table::new(columns.schema(), records)
}

impl DatasetRepository for CsvMacronutrientRepository {
    fn load_table(&self) -> Result<Table, CoreError> {
        let file = std::fs::File::open(&self.path).map_err(|e| {
            error!("Failed to open dataset {}: {}", self.path.display(), e);
            CoreError::DatasetError(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let table = read_macronutrients(file, &self.columns)?;
        info!(
            path = %self.path.display(),
            rows = table.len(),
            "loaded macronutrient table"
        );
        Ok(table)
    }
}
