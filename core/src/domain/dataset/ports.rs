use crate::domain::{common::entities::app_errors::CoreError, dataset::entities::Table};

/// Source of the table shown by the dashboard. Loaded once at startup.
#[cfg_attr(test, mockall::automock)]
pub trait DatasetRepository: Send + Sync {
    fn load_table(&self) -> Result<Table, CoreError>;
}
