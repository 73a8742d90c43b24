use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dataset::entities::DatasetKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DatasetHealthStatus {
    pub status: String,
    pub dataset_kind: DatasetKind,
    pub dataset_rows: usize,
}
