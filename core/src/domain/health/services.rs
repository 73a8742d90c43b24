use crate::domain::{
    common::services::Service,
    completion::ports::LLMClient,
    health::{entities::DatasetHealthStatus, ports::HealthCheckService},
};

impl<LLM> HealthCheckService for Service<LLM>
where
    LLM: LLMClient,
{
    fn readiness(&self) -> DatasetHealthStatus {
        DatasetHealthStatus {
            status: "ok".to_string(),
            dataset_kind: self.table.schema().kind,
            dataset_rows: self.table.len(),
        }
    }
}
