use crate::domain::health::entities::DatasetHealthStatus;

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> DatasetHealthStatus;
}
