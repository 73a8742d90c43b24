use crate::application::http::{
    completion::router::CompletionApiDoc, dashboard::router::DashboardApiDoc,
    health::HealthApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutriscope API"
    ),
    nest(
        (path = "/dashboard", api = DashboardApiDoc),
        (path = "/completions", api = CompletionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
