use super::handlers::create_completion::{__path_create_completion, create_completion};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_completion))]
pub struct CompletionApiDoc;

pub fn completion_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/completions", state.args.server.root_path),
        post(create_completion),
    )
}
