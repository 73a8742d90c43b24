use axum::{extract::State, response::Html};
use nutriscope_core::domain::{dataset::entities::DatasetKind, view::ports::DashboardService};

use crate::application::http::server::app_state::AppState;

const PAGE_TEMPLATE: &str = include_str!("../../../../../assets/dashboard.html");

const DISHES_DESCRIPTION: &str = "<p>This visualization shows different dishes positioned in a 3D latent space.</p>\
<ul><li>Hover over points to see dish names</li>\
<li>Click and drag to rotate the view</li>\
<li>Scroll to zoom in/out</li>\
<li>Double click to reset the view</li></ul>";

const MACRONUTRIENTS_DESCRIPTION: &str = "<p>Each ingredient is placed by its fat, protein and carbohydrate content per serving, coloured by kilocalories.</p>\
<ul><li>Hover over points to see the exact amounts</li>\
<li>Use the calorie range to narrow the cloud</li>\
<li>Click and drag to rotate the view</li></ul>";

fn page_copy(kind: DatasetKind) -> (&'static str, &'static str) {
    match kind {
        DatasetKind::Dishes => ("3D Latent Space Visualization", DISHES_DESCRIPTION),
        DatasetKind::Macronutrients => ("Macronutrient Space", MACRONUTRIENTS_DESCRIPTION),
    }
}

pub(crate) fn render_page(root_path: &str, kind: DatasetKind) -> String {
    let (title, description) = page_copy(kind);

    PAGE_TEMPLATE
        .replace("__ROOT_PATH__", root_path)
        .replace("__TITLE__", title)
        .replace("__DESCRIPTION__", description)
}

/// Serves the dashboard page. Plot state lives in the browser; every control
/// change goes through the dashboard event endpoint.
pub async fn get_dashboard_page(State(state): State<AppState>) -> Html<String> {
    let kind = state.service.dataset_summary().kind;

    Html(render_page(&state.args.server.root_path, kind))
}
