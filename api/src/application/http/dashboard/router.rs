use super::handlers::{
    dispatch_event::{__path_dispatch_event, dispatch_event},
    get_dashboard_page::get_dashboard_page,
    get_summary::{__path_get_summary, get_summary},
    get_view::{__path_get_view, get_view},
    render_view::{__path_render_view, render_view},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_summary, get_view, render_view, dispatch_event))]
pub struct DashboardApiDoc;

pub fn dashboard_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    let mut router = Router::new();

    // Bare prefix, e.g. `/nutriscope` next to `/nutriscope/`.
    if !root_path.is_empty() {
        router = router.route(root_path, get(get_dashboard_page));
    }

    router
        .route(
            &format!("{}/", state.args.server.root_path),
            get(get_dashboard_page),
        )
        .route(
            &format!("{}/dashboard/summary", state.args.server.root_path),
            get(get_summary),
        )
        .route(
            &format!("{}/dashboard/view", state.args.server.root_path),
            get(get_view),
        )
        .route(
            &format!("{}/dashboard/render", state.args.server.root_path),
            post(render_view),
        )
        .route(
            &format!("{}/dashboard/events", state.args.server.root_path),
            post(dispatch_event),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use nutriscope_core::domain::{
        dataset::entities::DatasetKind,
        view::value_objects::{DatasetSummary, RenderedView},
    };
    use serde_json::{Value, json};

    use crate::application::http::test::{sample_server, server_with};

    #[tokio::test]
    async fn test_page_is_served_with_and_without_trailing_slash_under_root_path() {
        let server = server_with(&["--dataset-source", "sample", "--root-path", "/nutriscope"]);

        for path in ["/nutriscope", "/nutriscope/"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert!(response.text().contains("const ROOT = \"/nutriscope\";"));
        }

        server
            .get("/nutriscope/dashboard/summary")
            .await
            .assert_status_ok();
    }

    fn view_of(body: Value) -> RenderedView {
        serde_json::from_value(body["data"].clone()).unwrap()
    }

    #[tokio::test]
    async fn test_summary_describes_sample_dishes() {
        let server = sample_server();

        let response = server.get("/dashboard/summary").await;
        response.assert_status_ok();

        let summary: DatasetSummary =
            serde_json::from_value(response.json::<Value>()["data"].clone()).unwrap();
        assert_eq!(summary.kind, DatasetKind::Dishes);
        assert_eq!(summary.row_count, 50);
        assert_eq!(summary.groups.len(), 5);
        assert!(summary.metric_bounds.is_none());
    }

    #[tokio::test]
    async fn test_initial_view_plots_every_row() {
        let server = sample_server();

        let view = view_of(server.get("/dashboard/view").await.json());

        assert_eq!(view.point_count, 50);
        assert_eq!(view.figure.data.len(), 5);
        assert_eq!(view.state.marker_size, 8);
        assert!(!view.state.cube_aspect);
    }

    #[tokio::test]
    async fn test_select_groups_event_restricts_points() {
        let server = sample_server();
        let initial = view_of(server.get("/dashboard/view").await.json());
        let first = initial.state.selected_groups.clone().unwrap()[0].clone();

        let response = server
            .post("/dashboard/events")
            .json(&json!({
                "state": initial.state,
                "event": { "type": "select_groups", "groups": [first] }
            }))
            .await;
        response.assert_status_ok();

        let view = view_of(response.json());
        assert_eq!(view.point_count, 10);
        assert_eq!(view.figure.data.len(), 1);
        assert_eq!(view.figure.data[0].name.as_deref(), Some(first.as_str()));
    }

    #[tokio::test]
    async fn test_empty_selection_renders_empty_figure() {
        let server = sample_server();

        let response = server
            .post("/dashboard/render")
            .json(&json!({
                "selected_groups": [],
                "marker_size": 12,
                "cube_aspect": false
            }))
            .await;
        response.assert_status_ok();

        let view = view_of(response.json());
        assert_eq!(view.point_count, 0);
        assert_eq!(view.figure.point_count(), 0);
    }

    #[tokio::test]
    async fn test_marker_size_out_of_bounds_is_rejected() {
        let server = sample_server();

        let response = server
            .post("/dashboard/render")
            .json(&json!({ "marker_size": 64 }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["code"], "E_UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_metric_range_on_dishes_is_bad_request() {
        let server = sample_server();

        let response = server
            .post("/dashboard/render")
            .json(&json!({
                "metric_range": { "low": 0.0, "high": 100.0 },
                "marker_size": 8
            }))
            .expect_failure()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_csv_range_event_keeps_points_inside_bounds() {
        let server: TestServer = server_with(&[
            "--dataset-source",
            "csv",
            "--dataset-path",
            concat!(env!("CARGO_MANIFEST_DIR"), "/../data/Macronutrients.csv"),
        ]);
        let initial = view_of(server.get("/dashboard/view").await.json());
        assert!(initial.state.cube_aspect);

        let response = server
            .post("/dashboard/events")
            .json(&json!({
                "state": initial.state,
                "event": { "type": "set_metric_range", "low": 100.0, "high": 300.0 }
            }))
            .await;
        response.assert_status_ok();

        let view = view_of(response.json());
        assert!(view.point_count < initial.point_count);
        for point in &view.figure.data[0].customdata {
            assert!((100.0..=300.0).contains(&point[3]));
        }
    }

    #[tokio::test]
    async fn test_page_is_served_at_root() {
        let server = sample_server();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.text().contains("3D Latent Space Visualization"));
    }
}
