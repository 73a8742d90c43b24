pub mod dispatch_event;
pub mod get_dashboard_page;
pub mod get_summary;
pub mod get_view;
pub mod render_view;
