use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;

use crate::application::http::server::http_server::{router, state};
use crate::args::Args;

/// Builds a [`TestServer`] over the full router (no metrics layer) from
/// command line style arguments.
pub fn server_with(extra: &[&str]) -> TestServer {
    let mut argv = vec!["nutriscope"];
    argv.extend_from_slice(extra);

    let args = Arc::new(Args::parse_from(argv));
    let state = state(args).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn sample_server() -> TestServer {
    server_with(&[
        "--dataset-source",
        "sample",
        "--sample-size",
        "50",
        "--sample-seed",
        "42",
    ])
}
