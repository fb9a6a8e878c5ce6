//! Axum router wiring.
//!
//! Two routers share one `AppState`: the public ballot (`/`, `/media`,
//! `/static`) and the operational one served on the metrics port.

use axum::{middleware, routing::get, Router};
use tower_http::services::ServeDir;

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let gw = &state.cfg().gateway;
    let media = ServeDir::new(&gw.media_dir);
    let statics = ServeDir::new(&gw.static_dir);

    let ballot = Router::new()
        .route("/", get(transport::vote::show).post(transport::vote::submit))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            transport::vote::track_request_time,
        ));

    ballot
        .nest_service("/media", media)
        .nest_service("/static", statics)
        .with_state(state)
}

pub fn build_ops_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state)
}
