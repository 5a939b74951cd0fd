//! Axum router wiring.
//!
//! - `/api/config` : UI telemetry config
//! - `/healthz`, `/readyz` : ops

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .with_state(state)
}
