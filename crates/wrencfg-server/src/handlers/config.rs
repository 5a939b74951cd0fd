//! UI configuration endpoint.
//!
//! Returns the telemetry settings the frontend needs to decide whether and
//! where to send usage events.

use axum::{extract::State, Json};
use wrencfg_core::ClientConfig;

use crate::app_state::AppState;
use crate::error::ApiResult;

/// GET /api/config
///
/// The request itself is ignored. Provider failures are not handled here.
pub async fn get_config(State(state): State<AppState>) -> ApiResult<Json<ClientConfig>> {
    let snap = state.provider().snapshot()?;
    let body = ClientConfig::from_snapshot(&snap);
    tracing::debug!(
        telemetry_enabled = body.is_telemetry_enabled,
        has_host = !body.telemetry_host.is_empty(),
        "serving client config"
    );
    Ok(Json(body))
}
