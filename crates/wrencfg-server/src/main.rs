//! wrencfg server
//!
//! - HTTP endpoint: GET /api/config
//! - Config: YAML file (arg 1, `WRENCFG_CONFIG`, or `wrencfg.yaml`) + env overrides
//! - Ops: /healthz, /readyz
//! - Graceful shutdown on Ctrl-C / SIGTERM

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};
use wrencfg_core::error::{Result, WrenCfgError};
use wrencfg_core::StaticProvider;

use wrencfg_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "wrencfg-server exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let explicit = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("WRENCFG_CONFIG").ok());
    let mut cfg = match explicit.as_deref() {
        Some(path) => config::load_from_file(path)?,
        None => config::load_or_default(config::DEFAULT_PATH)?,
    };
    cfg.apply_env_overrides(|k| std::env::var(k).ok())?;

    let listen = cfg.server.listen_addr()?;
    let provider = Arc::new(StaticProvider::new(cfg.telemetry.snapshot()));
    let state = AppState::new(provider);
    let app = router::build_router(state.clone());

    tracing::info!(
        %listen,
        telemetry_enabled = cfg.telemetry.enabled.unwrap_or(false),
        "wrencfg-server starting"
    );
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| WrenCfgError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| WrenCfgError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    state.set_draining();
    tracing::info!("signal received, starting graceful shutdown");
}
