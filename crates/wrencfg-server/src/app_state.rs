//! Shared application state for the config server.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wrencfg_core::ConfigProvider;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ConfigProvider>,
    draining: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self {
            provider,
            draining: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn provider(&self) -> &dyn ConfigProvider {
        self.provider.as_ref()
    }

    /// Mark draining state. `/readyz` reports 503 from here on.
    pub fn set_draining(&self) {
        self.draining.store(true, Ordering::Relaxed);
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Relaxed)
    }
}
