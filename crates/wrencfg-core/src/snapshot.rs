//! Configuration snapshot and the accessor seam that produces it.
//!
//! The endpoint never reads process-wide state directly; it asks the
//! injected [`ConfigProvider`] for a fresh snapshot on every request.

use serde::Deserialize;

use crate::error::Result;

/// Immutable read of the telemetry-related process settings.
///
/// Every field is optional; absence is resolved to a default only when the
/// snapshot is turned into a [`crate::protocol::ClientConfig`].
///
/// The serde form uses the camelCase keys the UI config object carries
/// (`telemetryEnabled`, `telemetryHttpEndpoint`, `userUUID`); `null` and a
/// missing key both mean absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    #[serde(default)]
    pub telemetry_enabled: Option<bool>,
    #[serde(default)]
    pub telemetry_http_endpoint: Option<String>,
    #[serde(default, rename = "userUUID")]
    pub user_uuid: Option<String>,
}

/// Synchronous, in-memory accessor for the current snapshot.
pub trait ConfigProvider: Send + Sync + 'static {
    fn snapshot(&self) -> Result<ConfigSnapshot>;
}

/// Provider that hands out the same snapshot for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    snapshot: ConfigSnapshot,
}

impl StaticProvider {
    pub fn new(snapshot: ConfigSnapshot) -> Self {
        Self { snapshot }
    }
}

impl ConfigProvider for StaticProvider {
    fn snapshot(&self) -> Result<ConfigSnapshot> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn static_provider_returns_its_snapshot() {
        let snap = ConfigSnapshot {
            telemetry_enabled: Some(true),
            telemetry_http_endpoint: None,
            user_uuid: Some("u-1".into()),
        };
        let p = StaticProvider::new(snap.clone());
        assert_eq!(p.snapshot().unwrap(), snap);
        // repeated reads are stable
        assert_eq!(p.snapshot().unwrap(), snap);
    }

    #[test]
    fn null_and_missing_keys_are_absent() {
        let s: ConfigSnapshot =
            serde_json::from_str(r#"{"telemetryEnabled": null, "userUUID": "x"}"#).unwrap();
        assert_eq!(s.telemetry_enabled, None);
        assert_eq!(s.telemetry_http_endpoint, None);
        assert_eq!(s.user_uuid.as_deref(), Some("x"));
    }

    #[test]
    fn default_provider_is_all_absent() {
        let p = StaticProvider::default();
        assert_eq!(p.snapshot().unwrap(), ConfigSnapshot::default());
    }
}
