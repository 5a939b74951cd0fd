//! `GET /api/config` response body.

use serde::{Deserialize, Serialize};

use crate::snapshot::ConfigSnapshot;

/// Telemetry settings exposed to the browser.
///
/// Field names on the wire are fixed (`isTelemetryEnabled`, `telemetryHost`,
/// `userUUID`) and every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "isTelemetryEnabled")]
    pub is_telemetry_enabled: bool,
    #[serde(rename = "telemetryHost")]
    pub telemetry_host: String,
    #[serde(rename = "userUUID")]
    pub user_uuid: String,
}

impl ClientConfig {
    /// Resolve a snapshot into the response body.
    ///
    /// Absent values fall back to `false` / `""`. An empty string is kept
    /// as-is, which is the same thing as defaulting it.
    pub fn from_snapshot(snap: &ConfigSnapshot) -> Self {
        Self {
            is_telemetry_enabled: snap.telemetry_enabled.unwrap_or(false),
            telemetry_host: snap.telemetry_http_endpoint.clone().unwrap_or_default(),
            user_uuid: snap.user_uuid.clone().unwrap_or_default(),
        }
    }
}

impl From<&ConfigSnapshot> for ClientConfig {
    fn from(snap: &ConfigSnapshot) -> Self {
        Self::from_snapshot(snap)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn snap(enabled: Option<bool>, host: Option<&str>, uuid: Option<&str>) -> ConfigSnapshot {
        ConfigSnapshot {
            telemetry_enabled: enabled,
            telemetry_http_endpoint: host.map(str::to_string),
            user_uuid: uuid.map(str::to_string),
        }
    }

    #[test]
    fn enabled_flag_passes_through() {
        assert!(ClientConfig::from_snapshot(&snap(Some(true), None, None)).is_telemetry_enabled);
        assert!(!ClientConfig::from_snapshot(&snap(Some(false), None, None)).is_telemetry_enabled);
        assert!(!ClientConfig::from_snapshot(&snap(None, None, None)).is_telemetry_enabled);
    }

    #[test]
    fn strings_default_to_empty() {
        let c = ClientConfig::from_snapshot(&snap(None, None, None));
        assert_eq!(c.telemetry_host, "");
        assert_eq!(c.user_uuid, "");

        let c = ClientConfig::from_snapshot(&snap(None, Some(""), Some("")));
        assert_eq!(c.telemetry_host, "");
        assert_eq!(c.user_uuid, "");
    }

    #[test]
    fn non_empty_strings_are_kept_verbatim() {
        // "0" is an ordinary value, not a falsy one
        let c = ClientConfig::from_snapshot(&snap(Some(true), Some("https://t.example.com"), Some("0")));
        assert_eq!(c.telemetry_host, "https://t.example.com");
        assert_eq!(c.user_uuid, "0");
    }

    #[test]
    fn serializes_with_wire_keys() {
        let c = ClientConfig {
            is_telemetry_enabled: true,
            telemetry_host: "http://x".into(),
            user_uuid: "abc-123".into(),
        };
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "isTelemetryEnabled": true,
                "telemetryHost": "http://x",
                "userUUID": "abc-123",
            })
        );
    }
}
