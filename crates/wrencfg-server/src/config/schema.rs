use std::net::SocketAddr;

use serde::Deserialize;
use wrencfg_core::error::{Result, WrenCfgError};
use wrencfg_core::ConfigSnapshot;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            telemetry: TelemetrySection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(WrenCfgError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }

    /// Overlay environment values on top of the file.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TELEMETRY_ENABLED") {
            self.telemetry.enabled = Some(v.trim().eq_ignore_ascii_case("true"));
        }
        if let Some(v) = lookup("TELEMETRY_HTTP_ENDPOINT") {
            self.telemetry.http_endpoint = Some(v);
        }
        if let Some(v) = lookup("USER_UUID") {
            self.telemetry.user_uuid = Some(v);
        }
        if let Some(v) = lookup("WRENCFG_LISTEN") {
            self.server.listen = v;
        }
        self.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            WrenCfgError::BadRequest(format!(
                "server.listen must be a valid SocketAddr (got {:?})",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:3000".into()
}

/// Values backing the telemetry snapshot. All optional.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub http_endpoint: Option<String>,
    #[serde(default)]
    pub user_uuid: Option<String>,
}

impl TelemetrySection {
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            telemetry_enabled: self.enabled,
            telemetry_http_endpoint: self.http_endpoint.clone(),
            user_uuid: self.user_uuid.clone(),
        }
    }
}
