use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Environment variable that overrides the configured backend host.
pub const HOST_ENV: &str = "STRESSTREND_HOST";
pub const DEFAULT_SETTINGS_FILE: &str = "stresstrend.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Backend address, `host` or `host:port`.
    pub host: String,
    pub endpoint_path: String,
    pub chart_output: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            endpoint_path: "fsia/retrieve_stress_level.php".into(),
            chart_output: PathBuf::from("stress_chart.png"),
            chart_width: 800,
            chart_height: 600,
        }
    }
}

impl Settings {
    /// Read settings from `path`, falling back to defaults when the file is
    /// absent or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let settings = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Ok(settings)
    }

    /// Apply `STRESSTREND_HOST` when it is set to a non-empty value.
    pub fn with_env_overrides(self) -> Self {
        self.with_host_override(std::env::var(HOST_ENV).ok())
    }

    pub fn with_host_override(mut self, host: Option<String>) -> Self {
        if let Some(host) = host.map(|h| h.trim().to_string()).filter(|h| !h.is_empty()) {
            self.host = host;
        }
        self
    }

    pub fn endpoint_url(&self) -> String {
        format!(
            "http://{}/{}",
            self.host.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }

    pub fn chart_size(&self) -> (u32, u32) {
        (self.chart_width, self.chart_height)
    }
}
