use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::AppError;

pub const ENV_CONFIG: &str = "BOOKWATCH_CONFIG";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Pre-filled value of the interval field, in minutes.
    #[serde(default)]
    pub default_mins: Option<f64>,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Raw `--mins` value; validated by the interval field on start.
    #[serde(skip)]
    pub mins_override: Option<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout() -> u64 {
    bookwatch_shared::api::rest::DEFAULT_TIMEOUT.as_secs()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_mins: None,
            request_timeout_secs: default_request_timeout(),
            mins_override: None,
        }
    }
}

impl ClientConfig {
    /// Resolve the config path and load it. A missing file is only tolerated
    /// at the XDG default location; explicit paths must exist.
    pub fn find_and_load(cli_value: Option<PathBuf>) -> Result<(PathBuf, Self), AppError> {
        let explicit = cli_value.is_some() || std::env::var_os(ENV_CONFIG).is_some();
        let path = resolve_config_path(cli_value)?;
        if !explicit && !path.exists() {
            warn!(path=?path, "config file not found; using defaults");
            return Ok((path, Self::default()));
        }
        let cfg = load_config(&path)?;
        Ok((path, cfg))
    }

    /// Apply command line overrides on top of the file values.
    pub fn apply_overrides(&mut self, server: Option<&str>, mins: Option<&str>) {
        if let Some(s) = server {
            self.server_url = s.to_string();
        }
        self.server_url = normalize_server_url(&self.server_url);
        if let Some(m) = mins {
            self.mins_override = Some(m.to_string());
        }
    }

    /// Text the interval field starts with.
    pub fn initial_interval_input(&self) -> Option<String> {
        self.mins_override
            .clone()
            .or_else(|| self.default_mins.map(|m| m.to_string()))
    }
}

pub fn resolve_config_path(cli_value: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(p) = cli_value {
        return Ok(p);
    }
    if let Ok(p) = std::env::var(ENV_CONFIG) {
        return Ok(PathBuf::from(p));
    }
    default_config_path().ok_or_else(|| AppError::Config("could not determine config dir".into()))
}

pub fn default_config_path() -> Option<PathBuf> {
    let pd = ProjectDirs::from("dev", "bookwatch", "bookwatch")?;
    Some(pd.config_dir().join("client.yaml"))
}

pub fn load_config(path: &Path) -> Result<ClientConfig, AppError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("read {} failed: {e}", path.display())))?;
    let cfg: ClientConfig = serde_yaml::from_str(&data)
        .map_err(|e| AppError::Config(format!("parse {} failed: {e}", path.display())))?;
    Ok(cfg)
}

pub fn normalize_server_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.trim_end_matches('/').to_string()
    } else {
        format!("http://{}", trimmed.trim_end_matches('/'))
    }
}
