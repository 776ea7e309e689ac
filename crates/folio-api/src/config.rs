//! API server configuration, loadable from TOML or environment.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP API port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Status channel (WebSocket) port.
    #[serde(default = "default_ws_port")]
    pub ws_port: u16,
    /// Directory served as the static site; its `index.html` is the fallback document.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
    /// Command line of the external AI service. The action and the JSON payload
    /// are appended as two extra arguments.
    #[serde(default = "default_bridge_command")]
    pub bridge_command: String,
    /// Upper bound for one AI service call. 0 disables the limit.
    #[serde(default = "default_bridge_timeout")]
    pub bridge_timeout_secs: u64,
    /// Interval between live status pushes on each channel connection.
    #[serde(default = "default_update_interval")]
    pub update_interval_secs: u64,
    /// Lower bound of the simulated chat latency.
    #[serde(default = "default_chat_delay_min")]
    pub chat_delay_min_ms: u64,
    /// Upper bound of the simulated chat latency.
    #[serde(default = "default_chat_delay_max")]
    pub chat_delay_max_ms: u64,
    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Optional JSON file replacing the built-in recommendation catalog.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_ws_port() -> u16 {
    8080
}

fn default_site_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_bridge_command() -> String {
    "python ai-service.py".to_string()
}

fn default_bridge_timeout() -> u64 {
    30
}

fn default_update_interval() -> u64 {
    5
}

fn default_chat_delay_min() -> u64 {
    800
}

fn default_chat_delay_max() -> u64 {
    1200
}

impl ApiConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = env_parse("PORT") {
            config.port = port;
        }
        if let Some(ws_port) = env_parse("WS_PORT") {
            config.ws_port = ws_port;
        }
        if let Ok(root) = std::env::var("SITE_ROOT") {
            config.site_root = PathBuf::from(root);
        }
        if let Ok(cmd) = std::env::var("AI_SERVICE_CMD") {
            config.bridge_command = cmd;
        }
        if let Some(secs) = env_parse("AI_SERVICE_TIMEOUT_SECS") {
            config.bridge_timeout_secs = secs;
        }
        if let Ok(path) = std::env::var("CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }
        config
    }

    pub fn bridge_timeout(&self) -> Option<Duration> {
        (self.bridge_timeout_secs > 0).then(|| Duration::from_secs(self.bridge_timeout_secs))
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_interval_secs.max(1))
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            ws_port: default_ws_port(),
            site_root: default_site_root(),
            bridge_command: default_bridge_command(),
            bridge_timeout_secs: default_bridge_timeout(),
            update_interval_secs: default_update_interval(),
            chat_delay_min_ms: default_chat_delay_min(),
            chat_delay_max_ms: default_chat_delay_max(),
            cors_origins: vec![],
            catalog_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.ws_port, 8080);
        assert_eq!(config.bridge_command, "python ai-service.py");
        assert_eq!(config.bridge_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.update_interval(), Duration::from_secs(5));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn deserialize_minimal_config() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.chat_delay_min_ms, 800);
        assert_eq!(config.chat_delay_max_ms, 1200);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
host = "127.0.0.1"
port = 4000
ws_port = 4001
site_root = "/srv/site"
bridge_command = "python3 /opt/ai/ai-service.py --quiet"
bridge_timeout_secs = 0
update_interval_secs = 2
chat_delay_min_ms = 10
chat_delay_max_ms = 20
cors_origins = ["https://example.com"]
catalog_path = "/etc/folio/catalog.json"
"#;
        let config: ApiConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.ws_port, 4001);
        assert_eq!(config.site_root, PathBuf::from("/srv/site"));
        assert!(config.bridge_timeout().is_none());
        assert_eq!(config.update_interval(), Duration::from_secs(2));
        assert_eq!(config.cors_origins.len(), 1);
        assert!(config.catalog_path.is_some());
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "port = 9000\n").unwrap();
        let config = ApiConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.ws_port, 8080);
    }

    #[test]
    fn from_file_missing_is_error() {
        assert!(ApiConfig::from_file("/nonexistent/folio.toml").is_err());
    }
}
