use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the scanner backend, e.g. `http://127.0.0.1:8000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Delay before a reconnect attempt after the push channel closes.
    #[serde(default = "default_reconnect_delay_secs")]
    pub reconnect_delay_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Samples at or below this strength count as noise.
    #[serde(default = "default_squelch_threshold")]
    pub squelch_threshold_dbm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_status_interval_secs")]
    pub status_interval_secs: u64,
    #[serde(default = "default_log_interval_secs")]
    pub log_interval_secs: u64,
    /// `limit` query parameter for the transmission log fetch.
    #[serde(default = "default_transmission_limit")]
    pub transmission_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            reconnect_delay_secs: default_reconnect_delay_secs(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            squelch_threshold_dbm: default_squelch_threshold(),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_secs: default_status_interval_secs(),
            log_interval_secs: default_log_interval_secs(),
            transmission_limit: default_transmission_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_reconnect_delay_secs() -> u64 {
    5
}

fn default_squelch_threshold() -> f64 {
    -50.0
}

fn default_status_interval_secs() -> u64 {
    10
}

fn default_log_interval_secs() -> u64 {
    30
}

fn default_transmission_limit() -> usize {
    500
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scanmon")
            .join("config.toml")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("scanmon")
    }

    /// Push-channel URL derived from the configured base URL.
    pub fn ws_url(&self) -> String {
        let base = self.server.base_url.trim_end_matches('/');
        let ws_base = if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            format!("ws://{}", base)
        };
        format!("{}/ws", ws_base)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_secs(self.server.reconnect_delay_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            scanner: ScannerConfig::default(),
            polling: PollingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.reconnect_delay_secs, 5);
        assert_eq!(config.scanner.squelch_threshold_dbm, -50.0);
        assert_eq!(config.polling.status_interval_secs, 10);
        assert_eq!(config.polling.log_interval_secs, 30);
    }

    #[test]
    fn test_ws_url_derivation() {
        let mut config = Config::default();
        assert_eq!(config.ws_url(), "ws://127.0.0.1:8000/ws");
        config.server.base_url = "https://scanner.example.net/".to_string();
        assert_eq!(config.ws_url(), "wss://scanner.example.net/ws");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[server]\nbase_url = \"http://10.0.0.5:8000\"\n").unwrap();
        assert_eq!(config.server.base_url, "http://10.0.0.5:8000");
        assert_eq!(config.server.reconnect_delay_secs, 5);
        assert_eq!(config.polling.transmission_limit, 500);
    }
}
