use anyhow::Context;
use serde::Deserialize;

/// Environment variable naming the config file to load.
const CONFIG_ENV: &str = "WAYPOINT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "waypoint.yaml";

/// Top-level server configuration, loaded from a YAML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to, e.g. "127.0.0.1:8080".
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `WAYPOINT_CONFIG`, falling
    /// back to `waypoint.yaml` in the working directory. A missing file is
    /// not an error; defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !std::path::Path::new(&path).exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml(&raw).with_context(|| format!("Invalid config file {}", path))
    }

    /// Parses configuration from a YAML document. Missing keys take their
    /// default values.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(raw).context("Malformed YAML configuration")
    }
}
