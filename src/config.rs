use crate::network::DEFAULT_ENDPOINT;
use crate::version::{NAME, VERSION};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Env var naming the config file when `--config` is not given.
pub const CONFIG_ENV: &str = "PULSECHECK_CONFIG";

/// Config file looked up in the working directory when nothing is named.
pub const DEFAULT_CONFIG_FILE: &str = "pulsecheck.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub greeting: GreetingConfig,
    pub report: ReportConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub messages: Vec<String>,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            messages: vec![
                format!("Hello World from {} v{}!", NAME, VERSION),
                "System ready for duty!".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the system health block.
    pub system: bool,
    /// Run the public IP probe.
    pub network: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            system: true,
            network: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub endpoint: String,
    /// Request timeout; absent means the client default (none).
    pub timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_secs: None,
        }
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl AppConfig {
    /// Load from `explicit`, else `PULSECHECK_CONFIG`, else `pulsecheck.toml` if present.
    /// A named file that cannot be read is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match named {
            Some(path) => Self::load_from_path(&path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from_path(path)
                } else {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        let config = Self::load_from_str(&s)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.network.endpoint.trim().is_empty(),
            "network.endpoint must be non-empty"
        );
        let url = reqwest::Url::parse(&self.network.endpoint).map_err(|e| {
            anyhow::anyhow!(
                "network.endpoint is not a valid URL ({}): {}",
                self.network.endpoint,
                e
            )
        })?;
        anyhow::ensure!(
            matches!(url.scheme(), "http" | "https"),
            "network.endpoint must use http or https, got {}",
            url.scheme()
        );
        if let Some(t) = self.network.timeout_secs {
            anyhow::ensure!(t > 0, "network.timeout_secs must be > 0, got {}", t);
        }
        Ok(())
    }
}
