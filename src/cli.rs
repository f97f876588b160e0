// Command-line flags; each overrides the matching config entry

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "pulsecheck", version, about = "Greeting, process health and public IP check")]
pub struct Cli {
    /// Config file (default: $PULSECHECK_CONFIG, then ./pulsecheck.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Greeting message to log; repeat for several. Replaces configured messages.
    #[arg(short, long = "message", value_name = "MSG")]
    pub messages: Vec<String>,

    /// Do not print the system health block
    #[arg(long)]
    pub skip_system: bool,

    /// Do not run the public IP probe
    #[arg(long)]
    pub skip_network: bool,

    /// Override the IP echo endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Folds flags into a loaded config.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if !self.messages.is_empty() {
            config.greeting.messages = self.messages.clone();
        }
        if self.skip_system {
            config.report.system = false;
        }
        if self.skip_network {
            config.report.network = false;
        }
        if let Some(endpoint) = &self.endpoint {
            config.network.endpoint = endpoint.clone();
        }
        config
    }
}
