use clap::Args;
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Debug, Args)]
pub struct ServerCommand {
    /// Listen address in host:port format
    #[arg(long, value_name = "HOST:PORT", env = "CLASSIFIER_AGENT_LISTEN")]
    pub listen: Option<String>,

    /// Inference backend base URL
    #[arg(long = "backend-url", value_name = "URL")]
    pub backend_url: Option<String>,

    /// Backend request timeout in seconds
    #[arg(long = "backend-timeout", value_name = "SECS")]
    pub backend_timeout: Option<u64>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ServerCommand {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            listen: self.listen.clone(),
            backend_url: self.backend_url.clone(),
            backend_timeout: self.backend_timeout,
        }
    }
}
