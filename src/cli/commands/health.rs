use clap::Args;
use std::path::PathBuf;

use crate::config::Overrides;

#[derive(Debug, Args)]
pub struct HealthCommand {
    /// Inference backend base URL (defaults to the configured one)
    #[arg(long = "backend-url", value_name = "URL")]
    pub backend_url: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl HealthCommand {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            backend_url: self.backend_url.clone(),
            ..Default::default()
        }
    }
}
