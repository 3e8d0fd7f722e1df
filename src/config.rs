//! Configuration management for the classifier agent gateway.
//!
//! Configuration is read once at startup from, in increasing precedence:
//! 1. Default configuration (embedded in binary)
//! 2. System-wide configuration file (`/etc/classifier-agent/config.toml`)
//! 3. User-specified configuration file
//! 4. Environment variables (`CLASSIFIER_AGENT_<SECTION>__<KEY>`)
//! 5. Command-line arguments
//!
//! # Environment Variables
//!
//! - `CLASSIFIER_AGENT_SERVER__HOST` - RPC listen host
//! - `CLASSIFIER_AGENT_SERVER__PORT` - RPC listen port
//! - `CLASSIFIER_AGENT_BACKEND__URL` - Inference backend base URL
//! - `CLASSIFIER_AGENT_BACKEND__TIMEOUT_SECS` - Per-call backend timeout

use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");
const SYSTEM_CONFIG: &str = "/etc/classifier-agent/config.toml";
const ENV_PREFIX: &str = "CLASSIFIER_AGENT";

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// RPC listener settings
    pub server: ServerSettings,
    /// Inference backend settings
    pub backend: BackendConfig,
}

/// RPC listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Inference backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:8000`
    pub url: String,
    /// Upper bound on one backend round trip, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Upper bound on establishing the TCP connection, in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Values supplied on the command line; `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub listen: Option<String>,
    pub backend_url: Option<String>,
    pub backend_timeout: Option<u64>,
}

impl GatewayConfig {
    /// Load configuration from all sources
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::with_name(SYSTEM_CONFIG).required(false));

        if let Some(path) = &overrides.config {
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let mut config: GatewayConfig = builder.build()?.try_deserialize()?;
        config.apply(overrides)?;
        config.backend.validate()?;
        Ok(config)
    }

    fn apply(&mut self, overrides: &Overrides) -> Result<()> {
        if let Some(listen) = &overrides.listen {
            let (host, port) = listen
                .rsplit_once(':')
                .ok_or_else(|| Error::InvalidAddress(listen.clone()))?;
            self.server.host = host.to_string();
            self.server.port = port
                .parse()
                .map_err(|_| Error::InvalidAddress(listen.clone()))?;
        }
        if let Some(url) = &overrides.backend_url {
            self.backend.url = url.clone();
        }
        if let Some(timeout) = overrides.backend_timeout {
            self.backend.timeout_secs = timeout;
        }
        Ok(())
    }
}

impl ServerSettings {
    /// Resolve the listen address
    pub fn addr(&self) -> Result<SocketAddr> {
        let listen = format!("{}:{}", self.host, self.port);
        listen
            .to_socket_addrs()
            .map_err(|_| Error::InvalidAddress(listen.clone()))?
            .next()
            .ok_or(Error::InvalidAddress(listen))
    }
}

impl BackendConfig {
    /// Backend settings for `url` with default timeouts.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(Error::config("backend.url must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "backend.url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(Error::config("backend.timeout_secs must be positive"));
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_connect_timeout_secs() -> u64 {
    10
}
