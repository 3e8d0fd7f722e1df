pub mod config;
pub mod health;
pub mod query;
pub mod server;

pub use config::LoggingConfig;
pub use health::HealthCommand;
pub use query::QueryCommand;
pub use server::ServerCommand;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the analysis gateway
    Server(ServerCommand),
    /// Send a query analysis request to a running gateway
    Query(QueryCommand),
    /// Check that the inference backend answers its health probe
    Health(HealthCommand),
}
