//! Classifier agent binary.
//!
//! Entry point for the analysis gateway: runs the RPC server that forwards
//! article, query, search and expertise analysis calls to the inference
//! backend, plus small client and health-probe commands.

use clap::Parser;
use classifier_agent_core::cli::{
    commands::Commands, handle_health, handle_query, handle_server, Cli,
};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.logging.get_effective_level();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.parse().unwrap_or(LevelFilter::INFO).into())
                .parse_lossy(cli.logging.log_filter.as_deref().unwrap_or_default()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Classifier agent {} starting up", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Server(cmd) => handle_server(cmd).await,
        Commands::Query(cmd) => handle_query(cmd).await,
        Commands::Health(cmd) => handle_health(cmd).await,
    }
}
