//! Command-line interface module.
//!
//! This module provides the CLI functionality for:
//! - Running the gateway
//! - Issuing a query analysis call against a running gateway
//! - Probing the inference backend

pub mod commands;
pub mod handlers;

pub use handlers::{handle_health, handle_query, handle_server};

use clap::Parser;
use commands::{Commands, LoggingConfig};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_server_args() {
        let cli = Cli::try_parse_from([
            "classifier-agent",
            "server",
            "--listen",
            "127.0.0.1:7000",
            "--backend-url",
            "http://ml:8000",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.logging.get_effective_level(), "debug");
        match cli.command {
            Commands::Server(cmd) => {
                let overrides = cmd.overrides();
                assert_eq!(overrides.listen.as_deref(), Some("127.0.0.1:7000"));
                assert_eq!(overrides.backend_url.as_deref(), Some("http://ml:8000"));
                assert!(overrides.backend_timeout.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_args() {
        let cli =
            Cli::try_parse_from(["classifier-agent", "query", "--text", "neural networks"]).unwrap();
        match cli.command {
            Commands::Query(cmd) => {
                assert_eq!(cmd.host, "localhost:50051");
                assert_eq!(cmd.text, "neural networks");
                assert_eq!(cmd.context, "article_search");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
