//! Vibe CLI
//!
//! Operator tooling for the showcase's voting contract:
//! - status: which projects have vote state on chain
//! - votes: reconciled vote data for one project
//! - network: the wallet network heuristic for an address
//! - validate: offline submission validation
//! - publish-instructions: contract deploy commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use showcase_core::ShowcaseConfig;
use tracing::debug;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vibe-cli", version)]
#[command(about = "Inspect and operate the vibe showcase voting contract")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report which projects have been initialized on chain
    Status {
        /// Project ids; defaults to every id in the project data file
        ids: Vec<String>,

        /// Project data file
        #[arg(long, default_value = "data/projects.json")]
        projects: PathBuf,
    },
    /// Show the reconciled vote data for a project
    Votes {
        project_id: String,

        /// Include this account's own vote
        #[arg(long)]
        account: Option<String>,
    },
    /// Guess whether an account lives on the configured network
    Network { address: String },
    /// Validate a submission JSON file without sending it
    Validate { file: PathBuf },
    /// Print the commands that publish and initialize the contract
    PublishInstructions,
}

/// Parse arguments, set up logging and dispatch.
pub async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ShowcaseConfig::from_env()?;
    debug!("Using node {} and module {}", config.network.node_url, config.contract.module_address);

    match cli.command {
        Command::Status { ids, projects } => commands::status(&config, ids, &projects).await,
        Command::Votes { project_id, account } => {
            commands::votes(&config, &project_id, account.as_deref()).await
        }
        Command::Network { address } => commands::network(&config, &address).await,
        Command::Validate { file } => commands::validate(&file),
        Command::PublishInstructions => {
            commands::publish_instructions(&config);
            Ok(())
        }
    }
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
    fn test_parse_status_defaults() {
        let cli = Cli::try_parse_from(["vibe-cli", "status"]).unwrap();
        match cli.command {
            Command::Status { ids, projects } => {
                assert!(ids.is_empty());
                assert_eq!(projects, PathBuf::from("data/projects.json"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_votes_with_account() {
        let cli = Cli::try_parse_from(["vibe-cli", "votes", "mdoy56jg-ej1gw", "--account", "0xa11ce"]).unwrap();
        match cli.command {
            Command::Votes { project_id, account } => {
                assert_eq!(project_id, "mdoy56jg-ej1gw");
                assert_eq!(account.as_deref(), Some("0xa11ce"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_publish_instructions() {
        let cli = Cli::try_parse_from(["vibe-cli", "publish-instructions"]).unwrap();
        assert!(matches!(cli.command, Command::PublishInstructions));
    }
}
