//! Status Command
//!
//! Which projects have vote state initialized in the contract.

use std::path::Path;

use anyhow::Context;
use showcase_core::chain::{AptosClient, ChainReader, VotingContract};
use showcase_core::{load_projects, ChainError, ShowcaseConfig};
use tracing::{info, warn};

pub async fn status(config: &ShowcaseConfig, ids: Vec<String>, projects_file: &Path) -> anyhow::Result<()> {
    let ids = if ids.is_empty() { project_ids(projects_file)? } else { ids };
    info!("Checking initialization status of {} projects", ids.len());

    let reader = AptosClient::new(&config.network);
    let contract = VotingContract::new(&config.contract);
    for id in &ids {
        let result = read_counts(&reader, &contract, id).await;
        if let Err(err) = &result {
            warn!("get_project_votes failed for {}: {}", id, err);
        }
        println!("{}", status_line(id, &result));
    }

    println!();
    println!("📍 Contract address: {}", contract.address());
    println!("📍 Network URL: {}", reader.node_url());
    Ok(())
}

fn project_ids(path: &Path) -> anyhow::Result<Vec<String>> {
    let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let projects = load_projects(&json).with_context(|| format!("parsing {}", path.display()))?;
    Ok(projects.into_iter().map(|p| p.id).collect())
}

async fn read_counts<R>(reader: &R, contract: &VotingContract<'_>, project_id: &str) -> Result<(u64, u64), ChainError>
where
    R: ChainReader + ?Sized,
{
    let values = reader
        .view(&contract.project_votes_fn(), &contract.project_args(project_id))
        .await?;
    contract.decode_counts(&values)
}

pub fn status_line(project_id: &str, result: &Result<(u64, u64), ChainError>) -> String {
    match result {
        Ok((upvotes, downvotes)) => format!(
            "✅ Project \"{}\": INITIALIZED (upvotes: {}, downvotes: {})",
            project_id, upvotes, downvotes
        ),
        Err(err) => format!("❌ Project \"{}\": NOT INITIALIZED\n   Error: {}", project_id, err),
    }
}
