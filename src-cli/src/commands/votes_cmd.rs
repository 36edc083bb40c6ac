//! Votes Command

use anyhow::Context;
use showcase_core::chain::AptosClient;
use showcase_core::config::parse_address;
use showcase_core::domain::format_vibe_score;
use showcase_core::reconcile::fetch_vote_data;
use showcase_core::{ShowcaseConfig, VoteData};

pub async fn votes(config: &ShowcaseConfig, project_id: &str, account: Option<&str>) -> anyhow::Result<()> {
    let account = account.map(|a| parse_address("--account", a)).transpose()?;
    let reader = AptosClient::new(&config.network);
    let data = fetch_vote_data(&reader, &config.contract, project_id, account.as_deref())
        .await
        .with_context(|| format!("reading votes for project {}", project_id))?;
    println!("{}", vote_report(project_id, &data, account.is_some()));
    Ok(())
}

pub fn vote_report(project_id: &str, data: &VoteData, with_account: bool) -> String {
    let mut lines = vec![
        format!("Project \"{}\"", project_id),
        format!("  upvotes:    {}", data.upvotes),
        format!("  downvotes:  {}", data.downvotes),
        format!("  vibe score: {}", format_vibe_score(data.vibe_score())),
    ];
    if with_account {
        let vote = data.user_vote.map(|v| v.as_str()).unwrap_or("none");
        lines.push(format!("  your vote:  {}", vote));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::VoteType;

    #[test]
    fn test_report_without_account() {
        let report = vote_report("1", &VoteData::new(5, 2, None), false);
        assert!(report.contains("vibe score: +3"));
        assert!(!report.contains("your vote"));
    }

    #[test]
    fn test_report_with_account() {
        let report = vote_report("1", &VoteData::new(0, 4, Some(VoteType::Down)), true);
        assert!(report.contains("vibe score: -4"));
        assert!(report.ends_with("your vote:  down"));
    }
}
