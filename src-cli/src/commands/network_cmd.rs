//! Network Command

use showcase_core::chain::AptosClient;
use showcase_core::config::parse_address;
use showcase_core::reconcile::check_network;
use showcase_core::{NetworkInfo, NetworkStatus, ShowcaseConfig};

pub async fn network(config: &ShowcaseConfig, address: &str) -> anyhow::Result<()> {
    let address = parse_address("ADDRESS", address)?;
    let reader = AptosClient::new(&config.network);
    let info = check_network(&reader, Some(&address), &config.network.name).await;
    println!("{}", network_report(&address, &info));
    Ok(())
}

pub fn network_report(address: &str, info: &NetworkInfo) -> String {
    let verdict = match info.status {
        NetworkStatus::Correct => format!("✅ {} is on {}", address, info.expected_network),
        NetworkStatus::Wrong => format!(
            "❌ {} not found on {} (probably {})",
            address,
            info.expected_network,
            info.current_network.as_deref().unwrap_or("another network")
        ),
        NetworkStatus::Unknown => format!("❔ Could not determine the network of {}", address),
        NetworkStatus::Disconnected => format!("No account to check against {}", info.expected_network),
    };
    match info.warning() {
        Some(warning) => format!("{}\n{}", verdict, warning),
        None => verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::ChainError;

    #[test]
    fn test_correct_report() {
        let info = NetworkInfo::from_lookup(Ok(()), "Testnet");
        assert_eq!(network_report("0xa11ce", &info), "✅ 0xa11ce is on Testnet");
    }

    #[test]
    fn test_wrong_report_carries_warning() {
        let err = ChainError::Http {
            status: 404,
            message: "Account not found by Address(0xb0b)".into(),
            error_code: Some("account_not_found".into()),
        };
        let info = NetworkInfo::from_lookup(Err(&err), "Testnet");
        let report = network_report("0xb0b", &info);
        assert!(report.contains("probably Unknown/Mainnet"));
        assert!(report.contains("Wrong network! Switch to Testnet"));
    }
}
