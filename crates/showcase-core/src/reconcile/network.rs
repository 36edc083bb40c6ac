//! Network Check
//!
//! Look up the connected account on the expected network. Advisory only.

use crate::chain::ChainReader;
use crate::domain::NetworkInfo;

pub async fn check_network<R>(reader: &R, account: Option<&str>, expected: &str) -> NetworkInfo
where
    R: ChainReader + ?Sized,
{
    let Some(address) = account else {
        return NetworkInfo::disconnected(expected);
    };

    let result = reader.account(address).await;
    if let Err(err) = &result {
        log::warn!("Network check for {} failed: {}", address, err);
    }
    NetworkInfo::from_lookup(result.as_ref().map(|_| ()), expected)
}
