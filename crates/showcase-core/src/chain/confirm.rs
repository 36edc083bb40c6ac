//! Transaction Confirmation
//!
//! Poll the node until a submitted transaction commits.

use std::time::Duration;

use super::timer::sleep;
use super::traits::{ChainReader, TxStatus};
use crate::error::ChainError;

/// Poll every `interval` until the transaction commits. Unbounded; callers wrap
/// it in `with_timeout`. A 404 means the node has not indexed the hash yet.
pub async fn wait_for_transaction<R>(reader: &R, hash: &str, interval: Duration) -> Result<(), ChainError>
where
    R: ChainReader + ?Sized,
{
    loop {
        match reader.transaction_status(hash).await {
            Ok(TxStatus::Committed { success: true, .. }) => {
                log::info!("Transaction {} confirmed", hash);
                return Ok(());
            }
            Ok(TxStatus::Committed { success: false, vm_status }) => {
                return Err(ChainError::TransactionFailed {
                    hash: hash.to_string(),
                    vm_status,
                });
            }
            Ok(TxStatus::Pending) => {}
            Err(ChainError::Http { status: 404, .. }) => {}
            Err(err) => return Err(err),
        }
        sleep(interval).await;
    }
}
