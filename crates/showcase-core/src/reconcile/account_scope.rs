//! Account-Scoped Reads
//!
//! A read started for one account is discarded when the connected account
//! changed before it finished; a newer read owns the result.

use std::future::Future;

/// Await `load`, keeping its output only if `current()` still reports `account`.
pub async fn keep_if_current<T, Fut, C>(account: Option<&str>, load: Fut, current: C) -> Option<T>
where
    Fut: Future<Output = T>,
    C: FnOnce() -> Option<String>,
{
    let output = load.await;
    (current().as_deref() == account).then_some(output)
}
