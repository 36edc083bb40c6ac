//! Timers
//!
//! Browser timers on wasm, tokio elsewhere.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Race `future` against a timer. `None` if the timer wins.
pub async fn with_timeout<F: Future>(duration: Duration, future: F) -> Option<F::Output> {
    let future = pin!(future);
    let timer = pin!(sleep(duration));
    match select(future, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
