//! Join primitive for concurrent step groups

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

/// Drive every future to completion concurrently on the current task
///
/// Outputs are returned in completion order. Nothing is dropped early: a
/// failure in one member does not stop the others, so callers can pick the
/// first error knowing every sibling has settled.
pub async fn join_all_settled<I, F>(futures: I) -> Vec<F::Output>
where
    I: IntoIterator<Item = F>,
    F: Future,
{
    let mut pending: FuturesUnordered<F> = futures.into_iter().collect();
    let mut settled = Vec::with_capacity(pending.len());
    while let Some(output) = pending.next().await {
        settled.push(output);
    }
    settled
}
