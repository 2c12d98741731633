use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

use futures::{stream, StreamExt};

use crate::CancelFlag;

/// Default worker count for detail fetches; small on purpose, the upstream
/// API tolerates little.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Resolves every id in `ids` to its detail record through `fetch_one`,
/// running at most `concurrency` fetches at a time.
///
/// Ids are independent, so one failure only drops that id from the mapping;
/// the rest keep resolving. Completion order never shows in the result.
/// Cancellation stops dispatching new ids; records already resolved are
/// returned.
pub async fn resolve<T, F, Fut>(
    ids: &BTreeSet<u64>,
    concurrency: usize,
    cancel: &CancelFlag,
    fetch_one: F,
) -> BTreeMap<u64, T>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = crate::Result<T>>,
{
    let concurrency = concurrency.max(1);
    stream::iter(ids.iter().copied())
        .take_while(|_| futures::future::ready(!cancel.is_cancelled()))
        .map(|id| {
            let fut = fetch_one(id);
            async move { (id, fut.await) }
        })
        .buffer_unordered(concurrency)
        .filter_map(|(id, result)| {
            futures::future::ready(match result {
                Ok(detail) => Some((id, detail)),
                Err(e) => {
                    log::warn!("detail fetch failed for id {id}: {e}");
                    None
                }
            })
        })
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ids(xs: &[u64]) -> BTreeSet<u64> {
        xs.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_resolves_each_id_once() {
        let calls = AtomicUsize::new(0);
        let resolved = resolve(&ids(&[3, 1, 2]), 2, &CancelFlag::new(), |id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(id * 10) }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(resolved, BTreeMap::from([(1, 10), (2, 20), (3, 30)]));
    }

    /// Same fetch function, different worker counts: identical mapping.
    #[tokio::test]
    async fn test_idempotent_across_concurrency() {
        let set = ids(&[5, 6, 7, 8, 9]);
        let fetch = |id: u64| async move { Ok(format!("detail-{id}")) };
        let serial = resolve(&set, 1, &CancelFlag::new(), fetch).await;
        let parallel = resolve(&set, 8, &CancelFlag::new(), fetch).await;
        let again = resolve(&set, 8, &CancelFlag::new(), fetch).await;
        assert_eq!(serial, parallel);
        assert_eq!(parallel, again);
    }

    #[tokio::test]
    async fn test_failed_id_is_isolated() {
        let resolved = resolve(&ids(&[1, 2, 3]), 2, &CancelFlag::new(), |id| async move {
            if id == 2 {
                Err(Error::Json(serde_json::from_str::<u8>("nope").unwrap_err()))
            } else {
                Ok(id)
            }
        })
        .await;
        assert_eq!(resolved, BTreeMap::from([(1, 1), (3, 3)]));
    }

    #[tokio::test]
    async fn test_cancellation_stops_dispatch() {
        let cancel = CancelFlag::new();
        cancel.cancel();
        let calls = AtomicUsize::new(0);
        let resolved = resolve(&ids(&[1, 2, 3]), 2, &cancel, |id| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(id) }
        })
        .await;
        assert!(resolved.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
