use crate::utils::error::{InviteError, Result};
use crate::utils::progress::PhaseProgress;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Run `call` once per item with at most `limit` calls in flight, and wait for
/// all of them before returning. Output order follows completion, not input.
pub async fn bounded_fan_out<A, T, R, F, Fut>(
    api: Arc<A>,
    items: Vec<T>,
    limit: usize,
    progress: &PhaseProgress,
    call: F,
) -> Result<Vec<(T, R)>>
where
    A: ?Sized + Send + Sync + 'static,
    T: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(Arc<A>, T) -> Fut,
    Fut: Future<Output = R> + Send + 'static,
{
    let semaphore = Arc::new(Semaphore::new(limit.max(1)));
    let mut tasks = JoinSet::new();

    for item in items {
        let gate = Arc::clone(&semaphore);
        let pending = call(Arc::clone(&api), item.clone());
        tasks.spawn(async move {
            // semaphore 從不 close，acquire 只會成功
            let _permit = gate.acquire_owned().await;
            (item, pending.await)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.map_err(|e| InviteError::Task {
            message: e.to_string(),
        })?;
        progress.inc();
        results.push(outcome);
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Gauge {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[tokio::test]
    async fn test_limit_bounds_in_flight_calls() {
        let gauge = Arc::new(Gauge {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let progress = PhaseProgress::hidden();

        let results = bounded_fan_out(
            Arc::clone(&gauge),
            (0..10).collect::<Vec<u32>>(),
            2,
            &progress,
            |gauge, n| async move {
                let now = gauge.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                gauge.peak.fetch_max(now, Ordering::SeqCst);
                tokio::task::yield_now().await;
                gauge.in_flight.fetch_sub(1, Ordering::SeqCst);
                n * 2
            },
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|(n, doubled)| *doubled == n * 2));
        assert!(gauge.peak.load(Ordering::SeqCst) <= 2);
        assert_eq!(progress.position(), 10);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let progress = PhaseProgress::hidden();
        let results = bounded_fan_out(Arc::new(()), Vec::<u32>::new(), 4, &progress, |_, n| async move { n })
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
