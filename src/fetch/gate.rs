//! Admission gate for bounded-concurrency fan-out
//!
//! Every item gets its own task immediately, but a task only starts its work
//! after acquiring a semaphore permit, so at most `limit` run at once. The
//! permit is released when the task's work finishes.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinError;

/// A fixed-size admission counter shared by a batch of tasks
#[derive(Debug, Clone)]
pub struct AdmissionGate {
    semaphore: Arc<Semaphore>,
    limit: usize,
}

impl AdmissionGate {
    /// Creates a gate admitting at most `limit` tasks (minimum 1)
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs `task` once per item behind the gate and joins them all
    ///
    /// Results come back in the order of `items`, not completion order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<R>)` - One result per item
    /// * `Err(JoinError)` - A task panicked
    pub async fn run_all<T, R, F, Fut>(&self, items: Vec<T>, task: F) -> Result<Vec<R>, JoinError>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        let task = Arc::new(task);

        let handles: Vec<_> = items
            .into_iter()
            .map(|item| {
                let semaphore = self.semaphore.clone();
                let task = task.clone();
                tokio::spawn(async move {
                    // The semaphore is never closed, so this is always a permit.
                    let _permit = semaphore.acquire_owned().await;
                    task(item).await
                })
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await?);
        }
        Ok(results)
    }
}
