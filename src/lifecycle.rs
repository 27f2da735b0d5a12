//! Cancellation scope bound to a screen controller's lifetime.
//!
//! Every subscription pump and refresh task the controller starts is
//! spawned through a [`LifecycleScope`]. Cancelling the scope flips a shared
//! shutdown flag and aborts every registered task without waiting for them.
//! Side effects a task already committed are not rolled back.
//!
//! Aborting only takes effect at a task's next yield point, so work that
//! must never happen after [`LifecycleScope::cancel`] returns goes through
//! [`LifecycleScope::run_active`]. Tasks hold a [`WeakScope`] so the scope
//! can still be dropped while they run.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Shared handle to a cancellation scope. Clones refer to the same scope.
#[derive(Debug, Clone)]
pub struct LifecycleScope {
    inner: Arc<ScopeInner>,
}

/// Non-owning handle to a scope, for tasks spawned inside it.
#[derive(Debug, Clone)]
pub struct WeakScope {
    inner: Weak<ScopeInner>,
}

#[derive(Debug)]
struct ScopeInner {
    name: &'static str,
    shutdown_tx: watch::Sender<bool>,
    handles: Mutex<Vec<JoinHandle<()>>>,
    /// Held shared by `run_active` and exclusively by `cancel`
    gate: RwLock<()>,
}

impl LifecycleScope {
    pub fn new(name: &'static str) -> Self {
        let (shutdown_tx, _shutdown_rx) = watch::channel(false);
        Self {
            inner: Arc::new(ScopeInner {
                name,
                shutdown_tx,
                handles: Mutex::new(Vec::new()),
                gate: RwLock::new(()),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Spawn `fut` as a task owned by this scope.
    ///
    /// Returns `false` (and drops `fut`) if the scope is already cancelled.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(&self, fut: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Held across the cancelled check so `cancel` cannot miss this task.
        let mut handles = self.inner.lock_handles();
        if self.is_cancelled() {
            tracing::debug!(scope = self.inner.name, "Scope cancelled, task not started");
            return false;
        }

        handles.retain(|handle| !handle.is_finished());

        let mut shutdown_rx = self.inner.shutdown_tx.subscribe();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = shutdown_rx.changed() => {}
                _ = fut => {}
            }
        });
        handles.push(handle);
        true
    }

    /// Cancel every task in the scope.
    ///
    /// Returns `true` only for the call that actually tore the scope down.
    ///
    /// Waits for any [`Self::run_active`] call in progress, so nothing it
    /// guards runs once this returns. Calling it from inside `run_active`
    /// deadlocks.
    pub fn cancel(&self) -> bool {
        let _gate = self.inner.gate.write().unwrap_or_else(PoisonError::into_inner);
        let mut handles = self.inner.lock_handles();
        let already_cancelled = self.inner.shutdown_tx.send_replace(true);
        for handle in handles.drain(..) {
            handle.abort();
        }
        if !already_cancelled {
            tracing::debug!(scope = self.inner.name, "Scope cancelled");
        }
        !already_cancelled
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.shutdown_tx.borrow()
    }

    /// Run `f` unless the scope is cancelled.
    ///
    /// `cancel` cannot complete while `f` runs, so `f` never observes or
    /// produces effects after teardown. Keep `f` short and synchronous.
    pub fn run_active<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let _gate = self.inner.gate.read().unwrap_or_else(PoisonError::into_inner);
        if self.is_cancelled() {
            return None;
        }
        Some(f())
    }

    pub fn downgrade(&self) -> WeakScope {
        WeakScope {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Resolves once the scope has been cancelled.
    pub async fn cancelled(&self) {
        let mut shutdown_rx = self.inner.shutdown_tx.subscribe();
        loop {
            if *shutdown_rx.borrow_and_update() {
                return;
            }
            if shutdown_rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Number of registered tasks that have not finished yet.
    pub fn active_tasks(&self) -> usize {
        self.inner
            .lock_handles()
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl WeakScope {
    /// The scope, unless every owning handle has been dropped.
    pub fn upgrade(&self) -> Option<LifecycleScope> {
        self.inner.upgrade().map(|inner| LifecycleScope { inner })
    }

    /// A dropped scope counts as cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.upgrade().map_or(true, |scope| scope.is_cancelled())
    }

    pub fn run_active<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        self.upgrade()?.run_active(f)
    }
}

impl ScopeInner {
    fn lock_handles(&self) -> MutexGuard<'_, Vec<JoinHandle<()>>> {
        self.handles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for ScopeInner {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
        for handle in self.lock_handles().drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_spawned_task_runs_to_completion() {
        let scope = LifecycleScope::new("test");
        let (tx, rx) = tokio::sync::oneshot::channel();

        assert!(scope.spawn(async move {
            let _ = tx.send(42);
        }));

        assert_eq!(rx.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_cancel_aborts_pending_tasks() {
        let scope = LifecycleScope::new("test");
        let finished = Arc::new(AtomicUsize::new(0));
        let counter = finished.clone();

        scope.spawn(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(scope.active_tasks(), 1);

        assert!(scope.cancel());
        tokio::task::yield_now().await;

        assert_eq!(finished.load(Ordering::SeqCst), 0);
        assert_eq!(scope.active_tasks(), 0);
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let scope = LifecycleScope::new("test");
        assert!(!scope.is_cancelled());
        assert!(scope.cancel());
        assert!(!scope.cancel());
        assert!(scope.is_cancelled());
    }

    #[tokio::test]
    async fn test_spawn_after_cancel_is_rejected() {
        let scope = LifecycleScope::new("test");
        scope.cancel();

        let ran = Arc::new(AtomicUsize::new(0));
        let counter = ran.clone();
        assert!(!scope.spawn(async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        tokio::task::yield_now().await;
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_clones_share_the_scope() {
        let scope = LifecycleScope::new("test");
        let clone = scope.clone();

        let waiter = tokio::spawn({
            let scope = scope.clone();
            async move { scope.cancelled().await }
        });

        clone.cancel();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("cancelled() should resolve")
            .unwrap();
        assert!(scope.is_cancelled());
        assert_eq!(scope.name(), "test");
    }

    #[tokio::test]
    async fn test_run_active_refused_after_cancel() {
        let scope = LifecycleScope::new("test");
        assert_eq!(scope.run_active(|| 7), Some(7));

        scope.cancel();
        assert_eq!(scope.run_active(|| 7), None);
    }

    #[test]
    fn test_cancel_waits_for_run_active() {
        let scope = LifecycleScope::new("test");
        let done = Arc::new(AtomicUsize::new(0));
        let (entered_tx, entered_rx) = std::sync::mpsc::channel();
        let worker = {
            let scope = scope.clone();
            let done = done.clone();
            std::thread::spawn(move || {
                scope.run_active(|| {
                    entered_tx.send(()).unwrap();
                    std::thread::sleep(Duration::from_millis(50));
                    done.fetch_add(1, Ordering::SeqCst);
                })
            })
        };

        entered_rx.recv().unwrap();
        scope.cancel();
        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert_eq!(worker.join().unwrap(), Some(()));
    }

    #[tokio::test]
    async fn test_weak_scope_does_not_keep_tasks_alive() {
        let scope = LifecycleScope::new("test");
        let weak = scope.downgrade();
        let (tx, mut rx) = tokio::sync::mpsc::channel::<()>(1);

        scope.spawn({
            let weak = weak.clone();
            async move {
                // Holds the weak handle for as long as it runs
                let _weak = weak;
                let _ = tx.send(()).await;
                std::future::pending::<()>().await;
            }
        });
        rx.recv().await.unwrap();

        drop(scope);
        assert!(weak.upgrade().is_none());
        assert!(weak.is_cancelled());
        assert_eq!(weak.run_active(|| 1), None);
        // The aborted task drops its sender
        assert!(rx.recv().await.is_none());
    }
}
