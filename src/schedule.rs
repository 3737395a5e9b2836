use std::time::Duration;

use tokio::task::JoinHandle;

/// Inactivity window before a pending search re-filter runs. Dropdown
/// changes filter synchronously and never go through the debouncer.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// A cancellable delayed task. Scheduling a new task cancels any pending
/// unexecuted one, so at most one task is pending and no two ever run
/// concurrently. This is the only cancellation semantics in the engine.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Run `task` after the inactivity window, superseding any earlier
    /// scheduled task that has not yet run.
    pub fn schedule<F>(&mut self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        }));
    }

    /// Cancel the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
