//! Trailing-edge debouncer
//!
//! Holds a settled value that only changes once input has been quiet for
//! the configured delay. Each [`Debouncer::set`] aborts the pending timer
//! task and arms a new one, so at most one timer exists per instance.
//! Disposing or dropping the debouncer aborts the pending timer; nothing is
//! published after the owner is gone.
//!
//! Timers are tokio tasks spawned on the caller's runtime. Without one,
//! `set` settles the value immediately.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default quiet period for search input
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

pub struct Debouncer<T> {
    delay: Duration,
    settled: Arc<watch::Sender<T>>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer whose settled value starts at `initial`.
    /// No timer is armed until the first `set`.
    pub fn new(initial: T, delay: Duration) -> Self {
        let (settled, _) = watch::channel(initial);
        Self {
            delay,
            settled: Arc::new(settled),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed a new input value, restarting the quiet period.
    ///
    /// Outside a tokio runtime there is no timer to arm, so the value settles
    /// immediately.
    pub fn set(&mut self, value: T) {
        let rearmed = self.cancel();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(error = %e, "No tokio runtime for debounce timer, settling immediately");
                self.settled.send_replace(value);
                return;
            }
        };
        tracing::trace!(
            delay_ms = self.delay.as_millis() as u64,
            rearmed,
            "Arming debounce timer"
        );

        let settled = Arc::clone(&self.settled);
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            settled.send_replace(value);
        }));
    }

    /// Cancel any pending update and settle `value` right away.
    /// Existing subscribers keep receiving later updates.
    pub fn reset_to(&mut self, value: T) {
        self.cancel();
        self.settled.send_replace(value);
    }

    pub fn settled(&self) -> T {
        self.settled.borrow().clone()
    }

    /// Receiver notified each time a new value settles
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.settled.subscribe()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Debouncer<T> {
    /// Cancel any pending update. The settled value stays as it is.
    pub fn dispose(&mut self) {
        self.cancel();
    }

    /// Abort the pending timer, returning whether one was still running
    fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let running = !handle.is_finished();
                handle.abort();
                running
            }
            None => false,
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
