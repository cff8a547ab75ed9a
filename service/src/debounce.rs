//! [`Debouncer`] of rapidly changing input.

use std::time::Duration;

use futures::future;
use tokio::time::{self, Instant};

/// Coalesces rapidly scheduled values into a single delayed one.
///
/// Only the latest scheduled value is ever released, and only once no other
/// value has been scheduled for the whole window.
#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    /// Quiescence window after the last [`Debouncer::schedule()`] call.
    window: Duration,

    /// Latest scheduled value along with the moment it's released at.
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    /// Window used by [`Debouncer`]s unless configured otherwise.
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

    /// Creates a new [`Debouncer`] with the provided quiescence `window`.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Returns the quiescence window of this [`Debouncer`].
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Schedules the `value`, superseding the pending one (if any) and
    /// restarting the window.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some((Instant::now() + self.window, value));
    }

    /// Cancels the pending value, returning it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }

    /// Indicates whether a value is waiting to be released.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Waits for the pending value to be released.
    ///
    /// Never resolves while nothing is scheduled. Dropping the returned
    /// [`Future`] before completion keeps the pending value intact.
    pub async fn elapsed(&mut self) -> T {
        if let Some((deadline, _)) = &self.pending {
            time::sleep_until(*deadline).await;
        }
        match self.pending.take() {
            Some((_, value)) => value,
            None => future::pending().await,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
