//! Cancellable-timer abstraction used by the search controller.

use dioxus::prelude::*;
use std::time::Duration;

pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Holds at most one pending callback. Scheduling again cancels the
/// previous timer first (last write wins), so a burst of calls fires the
/// callback once, with whatever the final call carried.
///
/// Must be used from within a Dioxus runtime (it spawns on the current
/// scope).
#[derive(Default)]
pub struct Debouncer {
    pending: Option<Task>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Cancel any pending callback and arm a new one after `delay`.
    pub fn schedule(&mut self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(spawn(async move {
            sleep(delay).await;
            callback();
        }));
    }

    /// Drop the pending callback without firing it.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
