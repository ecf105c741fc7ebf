#![forbid(unsafe_code)]

//! Resize monitor: debounced size-change intake with teardown safety.
//!
//! The host's size-change notifier calls [`ResizeMonitor::notify`] with each
//! raw content-box width; the component polls for the settled width. After
//! [`disconnect`](ResizeMonitor::disconnect) every notification is dropped,
//! so a callback that outlives its component can never touch freed state.

use std::time::{Duration, Instant};

use crate::debounce::ResizeDebouncer;

/// Debounced intake for container size changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeMonitor {
    debouncer: ResizeDebouncer,
    connected: bool,
}

impl ResizeMonitor {
    /// Create a monitor with the given debounce delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: ResizeDebouncer::new(delay),
            connected: true,
        }
    }

    /// Feed a raw size-change notification.
    ///
    /// No-op after [`disconnect`](Self::disconnect).
    pub fn notify(&mut self, width: f64, now: Instant) {
        if !self.connected {
            tracing::trace!(width, "dropping notification after disconnect");
            return;
        }
        self.debouncer.schedule_at(width, now);
    }

    /// The settled width, once the debounce quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        if !self.connected {
            return None;
        }
        self.debouncer.poll_at(now)
    }

    /// Stop observing. Pending and future notifications are dropped.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.debouncer.cancel();
    }

    /// True until [`disconnect`](Self::disconnect) is called.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// True while a width is waiting out the quiet period.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

impl Default for ResizeMonitor {
    fn default() -> Self {
        Self::new(crate::debounce::DEFAULT_DEBOUNCE)
    }
}
