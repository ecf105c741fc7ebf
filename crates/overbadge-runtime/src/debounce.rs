#![forbid(unsafe_code)]

//! Resize debouncer: a two-state single-shot timer.
//!
//! Size-change notifiers fire in bursts while the user drags a split or the
//! window edge. The debouncer collapses each burst into one width: every
//! [`schedule_at`](ResizeDebouncer::schedule_at) re-arms the deadline and
//! overwrites the pending width (latest wins), and the width is released by
//! [`poll_at`](ResizeDebouncer::poll_at) once the deadline passes with no
//! further events.
//!
//! # State machine
//!
//! | State   | `schedule_at`            | `poll_at` past deadline |
//! |---------|--------------------------|-------------------------|
//! | Idle    | → Pending                | `None`                  |
//! | Pending | → Pending (new deadline) | `Some(width)` → Idle    |
//!
//! Deadlines are plain [`Instant`]s supplied by the caller; there is no
//! timer thread, so identical event sequences yield identical behavior.

use std::time::{Duration, Instant};

/// Default quiet period before a resize is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pending { deadline: Instant, width: f64 },
}

/// Latest-wins debouncer for container width events.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDebouncer {
    delay: Duration,
    state: State,
}

impl ResizeDebouncer {
    /// Create a debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: State::Idle,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a raw width event at `now`, re-arming the deadline.
    ///
    /// Any previously pending width is discarded; only the last event in a
    /// burst survives.
    pub fn schedule_at(&mut self, width: f64, now: Instant) {
        let deadline = now + self.delay;
        if matches!(self.state, State::Pending { .. }) {
            tracing::trace!(width, "re-arming pending resize");
        }
        self.state = State::Pending { deadline, width };
    }

    /// Release the pending width if the quiet period has elapsed.
    ///
    /// Returns `Some(width)` at most once per burst and resets to Idle.
    pub fn poll_at(&mut self, now: Instant) -> Option<f64> {
        match self.state {
            State::Pending { deadline, width } if now >= deadline => {
                self.state = State::Idle;
                Some(width)
            }
            _ => None,
        }
    }

    /// Drop any pending width without firing.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    /// True while a width is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// The width that would fire next, if any.
    #[must_use]
    pub fn pending_width(&self) -> Option<f64> {
        match self.state {
            State::Pending { width, .. } => Some(width),
            State::Idle => None,
        }
    }

    /// Time left until the pending deadline, `Duration::ZERO` if already
    /// past, `None` when idle.
    #[must_use]
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        match self.state {
            State::Pending { deadline, .. } => {
                Some(deadline.saturating_duration_since(now))
            }
            State::Idle => None,
        }
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
