#![forbid(unsafe_code)]

//! Runtime driver for the overbadge engine.
//!
//! Ties the measurement and planning crates to a host event loop:
//! - [`ResizeDebouncer`] - Idle/Pending single-shot timer state machine
//! - [`ResizeMonitor`] - debounced size-change intake with teardown safety
//! - [`OverflowBadge`] - the component: configuration, change detection,
//!   synchronous relayout, and the renderable [`DisplayModel`] output
//!
//! The runtime owns no threads and no timers. Hosts push raw size-change
//! notifications in and call [`OverflowBadge::pump`] from their own loop;
//! deadlines are explicit [`std::time::Instant`]s, which keeps every test
//! deterministic.
//!
//! [`DisplayModel`]: overbadge_layout::DisplayModel

pub mod component;
pub mod debounce;
pub mod monitor;

pub use component::{BadgeConfig, Container, FixedContainer, OverflowBadge};
pub use debounce::{DEFAULT_DEBOUNCE, ResizeDebouncer};
pub use monitor::ResizeMonitor;
