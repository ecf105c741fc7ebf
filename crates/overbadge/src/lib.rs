#![forbid(unsafe_code)]

//! Overbadge public facade crate.
//!
//! Re-exports the measurement, planning, and runtime surface area so hosts
//! depend on one crate, plus a lightweight prelude for day-to-day usage.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use overbadge::prelude::*;
//!
//! let config = BadgeConfig::new(["alpha", "beta", "gamma"]);
//! let mut badge = OverflowBadge::new(MonospaceFactory::default(), config);
//!
//! let container = FixedContainer::mounted(400.0, FontSpec::default());
//! assert!(badge.pump(&container, Instant::now()));
//! assert_eq!(badge.display().text.as_deref(), Some("alpha, beta, gamma"));
//! ```

// --- Measurement re-exports ------------------------------------------------

pub use overbadge_text::{
    CacheStats, FontSpec, MeasureService, MeasureSurface, MonospaceFactory, MonospaceSurface,
    StyleClass, SurfaceFactory, WidthCache, display_width,
};

// --- Planning re-exports ---------------------------------------------------

pub use overbadge_layout::{
    BadgeModel, DisplayModel, FitOptions, FitResult, ITEM_SEPARATOR, OVERFLOW_SUFFIX,
    build_display, default_min_width, plan,
};

// --- Runtime re-exports ----------------------------------------------------

pub use overbadge_runtime::{
    BadgeConfig, Container, DEFAULT_DEBOUNCE, FixedContainer, OverflowBadge, ResizeDebouncer,
    ResizeMonitor,
};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BadgeConfig, BadgeModel, Container, DisplayModel, FitOptions, FixedContainer, FontSpec,
        MeasureService, MeasureSurface, MonospaceFactory, OverflowBadge, StyleClass,
        SurfaceFactory,
    };
}
