#![forbid(unsafe_code)]

//! Text measurement for the overbadge engine.
//!
//! This crate provides the measurement primitives the fit planner runs on:
//! - [`FontSpec`] - the font applied to the live container
//! - [`StyleClass`] - a style-class identifier for badge surfaces
//! - [`MeasureSurface`] / [`SurfaceFactory`] - the host measurement seam
//! - [`MeasureService`] - lazily-created, class-keyed surface handles
//! - [`WidthCache`] - LRU cache for display-width lookups
//! - [`MonospaceSurface`] / [`MonospaceFactory`] - deterministic reference host
//!
//! # Example
//! ```
//! use overbadge_text::{FontSpec, MeasureService, MonospaceFactory, StyleClass};
//!
//! let font = FontSpec::new("monospace", 2.0);
//! let mut service = MeasureService::new(MonospaceFactory::default(), font);
//!
//! // One pixel per cell at size 2.0 with the default advance ratio.
//! assert_eq!(service.measure_text("hello"), 5.0);
//!
//! // Badge surfaces are created lazily, once per style class.
//! let class = StyleClass::default();
//! let w1 = service.badge_width(&class);
//! let w2 = service.badge_width(&class);
//! assert_eq!(w1, w2);
//! ```

pub mod font;
pub mod service;
pub mod surface;
pub mod width_cache;

pub use font::FontSpec;
pub use service::MeasureService;
pub use surface::{
    MeasureSurface, MonospaceFactory, MonospaceSurface, SurfaceFactory, display_width,
};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};

/// Style-class identifier applied to a badge measurement surface.
///
/// Badge widths depend on the class the host styles the badge with, so the
/// [`MeasureService`] keys its badge surface handles by this type. The
/// default class matches the engine's stock badge styling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleClass(String);

/// Class used when the caller does not supply one.
pub const DEFAULT_BADGE_CLASS: &str = "bdg-badge";

impl StyleClass {
    /// Create a style class from an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The class identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StyleClass {
    fn default() -> Self {
        Self::new(DEFAULT_BADGE_CLASS)
    }
}

impl From<&str> for StyleClass {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for StyleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
