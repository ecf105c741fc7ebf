#![forbid(unsafe_code)]

//! Measurement surfaces: the seam between the fit planner and the host.
//!
//! The planner never talks to a real layout engine. It measures candidate
//! strings through [`MeasureSurface`], and hosts provide surfaces through a
//! [`SurfaceFactory`], typically backed by an off-screen element styled with
//! the container's font. [`MonospaceSurface`] is the bundled reference host
//! for terminal-style hosts where every cell has the same advance.

use unicode_width::UnicodeWidthStr;

use crate::font::FontSpec;
use crate::width_cache::WidthCache;
use crate::StyleClass;

/// Display width of a string in terminal cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// An off-screen surface that reports rendered pixel widths.
///
/// Implementations must reflect the most recently applied font: the engine
/// calls [`MeasureSurface::set_font`] on every relayout pass before
/// measuring.
pub trait MeasureSurface {
    /// Pixel width of `text` rendered on this surface. Non-negative.
    fn measure(&mut self, text: &str) -> f64;

    /// Re-apply the live container font.
    fn set_font(&mut self, font: &FontSpec);
}

/// Creates measurement surfaces on behalf of the host.
///
/// The [`MeasureService`](crate::MeasureService) calls these lazily, at most
/// once per handle: one shared text surface, plus one badge surface per
/// style class. A badge surface measures the reserved badge element itself,
/// so `measure("")` reports the element's chrome width under its class.
pub trait SurfaceFactory {
    /// Surface type produced by this factory.
    type Surface: MeasureSurface;

    /// Create the text measurement surface.
    fn text_surface(&self, font: &FontSpec) -> Self::Surface;

    /// Create a badge measurement surface styled with `class`.
    fn badge_surface(&self, class: &StyleClass, font: &FontSpec) -> Self::Surface;
}

/// Fraction of the font size one monospace cell advances.
const ADVANCE_RATIO: f64 = 0.5;

/// Deterministic fixed-advance measurement surface.
///
/// Width is `display_width(text) * advance + chrome`, where the advance is
/// derived from the current font size and `chrome` is the fixed width of the
/// surface's own box (zero for text surfaces, the badge padding for badge
/// surfaces). Cell counts are memoized in a [`WidthCache`]; cells are
/// font-independent so the cache survives font changes.
#[derive(Debug)]
pub struct MonospaceSurface {
    advance_px: f64,
    chrome_px: f64,
    cache: WidthCache,
}

impl MonospaceSurface {
    /// Create a surface for the given font with the given chrome width.
    #[must_use]
    pub fn new(font: &FontSpec, chrome_px: f64) -> Self {
        Self {
            advance_px: advance_for(font),
            chrome_px,
            cache: WidthCache::with_default_capacity(),
        }
    }

    /// Current per-cell advance in pixels.
    #[must_use]
    pub fn advance_px(&self) -> f64 {
        self.advance_px
    }

    /// Width-cache statistics, for diagnostics.
    #[must_use]
    pub fn cache_stats(&self) -> crate::CacheStats {
        self.cache.stats()
    }
}

impl MeasureSurface for MonospaceSurface {
    fn measure(&mut self, text: &str) -> f64 {
        let cells = self.cache.get_or_compute(text);
        self.chrome_px + cells as f64 * self.advance_px
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.advance_px = advance_for(font);
    }
}

#[inline]
fn advance_for(font: &FontSpec) -> f64 {
    (font.size_px * ADVANCE_RATIO).max(0.0)
}

/// Factory for [`MonospaceSurface`] handles.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceFactory {
    /// Fixed chrome width of a badge element (padding + borders), in pixels.
    pub badge_chrome_px: f64,
}

/// Default badge chrome: one em of padding either side at the default size.
const DEFAULT_BADGE_CHROME_PX: f64 = 16.0;

impl Default for MonospaceFactory {
    fn default() -> Self {
        Self {
            badge_chrome_px: DEFAULT_BADGE_CHROME_PX,
        }
    }
}

impl MonospaceFactory {
    /// Factory with a custom badge chrome width.
    #[must_use]
    pub fn with_badge_chrome(badge_chrome_px: f64) -> Self {
        Self { badge_chrome_px }
    }
}

impl SurfaceFactory for MonospaceFactory {
    type Surface = MonospaceSurface;

    fn text_surface(&self, font: &FontSpec) -> Self::Surface {
        MonospaceSurface::new(font, 0.0)
    }

    fn badge_surface(&self, _class: &StyleClass, font: &FontSpec) -> Self::Surface {
        // The monospace host styles every badge class identically; width
        // differences between classes are a real-host concern.
        MonospaceSurface::new(font, self.badge_chrome_px)
    }
}
