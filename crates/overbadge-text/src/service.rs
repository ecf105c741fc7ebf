#![forbid(unsafe_code)]

//! Class-keyed measurement service.
//!
//! One [`MeasureService`] owns every measurement surface a component uses:
//! the shared text surface and one badge surface per style class. Handles
//! are created lazily on first use and retained for the life of the service,
//! so a handle that exists is always reused, never duplicated. Hosts supply
//! the surfaces through [`SurfaceFactory`], which keeps the service testable
//! without a real rendering backend.

use rustc_hash::FxHashMap;

use crate::font::FontSpec;
use crate::surface::{MeasureSurface, SurfaceFactory};
use crate::StyleClass;

/// Lazily-initialized measurement surfaces, keyed by style class.
pub struct MeasureService<F: SurfaceFactory> {
    factory: F,
    font: FontSpec,
    text: Option<F::Surface>,
    badges: FxHashMap<StyleClass, F::Surface>,
}

// Manual impl: surfaces need not be Debug themselves.
impl<F: SurfaceFactory + std::fmt::Debug> std::fmt::Debug for MeasureService<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasureService")
            .field("factory", &self.factory)
            .field("font", &self.font)
            .field("surfaces", &self.surface_count())
            .finish()
    }
}

impl<F: SurfaceFactory> MeasureService<F> {
    /// Create a service over the given factory and initial font.
    ///
    /// No surfaces are created until the first measurement.
    #[must_use]
    pub fn new(factory: F, font: FontSpec) -> Self {
        Self {
            factory,
            font,
            text: None,
            badges: FxHashMap::default(),
        }
    }

    /// The font currently applied to the surfaces.
    #[must_use]
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Re-apply the container font to every live surface.
    ///
    /// Called at the start of each relayout pass so measurements track live
    /// font changes.
    pub fn apply_font(&mut self, font: &FontSpec) {
        if self.font == *font {
            return;
        }
        tracing::trace!(size_px = font.size_px, "font changed, restyling surfaces");
        self.font = font.clone();
        if let Some(surface) = self.text.as_mut() {
            surface.set_font(font);
        }
        for surface in self.badges.values_mut() {
            surface.set_font(font);
        }
    }

    /// Pixel width of `text` under the current font.
    pub fn measure_text(&mut self, text: &str) -> f64 {
        let Self {
            factory,
            font,
            text: surface,
            ..
        } = self;
        surface
            .get_or_insert_with(|| {
                tracing::trace!("creating text measurement surface");
                factory.text_surface(font)
            })
            .measure(text)
    }

    /// Pixel width of the empty reserved badge element under `class`.
    pub fn badge_width(&mut self, class: &StyleClass) -> f64 {
        self.badges
            .entry(class.clone())
            .or_insert_with(|| {
                tracing::trace!(class = %class, "creating badge measurement surface");
                self.factory.badge_surface(class, &self.font)
            })
            .measure("")
    }

    /// Number of live surface handles (text + badges).
    #[must_use]
    pub fn surface_count(&self) -> usize {
        usize::from(self.text.is_some()) + self.badges.len()
    }
}
