#![forbid(unsafe_code)]

//! Font specification mirrored onto measurement surfaces.

/// The font currently applied to the live container.
///
/// Measurement surfaces must render candidate strings under this font for
/// their widths to match the container. The component re-applies it on every
/// relayout pass so live font-size changes are picked up.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name, as the host styles the container.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f64,
}

impl FontSpec {
    /// Create a font spec.
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }

    /// Same family at a different size.
    #[must_use]
    pub fn with_size(mut self, size_px: f64) -> Self {
        self.size_px = size_px;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", 16.0)
    }
}
