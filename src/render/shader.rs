//! Pixel shaders for full-frame fills.
//!
//! The frame buffer owns iteration over rows and columns; a shader only
//! answers "what color is pixel (x, y)". Work that depends on the frame but
//! not the pixel is done once when the shader is built.

use crate::config::{ChannelNarrowing, PlasmaConfig};
use crate::plasma::{field_color, normalize, FrameTerms};

/// Trait for per-pixel shading computations.
pub trait PixelShader {
    /// Compute the color of the pixel at image coordinates (x, y).
    fn shade(&self, x: u32, y: u32) -> u32;

    /// Shade one row of pixels, `out[x]` receiving pixel (x, y).
    ///
    /// Shaders with per-row invariants override this to compute them once.
    #[inline]
    fn shade_row(&self, y: u32, out: &mut [u32]) {
        for (x, pixel) in out.iter_mut().enumerate() {
            *pixel = self.shade(x as u32, y);
        }
    }
}

/// Plasma shader for a single frame.
///
/// Built once per frame from the full image dimensions. Coordinates are
/// normalized against those dimensions even when only a band of rows is
/// being filled.
pub struct PlasmaShader {
    width: u32,
    height: u32,
    terms: FrameTerms,
    narrowing: ChannelNarrowing,
}

impl PlasmaShader {
    pub fn new(width: u32, height: u32, frame: u32, config: &PlasmaConfig) -> Self {
        Self {
            width,
            height,
            terms: FrameTerms::new(config.time_at(frame)),
            narrowing: config.narrowing,
        }
    }

    pub fn terms(&self) -> &FrameTerms {
        &self.terms
    }
}

impl PixelShader for PlasmaShader {
    #[inline]
    fn shade(&self, x: u32, y: u32) -> u32 {
        let row_term = self.terms.row_term(normalize(y, self.height));
        let l = self.terms.field_in_row(normalize(x, self.width), row_term);
        field_color(l, self.narrowing)
    }

    #[inline]
    fn shade_row(&self, y: u32, out: &mut [u32]) {
        let row_term = self.terms.row_term(normalize(y, self.height));
        for (x, pixel) in out.iter_mut().enumerate() {
            let l = self.terms.field_in_row(normalize(x as u32, self.width), row_term);
            *pixel = field_color(l, self.narrowing);
        }
    }
}
