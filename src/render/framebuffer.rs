//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a checked view over a caller-owned color buffer. The host owns
//! the memory; the view only borrows it for the duration of a fill.

use super::shader::PixelShader;
use crate::error::RenderError;

/// A view into a row-major color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass a buffer + dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// The slice may be longer than `width * height`; only the leading
    /// `width * height` entries belong to the view.
    ///
    /// # Errors
    /// - [`RenderError::EmptyDimensions`] if either dimension is zero
    /// - [`RenderError::DimensionOverflow`] if `width * height` overflows `usize`
    /// - [`RenderError::BufferTooSmall`] if the slice can't hold every pixel
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Result<Self, RenderError> {
        let required = pixel_count(width, height)?;
        if color_buffer.len() < required {
            return Err(RenderError::BufferTooSmall {
                required,
                actual: color_buffer.len(),
            });
        }
        Ok(Self {
            color_buffer: &mut color_buffer[..required],
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        self.color_buffer
    }

    /// Set a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y as usize) * (self.width as usize) + x as usize] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.color_buffer[(y as usize) * (self.width as usize) + x as usize])
        } else {
            None
        }
    }

    /// Run `shader` over every pixel of the view.
    ///
    /// Row `r` of the view is shaded as image row `first_row + r`, so a view
    /// over a horizontal band of a larger image shades the same colors the
    /// full image would at those rows.
    pub fn shade_from_row<S: PixelShader>(&mut self, first_row: u32, shader: &S) {
        let width = self.width as usize;
        for (row, line) in self.color_buffer.chunks_exact_mut(width).enumerate() {
            shader.shade_row(first_row + row as u32, line);
        }
    }

    /// Run `shader` over every pixel, treating the view as a whole image.
    pub fn shade<S: PixelShader>(&mut self, shader: &S) {
        self.shade_from_row(0, shader);
    }
}

/// Number of pixels in a `width` x `height` image.
pub fn pixel_count(width: u32, height: u32) -> Result<usize, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(RenderError::DimensionOverflow { width, height })
}
