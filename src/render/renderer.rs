//! Frame-level plasma rendering.
//!
//! Provides the [`PlasmaRenderer`] struct, the safe entry point for filling a
//! caller-owned buffer once per frame. The renderer is stateless across
//! calls: everything that changes between frames comes from the `frame`
//! argument.

use super::framebuffer::{pixel_count, FrameBuffer};
use super::shader::PlasmaShader;
use crate::config::PlasmaConfig;
use crate::error::RenderError;
use crate::plasma::plasma_color_with;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlasmaRenderer {
    config: PlasmaConfig,
}

impl PlasmaRenderer {
    pub fn new(config: PlasmaConfig) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlasmaConfig {
        &self.config
    }

    /// Color of a single pixel under this renderer's configuration.
    #[inline]
    pub fn render_pixel(&self, x: u32, y: u32, width: u32, height: u32, frame: u32) -> u32 {
        plasma_color_with(x, y, width, height, frame, &self.config)
    }

    /// Fill `buffer[y * width + x]` for every pixel of a `width` x `height` frame.
    ///
    /// Entries past `width * height` are left untouched. On error nothing is
    /// written.
    pub fn fill_buffer(
        &self,
        buffer: &mut [u32],
        width: u32,
        height: u32,
        frame: u32,
    ) -> Result<(), RenderError> {
        let mut fb = FrameBuffer::new(buffer, width, height)?;
        let shader = PlasmaShader::new(width, height, frame, &self.config);
        fb.shade(&shader);
        log::debug!(
            "filled {}x{} plasma frame {} (t = {})",
            width,
            height,
            frame,
            shader.terms().time()
        );
        Ok(())
    }

    /// Fill a band of whole rows of a `width` x `height` frame.
    ///
    /// `band` holds rows `first_row..first_row + band.len() / width`, row-major.
    /// Pixels are normalized against the full frame, so filling disjoint bands
    /// (e.g. from `buffer.chunks_mut(width * rows)` on separate threads)
    /// produces the same buffer as one [`fill_buffer`](Self::fill_buffer) call.
    pub fn fill_rows(
        &self,
        band: &mut [u32],
        width: u32,
        height: u32,
        first_row: u32,
        frame: u32,
    ) -> Result<(), RenderError> {
        pixel_count(width, height)?;
        if band.len() % width as usize != 0 {
            return Err(RenderError::PartialRow {
                len: band.len(),
                width,
            });
        }
        let rows = band.len() / width as usize;
        if first_row as u64 + rows as u64 > height as u64 {
            return Err(RenderError::RowsOutOfRange {
                first_row,
                rows: u32::try_from(rows).unwrap_or(u32::MAX),
                height,
            });
        }
        if rows == 0 {
            return Ok(());
        }

        // rows <= height - first_row, so it fits in u32
        let mut fb = FrameBuffer::new(band, width, rows as u32)?;
        let shader = PlasmaShader::new(width, height, frame, &self.config);
        fb.shade_from_row(first_row, &shader);
        log::trace!(
            "filled rows {}..{} of {}x{} plasma frame {}",
            first_row,
            first_row as usize + rows,
            width,
            height,
            frame
        );
        Ok(())
    }
}
