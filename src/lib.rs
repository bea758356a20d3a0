//! A procedural plasma effect for host-managed textures.
//!
//! The host engine owns the texture buffer and the frame loop. Once per frame
//! it hands this crate a `width * height` buffer of packed `0xAABBGGRR`
//! colors and a frame counter, and every pixel is overwritten with the plasma
//! color for that frame. The crate keeps no state between calls.
//!
//! Native hosts load the `cdylib` and call [`ffi::update_raw_texture_data`].
//! Rust hosts use [`PlasmaRenderer`] directly:
//!
//! ```
//! use plasma::prelude::*;
//!
//! let (width, height) = (64, 64);
//! let mut pixels = vec![0u32; width * height];
//! let renderer = PlasmaRenderer::default();
//! for frame in 0..3 {
//!     renderer.fill_buffer(&mut pixels, width as u32, height as u32, frame)?;
//! }
//! # Ok::<(), plasma::RenderError>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod error;
pub mod ffi;
pub mod plasma;
pub mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::{ChannelNarrowing, PlasmaConfig};
pub use error::RenderError;
pub use plasma::plasma_color;
pub use render::PlasmaRenderer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use plasma::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors::{as_rgba_bytes, pack_abgr, unpack_abgr};

    // Configuration
    pub use crate::config::{frame_for_elapsed, ChannelNarrowing, PlasmaConfig};

    // Errors
    pub use crate::error::RenderError;

    // Rendering
    pub use crate::plasma::{plasma_color, plasma_color_with};
    pub use crate::render::{FrameBuffer, PixelShader, PlasmaRenderer, PlasmaShader};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::plasma::{field_value, FrameTerms};
    pub use crate::render::{FrameBuffer, PixelShader, PlasmaShader};
}
