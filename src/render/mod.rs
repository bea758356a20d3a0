//! Buffer filling.
//!
//! - [`FrameBuffer`]: checked view over the caller's pixel slice
//! - [`PixelShader`] / [`PlasmaShader`]: per-pixel color computation
//! - [`PlasmaRenderer`]: whole-frame and row-band fills

mod framebuffer;
mod renderer;
mod shader;

pub use framebuffer::{pixel_count, FrameBuffer};
pub use renderer::PlasmaRenderer;
pub use shader::{PixelShader, PlasmaShader};
