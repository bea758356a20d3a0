//! Packed color helpers.
//!
//! Colors are stored as `u32` in `0xAABBGGRR` layout: red in the low byte,
//! then green, blue, and alpha in the high byte. Read as little-endian bytes
//! this is R, G, B, A, the layout of an RGBA32 texture.

/// Alpha value written for every plasma pixel.
pub const OPAQUE_ALPHA: u8 = 0xFF;

/// Mid-grey produced when the field value is zero (e.g. pixel (0, 0) at frame 0).
pub const MID_GREY: u32 = 0xFF7F7F7F;

/// Bytes per pixel of a packed buffer viewed as texture data.
pub const BYTES_PER_PIXEL: usize = 4;

/// Pack RGB channels into an opaque `0xAABBGGRR` color.
#[inline]
pub fn pack_abgr(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16) | ((OPAQUE_ALPHA as u32) << 24)
}

/// Unpack a `0xAABBGGRR` color into `(r, g, b, a)`.
#[inline]
pub fn unpack_abgr(color: u32) -> (u8, u8, u8, u8) {
    let r = (color & 0xFF) as u8;
    let g = ((color >> 8) & 0xFF) as u8;
    let b = ((color >> 16) & 0xFF) as u8;
    let a = ((color >> 24) & 0xFF) as u8;
    (r, g, b, a)
}

/// View a packed color buffer as raw bytes, 4 per pixel.
///
/// On little-endian targets each pixel reads as R, G, B, A.
pub fn as_rgba_bytes(pixels: &[u32]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}
