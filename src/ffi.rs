//! C ABI entry point loaded by the host engine.
//!
//! The host allocates an RGBA32 texture buffer of `width * height` pixels,
//! calls [`update_raw_texture_data`] once per frame with its frame counter,
//! and uploads the buffer after the call returns.

use std::panic::{self, AssertUnwindSafe};

use crate::render::{pixel_count, PlasmaRenderer};

/// Why an FFI call was refused before touching memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NullBuffer,
    NonPositiveDimensions,
}

fn check_arguments(buffer: *mut u32, width: i32, height: i32) -> Result<(u32, u32), Rejection> {
    if buffer.is_null() {
        return Err(Rejection::NullBuffer);
    }
    if width <= 0 || height <= 0 {
        return Err(Rejection::NonPositiveDimensions);
    }
    Ok((width as u32, height as u32))
}

/// Fill `buffer` with frame `frame` of the plasma effect.
///
/// A null `buffer` or a non-positive dimension is logged and the call returns
/// without writing anything.
///
/// # Safety
/// `buffer` must be null or point to at least `width * height` writable,
/// properly aligned `u32`s that nothing else reads or writes for the duration
/// of the call.
#[no_mangle]
pub unsafe extern "C" fn update_raw_texture_data(
    buffer: *mut u32,
    width: i32,
    height: i32,
    frame: u32,
) {
    let (w, h) = match check_arguments(buffer, width, height) {
        Ok(dims) => dims,
        Err(rejection) => {
            log::error!(
                "update_raw_texture_data rejected ({:?}): buffer={:p} size={}x{}",
                rejection,
                buffer,
                width,
                height
            );
            return;
        }
    };

    let len = match pixel_count(w, h) {
        Ok(len) => len,
        Err(e) => {
            log::error!("update_raw_texture_data rejected: {e}");
            return;
        }
    };

    // SAFETY: the caller guarantees `buffer` is valid for `width * height`
    // exclusive writes, and we checked it is non-null.
    let pixels = unsafe { std::slice::from_raw_parts_mut(buffer, len) };

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        PlasmaRenderer::default().fill_buffer(pixels, w, h, frame)
    }));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::error!("update_raw_texture_data failed: {e}"),
        Err(_) => log::error!("update_raw_texture_data panicked while filling {w}x{h} frame {frame}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MID_GREY;

    #[test]
    fn matches_safe_fill() {
        let (w, h, frame) = (9, 5, 4321);
        let mut via_ffi = vec![0u32; 45];
        unsafe { update_raw_texture_data(via_ffi.as_mut_ptr(), w, h, frame) };

        let mut expected = vec![0u32; 45];
        PlasmaRenderer::default()
            .fill_buffer(&mut expected, w as u32, h as u32, frame)
            .unwrap();
        assert_eq!(via_ffi, expected);
    }

    #[test]
    fn single_pixel_frame_zero() {
        let mut pixel = 0u32;
        unsafe { update_raw_texture_data(&mut pixel, 1, 1, 0) };
        assert_eq!(pixel, MID_GREY);
    }

    #[test_log::test]
    fn null_buffer_is_ignored() {
        unsafe { update_raw_texture_data(std::ptr::null_mut(), 4, 4, 0) };
        assert_eq!(
            check_arguments(std::ptr::null_mut(), 4, 4),
            Err(Rejection::NullBuffer)
        );
    }

    #[test_log::test]
    fn non_positive_dimensions_write_nothing() {
        let mut buffer = vec![1u32; 4];
        unsafe {
            update_raw_texture_data(buffer.as_mut_ptr(), 0, 4, 10);
            update_raw_texture_data(buffer.as_mut_ptr(), 2, -2, 10);
            update_raw_texture_data(buffer.as_mut_ptr(), -1, -1, 10);
        }
        assert_eq!(buffer, vec![1, 1, 1, 1]);
    }
}
