//! The plasma field and its color mapping.
//!
//! For a pixel at normalized coordinates `(px, py)` and time `t` the field is
//!
//! ```text
//! l = sin(px * sin(1.3 t) + sin(4 py + t) * sin(t))
//! ```
//!
//! and each channel samples `l` at its own frequency, remapped from `[-1, 1]`
//! to `[0, 254]`:
//!
//! | channel | value                     |
//! |---------|---------------------------|
//! | red     | `sin(6 l)  * 127 + 127`   |
//! | green   | `sin(7 l)  * 127 + 127`   |
//! | blue    | `sin(10 l) * 127 + 127`   |
//!
//! All math is single precision. Results are deterministic on a given
//! platform but may differ in the last bit across `sin` implementations.

use crate::colors::pack_abgr;
use crate::config::{ChannelNarrowing, PlasmaConfig};

pub const RED_FREQUENCY: f32 = 6.0;
pub const GREEN_FREQUENCY: f32 = 7.0;
pub const BLUE_FREQUENCY: f32 = 10.0;

const CHANNEL_AMPLITUDE: f32 = 127.0;

/// Per-frame terms of the field that do not depend on the pixel.
///
/// Hoisting these out of the pixel loop (and the row term out of the column
/// loop) runs the same float operations as the direct formula, so the
/// resulting field values are bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTerms {
    time: f32,
    sin_scaled_time: f32, // sin(1.3 t)
    sin_time: f32,        // sin(t)
}

impl FrameTerms {
    #[inline]
    pub fn new(time: f32) -> Self {
        Self {
            time,
            sin_scaled_time: f32::sin(time * 1.3),
            sin_time: f32::sin(time),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// The part of the field shared by every pixel of a row: `sin(4 py + t) * sin(t)`.
    #[inline]
    pub fn row_term(&self, py: f32) -> f32 {
        f32::sin(py * 4.0 + self.time) * self.sin_time
    }

    /// Field value for a pixel whose row term is already known.
    #[inline]
    pub fn field_in_row(&self, px: f32, row_term: f32) -> f32 {
        f32::sin(px * self.sin_scaled_time + row_term)
    }
}

/// Scalar field value `l` in `[-1, 1]` at normalized coordinates.
#[inline]
pub fn field_value(px: f32, py: f32, terms: &FrameTerms) -> f32 {
    terms.field_in_row(px, terms.row_term(py))
}

/// Unnarrowed channel intensity, in `[0.0, 254.0]`.
#[inline]
pub fn channel_intensity(l: f32, frequency: f32) -> f32 {
    f32::sin(l * frequency) * CHANNEL_AMPLITUDE + CHANNEL_AMPLITUDE
}

#[inline]
pub fn channel(l: f32, frequency: f32, narrowing: ChannelNarrowing) -> u8 {
    narrowing.narrow(channel_intensity(l, frequency))
}

/// Map a field value to an opaque packed color.
#[inline]
pub fn field_color(l: f32, narrowing: ChannelNarrowing) -> u32 {
    let r = channel(l, RED_FREQUENCY, narrowing);
    let g = channel(l, GREEN_FREQUENCY, narrowing);
    let b = channel(l, BLUE_FREQUENCY, narrowing);
    pack_abgr(r, g, b)
}

/// Normalize a pixel coordinate against its axis extent.
#[inline]
pub fn normalize(coord: u32, extent: u32) -> f32 {
    coord as f32 / extent as f32
}

/// Color of one pixel under an explicit configuration.
#[inline]
pub fn plasma_color_with(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    frame: u32,
    config: &PlasmaConfig,
) -> u32 {
    let terms = FrameTerms::new(config.time_at(frame));
    let l = field_value(normalize(x, width), normalize(y, height), &terms);
    field_color(l, config.narrowing)
}

/// Color of one pixel with the reference settings (60 fps, truncation).
///
/// Pure: the result depends only on the arguments.
#[inline]
pub fn plasma_color(x: u32, y: u32, width: u32, height: u32, frame: u32) -> u32 {
    plasma_color_with(x, y, width, height, frame, &PlasmaConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{unpack_abgr, MID_GREY, OPAQUE_ALPHA};
    use approx::assert_relative_eq;

    /// The field written out in one expression, without hoisting.
    fn direct_field(px: f32, py: f32, t: f32) -> f32 {
        f32::sin(px * f32::sin(t * 1.3) + f32::sin(py * 4.0 + t) * f32::sin(t))
    }

    #[test]
    fn origin_at_frame_zero_is_mid_grey() {
        assert_eq!(plasma_color(0, 0, 1, 1, 0), MID_GREY);
    }

    #[test]
    fn whole_frame_zero_is_mid_grey() {
        // t = 0 zeroes both time terms, so l = sin(0) for every pixel.
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(plasma_color(x, y, 8, 8, 0), MID_GREY);
            }
        }
    }

    #[test]
    fn hoisted_terms_match_direct_formula() {
        for frame in [1u32, 7, 60, 61, 1000, 123_456] {
            let t = frame as f32 / 60.0;
            let terms = FrameTerms::new(t);
            for (px, py) in [(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (0.99, 0.01)] {
                assert_eq!(
                    field_value(px, py, &terms).to_bits(),
                    direct_field(px, py, t).to_bits()
                );
            }
        }
    }

    #[test]
    fn matches_reference_channels() {
        let (x, y, w, h, frame) = (37, 91, 128, 128, 250);
        let t = frame as f32 / 60.0;
        let l = direct_field(x as f32 / w as f32, y as f32 / h as f32, t);
        let expected_r = (f32::sin(l * 6.0) * 127.0 + 127.0) as u32;
        let expected_g = (f32::sin(l * 7.0) * 127.0 + 127.0) as u32;
        let expected_b = (f32::sin(l * 10.0) * 127.0 + 127.0) as u32;
        let expected = expected_r + (expected_g << 8) + (expected_b << 16) + 0xff000000;
        assert_eq!(plasma_color(x, y, w, h, frame), expected);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = plasma_color(13, 5, 64, 32, 4242);
        let b = plasma_color(13, 5, 64, 32, 4242);
        assert_eq!(a, b);
    }

    #[test]
    fn alpha_is_always_opaque() {
        for frame in (0..600).step_by(37) {
            for y in (0..64).step_by(7) {
                for x in (0..64).step_by(5) {
                    let (_, _, _, a) = unpack_abgr(plasma_color(x, y, 64, 64, frame));
                    assert_eq!(a, OPAQUE_ALPHA);
                }
            }
        }
    }

    #[test]
    fn field_stays_within_unit_range() {
        for frame in (0..2000).step_by(13) {
            let terms = FrameTerms::new(frame as f32 / 60.0);
            for i in 0..=16 {
                let p = i as f32 / 16.0;
                let l = field_value(p, 1.0 - p, &terms);
                assert!((-1.0..=1.0).contains(&l), "l = {l} at frame {frame}");
            }
        }
    }

    #[test]
    fn channel_intensity_stays_within_byte_range() {
        for i in -100..=100 {
            let l = i as f32 / 100.0;
            for freq in [RED_FREQUENCY, GREEN_FREQUENCY, BLUE_FREQUENCY] {
                let v = channel_intensity(l, freq);
                assert!((0.0..=254.0).contains(&v), "intensity {v} for l = {l}");
            }
        }
    }

    #[test]
    fn zero_field_intensity_is_midpoint() {
        assert_relative_eq!(channel_intensity(0.0, RED_FREQUENCY), 127.0);
        assert_relative_eq!(channel_intensity(0.0, BLUE_FREQUENCY), 127.0);
    }

    #[test]
    fn colors_change_smoothly_between_frames() {
        // |dl/dt| <= |d/dt (px sin 1.3t)| + |d/dt (sin(4py + t) sin t)| <= 1.3 + 1,
        // so one frame moves a channel by at most 127 * freq * 2.3 / 60, plus one
        // for truncation.
        let max_step = |freq: f32| 127.0 * freq * 2.3 / 60.0 + 1.0;
        let (w, h) = (32, 32);
        for (x, y) in [(0, 0), (5, 27), (16, 16), (31, 31), (30, 2)] {
            for frame in 0..600 {
                let (r0, g0, b0, _) = unpack_abgr(plasma_color(x, y, w, h, frame));
                let (r1, g1, b1, _) = unpack_abgr(plasma_color(x, y, w, h, frame + 1));
                let dr = (r1 as f32 - r0 as f32).abs();
                let dg = (g1 as f32 - g0 as f32).abs();
                let db = (b1 as f32 - b0 as f32).abs();
                assert!(dr <= max_step(RED_FREQUENCY), "red jumped {dr} at frame {frame}");
                assert!(dg <= max_step(GREEN_FREQUENCY), "green jumped {dg} at frame {frame}");
                assert!(db <= max_step(BLUE_FREQUENCY), "blue jumped {db} at frame {frame}");
            }
        }
    }

    #[test]
    fn time_varies_output() {
        assert_ne!(plasma_color(10, 10, 64, 64, 30), plasma_color(10, 10, 64, 64, 90));
    }

    #[test]
    fn round_differs_from_truncate_by_at_most_one() {
        let truncate = PlasmaConfig::default();
        let round = PlasmaConfig {
            narrowing: ChannelNarrowing::Round,
            ..PlasmaConfig::default()
        };
        for frame in (0..300).step_by(11) {
            for x in 0..16 {
                let (r0, g0, b0, _) = unpack_abgr(plasma_color_with(x, 3, 16, 16, frame, &truncate));
                let (r1, g1, b1, _) = unpack_abgr(plasma_color_with(x, 3, 16, 16, frame, &round));
                for (t, r) in [(r0, r1), (g0, g1), (b0, b1)] {
                    assert!(r >= t && r - t <= 1);
                }
            }
        }
    }

    #[test]
    fn custom_frame_rate_rescales_time() {
        let half_speed = PlasmaConfig {
            frame_rate: 30.0,
            ..PlasmaConfig::default()
        };
        // Frame 50 at 30 fps is the same instant as frame 100 at 60 fps.
        assert_eq!(
            plasma_color_with(9, 4, 20, 20, 50, &half_speed),
            plasma_color(9, 4, 20, 20, 100)
        );
    }
}
