//! Renderer configuration.
//!
//! The defaults reproduce the reference plasma exactly: a 60-frame-per-second
//! cadence and truncating float-to-channel conversion.

use crate::error::RenderError;

/// Frame cadence the host is assumed to advance the counter at.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// How a channel value in `[0.0, 254.0]` is narrowed to a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelNarrowing {
    /// Truncate toward zero, matching an implicit float-to-int conversion.
    #[default]
    Truncate,
    /// Round to the nearest integer.
    Round,
}

impl ChannelNarrowing {
    #[inline]
    pub fn narrow(self, value: f32) -> u8 {
        // `as` saturates, so NaN maps to 0 and out-of-range values clamp.
        match self {
            ChannelNarrowing::Truncate => value as u8,
            ChannelNarrowing::Round => value.round() as u8,
        }
    }
}

impl std::fmt::Display for ChannelNarrowing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelNarrowing::Truncate => write!(f, "Truncate"),
            ChannelNarrowing::Round => write!(f, "Round"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlasmaConfig {
    /// Frames per unit of animation time: `t = frame / frame_rate`.
    pub frame_rate: f32,
    pub narrowing: ChannelNarrowing,
}

impl Default for PlasmaConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            narrowing: ChannelNarrowing::default(),
        }
    }
}

impl PlasmaConfig {
    pub fn new(frame_rate: f32, narrowing: ChannelNarrowing) -> Result<Self, RenderError> {
        let config = Self {
            frame_rate,
            narrowing,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            Ok(())
        } else {
            Err(RenderError::InvalidFrameRate(self.frame_rate))
        }
    }

    /// Continuous animation time for a frame counter.
    #[inline]
    pub fn time_at(&self, frame: u32) -> f32 {
        frame as f32 / self.frame_rate
    }
}

/// Convert elapsed host time into a frame counter.
///
/// Hosts that derive the counter from a clock rather than incrementing it
/// use `trunc(seconds * frame_rate)`. Negative and NaN input give frame 0.
pub fn frame_for_elapsed(seconds: f32, frame_rate: f32) -> u32 {
    (seconds * frame_rate) as u32
}
