use thiserror::Error;

/// Contract violations detected before any pixel is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("frame dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("frame dimensions {width}x{height} overflow the addressable pixel count")]
    DimensionOverflow { width: u32, height: u32 },

    #[error("buffer holds {actual} pixels but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("band of {rows} rows starting at row {first_row} exceeds height {height}")]
    RowsOutOfRange {
        first_row: u32,
        rows: u32,
        height: u32,
    },

    #[error("band length {len} is not a whole number of {width}-pixel rows")]
    PartialRow { len: usize, width: u32 },

    #[error("frame rate must be finite and positive, got {0}")]
    InvalidFrameRate(f32),
}
