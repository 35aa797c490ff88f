//! Error types for isosurface extraction.

use thiserror::Error;

/// Result type for isosurface operations.
pub type IsosurfaceResult<T> = Result<T, IsosurfaceError>;

/// Errors that can occur during isosurface extraction.
#[derive(Debug, Error)]
pub enum IsosurfaceError {
    /// Volume dimensions are too small to contain a single cell.
    #[error("volume too small: need at least 2 samples per axis, got {nx}x{ny}x{nz}")]
    VolumeTooSmall {
        /// Samples along x.
        nx: usize,
        /// Samples along y.
        ny: usize,
        /// Samples along z.
        nz: usize,
    },

    /// Value buffer length does not match the dimensions.
    #[error("value count {actual} does not match dimensions ({expected} expected)")]
    ValueCountMismatch {
        /// nx * ny * nz.
        expected: usize,
        /// Length of the provided buffer.
        actual: usize,
    },

    /// Volume contains a non-finite sample.
    #[error("volume contains a non-finite value at index {index}")]
    NonFiniteValue {
        /// Linear index of the offending sample.
        index: usize,
    },

    /// Requested level lies outside the volume's value range.
    #[error("level {level} outside volume range [{min}, {max}]")]
    LevelOutOfRange {
        /// Requested isosurface level.
        level: f64,
        /// Smallest sample value.
        min: f64,
        /// Largest sample value.
        max: f64,
    },

    /// Mask length does not match the volume.
    #[error("mask length {actual} does not match volume ({expected} expected)")]
    MaskShapeMismatch {
        /// Expected sample count.
        expected: usize,
        /// Length of the provided mask.
        actual: usize,
    },

    /// Step size must be at least 1.
    #[error("step size must be >= 1, got {0}")]
    InvalidStepSize(usize),

    /// Spacing components must be positive and finite.
    #[error("invalid spacing component {value} on axis {axis}")]
    InvalidSpacing {
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// Offending component.
        value: f64,
    },

    /// The level set does not intersect the (masked) volume.
    #[error("no surface found at the given level")]
    NoSurface,
}
