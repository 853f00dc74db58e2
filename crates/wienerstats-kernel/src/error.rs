//! Error types for wienerstats-kernel
//!
//! Every statistics call validates its geometry up front. A rejected call
//! returns one of these errors and leaves M and H untouched.

use thiserror::Error;

/// Errors that can occur during statistics computation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] wienerstats_core::Error),

    /// First column of the rectangle is odd
    #[error("h_start must be even, got {0}")]
    OddHorizontalStart(usize),

    /// Degraded tap window reaches outside its buffer
    #[error("degraded halo spans {first:?}..={last}, buffer length {len}")]
    HaloOutOfBounds {
        /// Lowest buffer index the window would read, if representable
        first: Option<usize>,
        /// Highest buffer index the window would read
        last: usize,
        /// Degraded buffer length
        len: usize,
    },

    /// Source rectangle reaches outside its buffer
    #[error("source rectangle ends at index {last}, buffer length {len}")]
    SourceOutOfBounds {
        /// Highest buffer index the rectangle would read
        last: usize,
        /// Source buffer length
        len: usize,
    },

    /// Averaged rectangle reaches outside its buffer
    #[error("rectangle ends at index {last}, buffer length {len}")]
    RectOutOfBounds {
        /// Highest buffer index the rectangle would read
        last: usize,
        /// Buffer length
        len: usize,
    },

    /// Caller-provided M or H slice is shorter than the window requires
    #[error("{which} output too small: need {needed}, got {got}")]
    OutputTooSmall {
        /// "M" or "H"
        which: &'static str,
        /// Required length
        needed: usize,
        /// Provided length
        got: usize,
    },

    /// Row wider than the per-row staging accumulator can hold
    #[error("row width {width} exceeds staging limit {max}")]
    RowTooWide {
        /// Rectangle width
        width: usize,
        /// Widest supported row for the sample type
        max: usize,
    },

    /// Requested path is not compiled in or not supported here
    #[error("statistics path unavailable: {0}")]
    PathUnavailable(&'static str),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halo_message() {
        let err = KernelError::HaloOutOfBounds {
            first: None,
            last: 63,
            len: 400,
        };
        assert_eq!(
            err.to_string(),
            "degraded halo spans None..=63, buffer length 400"
        );
        let err = KernelError::HaloOutOfBounds {
            first: Some(2),
            last: 256,
            len: 256,
        };
        assert_eq!(
            err.to_string(),
            "degraded halo spans Some(2)..=256, buffer length 256"
        );
    }
}
