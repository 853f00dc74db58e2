//! Error types for wienerstats-core
//!
//! Provides a unified error type for constructing the core data model.
//! Each variant captures enough context for diagnostics; once a window,
//! bit depth, rectangle or patch has been constructed it is known to be
//! well formed.

use thiserror::Error;

/// wienerstats-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Tap window side length other than 5 or 7
    #[error("invalid Wiener window size: {0} (expected 5 or 7)")]
    InvalidWindow(usize),

    /// Bit depth other than 8, 10 or 12
    #[error("invalid bit depth: {0} (expected 8, 10 or 12)")]
    InvalidBitDepth(u32),

    /// Rectangle with zero width or height
    #[error("empty rectangle: h {h_start}..{h_end}, v {v_start}..{v_end}")]
    EmptyRect {
        h_start: usize,
        h_end: usize,
        v_start: usize,
        v_end: usize,
    },

    /// Stride of zero
    #[error("invalid stride: {0}")]
    InvalidStride(usize),

    /// Patch origin lies outside its buffer
    #[error("patch origin {origin} outside buffer of length {len}")]
    OriginOutOfBounds { origin: usize, len: usize },

    /// Sample storage too narrow for the requested bit depth
    #[error("unsupported depth: {bits}-bit samples cannot hold {depth}-bit values")]
    UnsupportedDepth {
        /// Storage width of the sample type in bits
        bits: u32,
        /// Requested bit depth
        depth: u32,
    },
}

/// Result type alias for wienerstats-core operations
pub type Result<T> = std::result::Result<T, Error>;
