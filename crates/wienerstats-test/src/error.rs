//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture geometry rejected by the core data model
    #[error("fixture error: {0}")]
    Core(#[from] wienerstats_core::Error),

    /// Requested buffer side is too small for the window halo
    #[error("fixture side {size} too small for a {win}x{win} window")]
    FixtureTooSmall { size: usize, win: usize },

    /// Stride wider than the fixture buffer side
    #[error("stride {stride} exceeds fixture side {size}")]
    StrideTooWide { stride: usize, size: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
