//! wienerstats-core - Data model for Wiener restoration statistics
//!
//! This crate provides the types shared by every statistics kernel:
//!
//! - [`Pixel`] - Sample storage (`u8` or `u16`)
//! - [`BitDepth`] - 8, 10 or 12-bit content and its normalization divisor
//! - [`WienerWindow`] - 5x5 chroma or 7x7 luma tap window
//! - [`Rect`] - Half-open restoration unit rectangle
//! - [`Patch`] - Strided borrowed view into a sample buffer
//! - [`WienerStats`] - Owned M/H storage sized for the largest window
//!
//! The kernels themselves live in `wienerstats-kernel`.

pub mod depth;
pub mod error;
pub mod patch;
pub mod pixel;
pub mod rect;
pub mod stats;
pub mod window;

pub use depth::BitDepth;
pub use error::{Error, Result};
pub use patch::Patch;
pub use pixel::Pixel;
pub use rect::Rect;
pub use stats::{WienerStats, is_symmetric};
pub use window::{WIENER_WIN, WIENER_WIN_CHROMA, WIENER_WIN2, WienerWindow};
