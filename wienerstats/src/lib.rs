//! wienerstats - Wiener filter statistics for AV1 loop-restoration search
//!
//! # Overview
//!
//! For each candidate restoration unit, an encoder accumulates the
//! cross-correlation vector M and the autocorrelation matrix H between the
//! reconstructed (degraded) samples and the source samples over a square
//! tap window. A least-squares solver turns them into Wiener filter
//! coefficients. This crate computes M and H:
//!
//! - 5x5 chroma and 7x7 luma windows
//! - 8-bit samples in `u8`, 8/10/12-bit samples in `u16`
//! - Optional 1-in-4 row downsampling
//! - Bit-identical reference, specialized and AVX2 paths
//!
//! # Example
//!
//! ```
//! use wienerstats::{BitDepth, Patch, Rect, WienerWindow};
//! use wienerstats::kernel::{StatsOptions, compute_stats};
//!
//! let dgd_buf = vec![512u16; 40 * 40];
//! let src_buf = vec![500u16; 40 * 40];
//! let dgd = Patch::with_origin(&dgd_buf, 40, 2, 2).unwrap();
//! let src = Patch::new(&src_buf, 40).unwrap();
//! let rect = Rect::new(0, 32, 0, 32).unwrap();
//!
//! let mut m = [0i64; 25];
//! let mut h = [0i64; 625];
//! compute_stats(
//!     WienerWindow::Chroma,
//!     &dgd,
//!     &src,
//!     &rect,
//!     BitDepth::Ten,
//!     &StatsOptions::default().with_downsample(true),
//!     &mut m,
//!     &mut h,
//! )
//! .unwrap();
//! assert!(m.iter().all(|&v| v == 0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use wienerstats_core::*;

// Re-export the kernels as a module, entry points at the root
pub use wienerstats_kernel as kernel;
pub use wienerstats_kernel::{
    KernelError, KernelResult, StatsOptions, StatsPath, compute_stats, compute_stats_into,
};
