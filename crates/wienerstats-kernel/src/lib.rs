//! wienerstats-kernel - Wiener filter statistics kernels
//!
//! This crate computes the cross-correlation vector M and autocorrelation
//! matrix H between a degraded patch and its source over a 5x5 or 7x7 tap
//! window, as consumed by a loop-restoration Wiener filter solver:
//!
//! - [`compute_stats`] / [`compute_stats_into`] - Validated entry points
//! - [`compute_average`] - Degraded patch mean used for re-centering
//! - [`RowSampler`] - Optional 1-in-4 row downsampling
//! - [`stats_magnitude_bound`] - Guaranteed range of every M/H entry
//!
//! Three interchangeable paths are available through [`StatsPath`]: a
//! centered-product reference, an unrolled scalar raw-sum path, and an
//! AVX2 path for 8-bit samples behind the `simd` feature. All of them
//! produce bit-identical output.
//!
//! # Example
//!
//! ```
//! use wienerstats_core::{BitDepth, Patch, Rect, WienerStats, WienerWindow};
//! use wienerstats_kernel::{StatsOptions, compute_stats_into};
//!
//! let dgd_buf = vec![128u8; 32 * 32];
//! let src_buf = vec![100u8; 32 * 32];
//! let dgd = Patch::with_origin(&dgd_buf, 32, 3, 3).unwrap();
//! let src = Patch::new(&src_buf, 32).unwrap();
//! let rect = Rect::new(0, 16, 0, 16).unwrap();
//!
//! let mut stats = WienerStats::new(WienerWindow::Luma);
//! compute_stats_into(
//!     WienerWindow::Luma,
//!     &dgd,
//!     &src,
//!     &rect,
//!     BitDepth::Eight,
//!     &StatsOptions::default(),
//!     &mut stats,
//! )
//! .unwrap();
//! assert!(stats.is_symmetric());
//! ```

mod accum;
pub mod average;
pub mod bounds;
pub mod dispatch;
pub mod downsample;
mod error;
mod reference;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod simd;
mod specialized;
mod validate;

pub use error::{KernelError, KernelResult};

// Re-export commonly used functions
pub use average::compute_average;
pub use bounds::{stats_magnitude_bound, within_magnitude_bound};
pub use dispatch::{
    StatsOptions, StatsPath, compute_stats, compute_stats_into, resolve_path, simd_available,
};
pub use downsample::{RowSampler, WIENER_STATS_DOWNSAMPLE_FACTOR};
