//! M/H output storage
//!
//! Statistics kernels write into caller-owned slices. [`WienerStats`] is a
//! convenience owner sized for the largest window, so one value can be
//! reused across luma and chroma units without reallocating.

use crate::window::{WIENER_WIN2, WienerWindow};

/// Cross-correlation vector and autocorrelation matrix for one unit
///
/// Storage is sized for the 7x7 window. Only the first `taps()` entries of
/// M and the first `h_len()` entries of H are meaningful for the window the
/// statistics were computed for.
#[derive(Clone)]
pub struct WienerStats {
    window: WienerWindow,
    m: [i64; WIENER_WIN2],
    h: [i64; WIENER_WIN2 * WIENER_WIN2],
}

impl WienerStats {
    /// Create zeroed storage tagged with `window`.
    pub fn new(window: WienerWindow) -> Self {
        Self {
            window,
            m: [0; WIENER_WIN2],
            h: [0; WIENER_WIN2 * WIENER_WIN2],
        }
    }

    /// Window the statistics belong to.
    #[inline]
    pub fn window(&self) -> WienerWindow {
        self.window
    }

    /// Retag the storage for `window` and return mutable M and H slices
    /// of the matching lengths.
    pub fn prepare(&mut self, window: WienerWindow) -> (&mut [i64], &mut [i64]) {
        self.window = window;
        let (taps, h_len) = (window.taps(), window.h_len());
        (&mut self.m[..taps], &mut self.h[..h_len])
    }

    /// M, `taps()` entries.
    #[inline]
    pub fn m(&self) -> &[i64] {
        &self.m[..self.window.taps()]
    }

    /// H, `h_len()` entries, row-major over tap pairs.
    #[inline]
    pub fn h(&self) -> &[i64] {
        &self.h[..self.window.h_len()]
    }

    /// H entry for taps `t1` and `t2`.
    #[inline]
    pub fn h_at(&self, t1: usize, t2: usize) -> i64 {
        self.h[t1 * self.window.taps() + t2]
    }

    /// Whether H equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(self.h(), self.window.taps())
    }
}

impl std::fmt::Debug for WienerStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WienerStats")
            .field("window", &self.window)
            .field("m", &self.m())
            .field("h_len", &self.h().len())
            .finish()
    }
}

/// Whether the `taps x taps` row-major matrix `h` equals its transpose.
pub fn is_symmetric(h: &[i64], taps: usize) -> bool {
    (0..taps).all(|a| (a + 1..taps).all(|b| h[a * taps + b] == h[b * taps + a]))
}
