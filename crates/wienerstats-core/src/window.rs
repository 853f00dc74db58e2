//! Wiener tap window
//!
//! The restoration filter footprint is a square of `win x win` taps:
//! 7x7 for luma and 5x5 for chroma. Taps are numbered column-major, so the
//! tap at row offset `r` and column offset `c` (both in `0..win`) has flat
//! index `c * win + r`.

use crate::error::{Error, Result};

/// Luma window side length
pub const WIENER_WIN: usize = 7;

/// Chroma window side length
pub const WIENER_WIN_CHROMA: usize = 5;

/// Number of taps in the largest window
pub const WIENER_WIN2: usize = WIENER_WIN * WIENER_WIN;

/// Tap window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WienerWindow {
    /// 5x5 taps
    Chroma,
    /// 7x7 taps
    Luma,
}

impl WienerWindow {
    /// Both window sizes.
    pub const ALL: [WienerWindow; 2] = [WienerWindow::Chroma, WienerWindow::Luma];

    /// Side length `win`.
    #[inline]
    pub const fn size(self) -> usize {
        match self {
            WienerWindow::Chroma => WIENER_WIN_CHROMA,
            WienerWindow::Luma => WIENER_WIN,
        }
    }

    /// Halo width `win / 2` on every side of a pixel.
    #[inline]
    pub const fn half(self) -> usize {
        self.size() >> 1
    }

    /// Number of taps, `win * win`. Length of M.
    #[inline]
    pub const fn taps(self) -> usize {
        self.size() * self.size()
    }

    /// Length of H, `win^4`.
    #[inline]
    pub const fn h_len(self) -> usize {
        self.taps() * self.taps()
    }

    /// Flat index of the tap at row offset `row` and column offset `col`.
    #[inline]
    pub const fn tap_index(self, row: usize, col: usize) -> usize {
        col * self.size() + row
    }
}

impl TryFrom<usize> for WienerWindow {
    type Error = Error;

    fn try_from(win: usize) -> Result<Self> {
        match win {
            WIENER_WIN_CHROMA => Ok(WienerWindow::Chroma),
            WIENER_WIN => Ok(WienerWindow::Luma),
            _ => Err(Error::InvalidWindow(win)),
        }
    }
}
