//! Call precondition checks
//!
//! Every check runs before any accumulation, so a rejected call leaves the
//! caller's M and H untouched.

use crate::error::{KernelError, KernelResult};
use wienerstats_core::{BitDepth, Patch, Pixel, Rect};

/// Index of the first degraded sample read for pixel row `i`, i.e. tap
/// `(0, 0)` of pixel `(h_start, i)`.
///
/// Only valid once [`validate`] has accepted the geometry.
#[inline]
pub(crate) fn tap_base<P: Pixel>(dgd: &Patch<'_, P>, rect: &Rect, half: usize, i: usize) -> usize {
    dgd.index(rect.h_start(), i) - (half * dgd.stride() + half)
}

/// Check a statistics call for a `win x win` window.
///
/// # Errors
///
/// * [`KernelError::Core`] with `UnsupportedDepth` for `u8` samples at
///   10 or 12 bits
/// * [`KernelError::OddHorizontalStart`] for an odd first column
/// * [`KernelError::RowTooWide`] if the row exceeds the staging limit
/// * [`KernelError::OutputTooSmall`] for short M or H slices
/// * [`KernelError::HaloOutOfBounds`] if any tap read leaves the degraded buffer
/// * [`KernelError::SourceOutOfBounds`] if the source rectangle leaves its buffer
#[allow(clippy::too_many_arguments)]
pub(crate) fn validate<P: Pixel>(
    win: usize,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    depth: BitDepth,
    m_len: usize,
    h_len: usize,
) -> KernelResult<()> {
    depth.check_storage::<P>()?;

    if rect.h_start() % 2 != 0 {
        return Err(KernelError::OddHorizontalStart(rect.h_start()));
    }

    if rect.width() > P::MAX_STAGED_ROW_WIDTH {
        return Err(KernelError::RowTooWide {
            width: rect.width(),
            max: P::MAX_STAGED_ROW_WIDTH,
        });
    }

    let win2 = win * win;
    if m_len < win2 {
        return Err(KernelError::OutputTooSmall {
            which: "M",
            needed: win2,
            got: m_len,
        });
    }
    if h_len < win2 * win2 {
        return Err(KernelError::OutputTooSmall {
            which: "H",
            needed: win2 * win2,
            got: h_len,
        });
    }

    let half = win / 2;
    let halo = half * dgd.stride() + half;
    let first = dgd.index(rect.h_start(), rect.v_start()).checked_sub(halo);
    let last = dgd.index(rect.h_end() - 1, rect.v_end() - 1) + halo;
    if first.is_none() || last >= dgd.data().len() {
        return Err(KernelError::HaloOutOfBounds {
            first,
            last,
            len: dgd.data().len(),
        });
    }

    let last = src.index(rect.h_end() - 1, rect.v_end() - 1);
    if last >= src.data().len() {
        return Err(KernelError::SourceOutOfBounds {
            last,
            len: src.data().len(),
        });
    }

    Ok(())
}
