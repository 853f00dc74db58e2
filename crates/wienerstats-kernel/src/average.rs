//! Degraded patch average
//!
//! The statistics are accumulated around the mean of the degraded samples
//! over the unit rectangle. The mean is the truncating integer quotient of
//! the `u64` sample sum by the pixel count, so every path sees the same
//! value.

use crate::error::{KernelError, KernelResult};
use wienerstats_core::{Patch, Pixel, Rect};

/// Mean sample value of `patch` over `rect`.
///
/// # Arguments
///
/// * `patch` - Sample view; `rect` is in its unit coordinates
/// * `rect` - Non-empty rectangle to average over
///
/// # Returns
///
/// `sum / area` with truncating division, in the sample type.
///
/// # Errors
///
/// Returns [`KernelError::RectOutOfBounds`] if the rectangle reaches past
/// the end of the buffer.
pub fn compute_average<P: Pixel>(patch: &Patch<'_, P>, rect: &Rect) -> KernelResult<P> {
    let last = patch.index(rect.h_end() - 1, rect.v_end() - 1);
    if last >= patch.data().len() {
        return Err(KernelError::RectOutOfBounds {
            last,
            len: patch.data().len(),
        });
    }
    Ok(average_unchecked(patch, rect))
}

/// [`compute_average`] for a rectangle already known to be in bounds.
pub(crate) fn average_unchecked<P: Pixel>(patch: &Patch<'_, P>, rect: &Rect) -> P {
    let data = patch.data();
    let width = rect.width();
    let mut sum: u64 = 0;
    for i in rect.v_start()..rect.v_end() {
        let start = patch.index(rect.h_start(), i);
        sum += data[start..start + width]
            .iter()
            .map(|&p| Into::<u64>::into(p))
            .sum::<u64>();
    }
    P::truncate_from(sum / rect.area() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_mean() {
        // 1 + 2 + 2 + 2 = 7, 7 / 4 truncates to 1
        let buf = [1u8, 2, 9, 2, 2, 9];
        let patch = Patch::new(&buf, 3).unwrap();
        let rect = Rect::new(0, 2, 0, 2).unwrap();
        assert_eq!(compute_average(&patch, &rect).unwrap(), 1);
    }

    #[test]
    fn test_respects_stride_and_origin() {
        let mut buf = vec![0u16; 64];
        for y in 2..4 {
            for x in 3..6 {
                buf[y * 8 + x] = 1000;
            }
        }
        let patch = Patch::with_origin(&buf, 8, 1, 1).unwrap();
        let rect = Rect::new(2, 5, 1, 3).unwrap();
        assert_eq!(compute_average(&patch, &rect).unwrap(), 1000);
    }

    #[test]
    fn test_wide_sum_does_not_wrap() {
        let buf = vec![4095u16; 384 * 384];
        let patch = Patch::new(&buf, 384).unwrap();
        let rect = Rect::new(0, 384, 0, 384).unwrap();
        assert_eq!(compute_average(&patch, &rect).unwrap(), 4095);
    }

    #[test]
    fn test_out_of_bounds() {
        let buf = [0u8; 16];
        let patch = Patch::new(&buf, 4).unwrap();
        let rect = Rect::new(0, 4, 0, 5).unwrap();
        assert_eq!(
            compute_average(&patch, &rect),
            Err(KernelError::RectOutOfBounds { last: 19, len: 16 })
        );
    }
}
