//! Numeric range of the statistics
//!
//! Every summand of M and H is a product `(D - avg) * (X - avg)` of two
//! differences of in-range samples, so its magnitude is at most
//! `(2^bd - 1)^2`. Summed over the unit and normalized, no entry can exceed
//! [`stats_magnitude_bound`]. A downstream solver may rely on this range.

use wienerstats_core::BitDepth;

/// Largest possible `|M[t]|` or `|H[t1, t2]|` for a unit of `pixel_count`
/// pixels whose samples are within `depth`.
///
/// Holds with and without downsampling, since the row weights add up to
/// the rectangle height.
pub fn stats_magnitude_bound(depth: BitDepth, pixel_count: usize) -> i64 {
    let max = i64::from(depth.max_value());
    pixel_count as i64 * max * max / depth.divisor()
}

/// Whether every entry of `values` is within the bound.
pub fn within_magnitude_bound(values: &[i64], depth: BitDepth, pixel_count: usize) -> bool {
    let bound = stats_magnitude_bound(depth, pixel_count);
    values.iter().all(|v| v.unsigned_abs() <= bound as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_values() {
        assert_eq!(stats_magnitude_bound(BitDepth::Eight, 1), 65025);
        assert_eq!(stats_magnitude_bound(BitDepth::Ten, 4), 1023 * 1023);
        // Largest unit at 12 bits still far inside i64
        let big = stats_magnitude_bound(BitDepth::Twelve, 384 * 384);
        assert_eq!(big, 147456 * 4095 * 4095 / 16);
    }

    #[test]
    fn test_within() {
        assert!(within_magnitude_bound(&[65025, -65025, 0], BitDepth::Eight, 1));
        assert!(!within_magnitude_bound(&[65026], BitDepth::Eight, 1));
        assert!(!within_magnitude_bound(&[i64::MIN], BitDepth::Eight, 1));
    }
}
