//! Statistics entry points and path selection
//!
//! [`compute_stats`] validates the call, picks a path and writes M and H.
//! Every path produces identical output; they differ only in speed.

use crate::accum::RawSums;
use crate::error::{KernelError, KernelResult};
use crate::validate::validate;
use crate::{reference, specialized};
use wienerstats_core::{BitDepth, Patch, Pixel, Rect, WienerStats, WienerWindow};

/// Accumulation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatsPath {
    /// Fastest available path
    #[default]
    Auto,
    /// Centered-product reference accumulation
    Reference,
    /// Unrolled two-pixel raw-sum accumulation
    Specialized,
    /// AVX2 raw-sum accumulation (8-bit samples, `simd` feature)
    Simd,
}

impl StatsPath {
    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            StatsPath::Auto => "auto",
            StatsPath::Reference => "reference",
            StatsPath::Specialized => "specialized",
            StatsPath::Simd => "simd",
        }
    }
}

/// Options for a statistics call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsOptions {
    /// Scan every fourth row only (see [`crate::RowSampler`])
    pub downsample: bool,
    /// Accumulation path
    pub path: StatsPath,
}

impl StatsOptions {
    /// Default options: full scan, automatic path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable row downsampling.
    pub fn with_downsample(mut self, downsample: bool) -> Self {
        self.downsample = downsample;
        self
    }

    /// Select the accumulation path.
    pub fn with_path(mut self, path: StatsPath) -> Self {
        self.path = path;
        self
    }
}

/// Whether the AVX2 path is compiled in and supported by this CPU.
pub fn simd_available() -> bool {
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    {
        crate::simd::token().is_some()
    }
    #[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
    {
        false
    }
}

/// Concrete path `requested` resolves to for samples of type `P`.
///
/// # Errors
///
/// Returns [`KernelError::PathUnavailable`] if `Simd` is requested but not
/// compiled in, not supported by the CPU, or `P` is not `u8`.
pub fn resolve_path<P: Pixel>(requested: StatsPath) -> KernelResult<StatsPath> {
    let narrow = P::as_bytes(&[]).is_some();
    let simd_usable = narrow && simd_available();
    match requested {
        StatsPath::Auto if simd_usable => Ok(StatsPath::Simd),
        StatsPath::Auto => {
            if cfg!(all(feature = "simd", target_arch = "x86_64")) {
                tracing::trace!(narrow, "wiener stats: simd path not usable, using specialized");
            }
            Ok(StatsPath::Specialized)
        }
        StatsPath::Simd if !simd_usable => {
            let reason = if !cfg!(all(feature = "simd", target_arch = "x86_64")) {
                "simd feature not enabled for this target"
            } else if !narrow {
                "simd path requires 8-bit samples"
            } else {
                "cpu lacks x86-64-v3 support"
            };
            Err(KernelError::PathUnavailable(reason))
        }
        path => Ok(path),
    }
}

/// Compute the Wiener M vector and H matrix for one restoration unit.
///
/// # Arguments
///
/// * `window` - Tap window (5x5 chroma or 7x7 luma)
/// * `dgd` - Degraded patch; its origin must leave a `win / 2` halo
///   around `rect`
/// * `src` - Source patch, co-located with `dgd`
/// * `rect` - Unit rectangle; `h_start` must be even
/// * `depth` - Sample bit depth
/// * `options` - Downsampling and path selection
/// * `m` - Output, first `win^2` entries overwritten
/// * `h` - Output, first `win^4` entries overwritten
///
/// # Errors
///
/// Returns an error, without touching `m` or `h`, if the geometry, depth,
/// output lengths or requested path are invalid. See [`KernelError`].
#[allow(clippy::too_many_arguments)]
pub fn compute_stats<P: Pixel>(
    window: WienerWindow,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    depth: BitDepth,
    options: &StatsOptions,
    m: &mut [i64],
    h: &mut [i64],
) -> KernelResult<()> {
    validate(window.size(), dgd, src, rect, depth, m.len(), h.len())?;
    let path = resolve_path::<P>(options.path)?;

    tracing::debug!(
        requested = options.path.name(),
        path = path.name(),
        win = window.size(),
        bits = depth.bits(),
        h_start = rect.h_start(),
        h_end = rect.h_end(),
        v_start = rect.v_start(),
        v_end = rect.v_end(),
        downsample = options.downsample,
        "wiener stats"
    );

    if path == StatsPath::Reference {
        reference::compute(
            window.size(),
            dgd,
            src,
            rect,
            depth,
            options.downsample,
            m,
            h,
        );
        return Ok(());
    }

    let mut raw = RawSums::new();
    match path {
        #[cfg(all(feature = "simd", target_arch = "x86_64"))]
        StatsPath::Simd => accumulate_simd(window, dgd, src, rect, options.downsample, &mut raw)?,
        _ => specialized::accumulate(window, dgd, src, rect, options.downsample, &mut raw),
    }

    let avg = Into::<i64>::into(crate::average::average_unchecked(dgd, rect));
    raw.finalize(
        window.taps(),
        avg,
        rect.area() as i64,
        depth,
        m,
        h,
    );
    Ok(())
}

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
fn accumulate_simd<P: Pixel>(
    window: WienerWindow,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    downsample: bool,
    raw: &mut RawSums,
) -> KernelResult<()> {
    let unavailable = KernelError::PathUnavailable("simd path requires 8-bit samples");
    let (Some(dgd_bytes), Some(src_bytes)) = (P::as_bytes(dgd.data()), P::as_bytes(src.data()))
    else {
        return Err(unavailable);
    };
    let token = crate::simd::token().ok_or(KernelError::PathUnavailable(
        "cpu lacks x86-64-v3 support",
    ))?;
    let dgd8 = Patch::with_offset(dgd_bytes, dgd.stride(), dgd.origin())?;
    let src8 = Patch::with_offset(src_bytes, src.stride(), src.origin())?;
    crate::simd::accumulate(token, window, &dgd8, &src8, rect, downsample, raw);
    Ok(())
}

/// [`compute_stats`] into owned storage.
///
/// On success `stats` is tagged with `window`. On error it is left as it
/// was.
///
/// # Errors
///
/// Same as [`compute_stats`].
pub fn compute_stats_into<P: Pixel>(
    window: WienerWindow,
    dgd: &Patch<'_, P>,
    src: &Patch<'_, P>,
    rect: &Rect,
    depth: BitDepth,
    options: &StatsOptions,
    stats: &mut WienerStats,
) -> KernelResult<()> {
    let previous = stats.window();
    let (m, h) = stats.prepare(window);
    let result = compute_stats(window, dgd, src, rect, depth, options, m, h);
    if result.is_err() {
        stats.prepare(previous);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    #[test]
    fn test_options_builder() {
        let opts = StatsOptions::new();
        assert!(!opts.downsample);
        assert_eq!(opts.path, StatsPath::Auto);
        let opts = opts.with_downsample(true).with_path(StatsPath::Reference);
        assert!(opts.downsample);
        assert_eq!(opts.path, StatsPath::Reference);
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            resolve_path::<u16>(StatsPath::Auto),
            Ok(StatsPath::Specialized)
        );
        assert_eq!(
            resolve_path::<u8>(StatsPath::Reference),
            Ok(StatsPath::Reference)
        );
        assert!(matches!(
            resolve_path::<u16>(StatsPath::Simd),
            Err(KernelError::PathUnavailable(_))
        ));
        if simd_available() {
            assert_eq!(resolve_path::<u8>(StatsPath::Auto), Ok(StatsPath::Simd));
            assert_eq!(resolve_path::<u8>(StatsPath::Simd), Ok(StatsPath::Simd));
        } else {
            assert_eq!(
                resolve_path::<u8>(StatsPath::Auto),
                Ok(StatsPath::Specialized)
            );
        }
    }

    #[test]
    fn test_error_leaves_outputs_untouched() {
        let buf = [1u8; 256];
        let dgd = Patch::with_origin(&buf, 16, 3, 3).unwrap();
        let src = Patch::new(&buf, 16).unwrap();
        let rect = Rect::new(1, 9, 0, 8).unwrap();
        let mut m = [42i64; 49];
        let mut h = [42i64; 2401];
        let err = compute_stats(
            WienerWindow::Luma,
            &dgd,
            &src,
            &rect,
            BitDepth::Eight,
            &StatsOptions::default(),
            &mut m,
            &mut h,
        );
        assert_eq!(err, Err(KernelError::OddHorizontalStart(1)));
        assert!(m.iter().all(|&v| v == 42));
        assert!(h.iter().all(|&v| v == 42));
    }

    #[test]
    fn test_into_keeps_window_on_error() {
        let buf = [1u8; 256];
        let dgd = Patch::with_origin(&buf, 16, 3, 3).unwrap();
        let src = Patch::new(&buf, 16).unwrap();
        let mut stats = WienerStats::new(WienerWindow::Luma);

        let bad = Rect::new(1, 9, 0, 8).unwrap();
        let opts = StatsOptions::default();
        assert!(
            compute_stats_into(
                WienerWindow::Chroma,
                &dgd,
                &src,
                &bad,
                BitDepth::Eight,
                &opts,
                &mut stats
            )
            .is_err()
        );
        assert_eq!(stats.window(), WienerWindow::Luma);

        let good = Rect::new(0, 8, 0, 8).unwrap();
        compute_stats_into(
            WienerWindow::Chroma,
            &dgd,
            &src,
            &good,
            BitDepth::Eight,
            &opts,
            &mut stats,
        )
        .unwrap();
        assert_eq!(stats.window(), WienerWindow::Chroma);
        // Constant input has zero statistics
        assert!(stats.m().iter().all(|&v| v == 0));
        assert!(stats.h().iter().all(|&v| v == 0));
    }

    #[derive(Default)]
    struct EventCounts {
        debug: AtomicUsize,
        other: AtomicUsize,
    }

    struct CountingSubscriber(Arc<EventCounts>);

    impl Subscriber for CountingSubscriber {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }
        fn record(&self, _: &Id, _: &Record<'_>) {}
        fn record_follows_from(&self, _: &Id, _: &Id) {}
        fn event(&self, event: &Event<'_>) {
            let slot = if *event.metadata().level() == Level::DEBUG {
                &self.0.debug
            } else {
                &self.0.other
            };
            slot.fetch_add(1, Ordering::Relaxed);
        }
        fn enter(&self, _: &Id) {}
        fn exit(&self, _: &Id) {}
    }

    #[test]
    fn test_one_debug_record_per_call() {
        let buf = [1u16; 256];
        let dgd = Patch::with_origin(&buf, 16, 3, 3).unwrap();
        let src = Patch::new(&buf, 16).unwrap();
        let rect = Rect::new(0, 8, 0, 8).unwrap();
        let counts = Arc::new(EventCounts::default());

        tracing::subscriber::with_default(CountingSubscriber(Arc::clone(&counts)), || {
            let mut m = [0i64; 49];
            let mut h = [0i64; 2401];
            compute_stats(
                WienerWindow::Luma,
                &dgd,
                &src,
                &rect,
                BitDepth::Ten,
                &StatsOptions::default(),
                &mut m,
                &mut h,
            )
            .unwrap();
        });

        assert_eq!(counts.debug.load(Ordering::Relaxed), 1);
        let fallback_records = usize::from(cfg!(all(feature = "simd", target_arch = "x86_64")));
        assert_eq!(counts.other.load(Ordering::Relaxed), fallback_records);
    }

    #[test]
    fn test_depth_normalization() {
        // Two-pixel chroma unit, centre taps {0, 8} and source {0, 8}
        // around an average of 4: centred M[12] = H[12][12] = 32
        let mut dgd_buf = [4u16; 30];
        dgd_buf[14] = 0;
        dgd_buf[15] = 8;
        let src_buf = [0u16, 8];
        let dgd = Patch::with_origin(&dgd_buf, 6, 2, 2).unwrap();
        let src = Patch::new(&src_buf, 2).unwrap();
        let rect = Rect::new(0, 2, 0, 1).unwrap();

        for path in [StatsPath::Reference, StatsPath::Specialized] {
            for (depth, expected) in BitDepth::ALL.into_iter().zip([32, 8, 2]) {
                let mut m = [0i64; 25];
                let mut h = [0i64; 625];
                compute_stats(
                    WienerWindow::Chroma,
                    &dgd,
                    &src,
                    &rect,
                    depth,
                    &StatsOptions::new().with_path(path),
                    &mut m,
                    &mut h,
                )
                .unwrap();
                assert_eq!(m[12], expected, "{} {depth}", path.name());
                assert_eq!(h[12 * 25 + 12], expected, "{} {depth}", path.name());
            }
        }
    }

    #[test]
    fn test_paths_agree_small() {
        let dgd_buf: Vec<u16> = (0..24 * 24).map(|i| ((i * 7919) % 4096) as u16).collect();
        let src_buf: Vec<u16> = (0..24 * 24).map(|i| ((i * 104729) % 4096) as u16).collect();
        let dgd = Patch::with_origin(&dgd_buf, 24, 3, 3).unwrap();
        let src = Patch::new(&src_buf, 24).unwrap();
        let rect = Rect::new(2, 17, 1, 14).unwrap();

        for window in WienerWindow::ALL {
            for downsample in [false, true] {
                let mut m_ref = [0i64; 49];
                let mut h_ref = [0i64; 2401];
                let mut m_spec = [0i64; 49];
                let mut h_spec = [0i64; 2401];
                let base = StatsOptions::new().with_downsample(downsample);
                compute_stats(
                    window,
                    &dgd,
                    &src,
                    &rect,
                    BitDepth::Twelve,
                    &base.with_path(StatsPath::Reference),
                    &mut m_ref,
                    &mut h_ref,
                )
                .unwrap();
                compute_stats(
                    window,
                    &dgd,
                    &src,
                    &rect,
                    BitDepth::Twelve,
                    &base.with_path(StatsPath::Specialized),
                    &mut m_spec,
                    &mut h_spec,
                )
                .unwrap();
                assert_eq!(m_ref, m_spec, "win {} ds {}", window.size(), downsample);
                assert_eq!(h_ref, h_spec, "win {} ds {}", window.size(), downsample);
            }
        }
    }
}
