//! Per-pixel zone pipeline.
//!
//! ```text
//! u8 -> /255 -> level remap -> log decode -> gamut -> floor at 0
//!    -> luminance -> stops -> quantize -> palette -> RGBA (alpha 255)
//! ```
//!
//! Remap and decode depend only on the 8-bit code value, so each render
//! builds a 256-entry table for them and the per-pixel work starts at the
//! gamut matrix.
//!
//! # Example
//!
//! ```rust
//! use elzone_color::{RenderParams, ZonePipeline};
//! use elzone_core::PixelBuffer;
//!
//! let base = PixelBuffer::filled(4, 4, [105, 105, 105, 255]).unwrap();
//! let overlay = ZonePipeline::new().render(&base, &RenderParams::new("slog3", false, 0.0));
//! assert_eq!(overlay.pixel(0, 0), [0x8a, 0x8a, 0x8a, 255]);
//! ```

use crate::curve::{CurveDefinition, CurveRegistry, SLOG3};
use crate::gamut::GamutConverter;
use crate::luminance::LumaMode;
use crate::palette::Palette;
use crate::stops::{StopReference, sanitize_exposure};
use crate::zone::{ZONE_COUNT, ZoneValue, quantize};
use elzone_core::PixelBuffer;
use elzone_core::buffer::CHANNELS;
use elzone_math::Vec3;
use elzone_transfer::{LevelsMode, clamp01};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parameters of one render request.
///
/// The exposure offset is sanitized on construction: non-finite values become
/// 0 and `-0.0` becomes `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    curve: String,
    levels: LevelsMode,
    exposure: f32,
}

impl RenderParams {
    /// Creates parameters from a curve key, legal-range flag and exposure offset.
    pub fn new(curve: impl Into<String>, legal: bool, exposure: f32) -> Self {
        Self::with_levels(curve, LevelsMode::from_legal(legal), exposure)
    }

    /// Creates parameters with an explicit levels mode.
    pub fn with_levels(curve: impl Into<String>, levels: LevelsMode, exposure: f32) -> Self {
        Self {
            curve: curve.into(),
            levels,
            exposure: sanitize_exposure(exposure),
        }
    }

    /// Curve key.
    pub fn curve(&self) -> &str {
        &self.curve
    }

    /// Levels mode.
    pub fn levels(&self) -> LevelsMode {
        self.levels
    }

    /// Exposure offset in stops.
    pub fn exposure(&self) -> f32 {
        self.exposure
    }

    /// Replaces the curve key.
    pub fn set_curve(&mut self, curve: impl Into<String>) {
        self.curve = curve.into();
    }

    /// Replaces the levels mode.
    pub fn set_levels(&mut self, levels: LevelsMode) {
        self.levels = levels;
    }

    /// Replaces the exposure offset, sanitized like [`RenderParams::new`].
    pub fn set_exposure(&mut self, exposure: f32) {
        self.exposure = sanitize_exposure(exposure);
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::new(SLOG3, false, 0.0)
    }
}

impl fmt::Display for RenderParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {:+} EV",
            self.curve,
            self.levels.name(),
            self.exposure
        )
    }
}

/// Per-zone pixel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneHistogram {
    counts: [u64; ZONE_COUNT],
}

impl ZoneHistogram {
    /// Pixels in `zone`.
    pub fn count(&self, zone: ZoneValue) -> u64 {
        self.counts[zone.index()]
    }

    /// Total pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Fraction of pixels in `zone`, 0 for an empty histogram.
    pub fn fraction(&self, zone: ZoneValue) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.count(zone) as f64 / n as f64,
        }
    }

    /// Zones with counts, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneValue, u64)> + '_ {
        ZoneValue::ALL.iter().map(|&z| (z, self.count(z)))
    }

    /// Most populated zone; ties go to the brighter zone.
    pub fn dominant(&self) -> Option<ZoneValue> {
        if self.total() == 0 {
            return None;
        }
        let mut best = ZoneValue::PlusSix;
        for (zone, count) in self.iter() {
            if count > self.count(best) {
                best = zone;
            }
        }
        Some(best)
    }

    fn add(&mut self, zone: ZoneValue) {
        self.counts[zone.index()] += 1;
    }

    fn merge(mut self, other: Self) -> Self {
        for (a, b) in self.counts.iter_mut().zip(other.counts) {
            *a += b;
        }
        self
    }
}

/// Everything one render needs, resolved from the parameters.
#[derive(Debug, Clone)]
pub struct PixelKernel {
    decode_lut: [f32; 256],
    gamut: GamutConverter,
    reference: StopReference,
    luma: LumaMode,
    palette: Palette,
}

impl PixelKernel {
    fn new(curve: &CurveDefinition, params: &RenderParams, luma: LumaMode, palette: Palette) -> Self {
        let mut decode_lut = [0.0f32; 256];
        for (code, slot) in decode_lut.iter_mut().enumerate() {
            let v = params.levels.remap(code as f32 / 255.0);
            *slot = curve.decode(clamp01(v));
        }
        Self {
            decode_lut,
            gamut: GamutConverter::for_curve(curve),
            reference: StopReference::new(curve, params.exposure),
            luma,
            palette,
        }
    }

    /// Linear Rec.709 RGB of a pixel, negatives floored at 0.
    #[inline]
    pub fn linear(&self, rgb: [u8; 3]) -> Vec3 {
        let cam = Vec3::new(
            self.decode_lut[rgb[0] as usize],
            self.decode_lut[rgb[1] as usize],
            self.decode_lut[rgb[2] as usize],
        );
        self.gamut.convert(cam).max(Vec3::ZERO)
    }

    /// Signed stops of a pixel.
    #[inline]
    pub fn stops(&self, rgb: [u8; 3]) -> f32 {
        self.reference.stops(self.luma.apply(self.linear(rgb)))
    }

    /// Zone of a pixel.
    #[inline]
    pub fn zone(&self, rgb: [u8; 3]) -> ZoneValue {
        quantize(self.stops(rgb))
    }

    /// Overlay RGBA of a pixel.
    #[inline]
    pub fn paint(&self, rgb: [u8; 3]) -> [u8; 4] {
        self.palette.color_of(self.zone(rgb)).opaque()
    }

    fn paint_row(&self, src: &[u8], dst: &mut [u8]) {
        for (s, d) in src.chunks_exact(CHANNELS).zip(dst.chunks_exact_mut(CHANNELS)) {
            d.copy_from_slice(&self.paint([s[0], s[1], s[2]]));
        }
    }

    fn count_row(&self, src: &[u8], hist: &mut ZoneHistogram) {
        for s in src.chunks_exact(CHANNELS) {
            hist.add(self.zone([s[0], s[1], s[2]]));
        }
    }
}

/// Runs the zone pipeline over pixel buffers.
///
/// Holds the read-only tables a render consults: the curve registry, the
/// luminance mode and the palette.
#[derive(Debug, Clone)]
pub struct ZonePipeline {
    registry: Arc<CurveRegistry>,
    luma: LumaMode,
    palette: Palette,
    parallel: bool,
}

impl ZonePipeline {
    /// Pipeline with the standard curves, max-channel luminance and the
    /// default palette.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(CurveRegistry::standard()),
            luma: LumaMode::default(),
            palette: Palette::default(),
            parallel: true,
        }
    }

    /// Uses a custom registry.
    pub fn with_registry(mut self, registry: CurveRegistry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    /// Sets the luminance mode.
    pub fn with_luma(mut self, luma: LumaMode) -> Self {
        self.luma = luma;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enables or disables row-parallel rendering.
    ///
    /// Has no effect without the `parallel` feature.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Curve registry.
    pub fn registry(&self) -> &CurveRegistry {
        &self.registry
    }

    /// Luminance mode.
    pub fn luma(&self) -> LumaMode {
        self.luma
    }

    /// Palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns true if renders may run on the rayon pool.
    pub fn is_parallel(&self) -> bool {
        self.parallel && cfg!(feature = "parallel")
    }

    /// Resolves the parameters into a per-pixel kernel.
    ///
    /// Unknown curve keys fall back to an identity decode.
    pub fn kernel(&self, params: &RenderParams) -> PixelKernel {
        let curve = self.registry.resolve(params.curve());
        if curve.key != params.curve() {
            debug!(requested = %params.curve(), "Unknown curve, using identity decode");
        }
        PixelKernel::new(curve, params, self.luma, self.palette)
    }

    /// Stops of a single pixel.
    pub fn stops_for_pixel(&self, rgb: [u8; 3], params: &RenderParams) -> f32 {
        self.kernel(params).stops(rgb)
    }

    /// Zone of a single pixel.
    pub fn classify_pixel(&self, rgb: [u8; 3], params: &RenderParams) -> ZoneValue {
        self.kernel(params).zone(rgb)
    }

    /// Renders the overlay for `base`. Same dimensions, alpha 255.
    pub fn render(&self, base: &PixelBuffer, params: &RenderParams) -> PixelBuffer {
        trace!(
            width = base.width(),
            height = base.height(),
            params = %params,
            parallel = self.is_parallel(),
            "ZonePipeline::render"
        );
        let mut out = base.blank_like();
        if base.is_empty() {
            return out;
        }
        let kernel = self.kernel(params);
        let row_len = base.row_len();
        if self.is_parallel() {
            paint_rows_par(&kernel, base.as_bytes(), out.as_bytes_mut(), row_len);
        } else {
            paint_rows(&kernel, base.as_bytes(), out.as_bytes_mut(), row_len);
        }
        out
    }

    /// Counts pixels per zone without painting.
    pub fn histogram(&self, base: &PixelBuffer, params: &RenderParams) -> ZoneHistogram {
        trace!(params = %params, "ZonePipeline::histogram");
        if base.is_empty() {
            return ZoneHistogram::default();
        }
        let kernel = self.kernel(params);
        if self.is_parallel() {
            count_rows_par(&kernel, base.as_bytes(), base.row_len())
        } else {
            count_rows(&kernel, base.as_bytes(), base.row_len())
        }
    }
}

fn paint_rows(kernel: &PixelKernel, src: &[u8], dst: &mut [u8], row_len: usize) {
    for (d, s) in dst.chunks_mut(row_len).zip(src.chunks(row_len)) {
        kernel.paint_row(s, d);
    }
}

fn count_rows(kernel: &PixelKernel, src: &[u8], row_len: usize) -> ZoneHistogram {
    let mut hist = ZoneHistogram::default();
    for row in src.chunks(row_len) {
        kernel.count_row(row, &mut hist);
    }
    hist
}

/// Rows are independent; each task writes only its own output row.
#[cfg(feature = "parallel")]
fn paint_rows_par(kernel: &PixelKernel, src: &[u8], dst: &mut [u8], row_len: usize) {
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(d, s)| kernel.paint_row(s, d));
}

#[cfg(not(feature = "parallel"))]
fn paint_rows_par(kernel: &PixelKernel, src: &[u8], dst: &mut [u8], row_len: usize) {
    paint_rows(kernel, src, dst, row_len)
}

#[cfg(feature = "parallel")]
fn count_rows_par(kernel: &PixelKernel, src: &[u8], row_len: usize) -> ZoneHistogram {
    src.par_chunks(row_len)
        .fold(ZoneHistogram::default, |mut hist, row| {
            kernel.count_row(row, &mut hist);
            hist
        })
        .reduce(ZoneHistogram::default, ZoneHistogram::merge)
}

#[cfg(not(feature = "parallel"))]
fn count_rows_par(kernel: &PixelKernel, src: &[u8], row_len: usize) -> ZoneHistogram {
    count_rows(kernel, src, row_len)
}

impl Default for ZonePipeline {
    fn default() -> Self {
        Self::new()
    }
}
