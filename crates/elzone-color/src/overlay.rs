//! Single-entry overlay cache.
//!
//! A display refresh asks for the overlay of the current base image under the
//! current parameters. Most refreshes change nothing, so the last overlay is
//! kept together with the key it was built for and handed back while the key
//! and the base image stay the same.
//!
//! The cache entry is a plain value: [`render_cached`] takes the previous
//! entry and returns the next one, and [`OverlayCache`] is a thin owner around
//! that for callers that want state kept for them.
//!
//! # Example
//!
//! ```rust
//! use elzone_color::{OverlayCache, RenderParams};
//! use elzone_core::PixelBuffer;
//!
//! let mut cache = OverlayCache::default();
//! assert!(cache.render(&RenderParams::default()).is_none());
//!
//! cache.set_base(PixelBuffer::filled(2, 2, [90, 90, 90, 255]).unwrap());
//! let a = cache.render(&RenderParams::default()).unwrap();
//! let b = cache.render(&RenderParams::default()).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&a, &b));
//! assert_eq!(cache.stats().builds, 1);
//! ```

use crate::pipeline::{RenderParams, ZonePipeline};
use elzone_core::PixelBuffer;
use elzone_transfer::LevelsMode;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

static NEXT_BASE_ID: AtomicU64 = AtomicU64::new(1);

/// A captured source image with a process-unique identity.
///
/// Two captures of identical pixels are still different bases.
#[derive(Debug, Clone)]
pub struct BaseImage {
    id: u64,
    pixels: Arc<PixelBuffer>,
}

impl BaseImage {
    /// Captures a buffer as a new base image.
    pub fn new(pixels: PixelBuffer) -> Self {
        Self::from_arc(Arc::new(pixels))
    }

    /// Captures a shared buffer as a new base image.
    pub fn from_arc(pixels: Arc<PixelBuffer>) -> Self {
        Self {
            id: NEXT_BASE_ID.fetch_add(1, Ordering::Relaxed),
            pixels,
        }
    }

    /// Identity of this capture.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Source pixels.
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

/// Parameters an overlay depends on. Exposure is compared bitwise after
/// sanitizing, so `NaN` requests match `0.0` requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    curve: String,
    levels: LevelsMode,
    exposure_bits: u32,
}

impl CacheKey {
    /// Key of a render request.
    pub fn of(params: &RenderParams) -> Self {
        Self {
            curve: params.curve().to_string(),
            levels: params.levels(),
            exposure_bits: params.exposure().to_bits(),
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
        f32::from_bits(self.exposure_bits)
    }
}

/// The last overlay and what it was built from.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    base_id: u64,
    key: CacheKey,
    overlay: Arc<PixelBuffer>,
}

impl CacheEntry {
    /// Returns true if this entry answers `params` on `base`.
    pub fn matches(&self, base: &BaseImage, params: &RenderParams) -> bool {
        self.base_id == base.id && self.key == CacheKey::of(params)
    }

    /// Key the overlay was built for.
    pub fn key(&self) -> &CacheKey {
        &self.key
    }

    /// The cached overlay.
    pub fn overlay(&self) -> &Arc<PixelBuffer> {
        &self.overlay
    }
}

/// Whether a cached render reused or rebuilt the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Previous overlay returned unchanged.
    Hit,
    /// Overlay rebuilt through the pipeline.
    Rebuilt,
}

/// Renders through the cache entry.
///
/// Returns the previous entry when it matches, otherwise a freshly built one.
/// The new overlay is fully built before the entry is replaced.
pub fn render_cached(
    pipeline: &ZonePipeline,
    base: &BaseImage,
    params: &RenderParams,
    previous: Option<CacheEntry>,
) -> (CacheEntry, CacheOutcome) {
    match previous {
        Some(entry) if entry.matches(base, params) => {
            trace!(base = base.id, params = %params, "Overlay cache hit");
            return (entry, CacheOutcome::Hit);
        }
        _ => {}
    }
    debug!(base = base.id, params = %params, "Rebuilding overlay");
    let overlay = Arc::new(pipeline.render(&base.pixels, params));
    let entry = CacheEntry {
        base_id: base.id,
        key: CacheKey::of(params),
        overlay,
    };
    (entry, CacheOutcome::Rebuilt)
}

/// Cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayStats {
    /// Overlays built through the pipeline.
    pub builds: u64,
    /// Requests answered from the cache.
    pub hits: u64,
    /// Pixels run through the pipeline across all builds.
    pub pixels_processed: u64,
}

/// Owns the base image and the single cache entry.
#[derive(Debug, Default)]
pub struct OverlayCache {
    pipeline: ZonePipeline,
    base: Option<BaseImage>,
    entry: Option<CacheEntry>,
    stats: OverlayStats,
}

impl OverlayCache {
    /// Cache over a configured pipeline.
    pub fn new(pipeline: ZonePipeline) -> Self {
        Self {
            pipeline,
            base: None,
            entry: None,
            stats: OverlayStats::default(),
        }
    }

    /// The pipeline renders go through.
    pub fn pipeline(&self) -> &ZonePipeline {
        &self.pipeline
    }

    /// Captures a new base image and drops any cached overlay.
    pub fn set_base(&mut self, pixels: PixelBuffer) -> &BaseImage {
        self.set_base_image(BaseImage::new(pixels))
    }

    /// Installs an already captured base image and drops any cached overlay.
    pub fn set_base_image(&mut self, base: BaseImage) -> &BaseImage {
        debug!(
            base = base.id,
            width = base.pixels.width(),
            height = base.pixels.height(),
            "New base image"
        );
        self.entry = None;
        self.base.insert(base)
    }

    /// Drops the base image and the cached overlay.
    pub fn clear_base(&mut self) {
        self.base = None;
        self.entry = None;
    }

    /// Current base image.
    pub fn base(&self) -> Option<&BaseImage> {
        self.base.as_ref()
    }

    /// Current cache entry.
    pub fn entry(&self) -> Option<&CacheEntry> {
        self.entry.as_ref()
    }

    /// Counters since construction.
    pub fn stats(&self) -> OverlayStats {
        self.stats
    }

    /// Overlay for `params`, or `None` while no base image is set.
    pub fn render(&mut self, params: &RenderParams) -> Option<Arc<PixelBuffer>> {
        let Some(base) = self.base.as_ref() else {
            trace!("Overlay requested without a base image");
            return None;
        };
        let (entry, outcome) = render_cached(&self.pipeline, base, params, self.entry.take());
        match outcome {
            CacheOutcome::Hit => self.stats.hits += 1,
            CacheOutcome::Rebuilt => {
                self.stats.builds += 1;
                self.stats.pixels_processed += base.pixels.pixel_count() as u64;
            }
        }
        let overlay = Arc::clone(&entry.overlay);
        self.entry = Some(entry);
        Some(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{LOGC3_EI800, SLOG3};

    fn base() -> PixelBuffer {
        let data: Vec<u8> = (0..6 * 4 * 4).map(|i| (i * 11 % 256) as u8).collect();
        PixelBuffer::from_rgba8(6, 4, data).unwrap()
    }

    #[test]
    fn test_no_base_is_noop() {
        let mut cache = OverlayCache::default();
        assert!(cache.render(&RenderParams::default()).is_none());
        assert_eq!(cache.stats(), OverlayStats::default());
    }

    #[test]
    fn test_hit_reuses_overlay() {
        let mut cache = OverlayCache::default();
        cache.set_base(base());
        let params = RenderParams::new(SLOG3, false, 0.5);
        let a = cache.render(&params).unwrap();
        let b = cache.render(&params).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
        let stats = cache.stats();
        assert_eq!((stats.builds, stats.hits), (1, 1));
        assert_eq!(stats.pixels_processed, 24);
    }

    #[test]
    fn test_each_key_change_rebuilds() {
        let mut cache = OverlayCache::default();
        cache.set_base(base());
        let mut params = RenderParams::new(SLOG3, false, 0.0);
        cache.render(&params);

        params.set_curve(LOGC3_EI800);
        cache.render(&params);
        assert_eq!(cache.stats().builds, 2);

        params.set_levels(LevelsMode::Legal);
        cache.render(&params);
        assert_eq!(cache.stats().builds, 3);

        params.set_exposure(0.25);
        cache.render(&params);
        assert_eq!(cache.stats().builds, 4);

        cache.render(&params);
        assert_eq!(cache.stats().builds, 4);
        assert_eq!(cache.entry().unwrap().key().exposure(), 0.25);
    }

    #[test]
    fn test_non_finite_exposure_hits_zero_entry() {
        let mut cache = OverlayCache::default();
        cache.set_base(base());
        let a = cache.render(&RenderParams::new(SLOG3, false, 0.0)).unwrap();
        let b = cache.render(&RenderParams::new(SLOG3, false, f32::NAN)).unwrap();
        let c = cache.render(&RenderParams::new(SLOG3, false, -0.0)).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
        assert_eq!(cache.stats().builds, 1);
    }

    #[test]
    fn test_new_base_invalidates() {
        let mut cache = OverlayCache::default();
        let params = RenderParams::default();
        cache.set_base(base());
        let a = cache.render(&params).unwrap();
        // identical pixels, new capture
        cache.set_base(base());
        assert!(cache.entry().is_none());
        let b = cache.render(&params).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
        assert_eq!(cache.stats().builds, 2);

        cache.clear_base();
        assert!(cache.render(&params).is_none());
    }

    #[test]
    fn test_render_cached_value_flow() {
        let pipeline = ZonePipeline::new();
        let img = BaseImage::new(base());
        let other = BaseImage::new(base());
        assert_ne!(img.id(), other.id());

        let params = RenderParams::default();
        let (entry, outcome) = render_cached(&pipeline, &img, &params, None);
        assert_eq!(outcome, CacheOutcome::Rebuilt);
        assert!(entry.matches(&img, &params));
        assert!(!entry.matches(&other, &params));

        let first = Arc::clone(entry.overlay());
        let (entry, outcome) = render_cached(&pipeline, &img, &params, Some(entry));
        assert_eq!(outcome, CacheOutcome::Hit);
        assert!(Arc::ptr_eq(&first, entry.overlay()));

        let (_, outcome) = render_cached(&pipeline, &other, &params, Some(entry));
        assert_eq!(outcome, CacheOutcome::Rebuilt);
    }

    #[test]
    fn test_overlay_matches_direct_render() {
        let pixels = base();
        let params = RenderParams::new(SLOG3, true, -1.0);
        let direct = ZonePipeline::new().render(&pixels, &params);
        let mut cache = OverlayCache::new(ZonePipeline::new());
        cache.set_base(pixels);
        assert_eq!(*cache.render(&params).unwrap(), direct);
    }
}
