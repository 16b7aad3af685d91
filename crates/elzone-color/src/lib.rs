//! # elzone-color
//!
//! Exposure-zone false color for camera log footage.
//!
//! Each pixel of an 8-bit log-encoded image is decoded back to scene-linear
//! light, reduced to one luminance value, expressed in stops relative to 18%
//! grey and painted with the color of one of 15 exposure zones.
//!
//! - **Curves** - S-Log3, LogC3 (EI 800), Blackmagic Film Gen 5, V-Log
//! - **Gamut** - camera primaries -> XYZ -> Rec.709 before measuring
//! - **Zones** - +6 to -6 stops with half-stop zones around mid-grey
//! - **Overlay cache** - one cached overlay per base image and parameter set
//!
//! # Architecture
//!
//! ```text
//!                   elzone-color
//!                        |
//!     +------------------+------------------+
//!     |                  |                  |
//! elzone-transfer  elzone-primaries     elzone-core
//!                        |
//!                   elzone-math
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use elzone_color::{quantize, OverlayCache, RenderParams, ZonePipeline, ZoneValue};
//! use elzone_core::PixelBuffer;
//!
//! assert_eq!(quantize(0.1), ZoneValue::Zero);
//!
//! let mut cache = OverlayCache::new(ZonePipeline::new());
//! cache.set_base(PixelBuffer::filled(16, 9, [105, 105, 105, 255]).unwrap());
//!
//! let params = RenderParams::new("slog3", false, 0.0);
//! let overlay = cache.render(&params).unwrap();
//! assert_eq!(overlay.pixel(0, 0), [0x8a, 0x8a, 0x8a, 255]);
//! ```
//!
//! # Zones
//!
//! | Stops | Zone | Color |
//! |-------|------|-------|
//! | >= 5.5 | +6 | `#ffffff` |
//! | >= 0.75 | +1 | `#e6ff00` |
//! | [-0.25, 0.25) | 0 | `#8a8a8a` |
//! | <= -5.5 | -6 | `#000000` |
//!
//! See [`quantize`] for the full table.
//!
//! # Features
//!
//! - `parallel` (default) - render rows on the rayon pool
//!
//! # Dependencies
//!
//! - [`elzone-core`] - `PixelBuffer`, `Rgb8`
//! - [`elzone-math`] - `Vec3`, `Mat3`
//! - [`elzone-transfer`] - log curves and level remap
//! - [`elzone-primaries`] - camera gamut matrices
//!
//! # Used By
//!
//! - `elzone-cli` - `elzone` binary
//! - `elzone-bench` - benchmarks

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod curve;
pub mod gamut;
pub mod luminance;
pub mod overlay;
pub mod palette;
pub mod pipeline;
pub mod stops;
pub mod zone;

pub use config::{CurveOverride, ZoneConfig};
pub use curve::{CurveDefinition, CurveRegistry};
pub use error::{ZoneError, ZoneResult};
pub use gamut::{GamutConverter, to_reference_gamut};
pub use luminance::{LumaMode, luminance};
pub use overlay::{BaseImage, CacheEntry, CacheKey, CacheOutcome, OverlayCache, OverlayStats, render_cached};
pub use palette::{Palette, color_of};
pub use pipeline::{PixelKernel, RenderParams, ZoneHistogram, ZonePipeline};
pub use stops::{STOP_EPSILON, STOP_LIMIT, StopReference, sanitize_exposure, stops};
pub use zone::{ZONE_COUNT, ZoneValue, quantize};

pub use elzone_transfer::LevelsMode;

/// Prelude with commonly used types.
pub mod prelude {
    pub use crate::{
        CurveRegistry, LevelsMode, LumaMode, OverlayCache, RenderParams, ZoneConfig, ZonePipeline,
        ZoneValue, quantize,
    };
}
