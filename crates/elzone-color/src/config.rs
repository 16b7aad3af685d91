//! YAML configuration for the zone pipeline.
//!
//! ```yaml
//! curve: logc3_ei800
//! legal_levels: true
//! exposure: 0.5
//! luma_mode: weighted
//! parallel: true
//! curves:
//!   bmd_film_gen5:
//!     contrast: 1.1
//!     bias: 0.3
//! ```
//!
//! Every field is optional. Overrides are applied once, when the registry is
//! built.

use crate::curve::{CurveRegistry, SLOG3};
use crate::luminance::LumaMode;
use crate::pipeline::{RenderParams, ZonePipeline};
use crate::ZoneResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Per-curve tuning override. Unset fields keep the built-in value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveOverride {
    /// Linear value read as zero stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid_grey: Option<f32>,
    /// Stop-domain offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_offset: Option<f32>,
    /// Stop-domain contrast scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f32>,
    /// Stop-domain bias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias: Option<f32>,
}

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConfig {
    /// Default curve key.
    pub curve: String,
    /// Treat sources as legal-range video.
    pub legal_levels: bool,
    /// Default exposure offset in stops.
    pub exposure: f32,
    /// Luminance estimator.
    pub luma_mode: LumaMode,
    /// Render rows on the rayon pool.
    pub parallel: bool,
    /// Tuning overrides keyed by curve.
    pub curves: BTreeMap<String, CurveOverride>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            curve: SLOG3.to_string(),
            legal_levels: false,
            exposure: 0.0,
            luma_mode: LumaMode::default(),
            parallel: true,
            curves: BTreeMap::new(),
        }
    }
}

impl ZoneConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ZoneResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading zone config");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> ZoneResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes back to YAML.
    pub fn to_yaml_string(&self) -> ZoneResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Standard registry with this config's overrides applied.
    pub fn registry(&self) -> ZoneResult<CurveRegistry> {
        CurveRegistry::standard().with_overrides(&self.curves)
    }

    /// Default render parameters.
    pub fn render_params(&self) -> RenderParams {
        RenderParams::new(self.curve.clone(), self.legal_levels, self.exposure)
    }

    /// Pipeline built from this config.
    pub fn pipeline(&self) -> ZoneResult<ZonePipeline> {
        Ok(ZonePipeline::new()
            .with_registry(self.registry()?)
            .with_luma(self.luma_mode)
            .with_parallel(self.parallel))
    }
}
