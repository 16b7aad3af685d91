//! CLI command implementations

pub mod curves;
pub mod legend;
pub mod probe;
pub mod render;
pub mod stats;

use crate::ZoneArgs;
use anyhow::{Context, Result};
use elzone_color::{LumaMode, RenderParams, ZoneConfig, ZonePipeline};
use elzone_core::PixelBuffer;
use std::path::Path;
use tracing::{debug, warn};

/// Load config from path, or defaults
pub fn load_config(path: Option<&Path>) -> Result<ZoneConfig> {
    match path {
        Some(path) => ZoneConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(ZoneConfig::default()),
    }
}

/// Config with command-line flags applied on top
pub fn effective_config(args: &ZoneArgs, config: &ZoneConfig) -> Result<ZoneConfig> {
    let mut config = config.clone();
    if let Some(curve) = &args.curve {
        config.curve = curve.clone();
    }
    if args.legal || args.full {
        config.legal_levels = args.legal;
    }
    if let Some(exposure) = args.exposure {
        config.exposure = exposure;
    }
    if let Some(luma) = &args.luma {
        config.luma_mode = luma.parse::<LumaMode>()?;
    }
    if args.sequential || args.parallel {
        config.parallel = args.parallel;
    }
    Ok(config)
}

/// Pipeline and render parameters for a command
pub fn setup(args: &ZoneArgs, config: &ZoneConfig) -> Result<(ZonePipeline, RenderParams)> {
    let config = effective_config(args, config)?;
    let pipeline = config.pipeline().context("Invalid curve tuning")?;
    let params = config.render_params();
    if !pipeline.registry().contains(params.curve()) {
        warn!(curve = params.curve(), "Unknown curve, decoding as linear");
    }
    debug!(params = %params, luma = %pipeline.luma(), "Zone setup");
    Ok((pipeline, params))
}

/// Load image from path
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    elzone_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &PixelBuffer) -> Result<()> {
    elzone_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Prints the effective configuration
pub fn show_config(args: &ZoneArgs, config: &ZoneConfig) -> Result<()> {
    let config = effective_config(args, config)?;
    print!("{}", config.to_yaml_string()?);
    Ok(())
}
