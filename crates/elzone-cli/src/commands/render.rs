//! Overlay render command.

use crate::RenderArgs;
use anyhow::{Context, Result};
use elzone_color::{OverlayCache, ZoneConfig};
use tracing::{info, trace};

/// Renders the false-color overlay of one image to a PNG.
pub fn run(args: RenderArgs, config: &ZoneConfig, verbose: u8) -> Result<()> {
    trace!(input = %args.input.display(), output = %args.output.display(), "render::run");
    let (pipeline, params) = super::setup(&args.zone, config)?;

    let image = super::load_image(&args.input)?;
    let (width, height) = image.dimensions();
    info!(input = %args.input.display(), width, height, params = %params, "Rendering overlay");

    let mut cache = OverlayCache::new(pipeline);
    cache.set_base(image);
    let overlay = cache
        .render(&params)
        .context("No base image to render")?;

    super::save_image(&args.output, &overlay)?;

    let stats = cache.stats();
    info!(output = %args.output.display(), pixels = stats.pixels_processed, "Overlay written");
    if verbose > 0 {
        println!(
            "{} -> {} ({}x{}, {})",
            args.input.display(),
            args.output.display(),
            width,
            height,
            params
        );
    }
    Ok(())
}
