//! Zone histogram command.

use crate::StatsArgs;
use anyhow::Result;
use elzone_color::{ZoneConfig, color_of};
use tracing::trace;

/// Prints pixels per zone for each input.
pub fn run(args: StatsArgs, config: &ZoneConfig, verbose: u8) -> Result<()> {
    let (pipeline, params) = super::setup(&args.zone, config)?;

    for path in &args.input {
        trace!(input = %path.display(), "stats::run");
        let image = super::load_image(path)?;
        let hist = pipeline.histogram(&image, &params);

        println!("{} ({}x{}, {})", path.display(), image.width(), image.height(), params);
        for (zone, count) in hist.iter() {
            if count == 0 && verbose == 0 {
                continue;
            }
            println!(
                "  {:>10}  {}  {:>10}  {:>6.2}%",
                zone.label(),
                color_of(zone),
                count,
                hist.fraction(zone) * 100.0
            );
        }
        if let Some(zone) = hist.dominant() {
            println!("  dominant: {zone}");
        }
    }
    Ok(())
}
