//! Curve listing.

use anyhow::Result;
use elzone_color::ZoneConfig;

/// Lists registered curves with their tuning.
pub fn run(config: &ZoneConfig) -> Result<()> {
    let registry = config.registry()?;
    println!(
        "{:<14} {:<32} {:>8} {:>9} {:>8} {:>6}  gamut",
        "key", "label", "mid", "offset", "contrast", "bias"
    );
    for def in registry.iter() {
        let marker = if def.key == config.curve { "*" } else { " " };
        println!(
            "{:<14} {:<32} {:>8.4} {:>9.6} {:>8.3} {:>+6.2}  {}{}",
            def.key,
            def.label,
            def.mid_grey,
            def.stop_offset(),
            def.contrast(),
            def.bias(),
            if def.gamut.is_some() { "yes" } else { "no" },
            marker
        );
    }
    Ok(())
}
