//! Zone legend.

use anyhow::Result;
use elzone_color::Palette;

/// Prints every zone with its color, brightest first.
pub fn run() -> Result<()> {
    for (zone, color) in Palette::default().legend() {
        let [r, g, b, _] = color.opaque();
        // 24-bit background swatch
        println!("\x1b[48;2;{r};{g};{b}m    \x1b[0m  {color}  {zone}");
    }
    Ok(())
}
