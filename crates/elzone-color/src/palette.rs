//! Zone palette.
//!
//! A fixed 15-entry table from [`ZoneValue`] to an 8-bit color. Hot zones run
//! white -> red -> yellow, grey marks the zero zone, cold zones run
//! green -> blue -> violet -> black.

use crate::zone::{ZONE_COUNT, ZoneValue};
use elzone_core::Rgb8;

/// Zone-to-color table, indexed by [`ZoneValue::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb8; ZONE_COUNT],
}

impl Palette {
    /// The default false-color ramp.
    pub const EL_ZONE: Self = Self::new([
        Rgb8::from_hex(0xffffff),
        Rgb8::from_hex(0xff2a2a),
        Rgb8::from_hex(0xff6a00),
        Rgb8::from_hex(0xffb000),
        Rgb8::from_hex(0xfff04a),
        Rgb8::from_hex(0xe6ff00),
        Rgb8::from_hex(0xc8ff6a),
        Rgb8::from_hex(0x8a8a8a),
        Rgb8::from_hex(0x3cff3c),
        Rgb8::from_hex(0x00ff66),
        Rgb8::from_hex(0x00d9ff),
        Rgb8::from_hex(0x0070ff),
        Rgb8::from_hex(0x3a2bff),
        Rgb8::from_hex(0x7b2bff),
        Rgb8::from_hex(0x000000),
    ]);

    /// Palette from colors in display order (+6 first).
    pub const fn new(colors: [Rgb8; ZONE_COUNT]) -> Self {
        Self { colors }
    }

    /// Color of a zone.
    #[inline]
    pub const fn color_of(&self, zone: ZoneValue) -> Rgb8 {
        self.colors[zone.index()]
    }

    /// Zones with their colors, in display order.
    pub fn legend(&self) -> impl Iterator<Item = (ZoneValue, Rgb8)> + '_ {
        ZoneValue::ALL.iter().map(|&z| (z, self.color_of(z)))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::EL_ZONE
    }
}

/// Color of a zone in the default palette.
#[inline]
pub const fn color_of(zone: ZoneValue) -> Rgb8 {
    Palette::EL_ZONE.color_of(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_grey() {
        assert_eq!(color_of(ZoneValue::Zero).to_string(), "#8a8a8a");
        assert_eq!(color_of(ZoneValue::PlusSix), Rgb8::new(255, 255, 255));
        assert_eq!(color_of(ZoneValue::MinusSix), Rgb8::new(0, 0, 0));
    }

    #[test]
    fn test_colors_distinct() {
        let legend: Vec<_> = Palette::default().legend().collect();
        assert_eq!(legend.len(), ZONE_COUNT);
        for (i, (_, a)) in legend.iter().enumerate() {
            for (_, b) in &legend[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_legend_order() {
        let zones: Vec<_> = Palette::EL_ZONE.legend().map(|(z, _)| z).collect();
        assert_eq!(zones, ZoneValue::ALL);
        let (z, c) = Palette::EL_ZONE.legend().nth(1).unwrap();
        assert_eq!((z.label(), c.to_string().as_str()), ("+5 stop", "#ff2a2a"));
    }
}
