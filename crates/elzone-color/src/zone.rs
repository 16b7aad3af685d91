//! Exposure zones and the stop -> zone quantizer.

use std::fmt;

/// One of the 15 exposure buckets, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneValue {
    /// +6 stops and above.
    PlusSix,
    /// +5 stops.
    PlusFive,
    /// +4 stops.
    PlusFour,
    /// +3 stops.
    PlusThree,
    /// +2 stops.
    PlusTwo,
    /// +1 stop.
    PlusOne,
    /// +1/2 stop.
    PlusHalf,
    /// Mid-grey.
    Zero,
    /// -1/2 stop.
    MinusHalf,
    /// -1 stop.
    MinusOne,
    /// -2 stops.
    MinusTwo,
    /// -3 stops.
    MinusThree,
    /// -4 stops.
    MinusFour,
    /// -5 stops.
    MinusFive,
    /// -6 stops and below.
    MinusSix,
}

/// Number of zones.
pub const ZONE_COUNT: usize = 15;

impl ZoneValue {
    /// Every zone in display order, +6 to -6.
    pub const ALL: [ZoneValue; ZONE_COUNT] = [
        ZoneValue::PlusSix,
        ZoneValue::PlusFive,
        ZoneValue::PlusFour,
        ZoneValue::PlusThree,
        ZoneValue::PlusTwo,
        ZoneValue::PlusOne,
        ZoneValue::PlusHalf,
        ZoneValue::Zero,
        ZoneValue::MinusHalf,
        ZoneValue::MinusOne,
        ZoneValue::MinusTwo,
        ZoneValue::MinusThree,
        ZoneValue::MinusFour,
        ZoneValue::MinusFive,
        ZoneValue::MinusSix,
    ];

    /// Position in [`ZoneValue::ALL`]; 0 is +6, 14 is -6.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Zone at a display position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Nominal stop value of the zone.
    pub const fn stops(self) -> f32 {
        match self {
            ZoneValue::PlusSix => 6.0,
            ZoneValue::PlusFive => 5.0,
            ZoneValue::PlusFour => 4.0,
            ZoneValue::PlusThree => 3.0,
            ZoneValue::PlusTwo => 2.0,
            ZoneValue::PlusOne => 1.0,
            ZoneValue::PlusHalf => 0.5,
            ZoneValue::Zero => 0.0,
            ZoneValue::MinusHalf => -0.5,
            ZoneValue::MinusOne => -1.0,
            ZoneValue::MinusTwo => -2.0,
            ZoneValue::MinusThree => -3.0,
            ZoneValue::MinusFour => -4.0,
            ZoneValue::MinusFive => -5.0,
            ZoneValue::MinusSix => -6.0,
        }
    }

    /// Legend label, e.g. `"+0.5 stop"`.
    pub const fn label(self) -> &'static str {
        match self {
            ZoneValue::PlusSix => "+6 stop",
            ZoneValue::PlusFive => "+5 stop",
            ZoneValue::PlusFour => "+4 stop",
            ZoneValue::PlusThree => "+3 stop",
            ZoneValue::PlusTwo => "+2 stop",
            ZoneValue::PlusOne => "+1 stop",
            ZoneValue::PlusHalf => "+0.5 stop",
            ZoneValue::Zero => "0 stop",
            ZoneValue::MinusHalf => "-0.5 stop",
            ZoneValue::MinusOne => "-1 stop",
            ZoneValue::MinusTwo => "-2 stop",
            ZoneValue::MinusThree => "-3 stop",
            ZoneValue::MinusFour => "-4 stop",
            ZoneValue::MinusFive => "-5 stop",
            ZoneValue::MinusSix => "-6 stop",
        }
    }
}

impl fmt::Display for ZoneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a stop value to its zone. Total over `f32`; NaN lands in -6.
///
/// | stops | zone |
/// |-------|------|
/// | `>= 5.5` | +6 |
/// | `>= 4.5` | +5 |
/// | `>= 3.5` | +4 |
/// | `>= 2.5` | +3 |
/// | `>= 1.5` | +2 |
/// | `>= 0.75` | +1 |
/// | `>= 0.25` | +0.5 |
/// | `>= -0.25` | 0 |
/// | `> -0.75` | -0.5 |
/// | `> -1.5` | -1 |
/// | `> -2.5` | -2 |
/// | `> -3.5` | -3 |
/// | `> -4.5` | -4 |
/// | `> -5.5` | -5 |
/// | otherwise | -6 |
///
/// The zero zone is closed at both ends: exactly -0.25 reads as 0.
pub fn quantize(stops: f32) -> ZoneValue {
    if stops >= 5.5 {
        ZoneValue::PlusSix
    } else if stops >= 4.5 {
        ZoneValue::PlusFive
    } else if stops >= 3.5 {
        ZoneValue::PlusFour
    } else if stops >= 2.5 {
        ZoneValue::PlusThree
    } else if stops >= 1.5 {
        ZoneValue::PlusTwo
    } else if stops >= 0.75 {
        ZoneValue::PlusOne
    } else if stops >= 0.25 {
        ZoneValue::PlusHalf
    } else if stops >= -0.25 {
        ZoneValue::Zero
    } else if stops > -0.75 {
        ZoneValue::MinusHalf
    } else if stops > -1.5 {
        ZoneValue::MinusOne
    } else if stops > -2.5 {
        ZoneValue::MinusTwo
    } else if stops > -3.5 {
        ZoneValue::MinusThree
    } else if stops > -4.5 {
        ZoneValue::MinusFour
    } else if stops > -5.5 {
        ZoneValue::MinusFive
    } else {
        ZoneValue::MinusSix
    }
}
