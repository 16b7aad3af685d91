//! Full vs legal (restricted) video range.
//!
//! 8-bit video reserves codes 16..=235 for picture content. A legal-range
//! source must be stretched to [0, 1] before the log curve is inverted,
//! otherwise black sits 16 codes high and every zone reads brighter.

/// Legal-range black, as a normalized 8-bit code value.
pub const LEGAL_BLACK: f32 = 16.0 / 255.0;

/// Legal-range white, as a normalized 8-bit code value.
pub const LEGAL_WHITE: f32 = 235.0 / 255.0;

/// Source signal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelsMode {
    /// Codes 0..=255 carry picture content.
    #[default]
    Full,
    /// Codes 16..=235 carry picture content.
    Legal,
}

impl LevelsMode {
    /// Maps a `legal` flag to a mode.
    #[inline]
    pub const fn from_legal(legal: bool) -> Self {
        if legal { Self::Legal } else { Self::Full }
    }

    /// Returns true for [`LevelsMode::Legal`].
    #[inline]
    pub const fn is_legal(self) -> bool {
        matches!(self, Self::Legal)
    }

    /// Remaps one normalized channel sample.
    #[inline]
    pub fn remap(self, v: f32) -> f32 {
        remap(v, self.is_legal())
    }

    /// Short name, as used on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Legal => "legal",
        }
    }
}

/// Remaps one normalized channel sample.
///
/// Identity when `legal` is false. Otherwise stretches [16/255, 235/255] to
/// [0, 1] and clamps, so sub-black and super-white codes saturate.
///
/// # Example
///
/// ```rust
/// use elzone_transfer::levels::remap;
///
/// assert_eq!(remap(16.0 / 255.0, true), 0.0);
/// assert_eq!(remap(235.0 / 255.0, true), 1.0);
/// assert_eq!(remap(16.0 / 255.0, false), 16.0 / 255.0);
/// ```
#[inline]
pub fn remap(v: f32, legal: bool) -> f32 {
    if !legal {
        return v;
    }
    crate::clamp01((v - LEGAL_BLACK) / (LEGAL_WHITE - LEGAL_BLACK))
}
