//! Spacing tokens for theming
//!
//! The gap scale is em-denominated so spacing tracks the host font size.

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    GapTiny,
    GapSmall,
    GapStandard,
    GapLarge,
    GapSpacious,
}

impl SpacingToken {
    /// Stable kebab-case id, used for CSS variable names.
    pub fn id(self) -> &'static str {
        match self {
            Self::GapTiny => "gap-tiny",
            Self::GapSmall => "gap-small",
            Self::GapStandard => "gap-standard",
            Self::GapLarge => "gap-large",
            Self::GapSpacious => "gap-spacious",
        }
    }
}

/// Complete set of spacing tokens, in em units
#[derive(Clone, Debug)]
pub struct SpacingTokens {
    pub gap_tiny: f32,
    pub gap_small: f32,
    pub gap_standard: f32,
    pub gap_large: f32,
    pub gap_spacious: f32,
}

impl SpacingTokens {
    /// Get a gap value (in em) by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::GapTiny => self.gap_tiny,
            SpacingToken::GapSmall => self.gap_small,
            SpacingToken::GapStandard => self.gap_standard,
            SpacingToken::GapLarge => self.gap_large,
            SpacingToken::GapSpacious => self.gap_spacious,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            gap_tiny: 0.25,
            gap_small: 0.5,
            gap_standard: 1.0,
            gap_large: 2.0,
            gap_spacious: 4.0,
        }
    }
}
