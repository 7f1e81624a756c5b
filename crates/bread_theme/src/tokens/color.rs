//! Color tokens for theming

use crate::color::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Text colors
    TextMain,
    TextDark,
    TextDesaturated,

    // Background colors
    BackgroundMain,
    BackgroundSlab,
    BackgroundDark,
    BackgroundDesaturated,

    // Accent colors
    AccentMain,
    AccentDetail,
    AccentDark,
    AccentDesaturated,
}

impl ColorToken {
    /// Full token list, in declaration order.
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 11] = [
            ColorToken::TextMain,
            ColorToken::TextDark,
            ColorToken::TextDesaturated,
            ColorToken::BackgroundMain,
            ColorToken::BackgroundSlab,
            ColorToken::BackgroundDark,
            ColorToken::BackgroundDesaturated,
            ColorToken::AccentMain,
            ColorToken::AccentDetail,
            ColorToken::AccentDark,
            ColorToken::AccentDesaturated,
        ];
        &TOKENS
    }

    /// Stable kebab-case id, used for CSS variable names.
    pub fn id(self) -> &'static str {
        match self {
            Self::TextMain => "text-main",
            Self::TextDark => "text-dark",
            Self::TextDesaturated => "text-desaturated",
            Self::BackgroundMain => "background-main",
            Self::BackgroundSlab => "background-slab",
            Self::BackgroundDark => "background-dark",
            Self::BackgroundDesaturated => "background-desaturated",
            Self::AccentMain => "accent-main",
            Self::AccentDetail => "accent-detail",
            Self::AccentDark => "accent-dark",
            Self::AccentDesaturated => "accent-desaturated",
        }
    }
}

/// Complete set of semantic color tokens
///
/// Every field is a concrete color; a partially-populated record is
/// unrepresentable.
#[derive(Clone, Debug)]
pub struct ColorTokens {
    // Text colors
    pub text_main: Color,
    pub text_dark: Color,
    pub text_desaturated: Color,

    // Background colors
    pub background_main: Color,
    pub background_slab: Color,
    pub background_dark: Color,
    pub background_desaturated: Color,

    // Accent colors
    pub accent_main: Color,
    pub accent_detail: Color,
    pub accent_dark: Color,
    pub accent_desaturated: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::TextMain => self.text_main,
            ColorToken::TextDark => self.text_dark,
            ColorToken::TextDesaturated => self.text_desaturated,
            ColorToken::BackgroundMain => self.background_main,
            ColorToken::BackgroundSlab => self.background_slab,
            ColorToken::BackgroundDark => self.background_dark,
            ColorToken::BackgroundDesaturated => self.background_desaturated,
            ColorToken::AccentMain => self.accent_main,
            ColorToken::AccentDetail => self.accent_detail,
            ColorToken::AccentDark => self.accent_dark,
            ColorToken::AccentDesaturated => self.accent_desaturated,
        }
    }
}
