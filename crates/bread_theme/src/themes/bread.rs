//! Default Bread theme
//!
//! The light variant uses the warm "marmalade" palette the editor chrome
//! shipped with; the dark variant is built from Solarized base and accent
//! colors.

use crate::color::Color;
use crate::theme::{Theme, ThemeBundle, ThemeVariant};
use crate::tokens::*;

/// Solarized palette (dark theme)
pub mod solarized {
    use crate::color::Color;

    pub const BASE03: Color = Color::from_hex(0x002B36);
    pub const BASE02: Color = Color::from_hex(0x073642);
    pub const BASE01: Color = Color::from_hex(0x586E75);
    pub const BASE00: Color = Color::from_hex(0x657B83);
    pub const BASE0: Color = Color::from_hex(0x839496);
    pub const BASE1: Color = Color::from_hex(0x93A1A1);
    pub const BASE2: Color = Color::from_hex(0xEEE8D5);
    pub const BASE3: Color = Color::from_hex(0xFDF6E3);
    pub const YELLOW: Color = Color::from_hex(0xB58900);
    pub const ORANGE: Color = Color::from_hex(0xCB4B16);
    pub const RED: Color = Color::from_hex(0xDC322F);
    pub const MAGENTA: Color = Color::from_hex(0xD33682);
    pub const VIOLET: Color = Color::from_hex(0x6C71C4);
    pub const BLUE: Color = Color::from_hex(0x268BD2);
    pub const CYAN: Color = Color::from_hex(0x2AA198);
    pub const GREEN: Color = Color::from_hex(0x859900);
}

/// Marmalade palette (light theme)
pub mod marmalade {
    use crate::color::Color;

    pub const INK: Color = Color::from_hex(0x2C1264);
    pub const INK_DEEP: Color = Color::from_hex(0x120234);
    pub const INK_MUTED: Color = Color::from_hex(0x373440);
    pub const PEACH: Color = Color::from_hex(0xFFC9A9);
    pub const STRAW: Color = Color::from_hex(0xEDE2B0);
    pub const MUSTARD: Color = Color::from_hex(0xC4B04B);
    pub const PARCHMENT: Color = Color::from_hex(0xD9D7CD);
    pub const ROSE: Color = Color::from_hex(0xCE7575);
    pub const SAND: Color = Color::from_hex(0xC4B5A9);
    pub const UMBER: Color = Color::from_hex(0x7B6D63);
}

/// Default Bread theme
#[derive(Clone, Debug)]
pub struct BreadTheme;

impl BreadTheme {
    /// Create the light record (marmalade palette)
    pub fn light() -> Theme {
        Theme::new(
            ThemeVariant::Light,
            ColorTokens {
                text_main: marmalade::INK,
                text_dark: marmalade::INK_DEEP,
                text_desaturated: marmalade::INK_MUTED,
                background_main: marmalade::PEACH,
                background_slab: marmalade::STRAW,
                background_dark: marmalade::MUSTARD,
                background_desaturated: marmalade::PARCHMENT,
                accent_main: marmalade::ROSE,
                accent_detail: marmalade::SAND,
                accent_dark: marmalade::UMBER,
                accent_desaturated: marmalade::UMBER,
            },
            TypographyTokens::default(),
            SpacingTokens::default(),
            BorderTokens::default(),
        )
    }

    /// Create the dark record (Solarized palette)
    pub fn dark() -> Theme {
        Theme::new(
            ThemeVariant::Dark,
            ColorTokens {
                text_main: solarized::BASE3,
                text_dark: solarized::BASE2,
                text_desaturated: solarized::BASE1,
                background_main: solarized::BASE03,
                background_slab: solarized::BASE02,
                background_dark: solarized::BASE01,
                background_desaturated: solarized::BASE00,
                accent_main: solarized::ORANGE,
                accent_detail: solarized::BASE01,
                accent_dark: solarized::YELLOW,
                accent_desaturated: solarized::BASE00,
            },
            TypographyTokens::default(),
            SpacingTokens::default(),
            BorderTokens::default(),
        )
    }

    /// Create a bundle with the light and dark records
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Bread", Self::light(), Self::dark())
    }
}
