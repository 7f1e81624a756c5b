//! Theme records and variant resolution
//!
//! A [`Theme`] is an immutable, fully-populated record of design tokens.
//! Records are built once from static palette tables and shared by
//! reference; nothing mutates them after construction.

use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

use crate::themes::BreadTheme;
use crate::tokens::*;

/// Named visual palette selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Stable variant id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// The other variant.
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Parse a variant id. Unknown ids return `None`; defaulting is the
    /// resolver's job, not the parser's.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Full variant list.
    pub fn all() -> &'static [ThemeVariant] {
        const VARIANTS: [ThemeVariant; 2] = [ThemeVariant::Dark, ThemeVariant::Light];
        &VARIANTS
    }
}

impl Display for ThemeVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A fully-populated theme record
#[derive(Clone, Debug)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorTokens,
    typography: TypographyTokens,
    spacing: SpacingTokens,
    border: BorderTokens,
}

impl Theme {
    /// Build a record from its token sets.
    pub fn new(
        variant: ThemeVariant,
        colors: ColorTokens,
        typography: TypographyTokens,
        spacing: SpacingTokens,
        border: BorderTokens,
    ) -> Self {
        Self {
            variant,
            colors,
            typography,
            spacing,
            border,
        }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    pub fn typography(&self) -> &TypographyTokens {
        &self.typography
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn border(&self) -> &BorderTokens {
        &self.border
    }
}

/// A light/dark pair of theme records
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: &'static str,
    light: Theme,
    dark: Theme,
}

impl ThemeBundle {
    /// Create a bundle from its light and dark records.
    pub fn new(name: &'static str, light: Theme, dark: Theme) -> Self {
        Self { name, light, dark }
    }

    /// Bundle name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the record for a known variant.
    pub fn for_variant(&self, variant: ThemeVariant) -> &Theme {
        match variant {
            ThemeVariant::Dark => &self.dark,
            ThemeVariant::Light => &self.light,
        }
    }

    /// Resolve a variant selector onto one concrete record.
    ///
    /// `"dark"` and `"light"` map to their records. An absent or unknown
    /// selector resolves to the light record; a malformed host settings
    /// object must never crash rendering, so this is the documented
    /// default rather than an error.
    pub fn resolve(&self, selector: Option<&str>) -> &Theme {
        match selector {
            Some(id) => match ThemeVariant::from_id(id) {
                Some(variant) => self.for_variant(variant),
                None => {
                    tracing::debug!(selector = id, "unknown theme variant, using light");
                    &self.light
                }
            },
            None => &self.light,
        }
    }
}

/// The default Bread theme bundle, built once and shared.
pub fn default_bundle() -> &'static ThemeBundle {
    static BUNDLE: OnceLock<ThemeBundle> = OnceLock::new();
    BUNDLE.get_or_init(BreadTheme::bundle)
}
