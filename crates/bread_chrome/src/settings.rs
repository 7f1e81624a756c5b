//! Host settings resolution
//!
//! The host supplies a sparse, partially-nested settings object per
//! render/update cycle. Resolution merges it with built-in defaults to a
//! fully-populated [`ResolvedConfig`]; the input snapshot is never
//! mutated.
//!
//! Defaulting is applied per branch, independently: customizing the bar
//! leaves the theme at its default and vice versa. A leaf value that is
//! present but unrecognized (say `variant: "purple"`) is carried through
//! verbatim; the downstream theme and layout resolvers apply their own
//! fallback. Both layers of defaulting are load-bearing, so neither may
//! be collapsed into the other.

use serde::Deserialize;

/// Theme branch of the settings object
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Variant selector, `"dark"` or `"light"`
    pub variant: Option<String>,
}

/// Bar branch of the settings object
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    /// Pinned screen edge, one of `"top"`, `"right"`, `"bottom"`, `"left"`
    pub position: Option<String>,
}

/// Sparse settings snapshot supplied by the host
///
/// Every level is optional; the whole object may be absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsInput {
    pub theme: Option<ThemeSettings>,
    pub bar: Option<BarSettings>,
}

/// Fully-populated configuration produced from one settings snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Resolved variant selector; unrecognized host values pass through
    pub theme_variant: String,
    /// Resolved position selector; unrecognized host values pass through
    pub bar_position: String,
}

impl ResolvedConfig {
    /// Variant used when the `theme` branch is absent.
    pub const DEFAULT_VARIANT: &'static str = "light";
    /// Position used when the `bar` branch is absent.
    pub const DEFAULT_POSITION: &'static str = "bottom";

    /// Merge a settings snapshot with the built-in defaults.
    ///
    /// Never fails; malformed input is absorbed by the default policy.
    pub fn from_settings(settings: Option<&SettingsInput>) -> Self {
        let theme_variant = settings
            .and_then(|s| s.theme.as_ref())
            .map(|theme| {
                theme
                    .variant
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_VARIANT.to_owned())
            })
            .unwrap_or_else(|| Self::DEFAULT_VARIANT.to_owned());

        let bar_position = settings
            .and_then(|s| s.bar.as_ref())
            .map(|bar| {
                bar.position
                    .clone()
                    .unwrap_or_else(|| Self::DEFAULT_POSITION.to_owned())
            })
            .unwrap_or_else(|| Self::DEFAULT_POSITION.to_owned());

        Self {
            theme_variant,
            bar_position,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::from_settings(None)
    }
}
