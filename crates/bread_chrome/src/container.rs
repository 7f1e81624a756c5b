//! Chrome context composition
//!
//! The container ties the three resolvers together: settings fill in
//! defaults, the theme bundle turns the variant selector into a record,
//! and the layout engine turns the position into geometry rules. The
//! resulting [`ChromeContext`] is plain data handed to whatever renders
//! the bar and its children.

use bread_theme::{default_bundle, Theme};

use crate::layout::LayoutVariant;
use crate::settings::{ResolvedConfig, SettingsInput};

/// Attribute name the host uses to tag rendered chrome with its resolved
/// variant, for styling and test hooks.
pub const VARIANT_TAG_ATTRIBUTE: &str = "data-bread-theme-variant";

/// Rendering context consumed by the presentational chrome
#[derive(Clone, Debug)]
pub struct ChromeContext {
    /// Resolved theme record
    pub theme: &'static Theme,
    /// Geometry rules for the bar
    pub layout: LayoutVariant,
    /// Resolved variant id, echoed for attribute/debug tagging
    pub variant_tag: &'static str,
}

/// Composes settings, theme, and layout into a [`ChromeContext`]
///
/// Composition is pure apart from an optional diagnostic hook invoked
/// with the resolved theme on every call; hosts that want to inspect
/// resolution install it instead of reaching into the resolvers.
pub struct ChromeComposer {
    diagnostic: Option<Box<dyn Fn(&Theme)>>,
}

impl std::fmt::Debug for ChromeComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeComposer")
            .field("diagnostic", &self.diagnostic.is_some())
            .finish()
    }
}

impl ChromeComposer {
    pub fn new() -> Self {
        Self { diagnostic: None }
    }

    /// Install a diagnostic hook, called with the resolved theme on every
    /// composition.
    pub fn diagnostic<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Theme) + 'static,
    {
        self.diagnostic = Some(Box::new(hook));
        self
    }

    /// Compose one rendering context from a settings snapshot.
    pub fn compose(&self, settings: Option<&SettingsInput>) -> ChromeContext {
        let config = ResolvedConfig::from_settings(settings);
        let theme = default_bundle().resolve(Some(config.theme_variant.as_str()));
        let layout = LayoutVariant::resolve(&config.bar_position);

        tracing::debug!(
            variant = theme.variant().id(),
            edge = ?layout.edge,
            "composed chrome context"
        );
        if let Some(hook) = &self.diagnostic {
            hook(theme);
        }

        ChromeContext {
            theme,
            layout,
            variant_tag: theme.variant().id(),
        }
    }
}

impl Default for ChromeComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose a context without a diagnostic hook.
pub fn compose(settings: Option<&SettingsInput>) -> ChromeContext {
    ChromeComposer::new().compose(settings)
}
