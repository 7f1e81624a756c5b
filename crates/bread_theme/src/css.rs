//! CSS variable export
//!
//! The host style layer paints the chrome with `--bread-*` custom
//! properties. This module turns a resolved [`Theme`] into the variable
//! map that layer injects.

use rustc_hash::FxHashMap;

use crate::theme::Theme;
use crate::tokens::{ColorToken, SpacingToken, TypographyToken};

/// Generate a CSS variable map from a theme record.
///
/// Keys are variable names without the `--bread-` prefix; values are CSS
/// strings (hex colors, `em`/`px` lengths, `border-style` keywords).
///
/// # Example
///
/// ```rust
/// use bread_theme::{css_variable_map, default_bundle};
///
/// let vars = css_variable_map(default_bundle().resolve(None));
/// assert_eq!(vars["color-text-main"], "#2c1264");
/// assert_eq!(vars["border-style-box"], "dashed");
/// ```
pub fn css_variable_map(theme: &Theme) -> FxHashMap<String, String> {
    let mut vars = FxHashMap::default();

    for token in ColorToken::all() {
        vars.insert(
            format!("color-{}", token.id()),
            theme.colors().get(*token).to_css(),
        );
    }

    let typography = theme.typography();
    vars.insert(
        "font-heading".into(),
        typography.get(TypographyToken::FontHeading).into(),
    );
    vars.insert(
        "font-copy".into(),
        typography.get(TypographyToken::FontCopy).into(),
    );

    for token in [
        SpacingToken::GapTiny,
        SpacingToken::GapSmall,
        SpacingToken::GapStandard,
        SpacingToken::GapLarge,
        SpacingToken::GapSpacious,
    ] {
        vars.insert(
            format!("spacing-{}", token.id()),
            format!("{}em", theme.spacing().get(token)),
        );
    }

    let border = theme.border();
    vars.insert("border-width".into(), format!("{}px", border.width));
    vars.insert("border-style-box".into(), border.style_box.id().into());
    vars.insert("border-style-input".into(), border.style_input.id().into());

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_bundle;

    #[test]
    fn map_covers_every_color_token() {
        let vars = css_variable_map(default_bundle().resolve(Some("dark")));
        for token in ColorToken::all() {
            let key = format!("color-{}", token.id());
            assert!(vars.contains_key(&key), "missing {key}");
        }
    }

    #[test]
    fn spacing_values_are_em_denominated() {
        let vars = css_variable_map(default_bundle().resolve(None));
        assert_eq!(vars["spacing-gap-tiny"], "0.25em");
        assert_eq!(vars["spacing-gap-standard"], "1em");
        assert_eq!(vars["spacing-gap-spacious"], "4em");
    }

    #[test]
    fn border_tokens_serialize_to_css_keywords() {
        let vars = css_variable_map(default_bundle().resolve(None));
        assert_eq!(vars["border-width"], "2px");
        assert_eq!(vars["border-style-box"], "dashed");
        assert_eq!(vars["border-style-input"], "solid");
    }
}
