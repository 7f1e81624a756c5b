//! Typography tokens for theming

/// Semantic typography token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TypographyToken {
    FontHeading,
    FontCopy,
}

/// Complete set of typography tokens
#[derive(Clone, Debug)]
pub struct TypographyTokens {
    /// Font stack for headings
    pub font_heading: &'static str,
    /// Font stack for body copy
    pub font_copy: &'static str,
}

impl TypographyTokens {
    /// Get a font stack by token key
    pub fn get(&self, token: TypographyToken) -> &'static str {
        match token {
            TypographyToken::FontHeading => self.font_heading,
            TypographyToken::FontCopy => self.font_copy,
        }
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        Self {
            font_heading: "serif",
            font_copy: "sans-serif",
        }
    }
}
