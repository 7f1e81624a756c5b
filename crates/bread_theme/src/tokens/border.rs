//! Border tokens for theming

/// Stroke style for borders
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BorderStyle {
    Solid,
    Dashed,
}

impl BorderStyle {
    /// CSS `border-style` keyword.
    pub fn id(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        }
    }
}

/// Complete set of border tokens
#[derive(Clone, Debug)]
pub struct BorderTokens {
    /// Stroke width in px
    pub width: f32,
    /// Stroke style for boxes (bars, popover panels)
    pub style_box: BorderStyle,
    /// Stroke style for inputs
    pub style_input: BorderStyle,
}

impl Default for BorderTokens {
    fn default() -> Self {
        Self {
            width: 2.0,
            style_box: BorderStyle::Dashed,
            style_input: BorderStyle::Solid,
        }
    }
}
