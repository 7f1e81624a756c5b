//! RGBA color value used by all color tokens

/// An RGBA color with components in the `0.0..=1.0` range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    /// Create an opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a `0xRRGGBB` hex value.
    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self { r, g, b, a: 1.0 }
    }

    /// Return this color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Serialize as a CSS color string: `#rrggbb` when opaque,
    /// `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        if self.a < 1.0 {
            format!("rgba({},{},{},{})", r, g, b, self.a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_roundtrips_through_css() {
        let c = Color::from_hex(0xFFC9A9);
        assert_eq!(c.to_css(), "#ffc9a9");
    }

    #[test]
    fn translucent_colors_serialize_as_rgba() {
        let c = Color::from_hex(0x000000).with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
    }
}
