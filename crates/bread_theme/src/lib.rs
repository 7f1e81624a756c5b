//! Bread Theme System
//!
//! Design tokens and theme records for the Bread editor chrome.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, typography, spacing, borders
//! - **Theme records**: Fully-populated light and dark variants
//! - **Variant resolution**: A sparse selector string maps onto one
//!   concrete record, falling back to the light variant
//! - **CSS variable export**: Token values as `--bread-*` custom properties
//!   for the host style layer
//!
//! # Quick Start
//!
//! ```rust
//! use bread_theme::{default_bundle, ColorToken};
//!
//! // Resolve a variant selector supplied by the host
//! let theme = default_bundle().resolve(Some("dark"));
//! let text = theme.colors().get(ColorToken::TextMain);
//! ```
//!
//! # Resolution policy
//!
//! An unknown or absent selector is not an error: it resolves to the light
//! record. Malformed host configuration must never crash rendering, so the
//! resolver substitutes the documented default and proceeds.
//!
//! # Tokens
//!
//! Tokens are the atomic values that make up the design system:
//!
//! - [`ColorTokens`]: Semantic colors (text, background, accent families)
//! - [`TypographyTokens`]: Heading and copy font stacks
//! - [`SpacingTokens`]: em-based gap scale
//! - [`BorderTokens`]: Stroke width and box/input stroke styles

pub mod color;
pub mod css;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use color::Color;
pub use css::css_variable_map;
pub use theme::{default_bundle, Theme, ThemeBundle, ThemeVariant};
pub use themes::BreadTheme;
pub use tokens::*;
