//! Bread Chrome Core
//!
//! Turns a sparse, host-supplied settings object into the rendering
//! context the editor chrome (bar, buttons) consumes:
//!
//! 1. [`ResolvedConfig`] fills the gaps in a [`SettingsInput`] snapshot
//! 2. [`bread_theme`] resolves the theme variant onto a concrete record
//! 3. [`LayoutVariant`] maps the bar position onto geometry rules
//! 4. [`ChromeComposer`] composes the three into one [`ChromeContext`]
//!
//! The context is plain data, threaded explicitly to every consumer that
//! needs it; there is no ambient/global lookup.
//!
//! Malformed settings are never an error here: every resolver substitutes
//! a documented default and proceeds, so a bad settings object cannot
//! crash rendering.
//!
//! # Example
//!
//! ```rust
//! use bread_chrome::{compose, BarSettings, SettingsInput, ThemeSettings};
//! use bread_chrome::{Edge, Orientation};
//! use bread_theme::ThemeVariant;
//!
//! let settings = SettingsInput {
//!     theme: Some(ThemeSettings { variant: Some("dark".into()) }),
//!     bar: Some(BarSettings { position: Some("left".into()) }),
//! };
//!
//! let ctx = compose(Some(&settings));
//! assert_eq!(ctx.theme.variant(), ThemeVariant::Dark);
//! assert_eq!(ctx.layout.orientation, Orientation::Column);
//! assert_eq!(ctx.layout.edge, Edge::Left);
//! ```

pub mod container;
pub mod layout;
pub mod settings;

// Re-export commonly used types
pub use container::{compose, ChromeComposer, ChromeContext, VARIANT_TAG_ATTRIBUTE};
pub use layout::{BarPosition, Edge, LayoutVariant, Orientation};
pub use settings::{BarSettings, ResolvedConfig, SettingsInput, ThemeSettings};
