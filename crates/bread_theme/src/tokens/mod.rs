//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Typography (font stacks)
//! - Spacing (gap scale)
//! - Borders (stroke width and style)

mod border;
mod color;
mod spacing;
mod typography;

pub use border::*;
pub use color::*;
pub use spacing::*;
pub use typography::*;
