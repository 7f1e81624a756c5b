//! Built-in themes

mod bread;

pub use bread::BreadTheme;
