//! Visual styling for the explorer screen.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
