//! Plush Theme
//!
//! Design tokens for the soft-surface widget kit: semantic colors, radii,
//! spacing, and the paired highlight/shade shadows that produce embossed and
//! debossed surfaces. Ships neumorphic light/dark palettes plus TOML-based
//! overrides.

pub mod config;
pub mod theme;
pub mod tokens;

pub use config::{ThemeError, ThemeOverrides};
pub use theme::{ColorScheme, Theme, ThemeState};
pub use tokens::{
    ColorToken, ColorTokens, RadiusToken, RadiusTokens, SpacingToken, SpacingTokens, SurfacePair,
    SurfaceToken, SurfaceTokens,
};
