//! Theme overrides from TOML files
//!
//! A host app can recolor the kit without recompiling:
//!
//! ```toml
//! [colors]
//! primary = "#5E81F4"
//! background = "#E0E5EC"
//!
//! [radii]
//! md = 12.0
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use plush_core::Color;

use crate::theme::Theme;
use crate::tokens::SurfaceTokens;

/// Theme loading error taxonomy
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown color token `{0}`")]
    UnknownColor(String),

    #[error("unknown radius token `{0}`")]
    UnknownRadius(String),

    #[error("invalid color literal `{0}` (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),
}

/// Raw override file contents
#[derive(Debug, Default, Deserialize)]
pub struct ThemeOverrides {
    #[serde(default)]
    colors: BTreeMap<String, String>,
    #[serde(default)]
    radii: BTreeMap<String, f32>,
}

impl ThemeOverrides {
    pub fn from_toml(text: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Apply the overrides onto a base theme
    pub fn apply(&self, mut theme: Theme) -> Result<Theme, ThemeError> {
        for (key, literal) in &self.colors {
            let color = parse_color(literal)?;
            match key.as_str() {
                "background" => {
                    theme.colors.background = color;
                    theme.colors.surface = color;
                }
                "surface" => theme.colors.surface = color,
                "primary" => theme.colors.primary = color,
                "primary_hover" => theme.colors.primary_hover = color,
                "primary_active" => theme.colors.primary_active = color,
                "accent" => theme.colors.accent = color,
                "success" => theme.colors.success = color,
                "error" => theme.colors.error = color,
                "text_primary" => theme.colors.text_primary = color,
                "text_secondary" => theme.colors.text_secondary = color,
                "text_tertiary" => theme.colors.text_tertiary = color,
                "text_inverse" => theme.colors.text_inverse = color,
                "highlight" => theme.colors.highlight = color,
                "shade" => theme.colors.shade = color,
                "border" => theme.colors.border = color,
                "focus_ring" => theme.colors.focus_ring = color,
                other => return Err(ThemeError::UnknownColor(other.to_string())),
            }
        }

        for (key, value) in &self.radii {
            match key.as_str() {
                "sm" => theme.radii.sm = *value,
                "md" => theme.radii.md = *value,
                "lg" => theme.radii.lg = *value,
                "xl" => theme.radii.xl = *value,
                other => return Err(ThemeError::UnknownRadius(other.to_string())),
            }
        }

        // Surface pairs derive from the (possibly overridden) shadow colors
        theme.surfaces = SurfaceTokens::from_colors(theme.colors.highlight, theme.colors.shade);
        Ok(theme)
    }
}

impl Theme {
    /// Load a TOML override file on top of this theme
    pub fn load_overrides(self, path: impl AsRef<Path>) -> Result<Theme, ThemeError> {
        ThemeOverrides::from_path(path)?.apply(self)
    }
}

fn parse_color(literal: &str) -> Result<Color, ThemeError> {
    let hex = literal
        .strip_prefix('#')
        .ok_or_else(|| ThemeError::InvalidColor(literal.to_string()))?;

    let parse = |s: &str| {
        u32::from_str_radix(s, 16).map_err(|_| ThemeError::InvalidColor(literal.to_string()))
    };

    match hex.len() {
        6 => Ok(Color::from_hex(parse(hex)?)),
        8 => {
            let rgba = parse(hex)?;
            let alpha = (rgba & 0xFF) as f32 / 255.0;
            Ok(Color::from_hex(rgba >> 8).with_alpha(alpha))
        }
        _ => Err(ThemeError::InvalidColor(literal.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_applies() {
        let overrides = ThemeOverrides::from_toml(
            r##"
            [colors]
            primary = "#FF0000"

            [radii]
            md = 12.0
            "##,
        )
        .unwrap();

        let theme = overrides.apply(Theme::neumorphic_light()).unwrap();
        assert_eq!(theme.colors.primary, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(theme.radii.md, 12.0);
    }

    #[test]
    fn test_unknown_token_rejected() {
        let overrides = ThemeOverrides::from_toml(
            r##"
            [colors]
            primry = "#FF0000"
            "##,
        )
        .unwrap();

        match overrides.apply(Theme::neumorphic_light()) {
            Err(ThemeError::UnknownColor(name)) => assert_eq!(name, "primry"),
            other => panic!("expected UnknownColor, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_color_literal() {
        assert!(matches!(
            parse_color("FF0000"),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!(matches!(
            parse_color("#F0"),
            Err(ThemeError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_rgba_literal() {
        let c = parse_color("#FF000080").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_shadow_override_rebuilds_surfaces() {
        let overrides = ThemeOverrides::from_toml(
            r##"
            [colors]
            shade = "#000000"
            "##,
        )
        .unwrap();
        let theme = overrides.apply(Theme::neumorphic_light()).unwrap();
        assert_eq!(theme.surfaces.raised_md.shade.color, Color::BLACK);
    }
}
