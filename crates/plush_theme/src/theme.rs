//! Built-in themes and the process-global theme handle

use std::sync::{Arc, RwLock};

use plush_core::Color;

use crate::tokens::{
    ColorToken, ColorTokens, RadiusToken, RadiusTokens, SpacingToken, SpacingTokens, SurfacePair,
    SurfaceToken, SurfaceTokens,
};

/// Light or dark scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

/// A complete token set
#[derive(Clone, Debug)]
pub struct Theme {
    pub scheme: ColorScheme,
    pub colors: ColorTokens,
    pub radii: RadiusTokens,
    pub spacing: SpacingTokens,
    pub surfaces: SurfaceTokens,
}

impl Theme {
    /// The classic soft-surface light palette: near-white blue-gray base,
    /// white highlight, cool shade.
    pub fn neumorphic_light() -> Self {
        let background = Color::from_hex(0xE0E5EC);
        let highlight = Color::WHITE.with_alpha(0.9);
        let shade = Color::from_hex(0xA3B1C6).with_alpha(0.7);
        Self {
            scheme: ColorScheme::Light,
            colors: ColorTokens {
                background,
                surface: background,
                primary: Color::from_hex(0x5E81F4),
                primary_hover: Color::from_hex(0x4A6FE8),
                primary_active: Color::from_hex(0x3A5BD0),
                accent: Color::from_hex(0x7C5CFC),
                success: Color::from_hex(0x3DBE8B),
                error: Color::from_hex(0xF45E6D),
                text_primary: Color::from_hex(0x3B4252),
                text_secondary: Color::from_hex(0x6B7280),
                text_tertiary: Color::from_hex(0x9AA3B2),
                text_inverse: Color::WHITE,
                highlight,
                shade,
                border: Color::rgba(0.0, 0.0, 0.0, 0.08),
                focus_ring: Color::from_hex(0x5E81F4).with_alpha(0.4),
            },
            radii: RadiusTokens::default(),
            spacing: SpacingTokens::default(),
            surfaces: SurfaceTokens::from_colors(highlight, shade),
        }
    }

    /// Dark variant: slate base, faint cool highlight, deep shade
    pub fn neumorphic_dark() -> Self {
        let background = Color::from_hex(0x2E3440);
        let highlight = Color::from_hex(0x3B4252).lighten(0.25).with_alpha(0.6);
        let shade = Color::from_hex(0x1B1F27).with_alpha(0.8);
        Self {
            scheme: ColorScheme::Dark,
            colors: ColorTokens {
                background,
                surface: background,
                primary: Color::from_hex(0x6E8EF5),
                primary_hover: Color::from_hex(0x88A2F7),
                primary_active: Color::from_hex(0xA0B5F9),
                accent: Color::from_hex(0x9B7FFD),
                success: Color::from_hex(0x4ACB98),
                error: Color::from_hex(0xF47181),
                text_primary: Color::from_hex(0xE5E9F0),
                text_secondary: Color::from_hex(0xAAB2C0),
                text_tertiary: Color::from_hex(0x7B8394),
                text_inverse: Color::from_hex(0x2E3440),
                highlight,
                shade,
                border: Color::rgba(1.0, 1.0, 1.0, 0.08),
                focus_ring: Color::from_hex(0x6E8EF5).with_alpha(0.4),
            },
            radii: RadiusTokens::default(),
            spacing: SpacingTokens::default(),
            surfaces: SurfaceTokens::from_colors(highlight, shade),
        }
    }

    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.get(token)
    }

    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    pub fn spacing(&self, token: SpacingToken) -> f32 {
        self.spacing.get(token)
    }

    pub fn surface(&self, token: SurfaceToken) -> SurfacePair {
        self.surfaces.get(token)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neumorphic_light()
    }
}

static ACTIVE_THEME: RwLock<Option<Arc<Theme>>> = RwLock::new(None);

/// Process-global active theme
///
/// Widgets resolve tokens at paint time through `ThemeState::get()`, so a
/// theme swap takes effect on the next frame without touching widget state.
pub struct ThemeState;

impl ThemeState {
    /// The active theme (the light soft-surface theme until one is set)
    pub fn get() -> Arc<Theme> {
        if let Some(theme) = ACTIVE_THEME.read().unwrap().as_ref() {
            return theme.clone();
        }
        let mut slot = ACTIVE_THEME.write().unwrap();
        slot.get_or_insert_with(|| Arc::new(Theme::default())).clone()
    }

    pub fn set(theme: Theme) {
        tracing::debug!(scheme = ?theme.scheme, "switching active theme");
        *ACTIVE_THEME.write().unwrap() = Some(Arc::new(theme));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.scheme, ColorScheme::Light);
        assert_eq!(theme.color(ColorToken::Background), Color::from_hex(0xE0E5EC));
    }

    #[test]
    fn test_token_lookup() {
        let theme = Theme::neumorphic_light();
        assert_eq!(theme.radius(RadiusToken::Md), 10.0);
        assert_eq!(theme.spacing(SpacingToken::Space2), 8.0);
        let pair = theme.surface(SurfaceToken::RaisedMd);
        assert_eq!(pair.shade.offset_x, 5.0);
    }

    #[test]
    fn test_global_theme_roundtrip() {
        ThemeState::set(Theme::neumorphic_light());
        let theme = ThemeState::get();
        assert_eq!(theme.scheme, ColorScheme::Light);
    }
}
