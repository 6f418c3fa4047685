//! Design tokens
//!
//! Widgets never hard-code colors or radii; they ask the active theme for a
//! token. The soft-surface look lives in [`SurfacePair`]: every raised or
//! sunken surface is a pair of offset shadows, light toward the light source
//! and dark away from it.

use plush_core::{Color, Shadow};

/// Semantic color token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Window/background base the soft surfaces are carved from
    Background,
    /// Surface fill for widget chrome (usually equals Background)
    Surface,
    Primary,
    PrimaryHover,
    PrimaryActive,
    Accent,
    Success,
    Error,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    /// Light-source side of surface shadows
    Highlight,
    /// Shaded side of surface shadows
    Shade,
    Border,
    FocusRing,
}

/// Color token table
#[derive(Clone, Copy, Debug)]
pub struct ColorTokens {
    pub background: Color,
    pub surface: Color,
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_active: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_inverse: Color,
    pub highlight: Color,
    pub shade: Color,
    pub border: Color,
    pub focus_ring: Color,
}

impl ColorTokens {
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::PrimaryActive => self.primary_active,
            ColorToken::Accent => self.accent,
            ColorToken::Success => self.success,
            ColorToken::Error => self.error,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::TextInverse => self.text_inverse,
            ColorToken::Highlight => self.highlight,
            ColorToken::Shade => self.shade,
            ColorToken::Border => self.border,
            ColorToken::FocusRing => self.focus_ring,
        }
    }
}

/// Corner radius token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
    Xl,
    /// Fully rounded (capsule)
    Full,
}

/// Radius token table
#[derive(Clone, Copy, Debug)]
pub struct RadiusTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            sm: 6.0,
            md: 10.0,
            lg: 14.0,
            xl: 20.0,
        }
    }
}

impl RadiusTokens {
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Full => 9999.0,
        }
    }
}

/// Spacing token (4px scale)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingToken {
    Space1,
    Space2,
    Space3,
    Space4,
    Space6,
}

/// Spacing token table
#[derive(Clone, Copy, Debug)]
pub struct SpacingTokens {
    pub unit: f32,
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self { unit: 4.0 }
    }
}

impl SpacingTokens {
    pub fn get(&self, token: SpacingToken) -> f32 {
        let steps = match token {
            SpacingToken::Space1 => 1.0,
            SpacingToken::Space2 => 2.0,
            SpacingToken::Space3 => 3.0,
            SpacingToken::Space4 => 4.0,
            SpacingToken::Space6 => 6.0,
        };
        self.unit * steps
    }
}

/// Paired highlight/shade shadows forming one soft surface
#[derive(Clone, Copy, Debug)]
pub struct SurfacePair {
    pub highlight: Shadow,
    pub shade: Shadow,
}

impl SurfacePair {
    /// Embossed surface: shadows cast outward from the shape
    pub fn raised(distance: f32, blur: f32, highlight: Color, shade: Color) -> Self {
        Self {
            highlight: Shadow::new(-distance, -distance, blur, highlight),
            shade: Shadow::new(distance, distance, blur, shade),
        }
    }

    /// Debossed surface: shadows cast inward, reading as a well
    pub fn inset(distance: f32, blur: f32, highlight: Color, shade: Color) -> Self {
        Self {
            highlight: Shadow::inner(-distance, -distance, blur, highlight),
            shade: Shadow::inner(distance, distance, blur, shade),
        }
    }

    /// Both shadows in paint order (shade under highlight)
    pub fn shadows(&self) -> [Shadow; 2] {
        [self.shade, self.highlight]
    }
}

/// Surface shadow token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceToken {
    RaisedSm,
    RaisedMd,
    RaisedLg,
    InsetSm,
    InsetMd,
}

/// Surface shadow table derived from the highlight/shade colors
#[derive(Clone, Copy, Debug)]
pub struct SurfaceTokens {
    pub raised_sm: SurfacePair,
    pub raised_md: SurfacePair,
    pub raised_lg: SurfacePair,
    pub inset_sm: SurfacePair,
    pub inset_md: SurfacePair,
}

impl SurfaceTokens {
    pub fn from_colors(highlight: Color, shade: Color) -> Self {
        Self {
            raised_sm: SurfacePair::raised(3.0, 6.0, highlight, shade),
            raised_md: SurfacePair::raised(5.0, 10.0, highlight, shade),
            raised_lg: SurfacePair::raised(9.0, 18.0, highlight, shade),
            inset_sm: SurfacePair::inset(2.0, 4.0, highlight, shade),
            inset_md: SurfacePair::inset(4.0, 8.0, highlight, shade),
        }
    }

    pub fn get(&self, token: SurfaceToken) -> SurfacePair {
        match token {
            SurfaceToken::RaisedSm => self.raised_sm,
            SurfaceToken::RaisedMd => self.raised_md,
            SurfaceToken::RaisedLg => self.raised_lg,
            SurfaceToken::InsetSm => self.inset_sm,
            SurfaceToken::InsetMd => self.inset_md,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_pair_opposes() {
        let pair = SurfacePair::raised(5.0, 10.0, Color::WHITE, Color::BLACK);
        assert_eq!(pair.highlight.offset_x, -5.0);
        assert_eq!(pair.shade.offset_x, 5.0);
        assert!(!pair.highlight.inset);
    }

    #[test]
    fn test_inset_pair_is_inner() {
        let pair = SurfacePair::inset(3.0, 6.0, Color::WHITE, Color::BLACK);
        assert!(pair.highlight.inset);
        assert!(pair.shade.inset);
    }

    #[test]
    fn test_spacing_scale() {
        let spacing = SpacingTokens::default();
        assert_eq!(spacing.get(SpacingToken::Space1), 4.0);
        assert_eq!(spacing.get(SpacingToken::Space6), 24.0);
    }
}
