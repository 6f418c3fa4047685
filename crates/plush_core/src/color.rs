//! Colors, gradients, shadows and glass surfaces
//!
//! All widget chrome is expressed through these types: a soft-surface widget
//! is nothing more than a rounded rect filled with a subtle gradient and a
//! pair of offset shadows (light toward the light source, dark away from it).

use crate::geometry::Point;

/// RGBA color (linear space)
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
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Move each channel toward white by `amount` (0.0..=1.0)
    pub fn lighten(&self, amount: f32) -> Color {
        Color::lerp(self, &Color::WHITE.with_alpha(self.a), amount)
    }

    /// Move each channel toward black by `amount` (0.0..=1.0)
    pub fn darken(&self, amount: f32) -> Color {
        Color::lerp(self, &Color::BLACK.with_alpha(self.a), amount)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Gradient stop
#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    /// Position along the gradient (0.0 to 1.0)
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Gradient fill
#[derive(Clone, Debug)]
pub enum Gradient {
    /// Linear gradient between two points
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Radial gradient from center outward
    Radial {
        center: Point,
        radius: f32,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Two-color linear gradient
    pub fn linear(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Two-color radial gradient
    pub fn radial(center: Point, radius: f32, from: Color, to: Color) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } => stops,
            Gradient::Radial { stops, .. } => stops,
        }
    }
}

/// Corner radii for rounded rectangles
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius {
        top_left: 0.0,
        top_right: 0.0,
        bottom_right: 0.0,
        bottom_left: 0.0,
    };

    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::uniform(radius)
    }
}

/// Shadow configuration
///
/// `inset` flips the shadow to render inside the shape's bounds; soft-surface
/// (debossed) wells are drawn with a pair of inset shadows.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
    pub inset: bool,
}

impl Shadow {
    pub fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
            inset: false,
        }
    }

    pub fn inner(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            inset: true,
            ..Self::new(offset_x, offset_y, blur, color)
        }
    }

    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }
}

/// Glass/frosted glass surface configuration
///
/// Backdrop blur plus tint, in the style of platform vibrancy effects. The
/// recorded command carries the full style; executing it is the renderer's
/// concern.
#[derive(Clone, Copy, Debug)]
pub struct GlassStyle {
    /// Blur intensity (0-50)
    pub blur: f32,
    /// Tint color applied over the blur
    pub tint: Color,
    /// Color saturation (1.0 = unchanged)
    pub saturation: f32,
    /// Noise/grain amount for frosted texture (0.0-0.1)
    pub noise: f32,
    /// Border highlight thickness
    pub border_thickness: f32,
}

impl Default for GlassStyle {
    fn default() -> Self {
        Self {
            blur: 20.0,
            tint: Color::rgba(1.0, 1.0, 1.0, 0.1),
            saturation: 1.0,
            noise: 0.0,
            border_thickness: 0.8,
        }
    }
}

impl GlassStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    pub fn saturation(mut self, saturation: f32) -> Self {
        self.saturation = saturation;
        self
    }

    pub fn noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// Subtle blur for chrome that sits over content
    pub fn thin() -> Self {
        Self::new().blur(12.0)
    }

    /// Frosted glass with grain texture
    pub fn frosted() -> Self {
        Self::new().noise(0.03)
    }
}

/// Fill brush for shapes
#[derive(Clone, Debug)]
pub enum Brush {
    Solid(Color),
    Gradient(Gradient),
    Glass(GlassStyle),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<Gradient> for Brush {
    fn from(gradient: Gradient) -> Self {
        Brush::Gradient(gradient)
    }
}

impl From<GlassStyle> for Brush {
    fn from(style: GlassStyle) -> Self {
        Brush::Glass(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xE0E5EC);
        assert!((c.r - 224.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 229.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 236.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color::BLACK;
        let b = Color::WHITE;
        assert_eq!(Color::lerp(&a, &b, 0.0), a);
        assert_eq!(Color::lerp(&a, &b, 1.0), b);
        // Out-of-range t clamps
        assert_eq!(Color::lerp(&a, &b, 2.0), b);
    }

    #[test]
    fn test_inner_shadow_flag() {
        let s = Shadow::inner(2.0, 2.0, 4.0, Color::BLACK.with_alpha(0.2));
        assert!(s.inset);
        assert!(!Shadow::new(0.0, 1.0, 2.0, Color::BLACK).inset);
    }

    #[test]
    fn test_gradient_stop_clamps_offset() {
        assert_eq!(GradientStop::new(1.5, Color::WHITE).offset, 1.0);
    }
}
