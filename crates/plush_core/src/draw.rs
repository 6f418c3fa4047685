//! 2D draw recording
//!
//! Widgets paint into a [`DrawContext`]; the provided [`RecordingContext`]
//! records an ordered [`DrawCommand`] stream for the host renderer to
//! execute. Tests inspect the same stream, so painting stays a pure function
//! of widget state.

use smallvec::SmallVec;

use crate::color::{Brush, Color, CornerRadius, Shadow};
use crate::geometry::{Point, Rect, Size};

// ─────────────────────────────────────────────────────────────────────────────
// Transform
// ─────────────────────────────────────────────────────────────────────────────

/// 2D affine transform (column-major 2x3)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub m: [f32; 6],
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        m: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            m: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Rotation in radians, counter-clockwise in a y-down coordinate space
    pub fn rotate(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [c, s, -s, c, 0.0, 0.0],
        }
    }

    /// Rotation in degrees
    pub fn rotate_degrees(angle: f32) -> Self {
        Self::rotate(angle.to_radians())
    }

    /// Rotation about a pivot point
    pub fn rotate_about(angle: f32, pivot: Point) -> Self {
        Transform::translate(pivot.x, pivot.y)
            .then(&Transform::rotate(angle))
            .then(&Transform::translate(-pivot.x, -pivot.y))
    }

    /// Compose: apply `other` first, then `self`
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.m;
        let b = &other.m;
        Transform {
            m: [
                a[0] * b[0] + a[2] * b[1],
                a[1] * b[0] + a[3] * b[1],
                a[0] * b[2] + a[2] * b[3],
                a[1] * b[2] + a[3] * b[3],
                a[0] * b[4] + a[2] * b[5] + a[4],
                a[1] * b[4] + a[3] * b[5] + a[5],
            ],
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m[0] * p.x + self.m[2] * p.y + self.m[4],
            self.m[1] * p.x + self.m[3] * p.y + self.m[5],
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Stroke and text styling
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line join style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Stroke configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

/// Horizontal text alignment relative to the origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text styling
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub weight: FontWeight,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::default(),
            align: TextAlign::default(),
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

/// A single path segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    /// Circular arc. Angles are in degrees measured clockwise from the
    /// positive x axis in a y-down space; `sweep` may be negative.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
    Close,
}

/// An immutable sequence of path commands built with chainable methods
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            to: Point::new(x, y),
        });
        self
    }

    pub fn arc(mut self, center: Point, radius: f32, start_angle: f32, sweep: f32) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw commands and context
// ─────────────────────────────────────────────────────────────────────────────

/// A recorded drawing operation
#[derive(Clone, Debug)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
    },
    StrokeRect {
        rect: Rect,
        corner_radius: CornerRadius,
        stroke: Stroke,
        brush: Brush,
    },
    FillCircle {
        center: Point,
        radius: f32,
        brush: Brush,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        stroke: Stroke,
        brush: Brush,
    },
    FillPath {
        path: Path,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
    DrawShadow {
        rect: Rect,
        corner_radius: CornerRadius,
        shadow: Shadow,
    },
    PushTransform(Transform),
    PopTransform,
    PushClip {
        rect: Rect,
        corner_radius: CornerRadius,
    },
    PopClip,
    PushOpacity(f32),
    PopOpacity,
}

/// Unified 2D drawing surface
///
/// Object-safe so widgets can paint into any implementation; the recording
/// implementation below is the only one this workspace ships.
pub trait DrawContext {
    fn push_transform(&mut self, transform: Transform);
    fn pop_transform(&mut self);
    fn current_transform(&self) -> Transform;

    fn push_clip(&mut self, rect: Rect, corner_radius: CornerRadius);
    fn pop_clip(&mut self);

    fn push_opacity(&mut self, opacity: f32);
    fn pop_opacity(&mut self);

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);
    fn stroke_rect(&mut self, rect: Rect, corner_radius: CornerRadius, stroke: Stroke, brush: Brush);
    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush);
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke, brush: Brush);
    fn fill_path(&mut self, path: &Path, brush: Brush);
    fn stroke_path(&mut self, path: &Path, stroke: Stroke, brush: Brush);
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow);

    fn viewport_size(&self) -> Size;
}

/// Convenience methods over any [`DrawContext`]
pub trait DrawContextExt: DrawContext {
    /// Paint within a transform, popping it afterwards
    fn with_transform(&mut self, transform: Transform, f: &mut dyn FnMut(&mut dyn DrawContext)) {
        self.push_transform(transform);
        f(self.as_draw_context());
        self.pop_transform();
    }

    fn as_draw_context(&mut self) -> &mut dyn DrawContext;
}

impl<T: DrawContext> DrawContextExt for T {
    fn as_draw_context(&mut self) -> &mut dyn DrawContext {
        self
    }
}

/// Records draw commands for later execution by the host renderer
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: SmallVec<[Transform; 8]>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: SmallVec::new(),
            viewport,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        let combined = self
            .transform_stack
            .last()
            .map(|t| t.then(&transform))
            .unwrap_or(transform);
        self.transform_stack.push(combined);
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        if self.transform_stack.pop().is_none() {
            tracing::warn!("pop_transform with empty transform stack");
            return;
        }
        self.commands.push(DrawCommand::PopTransform);
    }

    fn current_transform(&self) -> Transform {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or(Transform::IDENTITY)
    }

    fn push_clip(&mut self, rect: Rect, corner_radius: CornerRadius) {
        self.commands.push(DrawCommand::PushClip {
            rect,
            corner_radius,
        });
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.commands
            .push(DrawCommand::PushOpacity(opacity.clamp(0.0, 1.0)));
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
        });
    }

    fn stroke_rect(
        &mut self,
        rect: Rect,
        corner_radius: CornerRadius,
        stroke: Stroke,
        brush: Brush,
    ) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            corner_radius,
            stroke,
            brush,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, brush: Brush) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            brush,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            stroke,
            brush,
        });
    }

    fn fill_path(&mut self, path: &Path, brush: Brush) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke,
            brush,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }

    fn draw_shadow(&mut self, rect: Rect, corner_radius: CornerRadius, shadow: Shadow) {
        self.commands.push(DrawCommand::DrawShadow {
            rect,
            corner_radius,
            shadow,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}
