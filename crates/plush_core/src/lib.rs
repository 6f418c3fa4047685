//! Plush Core
//!
//! Foundational primitives for the Plush widget kit:
//!
//! - **Geometry**: points, vectors, rects
//! - **Brushes**: colors, gradients, shadows, glass surfaces
//! - **Draw Recording**: a 2D [`DrawContext`] that records commands for the
//!   host renderer
//! - **Events**: resolved pointer/key events delivered by the host shell
//! - **State Machines**: transition tables for widget interaction states
//! - **Haptics**: fire-and-forget tactile feedback bridge

pub mod color;
pub mod draw;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod haptics;

pub use color::{
    Brush, Color, CornerRadius, GlassStyle, Gradient, GradientStop, Shadow,
};
pub use draw::{
    DrawCommand, DrawContext, DrawContextExt, FontWeight, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, Stroke, TextAlign, TextStyle, Transform,
};
pub use events::{Key, PointerEvent};
pub use fsm::{ButtonState, StateTransitions};
pub use geometry::{Point, Rect, Size, Vec2};
pub use haptics::{HapticEmitter, HapticPulse, NullHaptics, RecordingHaptics, SharedHaptics};
