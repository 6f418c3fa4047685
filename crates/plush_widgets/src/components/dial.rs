//! Angular dial for bounded value selection
//!
//! A semicircular gauge: drag the pointer along the arc to set a value
//! within a closed range. The displayed needle angle and the value are two
//! views of the same normalized position; the mapping lives in two pure
//! functions so it can be reasoned about (and tested) away from any
//! rendering.
//!
//! # Example
//!
//! ```ignore
//! use plush_widgets::prelude::*;
//!
//! let mut speed = kit::dial(90.0)
//!     .range(0.0, 180.0)
//!     .label("Speed")
//!     .haptics(haptics.clone())
//!     .on_change(|mph| println!("{mph:.0} mph"))
//!     .build(&scheduler);
//!
//! speed.set_bounds(Rect::new(40.0, 40.0, 220.0, 240.0));
//! speed.paint(&mut ctx);
//! ```

use std::sync::Arc;

use plush_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use plush_core::events::event_types;
use plush_core::{
    Brush, Color, CornerRadius, DrawContext, Gradient, HapticPulse, LineCap, Path, Point, Rect,
    SharedHaptics, StateTransitions, Stroke, TextStyle, Transform,
};
use plush_theme::{ColorToken, SurfaceToken, ThemeState};

/// Rotation travel of the needle, degrees either side of straight up
pub const ROTATION_LIMIT: f32 = 90.0;

/// Width of the boundary zone in which a drag emits haptic pulses
pub const HAPTIC_ZONE: f32 = 5.0;

/// Arc angle (from the positive x axis, y-down) where the progress sweep
/// begins: the left end of the semicircle.
pub const SWEEP_START_ANGLE: f32 = 180.0;

/// Number of radial tick marks on the face
pub const TICK_COUNT: usize = 11;

/// Angular spacing between adjacent ticks
pub const TICK_SPACING: f32 = 18.0;

// ─────────────────────────────────────────────────────────────────────────────
// Pure angle/value mapping
// ─────────────────────────────────────────────────────────────────────────────

/// Needle angle for a value, degrees in [-90, +90] for in-range values.
///
/// Deliberately unclamped: an out-of-range value maps to an out-of-range
/// angle. The programmatic path does not police its input; the drag path
/// does (see [`value_for_angle`]).
pub fn angle_for_value(value: f32, min: f32, max: f32) -> f32 {
    let t = (value - min) / (max - min);
    t * 180.0 - ROTATION_LIMIT
}

/// Value for a needle angle, always within [min, max].
///
/// The angle is clamped to the rotation limits before mapping, so any real
/// input (including a pointer dragged far past the arc) produces an
/// in-range value.
pub fn value_for_angle(angle: f32, min: f32, max: f32) -> f32 {
    let clamped = angle.clamp(-ROTATION_LIMIT, ROTATION_LIMIT);
    min + ((clamped + ROTATION_LIMIT) / 180.0) * (max - min)
}

/// Progress arc sweep in degrees for a normalized value
pub fn progress_sweep(normalized: f32) -> f32 {
    normalized.clamp(0.0, 1.0) * 180.0
}

/// One radial mark on the dial face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Needle-space angle, degrees from straight up
    pub angle: f32,
    /// Every fifth mark is drawn longer
    pub long: bool,
}

/// The fixed tick layout: 11 marks, 18° apart, long at indices 0, 5, 10
pub fn tick_marks() -> Vec<TickMark> {
    (0..TICK_COUNT)
        .map(|i| TickMark {
            angle: -ROTATION_LIMIT + TICK_SPACING * i as f32,
            long: i % 5 == 0,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction state
// ─────────────────────────────────────────────────────────────────────────────

/// Dial interaction states
///
/// While dragging, the pointer drives both angle and value directly and the
/// idle derivation (angle from value) is suspended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialState {
    #[default]
    Idle,
    Dragging,
}

impl StateTransitions for DialState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (DialState::Idle, event_types::DRAG) => Some(DialState::Dragging),
            (DialState::Dragging, event_types::DRAG) => None,
            (DialState::Dragging, event_types::DRAG_END) => Some(DialState::Idle),
            (DialState::Dragging, event_types::POINTER_UP) => Some(DialState::Idle),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Internal configuration for building a Dial
#[derive(Clone)]
struct DialConfig {
    min: f32,
    max: f32,
    label: Option<String>,
    show_value: bool,
    diameter: f32,
    track_color: Option<Color>,
    progress_color: Option<Color>,
    haptics: Option<SharedHaptics>,
    on_change: Option<Arc<dyn Fn(f32) + Send + Sync>>,
}

impl DialConfig {
    fn new() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            label: None,
            show_value: true,
            diameter: 160.0,
            track_color: None,
            progress_color: None,
            haptics: None,
            on_change: None,
        }
    }
}

/// Builder for creating dials with a fluent API
pub struct DialBuilder {
    value: f32,
    config: DialConfig,
}

impl DialBuilder {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            config: DialConfig::new(),
        }
    }

    /// Set the value range (default: 0.0..=1.0). `min < max` is the
    /// caller's contract; a degenerate range is logged, not validated.
    pub fn range(mut self, min: f32, max: f32) -> Self {
        if min >= max {
            tracing::warn!(min, max, "dial configured with degenerate range");
        }
        self.config.min = min;
        self.config.max = max;
        self
    }

    /// Caption drawn above the dial
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Show or hide the numeric readout under the needle (default: shown)
    pub fn show_value(mut self, show: bool) -> Self {
        self.config.show_value = show;
        self
    }

    /// Face diameter in pixels
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.config.diameter = diameter;
        self
    }

    /// Color of the unfilled arc track
    pub fn track_color(mut self, color: impl Into<Color>) -> Self {
        self.config.track_color = Some(color.into());
        self
    }

    /// Color of the filled progress arc
    pub fn progress_color(mut self, color: impl Into<Color>) -> Self {
        self.config.progress_color = Some(color.into());
        self
    }

    /// Enable boundary haptics through the given emitter
    pub fn haptics(mut self, haptics: SharedHaptics) -> Self {
        self.config.haptics = Some(haptics);
        self
    }

    /// Called with the new value whenever a drag changes it
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the dial, registering its needle spring with the scheduler
    pub fn build(self, scheduler: &SchedulerHandle) -> Dial {
        let initial_angle = angle_for_value(self.value, self.config.min, self.config.max);
        let rotation = AnimatedValue::new(scheduler, initial_angle, SpringConfig::stiff());
        Dial {
            config: self.config,
            bounds: Rect::ZERO,
            value: self.value,
            rotation,
            state: DialState::Idle,
        }
    }
}

/// Angular dial widget
pub struct Dial {
    config: DialConfig,
    bounds: Rect,
    value: f32,
    /// Displayed needle angle; spring-animated on the programmatic path,
    /// snapped during drags
    rotation: AnimatedValue,
    state: DialState,
}

impl Dial {
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Displayed needle angle in degrees
    pub fn rotation_angle(&self) -> f32 {
        self.rotation.get()
    }

    pub fn state(&self) -> DialState {
        self.state
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Center of the dial face in window coordinates
    pub fn face_center(&self) -> Point {
        // The face sits below the optional label row
        let label_offset = if self.config.label.is_some() { 24.0 } else { 0.0 };
        let c = self.bounds.center();
        Point::new(c.x, c.y + label_offset / 2.0)
    }

    /// Programmatic value update
    ///
    /// The needle animates to the new angle with a spring. Input is not
    /// clamped: out-of-range values rotate the needle past the arc, exactly
    /// as the mapping functions allow.
    pub fn set_value(&mut self, new_value: f32) {
        self.value = new_value;
        let angle = angle_for_value(new_value, self.config.min, self.config.max);
        self.rotation.set_target(angle);
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &plush_core::PointerEvent) -> bool {
        match event.event_type {
            event_types::DRAG => {
                if self.state.apply(event_types::DRAG) {
                    tracing::debug!(value = self.value, "dial drag began");
                }
                self.drag_to(event.position);
                true
            }
            event_types::DRAG_END | event_types::POINTER_UP => {
                if self.state.apply(event.event_type) {
                    tracing::debug!(value = self.value, "dial drag ended");
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Drive angle and value from a pointer position
    ///
    /// Angle and value update together, immediately: during a drag the
    /// pointer is the source of truth and spring easing would lag it.
    fn drag_to(&mut self, pointer: Point) {
        let raw_angle = self.face_center().vector_to(pointer).angle_from_vertical();
        let angle = raw_angle.clamp(-ROTATION_LIMIT, ROTATION_LIMIT);

        self.rotation.set_immediate(angle);
        self.value = value_for_angle(angle, self.config.min, self.config.max);

        if let Some(ref cb) = self.config.on_change {
            cb(self.value);
        }

        // Fires on every drag event while inside the zone, not once per
        // boundary crossing; the repeated tick under a held drag is part of
        // the control's feel.
        if let Some(ref haptics) = self.config.haptics {
            if ROTATION_LIMIT - angle.abs() <= HAPTIC_ZONE {
                haptics.pulse(HapticPulse::Medium);
            }
        }
    }

    fn normalized(&self) -> f32 {
        (self.value - self.config.min) / (self.config.max - self.config.min)
    }

    /// Paint the dial into the recording context
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let center = self.face_center();
        let radius = self.config.diameter / 2.0;

        let track_color = self
            .config
            .track_color
            .unwrap_or_else(|| theme.color(ColorToken::Shade).with_alpha(0.35));
        let progress_color = self
            .config
            .progress_color
            .unwrap_or_else(|| theme.color(ColorToken::Primary));
        let surface = theme.color(ColorToken::Surface);

        // Raised face: paired shadows under a subtly graded fill
        let face_rect = Rect::from_center(center, plush_core::Size::new(
            self.config.diameter,
            self.config.diameter,
        ));
        let face_radius = CornerRadius::uniform(radius);
        for shadow in theme.surface(SurfaceToken::RaisedMd).shadows() {
            ctx.draw_shadow(face_rect, face_radius, shadow);
        }
        let face_fill = Gradient::linear(
            Point::new(face_rect.x(), face_rect.y()),
            Point::new(face_rect.max_x(), face_rect.max_y()),
            surface.lighten(0.06),
            surface.darken(0.04),
        );
        ctx.fill_circle(center, radius, face_fill.into());

        // Arc track and progress, inset from the rim
        let arc_radius = radius - 14.0;
        let track = Path::new().arc(center, arc_radius, SWEEP_START_ANGLE, 180.0);
        ctx.stroke_path(
            &track,
            Stroke::new(4.0).with_cap(LineCap::Round),
            Brush::Solid(track_color),
        );

        let sweep = progress_sweep(self.normalized());
        if sweep > 0.0 {
            let progress = Path::new().arc(center, arc_radius, SWEEP_START_ANGLE, sweep);
            ctx.stroke_path(
                &progress,
                Stroke::new(4.0).with_cap(LineCap::Round),
                Brush::Solid(progress_color),
            );
        }

        self.paint_ticks(ctx, center, arc_radius - 8.0, &theme);
        self.paint_needle(ctx, center, arc_radius - 16.0, progress_color);

        if let Some(ref label) = self.config.label {
            ctx.draw_text(
                label,
                Point::new(center.x, self.bounds.y() + 14.0),
                &TextStyle::new(14.0)
                    .with_color(theme.color(ColorToken::TextSecondary))
                    .centered(),
            );
        }

        if self.config.show_value {
            ctx.draw_text(
                &format!("{:.0}", self.value),
                Point::new(center.x, center.y + radius * 0.45),
                &TextStyle::new(18.0)
                    .with_color(theme.color(ColorToken::TextPrimary))
                    .with_weight(plush_core::FontWeight::Semibold)
                    .centered(),
            );
        }
    }

    fn paint_ticks(
        &self,
        ctx: &mut dyn DrawContext,
        center: Point,
        outer: f32,
        theme: &plush_theme::Theme,
    ) {
        let color = theme.color(ColorToken::TextTertiary);
        for mark in tick_marks() {
            let length = if mark.long { 10.0 } else { 5.0 };
            let transform = Transform::rotate_about(mark.angle.to_radians(), center);
            ctx.push_transform(transform);
            let tick = Path::new()
                .move_to(center.x, center.y - outer)
                .line_to(center.x, center.y - outer + length);
            ctx.stroke_path(
                &tick,
                Stroke::new(if mark.long { 2.0 } else { 1.0 }).with_cap(LineCap::Round),
                Brush::Solid(color),
            );
            ctx.pop_transform();
        }
    }

    fn paint_needle(&self, ctx: &mut dyn DrawContext, center: Point, length: f32, color: Color) {
        let angle = self.rotation.get();
        let transform = Transform::rotate_about(angle.to_radians(), center);
        ctx.push_transform(transform);
        let needle = Path::new()
            .move_to(center.x, center.y)
            .line_to(center.x, center.y - length);
        ctx.stroke_path(
            &needle,
            Stroke::new(3.0).with_cap(LineCap::Round),
            Brush::Solid(color),
        );
        ctx.pop_transform();

        // Hub cap over the pivot
        ctx.fill_circle(center, 6.0, Brush::Solid(color));
    }
}

/// Create a dial showing `value`
///
/// # Example
///
/// ```ignore
/// let dial = kit::dial(50.0)
///     .range(0.0, 100.0)
///     .label("Volume")
///     .build(&scheduler);
/// ```
pub fn dial(value: f32) -> DialBuilder {
    DialBuilder::new(value)
}
