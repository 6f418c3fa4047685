//! Linear slider
//!
//! A horizontal bounded value: drag moves the knob immediately, a click on
//! the track animates it to the clicked position with a spring. Optional
//! step rounding snaps both paths to the nearest multiple of `step` above
//! `min`.

use std::sync::Arc;

use plush_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use plush_core::events::event_types;
use plush_core::{
    Brush, Color, CornerRadius, DrawContext, LineCap, Point, PointerEvent, Rect, Size, Stroke,
};
use plush_theme::{ColorToken, SurfaceToken, ThemeState};

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 10.0;

/// Builder for creating sliders with a fluent API
pub struct SliderBuilder {
    value: f32,
    min: f32,
    max: f32,
    step: Option<f32>,
    disabled: bool,
    fill_color: Option<Color>,
    on_change: Option<Arc<dyn Fn(f32) + Send + Sync>>,
}

impl SliderBuilder {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            min: 0.0,
            max: 1.0,
            step: None,
            disabled: false,
            fill_color: None,
            on_change: None,
        }
    }

    /// Set the value range (default: 0.0..=1.0)
    pub fn range(mut self, min: f32, max: f32) -> Self {
        if min >= max {
            tracing::warn!(min, max, "slider configured with degenerate range");
        }
        self.min = min;
        self.max = max;
        self
    }

    /// Snap values to multiples of `step` above `min`
    pub fn step(mut self, step: f32) -> Self {
        self.step = Some(step);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Color of the filled portion (defaults to the theme primary)
    pub fn fill_color(mut self, color: impl Into<Color>) -> Self {
        self.fill_color = Some(color.into());
        self
    }

    /// Called with the new value whenever interaction changes it
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    pub fn build(self, scheduler: &SchedulerHandle) -> Slider {
        let value = self.value.clamp(self.min, self.max);
        let normalized = (value - self.min) / (self.max - self.min);
        Slider {
            value,
            min: self.min,
            max: self.max,
            step: self.step,
            disabled: self.disabled,
            fill_color: self.fill_color,
            on_change: self.on_change,
            bounds: Rect::ZERO,
            // Knob travel as a normalized 0..1 position
            position: AnimatedValue::new(scheduler, normalized, SpringConfig::stiff()),
        }
    }
}

/// Linear slider widget
pub struct Slider {
    value: f32,
    min: f32,
    max: f32,
    step: Option<f32>,
    disabled: bool,
    fill_color: Option<Color>,
    on_change: Option<Arc<dyn Fn(f32) + Send + Sync>>,
    bounds: Rect,
    position: AnimatedValue,
}

impl Slider {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Programmatic value update; clamps and animates the knob
    pub fn set_value(&mut self, new_value: f32) {
        self.value = self.quantize(new_value.clamp(self.min, self.max));
        self.position.set_target(self.normalized());
    }

    fn normalized(&self) -> f32 {
        (self.value - self.min) / (self.max - self.min)
    }

    fn quantize(&self, value: f32) -> f32 {
        match self.step {
            Some(step) if step > 0.0 => {
                let snapped = self.min + ((value - self.min) / step).round() * step;
                snapped.clamp(self.min, self.max)
            }
            _ => value,
        }
    }

    fn track_rect(&self) -> Rect {
        let inset = KNOB_RADIUS;
        Rect::new(
            self.bounds.x() + inset,
            self.bounds.center().y - TRACK_HEIGHT / 2.0,
            (self.bounds.width() - inset * 2.0).max(1.0),
            TRACK_HEIGHT,
        )
    }

    fn value_at(&self, x: f32) -> f32 {
        let track = self.track_rect();
        let t = ((x - track.x()) / track.width()).clamp(0.0, 1.0);
        self.quantize(self.min + t * (self.max - self.min))
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }
        match event.event_type {
            // Drag tracks the pointer with no easing
            event_types::DRAG => {
                self.apply_interaction(event.position.x, true);
                true
            }
            // Click-to-jump eases over
            event_types::CLICK => {
                self.apply_interaction(event.position.x, false);
                true
            }
            _ => false,
        }
    }

    fn apply_interaction(&mut self, x: f32, immediate: bool) {
        let new_value = self.value_at(x);
        let changed = new_value != self.value;
        self.value = new_value;
        if immediate {
            self.position.set_immediate(self.normalized());
        } else {
            self.position.set_target(self.normalized());
        }
        if changed {
            if let Some(ref cb) = self.on_change {
                cb(self.value);
            }
        }
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let track = self.track_rect();
        let pill = CornerRadius::uniform(TRACK_HEIGHT / 2.0);
        let t = self.position.get().clamp(0.0, 1.0);

        if self.disabled {
            ctx.push_opacity(0.5);
        }

        // Debossed groove
        for shadow in theme.surface(SurfaceToken::InsetSm).shadows() {
            ctx.draw_shadow(track, pill, shadow);
        }
        ctx.fill_rect(
            track,
            pill,
            Brush::Solid(theme.color(ColorToken::Shade).with_alpha(0.25)),
        );

        // Filled portion up to the knob
        let fill = self
            .fill_color
            .unwrap_or_else(|| theme.color(ColorToken::Primary));
        let knob_x = track.x() + track.width() * t;
        if t > 0.0 {
            let filled = Rect::new(track.x(), track.y(), knob_x - track.x(), track.height());
            ctx.fill_rect(filled, pill, Brush::Solid(fill));
        }

        // Raised knob with a colored ring
        let knob = Point::new(knob_x, track.center().y);
        let knob_rect = Rect::from_center(knob, Size::new(KNOB_RADIUS * 2.0, KNOB_RADIUS * 2.0));
        for shadow in theme.surface(SurfaceToken::RaisedSm).shadows() {
            ctx.draw_shadow(knob_rect, CornerRadius::uniform(KNOB_RADIUS), shadow);
        }
        ctx.fill_circle(knob, KNOB_RADIUS, Brush::Solid(Color::WHITE));
        ctx.stroke_circle(
            knob,
            KNOB_RADIUS - 1.0,
            Stroke::new(2.0).with_cap(LineCap::Round),
            Brush::Solid(fill),
        );

        if self.disabled {
            ctx.pop_opacity();
        }
    }
}

/// Create a slider showing `value`
pub fn slider(value: f32) -> SliderBuilder {
    SliderBuilder::new(value)
}
