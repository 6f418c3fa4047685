//! Binary toggle switch
//!
//! The caller owns the `bool`: a tap reports the flipped value through
//! `on_change`, and the host writes it back with [`Toggle::set_on`]. The
//! thumb rides a bouncy spring between the track ends; the track color
//! cross-fades with the same spring position, so color and travel always
//! agree.

use std::sync::Arc;

use plush_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use plush_core::events::event_types;
use plush_core::{
    Brush, Color, CornerRadius, DrawContext, Point, PointerEvent, Rect, Size,
};
use plush_theme::{ColorToken, SurfaceToken, ThemeState};

/// Toggle sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleSize {
    Sm,
    #[default]
    Md,
}

impl ToggleSize {
    pub fn track_size(&self) -> Size {
        match self {
            ToggleSize::Sm => Size::new(36.0, 20.0),
            ToggleSize::Md => Size::new(48.0, 26.0),
        }
    }

    pub fn thumb_radius(&self) -> f32 {
        match self {
            ToggleSize::Sm => 8.0,
            ToggleSize::Md => 11.0,
        }
    }
}

/// Builder for creating toggles with a fluent API
pub struct ToggleBuilder {
    on: bool,
    size: ToggleSize,
    disabled: bool,
    on_color: Option<Color>,
    on_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
}

impl ToggleBuilder {
    pub fn new(on: bool) -> Self {
        Self {
            on,
            size: ToggleSize::default(),
            disabled: false,
            on_color: None,
            on_change: None,
        }
    }

    pub fn size(mut self, size: ToggleSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Track color when on (defaults to the theme primary)
    pub fn on_color(mut self, color: impl Into<Color>) -> Self {
        self.on_color = Some(color.into());
        self
    }

    /// Called with the flipped value on each tap
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    pub fn build(self, scheduler: &SchedulerHandle) -> Toggle {
        let position = if self.on { 1.0 } else { 0.0 };
        Toggle {
            on: self.on,
            size: self.size,
            disabled: self.disabled,
            on_color: self.on_color,
            on_change: self.on_change,
            bounds: Rect::ZERO,
            // 0 = thumb at the off end, 1 = at the on end
            position: AnimatedValue::new(scheduler, position, SpringConfig::bouncy()),
        }
    }
}

/// Toggle switch widget
pub struct Toggle {
    on: bool,
    size: ToggleSize,
    disabled: bool,
    on_color: Option<Color>,
    on_change: Option<Arc<dyn Fn(bool) + Send + Sync>>,
    bounds: Rect,
    position: AnimatedValue,
}

impl Toggle {
    pub fn is_on(&self) -> bool {
        self.on
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

    /// Write the caller-owned value back into the widget, animating the
    /// thumb to the matching end.
    pub fn set_on(&mut self, on: bool) {
        if self.on != on {
            self.on = on;
            self.position.set_target(if on { 1.0 } else { 0.0 });
        }
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }
        if event.event_type == event_types::CLICK {
            let flipped = !self.on;
            // Animate optimistically; the host confirms through set_on,
            // which is then a no-op for the same value
            self.set_on(flipped);
            if let Some(ref cb) = self.on_change {
                cb(flipped);
            }
            return true;
        }
        false
    }

    fn track_rect(&self) -> Rect {
        Rect::from_center(self.bounds.center(), self.size.track_size())
    }

    fn thumb_center(&self, t: f32) -> Point {
        let track = self.track_rect();
        let inset = self.size.thumb_radius() + 2.0;
        let x0 = track.x() + inset;
        let x1 = track.max_x() - inset;
        Point::new(x0 + (x1 - x0) * t, track.center().y)
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let t = self.position.get().clamp(0.0, 1.0);
        let track = self.track_rect();
        let pill = CornerRadius::uniform(track.height() / 2.0);

        if self.disabled {
            ctx.push_opacity(0.5);
        }

        // Debossed track, cross-fading toward the on color
        let off_color = theme.color(ColorToken::Shade).with_alpha(0.25);
        let on_color = self.on_color.unwrap_or_else(|| theme.color(ColorToken::Primary));
        for shadow in theme.surface(SurfaceToken::InsetSm).shadows() {
            ctx.draw_shadow(track, pill, shadow);
        }
        ctx.fill_rect(track, pill, Brush::Solid(Color::lerp(&off_color, &on_color, t)));

        // Raised thumb
        let thumb = self.thumb_center(t);
        let r = self.size.thumb_radius();
        let thumb_rect = Rect::from_center(thumb, Size::new(r * 2.0, r * 2.0));
        for shadow in theme.surface(SurfaceToken::RaisedSm).shadows() {
            ctx.draw_shadow(thumb_rect, CornerRadius::uniform(r), shadow);
        }
        ctx.fill_circle(thumb, r, Brush::Solid(Color::WHITE));

        if self.disabled {
            ctx.pop_opacity();
        }
    }
}

/// Create a toggle showing the given state
pub fn toggle(on: bool) -> ToggleBuilder {
    ToggleBuilder::new(on)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    fn click(toggle: &Toggle) -> PointerEvent {
        PointerEvent::new(event_types::CLICK, toggle.bounds().center(), toggle.bounds())
    }

    #[test]
    fn test_tap_reports_flipped_value() {
        let seen: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = seen.clone();

        let scheduler = SchedulerHandle::new();
        let mut toggle = ToggleBuilder::new(false)
            .on_change(move |v| seen_cb.lock().unwrap().push(v))
            .build(&scheduler);
        toggle.set_bounds(Rect::new(0.0, 0.0, 48.0, 26.0));

        toggle.handle_event(&click(&toggle));
        toggle.handle_event(&click(&toggle));
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_thumb_animates_between_ends() {
        let scheduler = SchedulerHandle::new();
        let mut toggle = ToggleBuilder::new(false).build(&scheduler);
        toggle.set_bounds(Rect::new(0.0, 0.0, 48.0, 26.0));

        let off_x = toggle.thumb_center(toggle.position.get()).x;
        toggle.set_on(true);
        for _ in 0..240 {
            scheduler.tick(Duration::from_micros(16_667));
        }
        let on_x = toggle.thumb_center(toggle.position.get().clamp(0.0, 1.0)).x;
        assert!(on_x > off_x);
        assert!((toggle.position.get() - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_set_on_same_value_is_noop() {
        let scheduler = SchedulerHandle::new();
        let mut toggle = ToggleBuilder::new(true).build(&scheduler);
        toggle.set_on(true);
        assert_eq!(toggle.position.target(), 1.0);
        assert!(toggle.is_on());
    }

    #[test]
    fn test_disabled_ignores_taps() {
        let scheduler = SchedulerHandle::new();
        let mut toggle = ToggleBuilder::new(false).disabled(true).build(&scheduler);
        toggle.set_bounds(Rect::new(0.0, 0.0, 48.0, 26.0));
        assert!(!toggle.handle_event(&click(&toggle)));
        assert!(!toggle.is_on());
    }

    #[test]
    fn test_paint_track_and_thumb() {
        let scheduler = SchedulerHandle::new();
        let mut toggle = ToggleBuilder::new(true).build(&scheduler);
        toggle.set_bounds(Rect::new(0.0, 0.0, 48.0, 26.0));
        let mut ctx = plush_core::RecordingContext::new(Size::new(100.0, 100.0));
        toggle.paint(&mut ctx);

        // Inset pair + raised pair = four shadows, plus track fill and thumb
        let shadows = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, plush_core::DrawCommand::DrawShadow { .. }))
            .count();
        assert_eq!(shadows, 4);
        assert!(ctx
            .commands()
            .iter()
            .any(|c| matches!(c, plush_core::DrawCommand::FillCircle { .. })));
    }
}
