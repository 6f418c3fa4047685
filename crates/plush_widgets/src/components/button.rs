//! Soft-surface push button
//!
//! Raised at rest, debossed while pressed. The press is conveyed by swapping
//! the surface pair (outer shadows to inner shadows) and compressing the
//! label slightly; a spring animates the depth so release has a little life
//! to it.

use std::sync::Arc;

use plush_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use plush_core::events::event_types;
use plush_core::{
    Brush, ButtonState, CornerRadius, DrawContext, FontWeight, PointerEvent, Rect,
    StateTransitions, TextStyle, Transform,
};
use plush_theme::{ColorToken, RadiusToken, SurfaceToken, ThemeState};

/// Visual treatment of the button surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Embossed soft surface in the background color
    #[default]
    Raised,
    /// Filled with the primary color
    Primary,
    /// Translucent glass slab
    Glass,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn height(&self) -> f32 {
        match self {
            ButtonSize::Sm => 32.0,
            ButtonSize::Md => 40.0,
            ButtonSize::Lg => 48.0,
        }
    }

    pub fn padding_x(&self) -> f32 {
        match self {
            ButtonSize::Sm => 12.0,
            ButtonSize::Md => 16.0,
            ButtonSize::Lg => 22.0,
        }
    }

    pub fn font_size(&self) -> f32 {
        match self {
            ButtonSize::Sm => 13.0,
            ButtonSize::Md => 14.0,
            ButtonSize::Lg => 16.0,
        }
    }
}

/// Builder for creating buttons with a fluent API
pub struct ButtonBuilder {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ButtonBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_click = Some(Arc::new(callback));
        self
    }

    pub fn build(self, scheduler: &SchedulerHandle) -> Button {
        let state = if self.disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Idle
        };
        Button {
            label: self.label,
            variant: self.variant,
            size: self.size,
            on_click: self.on_click,
            bounds: Rect::ZERO,
            state,
            // 0 = rest, 1 = fully pressed
            depth: AnimatedValue::new(scheduler, 0.0, SpringConfig::snappy()),
        }
    }
}

/// Push button widget
pub struct Button {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    on_click: Option<Arc<dyn Fn() + Send + Sync>>,
    bounds: Rect,
    state: ButtonState,
    depth: AnimatedValue,
}

impl Button {
    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.state = if disabled {
            ButtonState::Disabled
        } else {
            ButtonState::Idle
        };
        self.depth.set_immediate(0.0);
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let changed = self.state.apply(event.event_type);
        if changed {
            match self.state {
                ButtonState::Pressed => self.depth.set_target(1.0),
                _ => self.depth.set_target(0.0),
            }
        }

        if event.event_type == event_types::CLICK && self.state != ButtonState::Disabled {
            if let Some(ref cb) = self.on_click {
                cb();
            }
            return true;
        }
        changed
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let radius = CornerRadius::uniform(theme.radius(RadiusToken::Md));
        let depth = self.depth.get().clamp(0.0, 1.0);

        let disabled = self.state == ButtonState::Disabled;
        if disabled {
            ctx.push_opacity(0.5);
        }

        // Press compresses the face toward its center
        let scale = 1.0 - depth * 0.03;
        let center = self.bounds.center();
        let squeeze = Transform::translate(center.x, center.y)
            .then(&Transform::scale(scale, scale))
            .then(&Transform::translate(-center.x, -center.y));
        ctx.push_transform(squeeze);

        match self.variant {
            ButtonVariant::Raised => {
                let surface = if depth > 0.5 {
                    SurfaceToken::InsetSm
                } else {
                    SurfaceToken::RaisedMd
                };
                for shadow in theme.surface(surface).shadows() {
                    ctx.draw_shadow(self.bounds, radius, shadow);
                }
                ctx.fill_rect(
                    self.bounds,
                    radius,
                    Brush::Solid(theme.color(ColorToken::Surface)),
                );
            }
            ButtonVariant::Primary => {
                for shadow in theme.surface(SurfaceToken::RaisedSm).shadows() {
                    ctx.draw_shadow(self.bounds, radius, shadow);
                }
                let fill = match self.state {
                    ButtonState::Hovered => theme.color(ColorToken::PrimaryHover),
                    ButtonState::Pressed => theme.color(ColorToken::PrimaryActive),
                    _ => theme.color(ColorToken::Primary),
                };
                ctx.fill_rect(self.bounds, radius, Brush::Solid(fill));
            }
            ButtonVariant::Glass => {
                ctx.fill_rect(
                    self.bounds,
                    radius,
                    Brush::Glass(plush_core::GlassStyle::frosted()),
                );
            }
        }

        let label_color = match (self.variant, self.state) {
            (_, ButtonState::Disabled) => theme.color(ColorToken::TextTertiary),
            (ButtonVariant::Primary, _) => theme.color(ColorToken::TextInverse),
            _ => theme.color(ColorToken::TextPrimary),
        };
        ctx.draw_text(
            &self.label,
            center,
            &TextStyle::new(self.size.font_size())
                .with_color(label_color)
                .with_weight(FontWeight::Medium)
                .centered(),
        );

        ctx.pop_transform();
        if disabled {
            ctx.pop_opacity();
        }
    }

    /// Preferred size for the label at the configured size variant
    pub fn preferred_size(&self) -> plush_core::Size {
        // Width estimate: average glyph advance at the configured font size
        let text_width = self.label.chars().count() as f32 * self.size.font_size() * 0.55;
        plush_core::Size::new(
            text_width + self.size.padding_x() * 2.0,
            self.size.height(),
        )
    }
}

/// Create a button with the given label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plush_core::Point;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event(button: &Button, event_type: u32) -> PointerEvent {
        PointerEvent::new(event_type, button.bounds().center(), button.bounds())
    }

    fn test_button(disabled: bool) -> (Button, SchedulerHandle) {
        let scheduler = SchedulerHandle::new();
        let mut button = ButtonBuilder::new("Save")
            .disabled(disabled)
            .build(&scheduler);
        button.set_bounds(Rect::new(0.0, 0.0, 120.0, 40.0));
        (button, scheduler)
    }

    #[test]
    fn test_press_cycle() {
        let (mut button, _scheduler) = test_button(false);
        assert_eq!(button.state(), ButtonState::Idle);

        button.handle_event(&event(&button, event_types::POINTER_ENTER));
        assert_eq!(button.state(), ButtonState::Hovered);

        button.handle_event(&event(&button, event_types::POINTER_DOWN));
        assert_eq!(button.state(), ButtonState::Pressed);
        assert_eq!(button.depth.target(), 1.0);

        button.handle_event(&event(&button, event_types::POINTER_UP));
        assert_eq!(button.state(), ButtonState::Hovered);
        assert_eq!(button.depth.target(), 0.0);
    }

    #[test]
    fn test_click_invokes_callback() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();

        let scheduler = SchedulerHandle::new();
        let mut button = ButtonBuilder::new("Save")
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&scheduler);
        button.set_bounds(Rect::new(0.0, 0.0, 120.0, 40.0));

        button.handle_event(&event(&button, event_types::CLICK));
        button.handle_event(&event(&button, event_types::CLICK));
        assert_eq!(clicks.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_disabled_ignores_everything() {
        let clicks = Arc::new(AtomicUsize::new(0));
        let counter = clicks.clone();

        let scheduler = SchedulerHandle::new();
        let mut button = ButtonBuilder::new("Save")
            .disabled(true)
            .on_click(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build(&scheduler);
        button.set_bounds(Rect::new(0.0, 0.0, 120.0, 40.0));

        button.handle_event(&event(&button, event_types::POINTER_ENTER));
        button.handle_event(&event(&button, event_types::POINTER_DOWN));
        button.handle_event(&event(&button, event_types::CLICK));
        assert_eq!(button.state(), ButtonState::Disabled);
        assert_eq!(clicks.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_paint_raised_has_shadow_pair() {
        let (mut button, _scheduler) = test_button(false);
        button.set_bounds(Rect::new(10.0, 10.0, 120.0, 40.0));
        let mut ctx = plush_core::RecordingContext::new(plush_core::Size::new(400.0, 400.0));
        button.paint(&mut ctx);

        let shadows = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, plush_core::DrawCommand::DrawShadow { .. }))
            .count();
        assert_eq!(shadows, 2);
    }

    #[test]
    fn test_preferred_size_tracks_variant() {
        let scheduler = SchedulerHandle::new();
        let small = ButtonBuilder::new("OK")
            .size(ButtonSize::Sm)
            .build(&scheduler);
        let large = ButtonBuilder::new("OK")
            .size(ButtonSize::Lg)
            .build(&scheduler);
        assert!(small.preferred_size().height < large.preferred_size().height);
        assert!(small.preferred_size().width < large.preferred_size().width);
    }

    #[test]
    fn test_leave_while_pressed_returns_to_idle() {
        let (mut button, _scheduler) = test_button(false);
        button.handle_event(&event(&button, event_types::POINTER_ENTER));
        button.handle_event(&event(&button, event_types::POINTER_DOWN));
        button.handle_event(&PointerEvent::new(
            event_types::POINTER_LEAVE,
            Point::new(-10.0, -10.0),
            button.bounds(),
        ));
        assert_eq!(button.state(), ButtonState::Idle);
        assert_eq!(button.depth.target(), 0.0);
    }
}
