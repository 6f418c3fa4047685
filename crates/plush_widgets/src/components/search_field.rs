//! Search field
//!
//! A focusable one-line text input on a debossed or glass surface, with a
//! placeholder, a caret, and a clear affordance that appears once there is
//! text. Key handling is deliberately minimal (insert, delete, caret
//! movement, submit, escape-to-clear); shaping and IME belong to the host.

use std::sync::Arc;

use plush_animation::SchedulerHandle;
use plush_core::events::event_types;
use plush_core::{
    Brush, Color, CornerRadius, DrawContext, Key, LineCap, Path, Point, PointerEvent, Rect,
    Stroke, TextStyle,
};
use plush_theme::{ColorToken, RadiusToken, SurfaceToken, ThemeState};

const PADDING_X: f32 = 14.0;
const ICON_SIZE: f32 = 14.0;
const CLEAR_HIT_SIZE: f32 = 24.0;

/// Visual treatment of the field surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSurface {
    /// Debossed into the background
    #[default]
    Inset,
    /// Translucent glass slab
    Glass,
}

/// Builder for creating search fields with a fluent API
pub struct SearchFieldBuilder {
    text: String,
    placeholder: String,
    surface: FieldSurface,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
    on_submit: Option<Arc<dyn Fn(&str) + Send + Sync>>,
}

impl SearchFieldBuilder {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: "Search".to_string(),
            surface: FieldSurface::default(),
            on_change: None,
            on_submit: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn surface(mut self, surface: FieldSurface) -> Self {
        self.surface = surface;
        self
    }

    /// Called with the full text after every edit
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Called with the text when Enter is pressed
    pub fn on_submit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_submit = Some(Arc::new(callback));
        self
    }

    pub fn build(self, _scheduler: &SchedulerHandle) -> SearchField {
        let cursor = self.text.chars().count();
        SearchField {
            text: self.text,
            placeholder: self.placeholder,
            surface: self.surface,
            on_change: self.on_change,
            on_submit: self.on_submit,
            bounds: Rect::ZERO,
            focused: false,
            cursor,
        }
    }
}

impl Default for SearchFieldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Search field widget
pub struct SearchField {
    text: String,
    placeholder: String,
    surface: FieldSurface,
    on_change: Option<Arc<dyn Fn(&str) + Send + Sync>>,
    on_submit: Option<Arc<dyn Fn(&str) + Send + Sync>>,
    bounds: Rect,
    focused: bool,
    /// Caret position in chars, 0..=len
    cursor: usize,
}

impl SearchField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    fn clear_button_rect(&self) -> Rect {
        Rect::from_center(
            Point::new(self.bounds.max_x() - PADDING_X - ICON_SIZE / 2.0, self.bounds.center().y),
            plush_core::Size::new(CLEAR_HIT_SIZE, CLEAR_HIT_SIZE),
        )
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event.event_type {
            event_types::CLICK => {
                if !self.text.is_empty() && self.clear_button_rect().contains(event.position) {
                    self.clear();
                    return true;
                }
                if !self.focused {
                    self.focused = true;
                    return true;
                }
                false
            }
            event_types::FOCUS => {
                self.focused = true;
                true
            }
            event_types::BLUR => {
                self.focused = false;
                true
            }
            _ => false,
        }
    }

    /// Handle a key press; returns true when a redraw is needed
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }
        match key {
            Key::Char(c) => {
                let byte = self.byte_offset(self.cursor);
                self.text.insert(byte, c);
                self.cursor += 1;
                self.notify_change();
                true
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let byte = self.byte_offset(self.cursor);
                    self.text.remove(byte);
                    self.notify_change();
                    true
                } else {
                    false
                }
            }
            Key::Delete => {
                if self.cursor < self.text.chars().count() {
                    let byte = self.byte_offset(self.cursor);
                    self.text.remove(byte);
                    self.notify_change();
                    true
                } else {
                    false
                }
            }
            Key::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            Key::Right => {
                if self.cursor < self.text.chars().count() {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            Key::Home => {
                self.cursor = 0;
                true
            }
            Key::End => {
                self.cursor = self.text.chars().count();
                true
            }
            Key::Enter => {
                if let Some(ref cb) = self.on_submit {
                    cb(&self.text);
                }
                true
            }
            Key::Escape => {
                if self.text.is_empty() {
                    self.focused = false;
                } else {
                    self.clear();
                }
                true
            }
        }
    }

    fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.notify_change();
    }

    fn notify_change(&self) {
        if let Some(ref cb) = self.on_change {
            cb(&self.text);
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let radius = CornerRadius::uniform(theme.radius(RadiusToken::Full).min(self.bounds.height() / 2.0));

        match self.surface {
            FieldSurface::Inset => {
                for shadow in theme.surface(SurfaceToken::InsetMd).shadows() {
                    ctx.draw_shadow(self.bounds, radius, shadow);
                }
                ctx.fill_rect(
                    self.bounds,
                    radius,
                    Brush::Solid(theme.color(ColorToken::Surface).darken(0.02)),
                );
            }
            FieldSurface::Glass => {
                ctx.fill_rect(
                    self.bounds,
                    radius,
                    Brush::Glass(plush_core::GlassStyle::thin()),
                );
            }
        }

        if self.focused {
            ctx.stroke_rect(
                self.bounds,
                radius,
                Stroke::new(2.0),
                Brush::Solid(theme.color(ColorToken::FocusRing)),
            );
        }

        let center_y = self.bounds.center().y;
        self.paint_search_icon(
            ctx,
            Point::new(self.bounds.x() + PADDING_X + ICON_SIZE / 2.0, center_y),
            theme.color(ColorToken::TextTertiary),
        );

        let text_x = self.bounds.x() + PADDING_X + ICON_SIZE + 8.0;
        if self.text.is_empty() {
            ctx.draw_text(
                &self.placeholder,
                Point::new(text_x, center_y),
                &TextStyle::new(14.0).with_color(theme.color(ColorToken::TextTertiary)),
            );
        } else {
            ctx.draw_text(
                &self.text,
                Point::new(text_x, center_y),
                &TextStyle::new(14.0).with_color(theme.color(ColorToken::TextPrimary)),
            );
        }

        if self.focused {
            // Caret after the glyphs left of the cursor, estimated advance
            let caret_x = text_x + self.cursor as f32 * 14.0 * 0.55;
            let caret = Path::new()
                .move_to(caret_x, center_y - 8.0)
                .line_to(caret_x, center_y + 8.0);
            ctx.stroke_path(
                &caret,
                Stroke::new(1.5),
                Brush::Solid(theme.color(ColorToken::Primary)),
            );
        }

        if !self.text.is_empty() {
            self.paint_clear_icon(ctx, theme.color(ColorToken::TextTertiary));
        }
    }

    fn paint_search_icon(&self, ctx: &mut dyn DrawContext, center: Point, color: Color) {
        let r = ICON_SIZE * 0.32;
        ctx.stroke_circle(
            Point::new(center.x - 1.5, center.y - 1.5),
            r,
            Stroke::new(1.5).with_cap(LineCap::Round),
            Brush::Solid(color),
        );
        let handle = Path::new()
            .move_to(center.x + r * 0.5, center.y + r * 0.5)
            .line_to(center.x + ICON_SIZE * 0.4, center.y + ICON_SIZE * 0.4);
        ctx.stroke_path(
            &handle,
            Stroke::new(1.5).with_cap(LineCap::Round),
            Brush::Solid(color),
        );
    }

    fn paint_clear_icon(&self, ctx: &mut dyn DrawContext, color: Color) {
        let c = self.clear_button_rect().center();
        let d = ICON_SIZE * 0.28;
        let cross = Path::new()
            .move_to(c.x - d, c.y - d)
            .line_to(c.x + d, c.y + d)
            .move_to(c.x + d, c.y - d)
            .line_to(c.x - d, c.y + d);
        ctx.stroke_path(
            &cross,
            Stroke::new(1.5).with_cap(LineCap::Round),
            Brush::Solid(color),
        );
    }
}

/// Create a search field
pub fn search_field() -> SearchFieldBuilder {
    SearchFieldBuilder::new()
}
