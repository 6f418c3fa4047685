//! Capsule tab bar
//!
//! A debossed rail holding equal-width tab segments with a raised capsule
//! indicator under the selected one. On selection change the indicator's x
//! and width spring-animate independently from the old segment's rect to the
//! new one, so the capsule stretches through the transition instead of
//! teleporting.

use std::sync::Arc;

use plush_animation::{AnimatedValue, SchedulerHandle, SpringConfig};
use plush_core::events::event_types;
use plush_core::{
    Brush, CornerRadius, DrawContext, FontWeight, Point, PointerEvent, Rect, TextStyle,
};
use plush_theme::{ColorToken, SurfaceToken, ThemeState};

const RAIL_PADDING: f32 = 4.0;

/// One entry in a tab bar
#[derive(Clone, Debug)]
pub struct Tab {
    pub label: String,
    pub disabled: bool,
}

impl Tab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl From<&str> for Tab {
    fn from(label: &str) -> Self {
        Tab::new(label)
    }
}

impl From<String> for Tab {
    fn from(label: String) -> Self {
        Tab::new(label)
    }
}

/// Builder for creating tab bars with a fluent API
pub struct TabBarBuilder {
    tabs: Vec<Tab>,
    selected: usize,
    on_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
}

impl TabBarBuilder {
    pub fn new<T: Into<Tab>>(tabs: impl IntoIterator<Item = T>) -> Self {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            selected: 0,
            on_change: None,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Called with the newly selected index
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    pub fn build(self, scheduler: &SchedulerHandle) -> TabBar {
        if self.tabs.is_empty() {
            tracing::warn!("tab bar built with no tabs");
        }
        let selected = self.selected.min(self.tabs.len().saturating_sub(1));
        TabBar {
            tabs: self.tabs,
            selected,
            on_change: self.on_change,
            bounds: Rect::ZERO,
            indicator_x: AnimatedValue::new(scheduler, 0.0, SpringConfig::stiff()),
            indicator_width: AnimatedValue::new(scheduler, 0.0, SpringConfig::stiff()),
            indicator_placed: false,
        }
    }
}

/// Tab bar widget
pub struct TabBar {
    tabs: Vec<Tab>,
    selected: usize,
    on_change: Option<Arc<dyn Fn(usize) + Send + Sync>>,
    bounds: Rect,
    indicator_x: AnimatedValue,
    indicator_width: AnimatedValue,
    /// The indicator snaps into place on the first layout instead of
    /// animating in from zero width
    indicator_placed: bool,
}

impl TabBar {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        let target = self.segment_rect(self.selected);
        if self.indicator_placed {
            self.indicator_x.set_target(target.x());
            self.indicator_width.set_target(target.width());
        } else {
            self.indicator_x.set_immediate(target.x());
            self.indicator_width.set_immediate(target.width());
            self.indicator_placed = true;
        }
    }

    /// Segment rect for tab `index` inside the rail
    pub fn segment_rect(&self, index: usize) -> Rect {
        let inner = self.bounds.inset(RAIL_PADDING, RAIL_PADDING);
        if self.tabs.is_empty() {
            return inner;
        }
        let width = inner.width() / self.tabs.len() as f32;
        Rect::new(inner.x() + width * index as f32, inner.y(), width, inner.height())
    }

    /// Select tab `index`, retargeting the indicator springs
    ///
    /// Out-of-range and disabled indices are ignored. Reselecting the
    /// current tab does not fire `on_change`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tabs.len() || self.tabs[index].disabled || index == self.selected {
            return false;
        }
        tracing::debug!(from = self.selected, to = index, "tab selection changed");
        self.selected = index;
        let target = self.segment_rect(index);
        self.indicator_x.set_target(target.x());
        self.indicator_width.set_target(target.width());
        if let Some(ref cb) = self.on_change {
            cb(index);
        }
        true
    }

    fn tab_at(&self, position: Point) -> Option<usize> {
        (0..self.tabs.len()).find(|&i| self.segment_rect(i).contains(position))
    }

    /// Handle a pointer event; returns true when a redraw is needed
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        if event.event_type != event_types::CLICK {
            return false;
        }
        match self.tab_at(event.position) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let theme = ThemeState::get();
        let rail_radius = CornerRadius::uniform(self.bounds.height() / 2.0);

        // Debossed rail
        for shadow in theme.surface(SurfaceToken::InsetMd).shadows() {
            ctx.draw_shadow(self.bounds, rail_radius, shadow);
        }
        ctx.fill_rect(
            self.bounds,
            rail_radius,
            Brush::Solid(theme.color(ColorToken::Shade).with_alpha(0.15)),
        );

        // Raised capsule indicator at the spring's current geometry
        let inner = self.bounds.inset(RAIL_PADDING, RAIL_PADDING);
        let indicator = Rect::new(
            self.indicator_x.get(),
            inner.y(),
            self.indicator_width.get(),
            inner.height(),
        );
        let capsule = CornerRadius::uniform(indicator.height() / 2.0);
        for shadow in theme.surface(SurfaceToken::RaisedSm).shadows() {
            ctx.draw_shadow(indicator, capsule, shadow);
        }
        ctx.fill_rect(
            indicator,
            capsule,
            Brush::Solid(theme.color(ColorToken::Surface).lighten(0.08)),
        );

        for (i, tab) in self.tabs.iter().enumerate() {
            let color = if tab.disabled {
                theme.color(ColorToken::TextTertiary)
            } else if i == self.selected {
                theme.color(ColorToken::TextPrimary)
            } else {
                theme.color(ColorToken::TextSecondary)
            };
            let weight = if i == self.selected {
                FontWeight::Semibold
            } else {
                FontWeight::Normal
            };
            ctx.draw_text(
                &tab.label,
                self.segment_rect(i).center(),
                &TextStyle::new(13.0).with_color(color).with_weight(weight).centered(),
            );
        }
    }
}

/// Create a tab bar from labels or [`Tab`]s
pub fn tabs<T: Into<Tab>>(tabs: impl IntoIterator<Item = T>) -> TabBarBuilder {
    TabBarBuilder::new(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    fn test_bar() -> (TabBar, SchedulerHandle) {
        let scheduler = SchedulerHandle::new();
        let mut bar = TabBarBuilder::new(["Day", "Week", "Month"]).build(&scheduler);
        bar.set_bounds(Rect::new(0.0, 0.0, 300.0, 36.0));
        (bar, scheduler)
    }

    #[test]
    fn test_segments_tile_the_rail() {
        let (bar, _scheduler) = test_bar();
        let first = bar.segment_rect(0);
        let last = bar.segment_rect(2);
        assert_eq!(first.x(), RAIL_PADDING);
        assert!((first.width() - (300.0 - RAIL_PADDING * 2.0) / 3.0).abs() < 1e-4);
        assert!((last.max_x() - (300.0 - RAIL_PADDING)).abs() < 1e-4);
    }

    #[test]
    fn test_indicator_snaps_on_first_layout() {
        let (bar, _scheduler) = test_bar();
        let segment = bar.segment_rect(0);
        assert_eq!(bar.indicator_x.get(), segment.x());
        assert_eq!(bar.indicator_width.get(), segment.width());
    }

    #[test]
    fn test_select_retargets_both_springs() {
        let (mut bar, scheduler) = test_bar();
        assert!(bar.select(2));
        let target = bar.segment_rect(2);

        // Springs retargeted but not yet there
        assert_eq!(bar.indicator_x.target(), target.x());
        assert_eq!(bar.indicator_width.target(), target.width());
        assert!(bar.indicator_x.get() < target.x());

        for _ in 0..240 {
            scheduler.tick(Duration::from_micros(16_667));
        }
        assert!((bar.indicator_x.get() - target.x()).abs() < 0.5);
        assert!((bar.indicator_width.get() - target.width()).abs() < 0.5);
    }

    #[test]
    fn test_click_selects_tab() {
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = seen.clone();

        let scheduler = SchedulerHandle::new();
        let mut bar = TabBarBuilder::new(["Day", "Week", "Month"])
            .on_change(move |i| seen_cb.lock().unwrap().push(i))
            .build(&scheduler);
        bar.set_bounds(Rect::new(0.0, 0.0, 300.0, 36.0));

        let inside_second = bar.segment_rect(1).center();
        let ev = PointerEvent::new(event_types::CLICK, inside_second, bar.bounds());
        assert!(bar.handle_event(&ev));
        assert_eq!(bar.selected(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![1]);

        // Clicking the already-selected tab is a no-op
        assert!(!bar.handle_event(&ev));
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_disabled_tab_not_selectable() {
        let scheduler = SchedulerHandle::new();
        let mut bar = TabBarBuilder::new([Tab::new("A"), Tab::new("B").disabled()])
            .build(&scheduler);
        bar.set_bounds(Rect::new(0.0, 0.0, 200.0, 36.0));
        assert!(!bar.select(1));
        assert_eq!(bar.selected(), 0);
    }

    #[test]
    fn test_out_of_range_select_ignored() {
        let (mut bar, _scheduler) = test_bar();
        assert!(!bar.select(7));
        assert_eq!(bar.selected(), 0);
    }

    #[test]
    fn test_initial_selected_clamped() {
        let scheduler = SchedulerHandle::new();
        let bar = TabBarBuilder::new(["A", "B"]).selected(9).build(&scheduler);
        assert_eq!(bar.selected(), 1);
    }
}
