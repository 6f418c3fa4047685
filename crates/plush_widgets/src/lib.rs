//! Plush Widgets
//!
//! Soft-surface widget kit: buttons, toggles, sliders, tab bars, search
//! fields, and an angular dial, rendered in a neumorphic/glassmorphic style
//! with spring-animated transitions.
//!
//! Widgets are self-contained: the host shell positions them with
//! `set_bounds`, forwards resolved pointer/key events to `handle_event` /
//! `handle_key`, advances animations through the shared
//! [`SchedulerHandle`](plush_animation::SchedulerHandle) each frame, and
//! replays the draw commands each `paint` records. Values are caller-owned;
//! widgets report edits through `on_change`-style callbacks and never write
//! application state themselves.
//!
//! ```ignore
//! use plush_widgets::prelude::*;
//!
//! let scheduler = SchedulerHandle::new();
//! let mut volume = kit::dial(30.0)
//!     .range(0.0, 100.0)
//!     .label("Volume")
//!     .on_change(|v| audio.set_volume(v))
//!     .build(&scheduler);
//!
//! // per frame:
//! let needs_redraw = scheduler.tick(frame_dt);
//! let mut ctx = RecordingContext::new(window_size);
//! volume.paint(&mut ctx);
//! renderer.execute(ctx.take_commands());
//! ```

pub mod components;

pub use components::*;

/// Builder entry points, shadcn-style: `kit::button("Save")`,
/// `kit::dial(0.5)`, ...
pub mod kit {
    pub use crate::components::button::button;
    pub use crate::components::dial::dial;
    pub use crate::components::search_field::search_field;
    pub use crate::components::slider::slider;
    pub use crate::components::tabs::tabs;
    pub use crate::components::toggle::toggle;
}

/// Common imports for hosts embedding the kit
pub mod prelude {
    pub use crate::components::*;
    pub use crate::kit;
    pub use plush_animation::SchedulerHandle;
    pub use plush_core::events::event_types;
    pub use plush_core::{
        Color, DrawContext, Key, Point, PointerEvent, Rect, RecordingContext, Size,
    };
    pub use plush_theme::{Theme, ThemeState};
}
