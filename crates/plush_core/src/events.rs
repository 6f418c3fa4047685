//! Pointer and keyboard events delivered by the host shell
//!
//! The host owns hit testing and gesture recognition; widgets receive fully
//! resolved events with both window-absolute and widget-local coordinates.

use crate::geometry::{Point, Rect};

/// Event discriminants used by widget state machines
///
/// Kept as plain `u32` constants so FSM transition tables stay cheap to
/// match on and stable across crates.
pub mod event_types {
    pub const POINTER_ENTER: u32 = 1;
    pub const POINTER_LEAVE: u32 = 2;
    pub const POINTER_DOWN: u32 = 3;
    pub const POINTER_UP: u32 = 4;
    pub const CLICK: u32 = 5;
    pub const DRAG: u32 = 6;
    pub const DRAG_END: u32 = 7;
    pub const FOCUS: u32 = 8;
    pub const BLUR: u32 = 9;
    pub const KEY_DOWN: u32 = 10;
}

/// A resolved pointer event
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    /// One of the `event_types` constants
    pub event_type: u32,
    /// Pointer position in window coordinates
    pub position: Point,
    /// Pointer position relative to the widget's origin
    pub local: Point,
    /// The widget's bounds in window coordinates
    pub bounds: Rect,
}

impl PointerEvent {
    pub fn new(event_type: u32, position: Point, bounds: Rect) -> Self {
        Self {
            event_type,
            position,
            local: Point::new(position.x - bounds.x(), position.y - bounds.y()),
            bounds,
        }
    }
}

/// A key press, pre-translated by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Escape,
    Left,
    Right,
    Home,
    End,
}
