//! Widget interaction state machines
//!
//! Interaction states are small `Copy` enums advanced by event discriminants
//! through [`StateTransitions`]. Returning `None` means the event does not
//! change the state.

use crate::events::event_types;

/// Transition table for a widget interaction state
pub trait StateTransitions: Sized + Copy + Default {
    /// Next state for `event`, or `None` to stay put
    fn on_event(&self, event: u32) -> Option<Self>;

    /// Apply an event in place, returning whether the state changed
    fn apply(&mut self, event: u32) -> bool {
        match self.on_event(event) {
            Some(next) => {
                *self = next;
                true
            }
            None => false,
        }
    }
}

/// Hover/press interaction state shared by button-like widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
    Pressed,
    Disabled,
}

impl StateTransitions for ButtonState {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (ButtonState::Idle, event_types::POINTER_ENTER) => Some(ButtonState::Hovered),

            (ButtonState::Hovered, event_types::POINTER_LEAVE) => Some(ButtonState::Idle),
            (ButtonState::Hovered, event_types::POINTER_DOWN) => Some(ButtonState::Pressed),

            (ButtonState::Pressed, event_types::POINTER_UP) => Some(ButtonState::Hovered),
            (ButtonState::Pressed, event_types::POINTER_LEAVE) => Some(ButtonState::Idle),

            // Disabled ignores everything
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_cycle() {
        let mut state = ButtonState::Idle;
        assert!(state.apply(event_types::POINTER_ENTER));
        assert_eq!(state, ButtonState::Hovered);
        assert!(state.apply(event_types::POINTER_DOWN));
        assert_eq!(state, ButtonState::Pressed);
        assert!(state.apply(event_types::POINTER_UP));
        assert_eq!(state, ButtonState::Hovered);
        assert!(state.apply(event_types::POINTER_LEAVE));
        assert_eq!(state, ButtonState::Idle);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut state = ButtonState::Disabled;
        assert!(!state.apply(event_types::POINTER_ENTER));
        assert!(!state.apply(event_types::POINTER_DOWN));
        assert_eq!(state, ButtonState::Disabled);
    }

    #[test]
    fn test_leave_while_pressed_resets() {
        let mut state = ButtonState::Pressed;
        state.apply(event_types::POINTER_LEAVE);
        assert_eq!(state, ButtonState::Idle);
    }
}
