//! Haptic feedback bridge
//!
//! Widgets request pulses fire-and-forget; the host wires a platform
//! implementation (or [`NullHaptics`] when the device has no actuator).

use std::sync::{Arc, Mutex};

/// Kind of tactile pulse to emit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticPulse {
    /// Light tick, e.g. crossing a detent
    Light,
    /// Medium tap, e.g. reaching a range boundary
    Medium,
    /// Heavy thud, e.g. a destructive confirmation
    Heavy,
}

/// Fire-and-forget haptic emitter
pub trait HapticEmitter: Send + Sync {
    fn pulse(&self, kind: HapticPulse);
}

/// Shared handle to a haptic emitter
pub type SharedHaptics = Arc<dyn HapticEmitter>;

/// Emitter that drops every pulse
#[derive(Debug, Default)]
pub struct NullHaptics;

impl HapticEmitter for NullHaptics {
    fn pulse(&self, _kind: HapticPulse) {}
}

/// Emitter that records every pulse, for tests
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: Mutex<Vec<HapticPulse>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.pulses.lock().unwrap().len()
    }
}

impl HapticEmitter for RecordingHaptics {
    fn pulse(&self, kind: HapticPulse) {
        self.pulses.lock().unwrap().push(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_haptics() {
        let haptics = RecordingHaptics::new();
        haptics.pulse(HapticPulse::Medium);
        haptics.pulse(HapticPulse::Medium);
        assert_eq!(haptics.count(), 2);
        assert_eq!(haptics.pulses(), vec![HapticPulse::Medium, HapticPulse::Medium]);
    }
}
