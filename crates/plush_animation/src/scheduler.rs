//! Animation scheduler
//!
//! Owns every live spring and steps them when the host's frame clock ticks.
//! There is no background thread: all animation state advances on the UI
//! thread, in `tick()`, matching the single-threaded event-driven model the
//! widgets assume.

use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::spring::{Spring, SpringConfig};

new_key_type! {
    /// Identifier for a scheduled spring
    pub struct SpringId;
}

/// Steps all registered springs each frame
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
        }
    }

    pub fn add_spring(&mut self, config: SpringConfig, initial: f32) -> SpringId {
        self.springs.insert(Spring::new(config, initial))
    }

    pub fn remove_spring(&mut self, id: SpringId) {
        self.springs.remove(id);
    }

    pub fn spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    /// Advance every spring by `dt`; returns true if anything is still
    /// moving and another frame should be scheduled.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let dt = dt.as_secs_f32();
        let mut active = false;
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
            if !spring.is_settled() {
                active = true;
            }
        }
        active
    }

    pub fn active_count(&self) -> usize {
        self.springs
            .iter()
            .filter(|(_, s)| !s.is_settled())
            .count()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap cloneable handle to a shared scheduler
#[derive(Clone, Default)]
pub struct SchedulerHandle {
    inner: Arc<Mutex<AnimationScheduler>>,
}

impl SchedulerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance animations; see [`AnimationScheduler::tick`]
    pub fn tick(&self, dt: Duration) -> bool {
        self.inner.lock().unwrap().tick(dt)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().unwrap().active_count()
    }

    fn with<R>(&self, f: impl FnOnce(&mut AnimationScheduler) -> R) -> R {
        f(&mut self.inner.lock().unwrap())
    }
}

struct ValueSlot {
    scheduler: SchedulerHandle,
    id: SpringId,
}

impl Drop for ValueSlot {
    fn drop(&mut self) {
        self.scheduler.with(|s| s.remove_spring(self.id));
    }
}

/// A spring-backed scalar owned by a widget
///
/// Cloneable; the underlying spring is released when the last handle drops.
/// `set_target` animates, `set_immediate` snaps (used during drags, where
/// the pointer is the source of truth and easing would lag it).
#[derive(Clone)]
pub struct AnimatedValue {
    slot: Arc<ValueSlot>,
}

impl AnimatedValue {
    pub fn new(scheduler: &SchedulerHandle, initial: f32, config: SpringConfig) -> Self {
        let id = scheduler.with(|s| s.add_spring(config, initial));
        Self {
            slot: Arc::new(ValueSlot {
                scheduler: scheduler.clone(),
                id,
            }),
        }
    }

    pub fn get(&self) -> f32 {
        self.slot
            .scheduler
            .with(|s| s.spring(self.slot.id).map(|sp| sp.value()).unwrap_or(0.0))
    }

    pub fn target(&self) -> f32 {
        self.slot
            .scheduler
            .with(|s| s.spring(self.slot.id).map(|sp| sp.target()).unwrap_or(0.0))
    }

    pub fn set_target(&self, target: f32) {
        self.slot.scheduler.with(|s| {
            if let Some(spring) = s.spring_mut(self.slot.id) {
                spring.set_target(target);
            }
        });
    }

    pub fn set_immediate(&self, value: f32) {
        self.slot.scheduler.with(|s| {
            if let Some(spring) = s.spring_mut(self.slot.id) {
                spring.set_immediate(value);
            }
        });
    }

    pub fn is_settled(&self) -> bool {
        self.slot
            .scheduler
            .with(|s| s.spring(self.slot.id).map(|sp| sp.is_settled()).unwrap_or(true))
    }
}
