//! Plush Animation System
//!
//! Spring physics and explicit timed tweens, advanced by the host's frame
//! clock.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Easing Tweens**: explicit (start, end, duration, easing) transitions
//! - **Frame Scheduler**: single-threaded; `tick(dt)` reports whether a
//!   redraw is still needed
//! - **Interruptible**: springs inherit velocity when retargeted; tweens
//!   restart from their current value

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod tween;

pub use easing::Easing;
pub use scheduler::{AnimatedValue, AnimationScheduler, SchedulerHandle, SpringId};
pub use spring::{Spring, SpringConfig};
pub use tween::{Interpolate, Tween};
