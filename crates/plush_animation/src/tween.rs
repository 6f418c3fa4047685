//! Explicit timed interpolation
//!
//! A [`Tween`] is the full transition state — start, end, duration, easing —
//! advanced by the caller's frame clock. Nothing is implicit: a widget that
//! animates holds its tween and steps it when the scheduler ticks.

use plush_core::Color;

use crate::easing::Easing;

/// Values that can be linearly interpolated
pub trait Interpolate: Clone {
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Approximate equality, for settling detection
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for Color {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Color::lerp(self, other, t)
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }
}

/// A (start, end, duration, easing) transition advanced by a frame clock
#[derive(Clone, Debug)]
pub struct Tween<T: Interpolate> {
    start: T,
    end: T,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(start: T, end: T, duration_ms: f32, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration_ms: duration_ms.max(0.0),
            easing,
            elapsed_ms: 0.0,
        }
    }

    /// A tween that is already at its end value
    pub fn completed(value: T) -> Self {
        Self::new(value.clone(), value, 0.0, Easing::Linear)
    }

    /// Advance by `dt_ms` milliseconds
    pub fn advance(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        if self.duration_ms <= 0.0 {
            return self.end.clone();
        }
        let t = self.easing.apply(self.elapsed_ms / self.duration_ms);
        self.start.lerp(&self.end, t)
    }

    pub fn end_value(&self) -> T {
        self.end.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Restart toward a new end value from the current position
    pub fn retarget(&mut self, end: T, duration_ms: f32) {
        self.start = self.value();
        self.end = end;
        self.duration_ms = duration_ms.max(0.0);
        self.elapsed_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let mut tween = Tween::new(0.0f32, 10.0, 200.0, Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        tween.advance(200.0);
        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_overrun_clamps() {
        let mut tween = Tween::new(0.0f32, 10.0, 100.0, Easing::EaseOut);
        tween.advance(1000.0);
        assert_eq!(tween.value(), 10.0);
    }

    #[test]
    fn test_retarget_from_current() {
        let mut tween = Tween::new(0.0f32, 10.0, 100.0, Easing::Linear);
        tween.advance(50.0);
        let mid = tween.value();
        assert!((mid - 5.0).abs() < 1e-4);

        tween.retarget(0.0, 100.0);
        assert!((tween.value() - mid).abs() < 1e-4);
        tween.advance(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_end() {
        let tween = Tween::completed(7.0f32);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 7.0);
    }

    #[test]
    fn test_color_tween() {
        let mut tween = Tween::new(Color::BLACK, Color::WHITE, 100.0, Easing::Linear);
        tween.advance(50.0);
        let mid = tween.value();
        assert!(mid.approx_eq(&Color::rgb(0.5, 0.5, 0.5), 1e-4));
    }
}
