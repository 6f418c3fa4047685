//! Spring physics animation
//!
//! RK4-integrated spring physics for natural-feeling transitions. Springs
//! retain velocity when retargeted mid-flight, which is what makes a flicked
//! dial feel continuous rather than restarted.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Gentle spring for large movements (tab indicator travel)
    pub fn gentle() -> Self {
        Self::new(140.0, 15.0, 1.0)
    }

    /// Bouncy spring with visible overshoot (toggle thumbs)
    pub fn bouncy() -> Self {
        Self::new(220.0, 13.0, 1.0)
    }

    /// Stiff spring with slight overshoot (buttons, dial needle)
    pub fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Very stiff spring, minimal oscillation (click-to-jump on sliders)
    pub fn snappy() -> Self {
        Self::new(600.0, 40.0, 1.0)
    }

    /// Critical damping for this stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-driven scalar animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget, keeping current position and velocity
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to a value with no animation, killing velocity
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring is close enough to the target to stop
    ///
    /// Epsilons are tuned for on-screen units: a tenth of a pixel (or a
    /// tenth of a degree for rotations) is imperceptible.
    pub fn is_settled(&self) -> bool {
        const EPSILON: f32 = 0.1;
        const VELOCITY_EPSILON: f32 = 1.0;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Advance the simulation by `dt` seconds using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (k1_x, k1_v) = self.derivatives(self.value, self.velocity);
        let (k2_x, k2_v) = self.derivatives(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let (k3_x, k3_v) = self.derivatives(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let (k4_x, k4_v) = self.derivatives(self.value + k3_x * dt, self.velocity + k3_v * dt);

        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
    }

    fn derivatives(&self, x: f32, v: f32) -> (f32, f32) {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (v, (spring_force + damping_force) / self.config.mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        for _ in 0..180 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::bouncy(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_set_immediate_kills_motion() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);
        spring.step(1.0 / 60.0);

        spring.set_immediate(42.0);
        assert_eq!(spring.value(), 42.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_rk4_stable_at_large_steps() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value().is_finite());
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }

    #[test]
    fn test_presets_underdamped() {
        assert!(SpringConfig::gentle().is_underdamped());
        assert!(SpringConfig::bouncy().is_underdamped());
        assert!(SpringConfig::stiff().is_underdamped());
    }
}
