//! Easing curves for timed tweens

/// Easing function applied to a tween's normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Overshooting ease-out, for playful arrivals
    EaseOutBack,
}

impl Easing {
    /// Map normalized time `t` in [0, 1] to eased progress
    ///
    /// `EaseOutBack` intentionally exceeds 1.0 near the end of its travel.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Easing::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_exact() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutBack,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic_midpoints() {
        assert!(Easing::EaseIn.apply(0.25) < Easing::EaseIn.apply(0.75));
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_out_back_overshoots() {
        assert!(Easing::EaseOutBack.apply(0.9) > 1.0);
    }

    #[test]
    fn test_input_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }
}
