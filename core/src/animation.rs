//! Animation curves and the transaction recorded by [`with_animation`].
//!
//! Widgets never drive animations themselves. They change state inside
//! [`with_animation`], which records the requested curve as the pending
//! transaction. On its next frame the backend takes that transaction and
//! animates every visual property whose target changed; properties that
//! changed without a transaction jump to their new value.

use core::cell::RefCell;
use core::f32::consts::TAU;
use core::time::Duration;

thread_local! {
    static CURRENT: RefCell<Option<Animation>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<Animation>> = const { RefCell::new(None) };
}

/// Runs `f` as an animated state change.
///
/// Inside `f`, [`current_animation`] returns `animation`. Once `f` returns the
/// animation becomes the pending transaction, replacing any transaction the
/// backend has not consumed yet.
pub fn with_animation<R>(animation: Animation, f: impl FnOnce() -> R) -> R {
    let previous = CURRENT.with(|slot| slot.replace(Some(animation)));
    let result = f();
    let finished = CURRENT.with(|slot| slot.replace(previous));
    tracing::trace!(?finished, "animated transaction committed");
    PENDING.with(|slot| *slot.borrow_mut() = finished);
    result
}

/// The animation of the enclosing [`with_animation`] call, if any.
#[must_use]
pub fn current_animation() -> Option<Animation> {
    CURRENT.with(|slot| *slot.borrow())
}

/// Takes the pending transaction. Backends call this once per frame.
#[must_use]
pub fn take_transaction() -> Option<Animation> {
    PENDING.with(RefCell::take)
}

/// Parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Spring {
    /// Seconds for one undamped oscillation.
    pub response: f32,
    /// `1.0` is critically damped, lower values overshoot.
    pub damping_fraction: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::BOUNCY
    }
}

impl Spring {
    /// A lively spring that overshoots a little.
    pub const BOUNCY: Self = Self {
        response: 0.5,
        damping_fraction: 0.7,
    };

    /// A critically damped spring.
    pub const SMOOTH: Self = Self {
        response: 0.5,
        damping_fraction: 1.0,
    };

    fn angular_frequency(self) -> f32 {
        TAU / self.response.max(f32::EPSILON)
    }

    /// Displacement and velocity `t` seconds after release.
    fn displacement(self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let omega = self.angular_frequency();
        let zeta = self.damping_fraction.max(0.0);
        if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * a) / omega_d;
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * a.mul_add(cos, b * sin);
            let v = decay
                * (-zeta * omega)
                    .mul_add(a, omega_d * b)
                    .mul_add(cos, (-zeta * omega).mul_add(b, -omega_d * a) * sin);
            (x, v)
        } else {
            let c = omega.mul_add(x0, v0);
            let decay = (-omega * t).exp();
            let x = decay * c.mul_add(t, x0);
            let v = decay * (-omega).mul_add(c.mul_add(t, x0), c);
            (x, v)
        }
    }
}

/// How a property travels from its old value to its new one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "curve", rename_all = "snake_case"))]
pub enum Animation {
    /// Constant speed over `duration` seconds.
    Linear {
        /// Length of the animation in seconds.
        duration: f32,
    },
    /// Cubic ease in and out over `duration` seconds.
    EaseInOut {
        /// Length of the animation in seconds.
        duration: f32,
    },
    /// Physically based spring; its length follows from the parameters.
    Spring(Spring),
}

impl Default for Animation {
    fn default() -> Self {
        Self::bouncy()
    }
}

/// A sampled point of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Presented value.
    pub value: f32,
    /// Rate of change in units per second.
    pub velocity: f32,
    /// `true` once the value rests at the target.
    pub finished: bool,
}

impl Animation {
    /// Constant speed animation.
    #[must_use]
    pub fn linear(duration: Duration) -> Self {
        Self::Linear {
            duration: duration.as_secs_f32(),
        }
    }

    /// Cubic ease-in-out animation.
    #[must_use]
    pub fn ease_in_out(duration: Duration) -> Self {
        Self::EaseInOut {
            duration: duration.as_secs_f32(),
        }
    }

    /// Spring animation with explicit parameters.
    #[must_use]
    pub const fn spring(response: f32, damping_fraction: f32) -> Self {
        Self::Spring(Spring {
            response,
            damping_fraction,
        })
    }

    /// The default lively spring.
    #[must_use]
    pub const fn bouncy() -> Self {
        Self::Spring(Spring::BOUNCY)
    }

    /// A spring without overshoot.
    #[must_use]
    pub const fn smooth() -> Self {
        Self::Spring(Spring::SMOOTH)
    }

    /// Samples the animation `elapsed` after it started at `from` with
    /// `velocity`, heading for `to`.
    #[must_use]
    pub fn sample(self, from: f32, to: f32, velocity: f32, elapsed: Duration) -> Sample {
        let t = elapsed.as_secs_f32();
        let distance = to - from;
        match self {
            Self::Linear { duration } => {
                let progress = progress(t, duration);
                Sample {
                    value: distance.mul_add(progress, from),
                    velocity: if progress < 1.0 { distance / duration } else { 0.0 },
                    finished: progress >= 1.0,
                }
            }
            Self::EaseInOut { duration } => {
                let p = progress(t, duration);
                let (eased, slope) = if p < 0.5 {
                    (4.0 * p * p * p, 12.0 * p * p)
                } else {
                    let q = (-2.0_f32).mul_add(p, 2.0);
                    (1.0 - q * q * q / 2.0, 3.0 * q * q)
                };
                Sample {
                    value: distance.mul_add(eased, from),
                    velocity: if p < 1.0 { distance * slope / duration } else { 0.0 },
                    finished: p >= 1.0,
                }
            }
            Self::Spring(spring) => {
                let (x, v) = spring.displacement(from - to, velocity, t);
                let tolerance = 1e-3 * distance.abs().max(1.0);
                let rested = x.abs() < tolerance
                    && v.abs() < tolerance * spring.angular_frequency();
                let expired = t > spring.response * 20.0;
                if rested || expired {
                    Sample {
                        value: to,
                        velocity: 0.0,
                        finished: true,
                    }
                } else {
                    Sample {
                        value: to + x,
                        velocity: v,
                        finished: false,
                    }
                }
            }
        }
    }
}

fn progress(t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        1.0
    } else {
        (t / duration).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_animation_records_a_transaction() {
        let _ = take_transaction();
        let inside = with_animation(Animation::bouncy(), current_animation);
        assert_eq!(inside, Some(Animation::bouncy()));
        assert_eq!(current_animation(), None);
        assert_eq!(take_transaction(), Some(Animation::bouncy()));
        assert_eq!(take_transaction(), None);
    }

    #[test]
    fn linear_reaches_target_at_duration() {
        let animation = Animation::linear(Duration::from_millis(200));
        let half = animation.sample(0.0, 10.0, 0.0, Duration::from_millis(100));
        assert!((half.value - 5.0).abs() < 1e-4);
        assert!(!half.finished);
        let end = animation.sample(0.0, 10.0, 0.0, Duration::from_millis(250));
        assert!(end.finished);
        assert!((end.value - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_the_middle() {
        let animation = Animation::ease_in_out(Duration::from_secs(1));
        let quarter = animation.sample(0.0, 1.0, 0.0, Duration::from_millis(250));
        let three_quarters = animation.sample(0.0, 1.0, 0.0, Duration::from_millis(750));
        assert!((quarter.value + three_quarters.value - 1.0).abs() < 1e-4);
    }

    #[test]
    fn bouncy_spring_overshoots_then_settles() {
        let animation = Animation::bouncy();
        let overshoot = (1..200)
            .map(|ms| animation.sample(0.0, 360.0, 0.0, Duration::from_millis(ms * 5)))
            .any(|sample| sample.value > 360.0);
        assert!(overshoot);
        let settled = animation.sample(0.0, 360.0, 0.0, Duration::from_secs(5));
        assert!(settled.finished);
        assert!((settled.value - 360.0).abs() < f32::EPSILON);
    }

    #[test]
    fn smooth_spring_never_overshoots() {
        let animation = Animation::smooth();
        for step in 0..400 {
            let sample = animation.sample(0.0, 1.0, 0.0, Duration::from_millis(step * 5));
            assert!(sample.value <= 1.0 + 1e-4);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn curves_are_tagged_in_json() {
        let json = serde_json::to_string(&Animation::linear(Duration::from_millis(250))).unwrap();
        assert_eq!(json, r#"{"curve":"linear","duration":0.25}"#);
        let spring: Animation = serde_json::from_str(r#"{"curve":"spring"}"#).unwrap();
        assert_eq!(spring, Animation::bouncy());
    }

    #[test]
    fn spring_starts_at_origin() {
        let sample = Animation::bouncy().sample(720.0, 0.0, 0.0, Duration::ZERO);
        assert!((sample.value - 720.0).abs() < 1e-3);
        assert!(!sample.finished);
    }
}
