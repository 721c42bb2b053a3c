//! Interpolation of visual properties between frames.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use rollkit_core::Animation;

/// Interpolation state of one animatable property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedValue {
    /// Resting at `value`.
    Idle {
        /// The presented value.
        value: f32,
    },
    /// Travelling from `from` to `to` since `start`.
    Animating {
        /// The value the animation started at.
        from: f32,
        /// The value it heads for.
        to: f32,
        /// The velocity it started with.
        velocity: f32,
        /// When it started.
        start: Duration,
        /// The curve it follows.
        curve: Animation,
    },
}

impl AnimatedValue {
    /// A value resting at `value`.
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self::Idle { value }
    }

    /// The value this property ends up at.
    #[must_use]
    pub const fn target(&self) -> f32 {
        match *self {
            Self::Idle { value } => value,
            Self::Animating { to, .. } => to,
        }
    }

    /// `true` when no animation is running.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    /// Heads for `to` along `curve`, starting from wherever the property
    /// is presented at `now` and keeping its velocity.
    pub fn retarget(&mut self, to: f32, curve: Animation, now: Duration) {
        let (from, velocity) = self.sample(now);
        tracing::debug!(from, to, velocity, ?curve, "animation retargeted");
        *self = Self::Animating {
            from,
            to,
            velocity,
            start: now,
            curve,
        };
    }

    /// Jumps to `to` without animating.
    pub fn snap(&mut self, to: f32) {
        *self = Self::Idle { value: to };
    }

    /// The presented value and velocity at `now`. Settles to
    /// [`Idle`](Self::Idle) once the curve finishes.
    pub fn sample(&mut self, now: Duration) -> (f32, f32) {
        match *self {
            Self::Idle { value } => (value, 0.0),
            Self::Animating {
                from,
                to,
                velocity,
                start,
                curve,
            } => {
                let sample = curve.sample(from, to, velocity, now.saturating_sub(start));
                if sample.finished {
                    *self = Self::Idle { value: to };
                }
                (sample.value, sample.velocity)
            }
        }
    }
}

/// An animatable property of a render node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Opacity of an opacity node.
    Opacity,
    /// Angle of a rotation node, in degrees.
    Rotation,
    /// Horizontal position of a frame's child.
    OriginX,
    /// Vertical position of a frame's child.
    OriginY,
}

/// Tracks every animated property of a tree, keyed by the child-index path
/// of its node.
#[derive(Debug, Default)]
pub struct Animator {
    values: HashMap<(Vec<usize>, Channel), AnimatedValue>,
    seen: HashSet<(Vec<usize>, Channel)>,
}

impl Animator {
    /// An animator tracking nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports the `target` of a property this frame and returns the value to
    /// present.
    ///
    /// Properties seen for the first time appear at their target. A changed
    /// target animates along `transaction` when there is one and jumps otherwise.
    pub fn drive(
        &mut self,
        path: &[usize],
        channel: Channel,
        target: f32,
        transaction: Option<Animation>,
        now: Duration,
    ) -> f32 {
        let key = (path.to_vec(), channel);
        self.seen.insert(key.clone());
        let value = self
            .values
            .entry(key)
            .or_insert_with(|| AnimatedValue::new(target));

        if (value.target() - target).abs() > f32::EPSILON {
            match transaction {
                Some(curve) => value.retarget(target, curve, now),
                None => value.snap(target),
            }
        }
        value.sample(now).0
    }

    /// Forgets properties that were not reported since the last call.
    pub fn finish_frame(&mut self) {
        let seen = core::mem::take(&mut self.seen);
        self.values.retain(|key, _| seen.contains(key));
    }

    /// `true` when every tracked property rests.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.values.values().all(AnimatedValue::is_idle)
    }
}
