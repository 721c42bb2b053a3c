//! The rolling toggle.
//!
//! Both faces are stacked on top of each other and cross-faded, while the
//! stack spins and slides to the opposite edge of its frame. Switching off
//! spins it forward by `rotation_count` full turns, switching on spins it
//! back to zero.

use nami::Binding;
use rollkit_core::{Animation, Environment, View, with_animation};
use rollkit_layout::{Alignment, Angle, Frame, Shape, zstack};
use serde::{Deserialize, Serialize};

use crate::{RollingConfig, ViewExt};

/// The direction the toggle rolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Rolls between the leading and trailing edges.
    #[default]
    Horizontal,
    /// Rolls between the top and bottom edges.
    Vertical,
}

/// The complete visual state of a rolling toggle for one value of `is_on`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollAppearance {
    /// Opacity of the first face.
    pub first_opacity: f32,
    /// Opacity of the second face, always `1.0 - first_opacity`.
    pub second_opacity: f32,
    /// Rotation of the stacked faces.
    pub rotation: Angle,
    /// Where the faces sit inside the frame.
    pub alignment: Alignment,
    /// The direction in which the frame takes all offered space.
    pub expand: Axis,
}

impl RollAppearance {
    /// The appearance of a toggle that is on or off.
    #[must_use]
    pub const fn resolve(is_on: bool, config: &RollingConfig) -> Self {
        let (first_opacity, second_opacity) = if is_on { (1.0, 0.0) } else { (0.0, 1.0) };
        let rotation = if is_on {
            Angle::ZERO
        } else {
            Angle::full_turns(config.rotation_count)
        };
        let alignment = match (config.axis, is_on) {
            (Axis::Horizontal, true) => Alignment::Leading,
            (Axis::Horizontal, false) => Alignment::Trailing,
            (Axis::Vertical, true) => Alignment::Top,
            (Axis::Vertical, false) => Alignment::Bottom,
        };
        Self {
            first_opacity,
            second_opacity,
            rotation,
            alignment,
            expand: config.axis,
        }
    }
}

/// A toggle showing `first` when on and `second` when off, rolling between them.
///
/// The state lives in the binding, owned by the caller. Every render reads it
/// anew, so writes from elsewhere show up on the next frame. A tap flips it
/// inside [`with_animation`] so the backend animates the change.
///
/// ```ignore
/// let is_on = binding(false);
/// RollingToggle::new(&is_on, "🌞", "🌚")
///     .rotation_count(2)
///     .axis(Axis::Vertical)
/// ```
#[derive(Debug)]
pub struct RollingToggle<First, Second> {
    is_on: Binding<bool>,
    first: First,
    second: Second,
    config: RollingConfig,
}

impl<First: View, Second: View> RollingToggle<First, Second> {
    /// Creates a toggle with one full turn along the horizontal axis.
    pub fn new(is_on: &Binding<bool>, first: First, second: Second) -> Self {
        Self {
            is_on: is_on.clone(),
            first,
            second,
            config: RollingConfig::default(),
        }
    }

    /// Sets how many full turns one switch takes. `0` cross-fades without spinning.
    #[must_use]
    pub const fn rotation_count(mut self, count: u32) -> Self {
        self.config.rotation_count = count;
        self
    }

    /// Sets the direction of the roll.
    #[must_use]
    pub const fn axis(mut self, axis: Axis) -> Self {
        self.config.axis = axis;
        self
    }

    /// Sets the curve used when a tap switches the toggle.
    #[must_use]
    pub const fn animation(mut self, animation: Animation) -> Self {
        self.config.animation = animation;
        self
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub const fn config(mut self, config: RollingConfig) -> Self {
        self.config = config;
        self
    }

    /// The current configuration.
    pub const fn configuration(&self) -> &RollingConfig {
        &self.config
    }

    /// The face shown when on.
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// The face shown when off.
    pub const fn second(&self) -> &Second {
        &self.second
    }

    /// The bound state.
    pub const fn binding(&self) -> &Binding<bool> {
        &self.is_on
    }
}

fn flip(is_on: &Binding<bool>, animation: Animation) {
    with_animation(animation, || {
        let next = !is_on.get();
        is_on.set(next);
        tracing::debug!(is_on = next, "rolling toggle flipped");
    });
}

impl<First: View, Second: View> View for RollingToggle<First, Second> {
    fn body(self, _env: &Environment) -> impl View {
        let look = RollAppearance::resolve(self.is_on.get(), &self.config);
        tracing::trace!(
            rotation = look.rotation.to_degrees(),
            alignment = ?look.alignment,
            "rolling toggle body"
        );

        let faces = zstack((
            self.first.opacity(look.first_opacity),
            self.second.opacity(look.second_opacity),
        ))
        .rotation(look.rotation);

        let frame = match look.expand {
            Axis::Horizontal => Frame::new(faces).max_width(f32::INFINITY),
            Axis::Vertical => Frame::new(faces).max_height(f32::INFINITY),
        };

        let is_on = self.is_on;
        let animation = self.config.animation;
        frame
            .alignment(look.alignment)
            .content_shape(Shape::Rectangle)
            .on_tap(move || flip(&is_on, animation))
    }
}

/// Creates a [`RollingToggle`] with the default configuration.
pub fn rolling_toggle<First: View, Second: View>(
    is_on: &Binding<bool>,
    first: First,
    second: Second,
) -> RollingToggle<First, Second> {
    RollingToggle::new(is_on, first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rotation_count: u32, axis: Axis) -> RollingConfig {
        RollingConfig {
            rotation_count,
            axis,
            ..RollingConfig::default()
        }
    }

    #[test]
    fn faces_are_exact_complements() {
        for is_on in [true, false] {
            for axis in [Axis::Horizontal, Axis::Vertical] {
                let look = RollAppearance::resolve(is_on, &config(1, axis));
                assert!((look.first_opacity + look.second_opacity - 1.0).abs() < f32::EPSILON);
                assert!(look.first_opacity == 0.0 || look.first_opacity == 1.0);
            }
        }
        assert_eq!(RollAppearance::resolve(true, &config(1, Axis::Horizontal)).first_opacity, 1.0);
        assert_eq!(RollAppearance::resolve(false, &config(1, Axis::Horizontal)).second_opacity, 1.0);
    }

    #[test]
    fn on_is_never_rotated() {
        for count in [0, 1, 2, 7] {
            assert_eq!(
                RollAppearance::resolve(true, &config(count, Axis::Vertical)).rotation,
                Angle::ZERO
            );
        }
    }

    #[test]
    fn off_turns_by_whole_revolutions() {
        for count in [0_u32, 1, 2, 5] {
            let look = RollAppearance::resolve(false, &config(count, Axis::Horizontal));
            #[allow(clippy::cast_precision_loss)]
            let expected = 360.0 * count as f32;
            assert_eq!(look.rotation.to_degrees(), expected);
        }
    }

    #[test]
    fn alignment_follows_axis_and_state() {
        let table = [
            (Axis::Horizontal, true, Alignment::Leading),
            (Axis::Horizontal, false, Alignment::Trailing),
            (Axis::Vertical, true, Alignment::Top),
            (Axis::Vertical, false, Alignment::Bottom),
        ];
        for (axis, is_on, alignment) in table {
            let look = RollAppearance::resolve(is_on, &config(1, axis));
            assert_eq!(look.alignment, alignment);
            assert_eq!(look.expand, axis);
        }
    }

    #[test]
    fn resolving_twice_gives_the_same_appearance() {
        let config = config(3, Axis::Vertical);
        assert_eq!(
            RollAppearance::resolve(false, &config),
            RollAppearance::resolve(false, &config)
        );
    }

    #[test]
    fn builder_defaults_match_a_single_horizontal_turn() {
        let is_on = nami::binding(true);
        let toggle = rolling_toggle(&is_on, "on", "off");
        assert_eq!(toggle.configuration().rotation_count, 1);
        assert_eq!(toggle.configuration().axis, Axis::Horizontal);
        assert_eq!(toggle.configuration().animation, Animation::bouncy());
    }

    #[test]
    fn flipping_twice_restores_state_and_rotation() {
        let is_on = nami::binding(true);
        let config = config(2, Axis::Horizontal);
        let start = RollAppearance::resolve(is_on.get(), &config);
        flip(&is_on, Animation::bouncy());
        assert!(!is_on.get());
        flip(&is_on, Animation::bouncy());
        assert!(is_on.get());
        assert_eq!(RollAppearance::resolve(is_on.get(), &config), start);
    }
}
