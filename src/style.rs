//! Installs [`RollingToggle`] as the look of every [`Toggle`](rollkit_controls::Toggle).
//!
//! The toggle's label must be a two-element tuple: the face shown when on,
//! then the face shown when off.
//!
//! ```ignore
//! let is_on = binding(true);
//! toggle(("🌞", "🌚"), &is_on).toggle_style(RollingToggleStyle::new().rotation_count(2))
//! ```

use rollkit_controls::{ToggleConfig, ToggleStyle};
use rollkit_core::{Animation, AnyView, Environment, View};

use crate::{Axis, RollingConfig, RollingToggle};

/// A [`ToggleStyle`] that draws toggles as a [`RollingToggle`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollingToggleStyle {
    config: RollingConfig,
}

impl RollingToggleStyle {
    /// A style with one full turn along the horizontal axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A style using an existing configuration, such as one loaded from disk.
    #[must_use]
    pub const fn from_config(config: RollingConfig) -> Self {
        Self { config }
    }

    /// Sets how many full turns one switch takes.
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

    /// Sets the animation curve.
    #[must_use]
    pub const fn animation(mut self, animation: Animation) -> Self {
        self.config.animation = animation;
        self
    }

    /// The configuration handed to every toggle drawn with this style.
    #[must_use]
    pub const fn config(&self) -> &RollingConfig {
        &self.config
    }
}

impl ToggleStyle for RollingToggleStyle {
    fn make_body(&self, _env: &Environment, config: ToggleConfig) -> impl View {
        let ToggleConfig { label, toggle, .. } = config;
        let faces = label.into_subviews();
        let count = faces.len();

        match <[AnyView; 2]>::try_from(faces) {
            Ok([first, second]) => {
                AnyView::new(RollingToggle::new(&toggle, first, second).config(self.config))
            }
            Err(_) => {
                tracing::debug!(
                    faces = count,
                    "rolling toggle style needs exactly two label views, drawing nothing"
                );
                AnyView::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nami::binding;
    use rollkit_controls::Toggle;
    use rollkit_core::view::ConfigurableView;

    fn styled(label: impl View) -> AnyView {
        let is_on = binding(true);
        let config = Toggle::new(&is_on).label(label).config();
        AnyView::new(
            RollingToggleStyle::new()
                .rotation_count(3)
                .make_body(&Environment::new(), config),
        )
    }

    #[test]
    fn two_faces_become_a_rolling_toggle() {
        let view = styled(("on", "off"));
        let toggle = view
            .downcast::<RollingToggle<AnyView, AnyView>>()
            .expect("rolling toggle");
        assert_eq!(toggle.configuration().rotation_count, 3);
        assert_eq!(toggle.first().downcast_ref::<&str>(), Some(&"on"));
        assert_eq!(toggle.second().downcast_ref::<&str>(), Some(&"off"));
    }

    #[test]
    fn single_label_draws_nothing() {
        assert!(styled("lonely").is::<()>());
    }

    #[test]
    fn three_faces_draw_nothing() {
        assert!(styled(("a", "b", "c")).is::<()>());
    }

    #[test]
    fn from_config_keeps_every_field() {
        let config = RollingConfig {
            rotation_count: 4,
            axis: Axis::Vertical,
            animation: Animation::smooth(),
        };
        assert_eq!(RollingToggleStyle::from_config(config).config(), &config);
    }
}
