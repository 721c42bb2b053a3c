//! A boolean toggle backed by a reactive binding.

use nami::Binding;
use rollkit_core::{AnyView, Environment, Hook, View, configurable};

/// Everything a toggle is made of.
#[derive(Debug)]
#[non_exhaustive]
pub struct ToggleConfig {
    /// The label. A tuple label carries one child per element.
    pub label: AnyView,
    /// The state shown and changed by the toggle.
    pub toggle: Binding<bool>,
}

configurable!(
    /// A control switching a boolean on and off.
    ///
    /// Without a style the backend draws its platform switch next to the
    /// label. A [`ToggleStyle`] installed higher up the tree replaces that.
    ///
    /// ```ignore
    /// toggle("Wi-Fi", &wifi)
    /// Toggle::new(&dark_mode).label(("Dark", "Light"))
    /// ```
    Toggle,
    ToggleConfig
);

impl Toggle {
    /// Creates an unlabelled toggle for `toggle`.
    #[must_use]
    pub fn new(toggle: &Binding<bool>) -> Self {
        Self(ToggleConfig {
            label: AnyView::default(),
            toggle: toggle.clone(),
        })
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, view: impl View) -> Self {
        self.0.label = AnyView::new(view);
        self
    }
}

/// Creates a labelled toggle.
#[must_use]
pub fn toggle(label: impl View, toggle: &Binding<bool>) -> Toggle {
    Toggle::new(toggle).label(label)
}

/// Custom appearance for every [`Toggle`] below the view it is applied to.
pub trait ToggleStyle: 'static {
    /// Builds the view for one toggle.
    fn make_body(&self, env: &Environment, config: ToggleConfig) -> impl View;

    /// Wraps the style as an environment hook.
    fn into_hook(self) -> Hook<ToggleConfig>
    where
        Self: Sized,
    {
        tracing::debug!(style = core::any::type_name::<Self>(), "toggle style installed");
        Hook::new(move |env: &Environment, config| {
            AnyView::new(self.make_body(env, config))
        })
    }
}

#[cfg(test)]
mod tests {
    use nami::binding;
    use rollkit_core::{Native, View, view::ConfigurableView};

    use super::*;

    struct Caption;

    impl ToggleStyle for Caption {
        fn make_body(&self, _env: &Environment, config: ToggleConfig) -> impl View {
            config.label
        }
    }

    #[test]
    fn unstyled_toggle_reaches_the_backend() {
        let state = binding(false);
        let body = AnyView::new(toggle("Wi-Fi", &state).body(&Environment::new()));
        assert!(body.is::<Native<ToggleConfig>>());
    }

    #[test]
    fn style_hook_builds_the_body() {
        let state = binding(true);
        let env = Environment::new().with(Caption.into_hook());
        let body = AnyView::new(toggle("Wi-Fi", &state).body(&env));
        assert!(!body.is::<Native<ToggleConfig>>());
    }

    #[test]
    fn default_label_has_no_children() {
        let state = binding(true);
        let config = Toggle::new(&state).config();
        assert!(config.label.into_subviews().is_empty());
    }
}
