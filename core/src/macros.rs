/// Creates a configurable view: a thin wrapper around a config struct.
///
/// When rendered, the view first asks the environment for a
/// [`Hook`](crate::Hook) registered for the config type. If an ancestor
/// installed one (a style), the hook builds the view; otherwise the config is
/// handed to the backend as a [`Native`](crate::Native) view.
///
/// ```ignore
/// configurable!(Toggle, ToggleConfig);
/// configurable!(Slider, SliderConfig, StretchAxis::Horizontal);
/// ```
#[macro_export]
macro_rules! configurable {
    (@impl $(#[$meta:meta])*; $view:ident, $config:ty, $axis:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $view($config);

        impl $crate::NativeView for $config {
            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $axis
            }
        }

        impl $crate::view::ConfigurableView for $view {
            type Config = $config;
            #[inline] fn config(self) -> Self::Config { self.0 }
        }

        impl $crate::view::ViewConfiguration for $config {
            type View = $view;
            #[inline] fn render(self) -> Self::View { $view(self) }
        }

        impl From<$config> for $view {
            #[inline] fn from(value: $config) -> Self { Self(value) }
        }

        impl $crate::View for $view {
            fn body(self, env: &$crate::Environment) -> impl $crate::View {
                use $crate::view::ConfigurableView;
                let config = self.config();
                if let Some(hook) = env.get::<$crate::Hook<$config>>() {
                    hook.apply(env, config)
                } else {
                    $crate::AnyView::new($crate::Native(config))
                }
            }

            fn stretch_axis(&self) -> $crate::layout::StretchAxis {
                $crate::NativeView::stretch_axis(&self.0)
            }
        }
    };

    ($(#[$meta:meta])* $view:ident, $config:ty, $axis:expr) => {
        $crate::configurable!(@impl $(#[$meta])*; $view, $config, $axis);
    };

    ($(#[$meta:meta])* $view:ident, $config:ty) => {
        $crate::configurable!(@impl $(#[$meta])*; $view, $config, $crate::layout::StretchAxis::None);
    };
}

macro_rules! tuples {
    ($macro:ident) => {
        $macro!(T0);
        $macro!(T0, T1);
        $macro!(T0, T1, T2);
        $macro!(T0, T1, T2, T3);
        $macro!(T0, T1, T2, T3, T4);
        $macro!(T0, T1, T2, T3, T4, T5);
        $macro!(T0, T1, T2, T3, T4, T5, T6);
        $macro!(T0, T1, T2, T3, T4, T5, T6, T7);
    };
}
