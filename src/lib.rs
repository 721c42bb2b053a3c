#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod logging;
pub mod rolling;
pub mod style;
pub mod view;

#[doc(inline)]
pub use config::{ConfigError, RollingConfig};
#[doc(inline)]
pub use rolling::{Axis, RollAppearance, RollingToggle, rolling_toggle};
#[doc(inline)]
pub use style::RollingToggleStyle;
#[doc(inline)]
pub use view::ViewExt;

pub use rollkit_controls as controls;
pub use rollkit_layout as layout;
pub use tracing as log;

#[doc(inline)]
pub use rollkit_core::{
    Animation, AnyView, Binding, Environment, Hook, Signal, View, animation, binding, env,
    gesture, handler, nami, with_animation,
};

pub mod prelude {
    //! Everything needed to build and style rolling toggles.
    //!
    //! ```ignore
    //! use rollkit::prelude::*;
    //!
    //! fn theme_switch(dark: &Binding<bool>) -> impl View {
    //!     rolling_toggle(dark, "🌞", "🌚").axis(Axis::Vertical)
    //! }
    //! ```
    pub use super::{
        Animation, AnyView, Axis, Binding, Environment, RollingConfig, RollingToggle,
        RollingToggleStyle, Signal, View, ViewExt, binding, rolling_toggle, with_animation,
    };
    pub use rollkit_controls::{Toggle, ToggleStyle, toggle};
    pub use rollkit_layout::{Alignment, Angle, Frame, Shape, ZStack, zstack};
}
