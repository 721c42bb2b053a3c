//! Controls for rollkit.
//!
//! Only the boolean [`Toggle`] lives here. Its look is decided by the
//! backend unless an ancestor installs a [`ToggleStyle`].

pub mod toggle;
pub use toggle::{Toggle, ToggleConfig, ToggleStyle, toggle};
