#![allow(clippy::multiple_crate_versions)]

//! Headless backend for rollkit.
//!
//! Turns view trees into laid-out [`RenderNode`] trees, animates visual
//! properties between frames and simulates taps. Used for tests and for
//! driving widgets without a window.
//!
//! ```ignore
//! let is_on = binding(true);
//! let mut host = HeadlessHost::new(Size::new(320.0, 44.0), move || {
//!     rolling_toggle(&is_on, "on", "off")
//! });
//! host.frame(Duration::ZERO)?;
//! host.tap(Point::new(10.0, 22.0));
//! ```

pub use crate::animator::{AnimatedValue, Animator, Channel};
pub use crate::host::HeadlessHost;
pub use crate::node::{NodeKind, RenderNode};
pub use crate::renderer::Renderer;

mod animator;
mod error;
mod host;
mod measure;
mod node;
mod renderer;

pub use error::RenderError;
