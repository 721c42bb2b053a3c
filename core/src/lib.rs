//! Core building blocks shared by every rollkit crate.
//!
//! A view in rollkit is a plain value describing what should appear on screen.
//! Calling [`View::body`] unfolds a composite view into simpler ones until a
//! backend reaches primitives it knows how to draw: text, [`Native`] configs
//! and [`Metadata`] modifiers.
//!
//! Besides the view protocol this crate hosts the pieces a backend needs to
//! talk to widgets without knowing about them:
//!
//! - [`Environment`], a type map passed down the tree,
//! - [`Hook`], which lets an ancestor restyle a configurable view,
//! - [`gesture`] observers and [`handler`] objects for input,
//! - [`animation`] transactions recorded by [`with_animation`],
//! - [`layout`] geometry and the two-phase [`Layout`](layout::Layout) protocol.
//!
//! Reactive state comes from [`nami`]; the crate re-exports [`Binding`],
//! [`Signal`] and [`binding`] so downstream code can depend on one place.

#[macro_use]
mod macros;

pub mod animation;
pub mod env;
pub mod gesture;
pub mod handler;
pub mod layout;
pub mod metadata;
pub mod native;
pub mod view;
pub mod views;

pub use animation::{Animation, with_animation};
pub use env::Environment;
pub use metadata::Metadata;
pub use native::{Native, NativeView};
pub use view::{AnyView, Hook, View};

pub use nami;
pub use nami::{Binding, Signal, binding};
