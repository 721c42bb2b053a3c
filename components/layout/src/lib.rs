//! Layout building blocks for rollkit.
//!
//! - [`stack::Alignment`] and the overlaying [`stack::ZStack`],
//! - [`frame::Frame`], which sizes and aligns a single child,
//! - [`transform`] modifiers (rotation, opacity, hit-test shape) that change
//!   how content is drawn without changing where it is laid out.
//!
//! ```ignore
//! zstack(("front", "back"))
//!     .max_width(f32::INFINITY)
//!     .alignment(Alignment::Leading)
//! ```

pub use rollkit_core::layout::*;

pub mod frame;
pub mod stack;
pub mod transform;

pub use frame::{Frame, FrameLayout};
pub use stack::{Alignment, HorizontalAlignment, VerticalAlignment, ZStack, ZStackLayout, zstack};
pub use transform::{Angle, ContentShape, Opacity, Rotation, Shape};

#[cfg(test)]
mod tests;
