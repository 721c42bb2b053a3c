//! Modifiers that change how content is drawn or hit-tested, not where it is
//! laid out.

use rollkit_core::metadata::MetadataKey;

/// A planar angle.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f32,
}

impl Angle {
    /// No rotation.
    pub const ZERO: Self = Self { degrees: 0.0 };

    /// An angle in degrees.
    #[must_use]
    pub const fn degrees(degrees: f32) -> Self {
        Self { degrees }
    }

    /// `turns` full revolutions.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn full_turns(turns: u32) -> Self {
        Self::degrees(360.0 * turns as f32)
    }

    /// The angle in degrees.
    #[must_use]
    pub const fn to_degrees(self) -> f32 {
        self.degrees
    }
}

/// Rotates content clockwise about its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation(pub Angle);

impl MetadataKey for Rotation {}

/// Multiplies the opacity of content. `0.0` is invisible, `1.0` unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(pub f32);

impl MetadataKey for Opacity {}

/// Shapes usable for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Shape {
    /// The whole bounding rectangle.
    #[default]
    Rectangle,
}

/// Replaces the area that receives taps.
///
/// Without it only visible content is hit; with [`Shape::Rectangle`] the
/// entire bounds of the content are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentShape(pub Shape);

impl MetadataKey for ContentShape {}
