//! Geometry and the two-phase layout protocol.
//!
//! All values are logical points. A container first answers how large it
//! wants to be for a proposal ([`Layout::size_that_fits`]) and is then told
//! its final bounds, in which it places its children ([`Layout::place`]).

use core::fmt::Debug;

/// The axis, if any, along which a view grows to fill offered space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StretchAxis {
    /// Keeps its intrinsic size.
    #[default]
    None,
    /// Takes all offered width.
    Horizontal,
    /// Takes all offered height.
    Vertical,
    /// Takes everything offered.
    Both,
}

/// A child as seen by its container during layout.
///
/// Containers may ask the same child several times with different proposals.
pub trait SubView {
    /// The size the child takes for `proposal`.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// The child's stretch behaviour.
    fn stretch_axis(&self) -> StretchAxis;
}

/// A container layout algorithm.
pub trait Layout: Debug {
    /// The size the container takes for `proposal`, given its children.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// One rectangle per child, inside `bounds`.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;

    /// The container's own stretch behaviour.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

/// A point in the coordinate space of the root view.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, growing to the trailing edge.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A width and a height.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The empty size.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `true` if either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from its top-leading corner and size.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// A rectangle of `size` at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::zero(), size)
    }

    /// Top-leading corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Width and height.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Leading edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Trailing edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// The same rectangle moved to `origin`.
    #[must_use]
    pub const fn with_origin(self, origin: Point) -> Self {
        Self::new(origin, self.size)
    }

    /// `true` if `point` lies inside. The trailing and bottom edges are excluded.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x() && point.x < self.max_x() && point.y >= self.y() && point.y < self.max_y()
    }
}

/// What a container offers a child.
///
/// `None` asks for the ideal size in that dimension, `Some(f32::INFINITY)`
/// for the largest and any other value suggests a size the child may ignore.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Offered width.
    pub width: Option<f32>,
    /// Offered height.
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Asks for the ideal size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Creates a proposal.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Offers exactly `size`.
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::from_size(Size::new(10.0, 10.0));
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(9.9, 9.9)));
        assert!(!rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::zero().is_empty());
        assert!(Size::new(3.0, 0.0).is_empty());
        assert!(!Size::new(3.0, 1.0).is_empty());
    }
}
