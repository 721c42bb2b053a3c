//! Alignment and overlay stacks.

mod zstack;

pub use zstack::{ZStack, ZStackLayout, zstack};

use crate::{Point, Rect, Size};

/// Horizontal placement of a child inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Against the leading edge.
    Leading,
    /// Centred.
    #[default]
    Center,
    /// Against the trailing edge.
    Trailing,
}

/// Vertical placement of a child inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Against the top edge.
    Top,
    /// Centred.
    #[default]
    Center,
    /// Against the bottom edge.
    Bottom,
}

/// Two-dimensional alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Top edge, leading edge.
    TopLeading,
    /// Top edge, centred horizontally.
    Top,
    /// Top edge, trailing edge.
    TopTrailing,
    /// Leading edge, centred vertically.
    Leading,
    /// Centred on both axes.
    #[default]
    Center,
    /// Trailing edge, centred vertically.
    Trailing,
    /// Bottom edge, leading edge.
    BottomLeading,
    /// Bottom edge, centred horizontally.
    Bottom,
    /// Bottom edge, trailing edge.
    BottomTrailing,
}

impl Alignment {
    /// The horizontal component.
    #[must_use]
    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeading | Self::Leading | Self::BottomLeading => HorizontalAlignment::Leading,
            Self::Top | Self::Center | Self::Bottom => HorizontalAlignment::Center,
            Self::TopTrailing | Self::Trailing | Self::BottomTrailing => {
                HorizontalAlignment::Trailing
            }
        }
    }

    /// The vertical component.
    #[must_use]
    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeading | Self::Top | Self::TopTrailing => VerticalAlignment::Top,
            Self::Leading | Self::Center | Self::Trailing => VerticalAlignment::Center,
            Self::BottomLeading | Self::Bottom | Self::BottomTrailing => VerticalAlignment::Bottom,
        }
    }

    /// Origin of a child of `size` aligned inside `bounds`.
    #[must_use]
    pub fn position(self, bounds: Rect, size: Size) -> Point {
        let x = match self.horizontal() {
            HorizontalAlignment::Leading => bounds.x(),
            HorizontalAlignment::Center => bounds.x() + (bounds.width() - size.width) / 2.0,
            HorizontalAlignment::Trailing => bounds.max_x() - size.width,
        };
        let y = match self.vertical() {
            VerticalAlignment::Top => bounds.y(),
            VerticalAlignment::Center => bounds.y() + (bounds.height() - size.height) / 2.0,
            VerticalAlignment::Bottom => bounds.max_y() - size.height,
        };
        Point::new(x, y)
    }
}
