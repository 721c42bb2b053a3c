//! Size constraints and alignment for a single child.

use rollkit_core::{AnyView, Environment, Native, NativeView, View};

use crate::{Layout, ProposalSize, Rect, Size, StretchAxis, SubView, stack::Alignment};

/// Layout that clamps what its child is offered and aligns the result.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameLayout {
    /// Lower bound for the width.
    pub min_width: Option<f32>,
    /// Preferred width, used instead of the parent's proposal.
    pub ideal_width: Option<f32>,
    /// Upper bound for the width. `f32::INFINITY` takes every offered point.
    pub max_width: Option<f32>,
    /// Lower bound for the height.
    pub min_height: Option<f32>,
    /// Preferred height, used instead of the parent's proposal.
    pub ideal_height: Option<f32>,
    /// Upper bound for the height. `f32::INFINITY` takes every offered point.
    pub max_height: Option<f32>,
    /// Where the child sits inside the frame.
    pub alignment: Alignment,
}

fn clamp(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    value
        .max(min.unwrap_or(f32::NEG_INFINITY))
        .min(max.unwrap_or(f32::INFINITY))
}

impl FrameLayout {
    fn expands_width(&self) -> bool {
        self.max_width.is_some_and(f32::is_infinite)
    }

    fn expands_height(&self) -> bool {
        self.max_height.is_some_and(f32::is_infinite)
    }

    fn child_proposal(&self, width: Option<f32>, height: Option<f32>) -> ProposalSize {
        ProposalSize {
            width: self
                .ideal_width
                .or(width)
                .map(|w| clamp(w, self.min_width, self.max_width)),
            height: self
                .ideal_height
                .or(height)
                .map(|h| clamp(h, self.min_height, self.max_height)),
        }
    }
}

impl Layout for FrameLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let child = children.first().map_or(Size::zero(), |child| {
            child.size_that_fits(self.child_proposal(proposal.width, proposal.height))
        });

        let width = clamp(
            self.ideal_width.unwrap_or(child.width),
            self.min_width,
            self.max_width,
        );
        let height = clamp(
            self.ideal_height.unwrap_or(child.height),
            self.min_height,
            self.max_height,
        );

        Size::new(
            proposal.width.unwrap_or(width),
            proposal.height.unwrap_or(height),
        )
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        children
            .first()
            .map(|child| {
                let proposal = self.child_proposal(Some(bounds.width()), Some(bounds.height()));
                let proposal = ProposalSize {
                    width: proposal.width.map(|w| w.min(bounds.width())),
                    height: proposal.height.map(|h| h.min(bounds.height())),
                };
                let measured = child.size_that_fits(proposal);
                let size = Size::new(
                    if measured.width.is_infinite() { bounds.width() } else { measured.width },
                    if measured.height.is_infinite() { bounds.height() } else { measured.height },
                );
                vec![Rect::new(self.alignment.position(bounds, size), size)]
            })
            .unwrap_or_default()
    }

    fn stretch_axis(&self) -> StretchAxis {
        match (self.expands_width(), self.expands_height()) {
            (true, true) => StretchAxis::Both,
            (true, false) => StretchAxis::Horizontal,
            (false, true) => StretchAxis::Vertical,
            (false, false) => StretchAxis::None,
        }
    }
}

/// A view wrapping one child in a [`FrameLayout`].
#[derive(Debug)]
pub struct Frame {
    layout: FrameLayout,
    content: AnyView,
}

impl Frame {
    /// Wraps `content` in an unconstrained, centred frame.
    pub fn new(content: impl View) -> Self {
        Self {
            layout: FrameLayout::default(),
            content: AnyView::new(content),
        }
    }

    /// Sets where the child sits inside the frame.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    /// Sets the preferred width.
    #[must_use]
    pub const fn width(mut self, width: f32) -> Self {
        self.layout.ideal_width = Some(width);
        self
    }

    /// Sets the preferred height.
    #[must_use]
    pub const fn height(mut self, height: f32) -> Self {
        self.layout.ideal_height = Some(height);
        self
    }

    /// Sets the minimum width.
    #[must_use]
    pub const fn min_width(mut self, width: f32) -> Self {
        self.layout.min_width = Some(width);
        self
    }

    /// Sets the maximum width.
    #[must_use]
    pub const fn max_width(mut self, width: f32) -> Self {
        self.layout.max_width = Some(width);
        self
    }

    /// Sets the minimum height.
    #[must_use]
    pub const fn min_height(mut self, height: f32) -> Self {
        self.layout.min_height = Some(height);
        self
    }

    /// Sets the maximum height.
    #[must_use]
    pub const fn max_height(mut self, height: f32) -> Self {
        self.layout.max_height = Some(height);
        self
    }

    /// The layout of this frame.
    #[must_use]
    pub const fn layout(&self) -> &FrameLayout {
        &self.layout
    }

    /// Splits the frame into its layout and child.
    #[must_use]
    pub fn into_inner(self) -> (FrameLayout, AnyView) {
        (self.layout, self.content)
    }
}

impl NativeView for Frame {
    fn stretch_axis(&self) -> StretchAxis {
        Layout::stretch_axis(&self.layout)
    }
}

impl View for Frame {
    fn body(self, _env: &Environment) -> impl View {
        Native(self)
    }

    fn stretch_axis(&self) -> StretchAxis {
        Layout::stretch_axis(&self.layout)
    }
}
