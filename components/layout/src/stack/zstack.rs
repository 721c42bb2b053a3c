//! Overlay stack: every child occupies the same region.

use rollkit_core::{AnyView, Environment, Native, NativeView, View, views::TupleViews};

use crate::{Layout, ProposalSize, Rect, Size, SubView, stack::Alignment};

/// Layout overlaying its children at a shared alignment.
///
/// The stack is as large as its largest child, clamped to the proposal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZStackLayout {
    /// Where smaller children sit inside the stack.
    pub alignment: Alignment,
}

fn finite_max(values: impl Iterator<Item = f32>) -> f32 {
    values
        .filter(|value| value.is_finite())
        .max_by(f32::total_cmp)
        .unwrap_or(0.0)
}

impl Layout for ZStackLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(proposal))
            .collect();
        let width = finite_max(sizes.iter().map(|size| size.width));
        let height = finite_max(sizes.iter().map(|size| size.height));
        Size::new(
            proposal.width.map_or(width, |limit| width.min(limit)),
            proposal.height.map_or(height, |limit| height.min(limit)),
        )
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let proposal = ProposalSize::exact(bounds.size());
        children
            .iter()
            .map(|child| {
                let measured = child.size_that_fits(proposal);
                let size = Size::new(
                    fit(measured.width, bounds.width()),
                    fit(measured.height, bounds.height()),
                );
                Rect::new(self.alignment.position(bounds, size), size)
            })
            .collect()
    }
}

fn fit(measured: f32, available: f32) -> f32 {
    if measured.is_infinite() {
        available
    } else {
        measured.min(available)
    }
}

/// Overlays its children, later children in front.
#[derive(Debug)]
pub struct ZStack {
    layout: ZStackLayout,
    contents: Vec<AnyView>,
}

impl ZStack {
    /// Creates a stack with an explicit alignment.
    pub fn new(alignment: Alignment, contents: impl TupleViews) -> Self {
        Self {
            layout: ZStackLayout { alignment },
            contents: contents.into_views(),
        }
    }

    /// Changes the alignment of the children.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.layout.alignment = alignment;
        self
    }

    /// Splits the stack into its layout and children.
    #[must_use]
    pub fn into_inner(self) -> (ZStackLayout, Vec<AnyView>) {
        (self.layout, self.contents)
    }
}

impl NativeView for ZStack {}

impl View for ZStack {
    fn body(self, _env: &Environment) -> impl View {
        Native(self)
    }
}

/// Overlays `contents`, centred.
pub fn zstack(contents: impl TupleViews) -> ZStack {
    ZStack::new(Alignment::Center, contents)
}
