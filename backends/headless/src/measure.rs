//! Layout pass over a [`RenderNode`] tree.
//!
//! Text measures 8pt per character by 16pt, a switch track is 51 by 31.
//! Visual transforms take exactly the space of their child.

use rollkit_layout::{Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView};

use crate::node::{NodeKind, RenderNode};

const CHAR_WIDTH: f32 = 8.0;
const LINE_HEIGHT: f32 = 16.0;
const SWITCH_SIZE: Size = Size::new(51.0, 31.0);
const SWITCH_SPACING: f32 = 8.0;

impl SubView for RenderNode {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        match &self.kind {
            NodeKind::Empty => Size::zero(),
            NodeKind::Text(text) => {
                #[allow(clippy::cast_precision_loss)]
                let width = text.chars().count() as f32 * CHAR_WIDTH;
                Size::new(width, LINE_HEIGHT)
            }
            NodeKind::Switch { .. } => {
                let label = self.children.first().map_or(Size::zero(), |label| {
                    label.size_that_fits(ProposalSize::UNSPECIFIED)
                });
                let spacing = if label.width > 0.0 { SWITCH_SPACING } else { 0.0 };
                Size::new(
                    label.width + spacing + SWITCH_SIZE.width,
                    label.height.max(SWITCH_SIZE.height),
                )
            }
            NodeKind::Stack(layout) => layout.size_that_fits(proposal, &self.subviews()),
            NodeKind::Frame(layout) => layout.size_that_fits(proposal, &self.subviews()),
            NodeKind::Opacity { .. }
            | NodeKind::Rotation { .. }
            | NodeKind::ContentShape(_)
            | NodeKind::Tap { .. } => self
                .children
                .first()
                .map_or(Size::zero(), |child| child.size_that_fits(proposal)),
        }
    }

    fn stretch_axis(&self) -> StretchAxis {
        match &self.kind {
            NodeKind::Frame(layout) => layout.stretch_axis(),
            NodeKind::Opacity { .. }
            | NodeKind::Rotation { .. }
            | NodeKind::ContentShape(_)
            | NodeKind::Tap { .. } => self
                .children
                .first()
                .map_or(StretchAxis::None, SubView::stretch_axis),
            _ => StretchAxis::None,
        }
    }
}

impl RenderNode {
    fn subviews(&self) -> Vec<&dyn SubView> {
        self.children
            .iter()
            .map(|child| child as &dyn SubView)
            .collect()
    }

    /// Assigns final frames to this node and its descendants.
    pub(crate) fn place(&mut self, bounds: Rect) {
        self.frame = bounds;
        let rects = match &self.kind {
            NodeKind::Empty | NodeKind::Text(_) => return,
            NodeKind::Switch { .. } => {
                let Some(label) = self.children.first() else {
                    return;
                };
                let size = label.size_that_fits(ProposalSize::UNSPECIFIED);
                let origin = Point::new(
                    bounds.x(),
                    bounds.y() + (bounds.height() - size.height) / 2.0,
                );
                vec![Rect::new(origin, size)]
            }
            NodeKind::Stack(layout) => layout.place(bounds, &self.subviews()),
            NodeKind::Frame(layout) => layout.place(bounds, &self.subviews()),
            NodeKind::Opacity { .. }
            | NodeKind::Rotation { .. }
            | NodeKind::ContentShape(_)
            | NodeKind::Tap { .. } => vec![bounds; self.children.len()],
        };

        for (child, rect) in self.children.iter_mut().zip(rects) {
            child.place(rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use rollkit_core::Environment;
    use rollkit_layout::{Alignment, Frame, zstack};

    use super::*;
    use crate::Renderer;

    fn laid_out(view: impl rollkit_core::View, size: Size) -> RenderNode {
        let mut node = Renderer::new().render(&Environment::new(), view).unwrap();
        node.place(Rect::from_size(size));
        node
    }

    #[test]
    fn text_measures_by_character() {
        let node = laid_out(
            Frame::new("abcd").alignment(Alignment::TopLeading),
            Size::new(200.0, 100.0),
        );
        assert_eq!(
            node.text_frame("abcd"),
            Some(Rect::new(Point::zero(), Size::new(32.0, 16.0)))
        );
    }

    #[test]
    fn expanding_frame_pushes_content_to_the_trailing_edge() {
        let view = Frame::new(zstack(("on", "off")))
            .max_width(f32::INFINITY)
            .alignment(Alignment::Trailing);
        let node = laid_out(view, Size::new(200.0, 40.0));
        let off = node.text_frame("off").unwrap();
        assert!((off.max_x() - 200.0).abs() < f32::EPSILON);
        assert!((off.y() - 12.0).abs() < f32::EPSILON);
    }

    #[test]
    fn zstack_centres_smaller_children() {
        let node = laid_out(
            Frame::new(zstack(("on", "off"))).alignment(Alignment::TopLeading),
            Size::new(200.0, 40.0),
        );
        let on = node.text_frame("on").unwrap();
        let off = node.text_frame("off").unwrap();
        assert!((on.center().x - off.center().x).abs() < f32::EPSILON);
    }
}
