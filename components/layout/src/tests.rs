//! Behaviour of frames and overlay stacks with fixed-size children.

use crate::{
    Alignment, FrameLayout, Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView,
    ZStackLayout,
};

/// A child that is always the same size, like an icon.
struct Fixed(Size);

impl SubView for Fixed {
    fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
        self.0
    }

    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

fn bounds(width: f32, height: f32) -> Rect {
    Rect::from_size(Size::new(width, height))
}

fn expanding(alignment: Alignment) -> FrameLayout {
    FrameLayout {
        max_width: Some(f32::INFINITY),
        alignment,
        ..FrameLayout::default()
    }
}

#[test]
fn expanding_frame_takes_the_offered_width() {
    let child = Fixed(Size::new(24.0, 16.0));
    let size = expanding(Alignment::Leading)
        .size_that_fits(ProposalSize::new(200.0, 100.0), &[&child]);
    assert_eq!(size, Size::new(200.0, 100.0));
}

#[test]
fn ideal_size_without_proposal_is_the_child() {
    let child = Fixed(Size::new(24.0, 16.0));
    let size = expanding(Alignment::Leading).size_that_fits(ProposalSize::UNSPECIFIED, &[&child]);
    assert_eq!(size, Size::new(24.0, 16.0));
}

#[test]
fn leading_and_trailing_frames_place_at_opposite_edges() {
    let child = Fixed(Size::new(24.0, 16.0));
    let leading = expanding(Alignment::Leading).place(bounds(200.0, 100.0), &[&child]);
    let trailing = expanding(Alignment::Trailing).place(bounds(200.0, 100.0), &[&child]);
    assert_eq!(leading[0].origin(), Point::new(0.0, 42.0));
    assert_eq!(trailing[0].origin(), Point::new(176.0, 42.0));
}

#[test]
fn top_and_bottom_frames_place_at_opposite_edges() {
    let child = Fixed(Size::new(24.0, 16.0));
    let top = FrameLayout {
        max_height: Some(f32::INFINITY),
        alignment: Alignment::Top,
        ..FrameLayout::default()
    };
    let bottom = FrameLayout {
        alignment: Alignment::Bottom,
        ..top
    };
    assert_eq!(top.place(bounds(100.0, 200.0), &[&child])[0].origin(), Point::new(38.0, 0.0));
    assert_eq!(
        bottom.place(bounds(100.0, 200.0), &[&child])[0].origin(),
        Point::new(38.0, 184.0)
    );
}

#[test]
fn frame_stretch_axis_follows_infinite_maximums() {
    assert_eq!(expanding(Alignment::Center).stretch_axis(), StretchAxis::Horizontal);
    assert_eq!(FrameLayout::default().stretch_axis(), StretchAxis::None);
}

#[test]
fn zstack_is_as_large_as_its_largest_child() {
    let on = Fixed(Size::new(16.0, 16.0));
    let off = Fixed(Size::new(24.0, 16.0));
    let size = ZStackLayout::default().size_that_fits(ProposalSize::UNSPECIFIED, &[&on, &off]);
    assert_eq!(size, Size::new(24.0, 16.0));
}

#[test]
fn zstack_centres_smaller_children() {
    let on = Fixed(Size::new(16.0, 16.0));
    let off = Fixed(Size::new(24.0, 16.0));
    let rects = ZStackLayout::default().place(bounds(24.0, 16.0), &[&on, &off]);
    assert_eq!(rects[0].origin(), Point::new(4.0, 0.0));
    assert_eq!(rects[1].origin(), Point::new(0.0, 0.0));
}

#[test]
fn empty_zstack_has_no_size() {
    let size = ZStackLayout::default().size_that_fits(ProposalSize::new(50.0, 50.0), &[]);
    assert_eq!(size, Size::zero());
}
