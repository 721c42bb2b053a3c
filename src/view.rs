//! Modifier methods available on every view.
//!
//! ```ignore
//! use rollkit::prelude::*;
//!
//! "Loading"
//!     .opacity(0.5)
//!     .rotation(Angle::degrees(90.0))
//!     .max_width(f32::INFINITY)
//!     .on_tap(|| tracing::info!("tapped"));
//! ```

use rollkit_controls::{ToggleConfig, ToggleStyle};
use rollkit_core::{
    AnyView, Hook, Metadata, View,
    env::With,
    gesture::{Gesture, GestureObserver, TapGesture},
    handler::HandlerFn,
};
use rollkit_layout::{Alignment, Angle, ContentShape, Frame, Opacity, Rotation, Shape};

/// Extension trait adding the common modifiers to every view.
pub trait ViewExt: View + Sized {
    /// Makes `value` available to this view and its descendants.
    fn with<T: 'static>(self, value: T) -> With<Self, T> {
        With::new(self, value)
    }

    /// Erases the type of this view.
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }

    /// Draws this view with the given opacity, from `0.0` to `1.0`.
    fn opacity(self, opacity: f32) -> Metadata<Opacity> {
        Metadata::new(self, Opacity(opacity))
    }

    /// Rotates this view about its centre. Layout is unaffected.
    fn rotation(self, angle: Angle) -> Metadata<Rotation> {
        Metadata::new(self, Rotation(angle))
    }

    /// Sets the area that receives taps.
    fn content_shape(self, shape: Shape) -> Metadata<ContentShape> {
        Metadata::new(self, ContentShape(shape))
    }

    /// Runs `action` whenever `gesture` is recognised on this view.
    fn gesture<P: 'static>(
        self,
        gesture: impl Into<Gesture>,
        action: impl HandlerFn<P, ()>,
    ) -> Metadata<GestureObserver> {
        Metadata::new(self, GestureObserver::new(gesture, action))
    }

    /// Runs `action` on every single tap.
    fn on_tap<P: 'static>(self, action: impl HandlerFn<P, ()>) -> Metadata<GestureObserver> {
        self.gesture(TapGesture::new(), action)
    }

    /// Fixes the width of this view.
    fn width(self, width: f32) -> Frame {
        Frame::new(self).width(width)
    }

    /// Fixes the height of this view.
    fn height(self, height: f32) -> Frame {
        Frame::new(self).height(height)
    }

    /// Caps the width. `f32::INFINITY` takes all offered width.
    fn max_width(self, width: f32) -> Frame {
        Frame::new(self).max_width(width)
    }

    /// Caps the height. `f32::INFINITY` takes all offered height.
    fn max_height(self, height: f32) -> Frame {
        Frame::new(self).max_height(height)
    }

    /// Aligns this view inside a frame.
    fn alignment(self, alignment: Alignment) -> Frame {
        Frame::new(self).alignment(alignment)
    }

    /// Draws every [`Toggle`](rollkit_controls::Toggle) inside this view with `style`.
    fn toggle_style(self, style: impl ToggleStyle) -> With<Self, Hook<ToggleConfig>> {
        self.with(style.into_hook())
    }
}

impl<V: View> ViewExt for V {}
