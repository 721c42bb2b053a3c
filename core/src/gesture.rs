//! Gesture descriptors and the observer modifier that reacts to them.

use crate::{
    Environment,
    handler::{ActionObject, Handler, HandlerFn, action},
    metadata::MetadataKey,
};

/// A tap that must happen `count` times in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct TapGesture {
    /// Consecutive taps required.
    pub count: u32,
}

impl TapGesture {
    /// A single tap.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 1 }
    }
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

/// Gestures a backend can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Gesture {
    /// See [`TapGesture`].
    Tap(TapGesture),
}

impl From<TapGesture> for Gesture {
    fn from(value: TapGesture) -> Self {
        Self::Tap(value)
    }
}

/// Runs an action when its gesture is recognised on the content.
#[derive(Debug)]
pub struct GestureObserver {
    gesture: Gesture,
    action: ActionObject,
}

impl MetadataKey for GestureObserver {}

impl GestureObserver {
    /// Observes `gesture`, running `action` each time it is recognised.
    pub fn new<P: 'static>(gesture: impl Into<Gesture>, action_fn: impl HandlerFn<P, ()>) -> Self {
        Self {
            gesture: gesture.into(),
            action: action(action_fn),
        }
    }

    /// The observed gesture.
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Runs the action once.
    pub fn fire(&mut self, env: &Environment) {
        tracing::trace!(gesture = ?self.gesture, "gesture recognised");
        self.action.handle(env);
    }
}
