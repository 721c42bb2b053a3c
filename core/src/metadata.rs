//! Modifiers attached to a view.
//!
//! A modifier is a value wrapped around some content. Backends recognise the
//! modifiers they support by downcasting to `Metadata<T>`; the content is then
//! rendered with the modifier applied.

use core::any::type_name;

use crate::{AnyView, Environment, View};

/// Marker for types that can be carried as metadata.
pub trait MetadataKey: 'static {}

/// A modifier a backend must understand.
///
/// Unfolding a `Metadata` with [`View::body`] drops the modifier and logs a
/// warning; backends are expected to handle it before that happens.
#[derive(Debug)]
pub struct Metadata<T: MetadataKey> {
    /// The modified view.
    pub content: AnyView,
    /// The modifier.
    pub value: T,
}

impl<T: MetadataKey> Metadata<T> {
    /// Wraps `content` with `value`.
    pub fn new(content: impl View, value: T) -> Self {
        Self {
            content: AnyView::new(content),
            value,
        }
    }
}

impl<T: MetadataKey> View for Metadata<T> {
    fn body(self, _env: &Environment) -> impl View {
        tracing::warn!(metadata = type_name::<T>(), "metadata not handled by backend, dropping it");
        self.content
    }
}
