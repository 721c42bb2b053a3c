//! A type-indexed map carried down the view tree.

use core::any::{Any, TypeId, type_name};
use core::fmt::{self, Debug};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::{Metadata, View, metadata::MetadataKey};

/// Values shared with every descendant of the view they were installed on.
///
/// Each type is stored at most once. Cloning is cheap: entries are reference
/// counted and only the map itself is copied.
#[derive(Clone, Default)]
pub struct Environment {
    map: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("entries", &self.map.len())
            .finish()
    }
}

impl MetadataKey for Environment {}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value`, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        tracing::trace!(ty = type_name::<T>(), "environment insert");
        self.map.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Looks up the value of type `T`.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Removes the value of type `T`, if present.
    pub fn remove<T: 'static>(&mut self) {
        self.map.remove(&TypeId::of::<T>());
    }

    /// Returns `true` if a value of type `T` is present.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.map.contains_key(&TypeId::of::<T>())
    }
}

/// Installs a value into the environment of its content.
#[derive(Debug)]
pub struct With<V, T> {
    content: V,
    value: T,
}

impl<V, T> With<V, T> {
    /// Creates a view that makes `value` visible to `content` and its descendants.
    pub const fn new(content: V, value: T) -> Self {
        Self { content, value }
    }
}

impl<V: View, T: 'static> View for With<V, T> {
    fn body(self, env: &Environment) -> impl View {
        let env = env.clone().with(self.value);
        Metadata::new(self.content, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Accent(u32);

    #[test]
    fn insert_replaces_previous_value() {
        let mut env = Environment::new();
        env.insert(Accent(1));
        env.insert(Accent(2));
        assert_eq!(env.get::<Accent>(), Some(&Accent(2)));
    }

    #[test]
    fn clones_do_not_share_later_inserts() {
        let parent = Environment::new().with(Accent(1));
        let child = parent.clone().with(Accent(7));
        assert_eq!(parent.get::<Accent>(), Some(&Accent(1)));
        assert_eq!(child.get::<Accent>(), Some(&Accent(7)));
    }

    #[test]
    fn remove_forgets_the_value() {
        let mut env = Environment::new().with(Accent(3));
        env.remove::<Accent>();
        assert!(!env.contains::<Accent>());
    }
}
