//! Ordered collections of sibling views.

use crate::{AnyView, Environment, View};

/// A fixed, ordered set of views, typically written as a tuple.
///
/// ```ignore
/// zstack(("front", "back"));
/// ```
pub trait TupleViews {
    /// Erases every element, preserving order.
    fn into_views(self) -> Vec<AnyView>;
}

impl TupleViews for () {
    fn into_views(self) -> Vec<AnyView> {
        Vec::new()
    }
}

impl TupleViews for Vec<AnyView> {
    fn into_views(self) -> Vec<AnyView> {
        self
    }
}

impl<V: View, const N: usize> TupleViews for [V; N] {
    fn into_views(self) -> Vec<AnyView> {
        self.into_iter().map(AnyView::new).collect()
    }
}

macro_rules! impl_tuple_views {
    ($($ty:ident),*) => {
        #[allow(non_snake_case)]
        impl<$($ty: View,)*> TupleViews for ($($ty,)*) {
            fn into_views(self) -> Vec<AnyView> {
                let ($($ty,)*) = self;
                vec![$(AnyView::new($ty),)*]
            }
        }

        impl<$($ty: View,)*> View for ($($ty,)*) {
            fn body(self, _env: &Environment) -> impl View {
                Group::new(self)
            }

            fn into_subviews(self) -> Result<Vec<AnyView>, Self> {
                Ok(self.into_views())
            }
        }
    };
}

tuples!(impl_tuple_views);

/// Siblings with no layout of their own.
///
/// A group is what a tuple unfolds into. Backends lay its children out as if
/// they were written directly in the parent container.
#[derive(Debug, Default)]
pub struct Group(Vec<AnyView>);

impl Group {
    /// Collects `views` into a group.
    pub fn new(views: impl TupleViews) -> Self {
        Self(views.into_views())
    }

    /// Returns the children of the group.
    #[must_use]
    pub fn into_inner(self) -> Vec<AnyView> {
        self.0
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl View for Group {
    fn body(self, _env: &Environment) -> impl View {
        tracing::warn!(children = self.0.len(), "group unfolded outside a container");
    }

    fn into_subviews(self) -> Result<Vec<AnyView>, Self> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_keep_their_order() {
        let views = ("first", "second", "third").into_views();
        let names: Vec<_> = views
            .iter()
            .filter_map(|view| view.downcast_ref::<&'static str>().copied())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn erased_tuple_splits_into_subviews() {
        let label = AnyView::new(("on", "off"));
        assert_eq!(label.into_subviews().len(), 2);
    }

    #[test]
    fn erased_group_splits_into_subviews() {
        let label = AnyView::new(Group::new(["a", "b", "c"]));
        assert_eq!(label.into_subviews().len(), 3);
    }
}
