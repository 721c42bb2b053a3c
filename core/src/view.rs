//! The view protocol and its type-erased form.
//!
//! [`View`] is implemented by everything that can appear in the tree. Views are
//! consumed when they are rendered: `body` takes `self` and returns the next,
//! simpler layer. Composite widgets are therefore cheap to rebuild; a backend
//! calls the root builder again whenever it needs a fresh tree.

use core::any::{Any, TypeId, type_name};
use core::fmt::{self, Debug};
use std::rc::Rc;

use crate::{Environment, layout::StretchAxis};

/// A description of a piece of user interface.
pub trait View: 'static {
    /// Unfolds this view into the view it is made of.
    fn body(self, env: &Environment) -> impl View;

    /// Which axis this view stretches along when offered extra space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }

    /// Splits this view into its ordered children.
    ///
    /// Tuples and [`Group`](crate::views::Group) return their elements, `()` returns
    /// nothing. Every other view is a single child and hands itself back as `Err`.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` when the view is not a container of sibling views.
    fn into_subviews(self) -> Result<Vec<AnyView>, Self>
    where
        Self: Sized,
    {
        Err(self)
    }
}

impl View for () {
    fn body(self, _env: &Environment) -> impl View {}

    fn into_subviews(self) -> Result<Vec<AnyView>, Self> {
        Ok(Vec::new())
    }
}

impl View for &'static str {
    fn body(self, _env: &Environment) -> impl View {
        self
    }
}

impl View for String {
    fn body(self, _env: &Environment) -> impl View {
        self
    }
}

trait AnyViewImpl {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn type_name(&self) -> &'static str;
    fn body(self: Box<Self>, env: &Environment) -> AnyView;
    fn stretch_axis(&self) -> StretchAxis;
    fn into_subviews(self: Box<Self>) -> Result<Vec<AnyView>, AnyView>;
}

impl<V: View> AnyViewImpl for V {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        type_name::<V>()
    }

    fn body(self: Box<Self>, env: &Environment) -> AnyView {
        AnyView::new(View::body(*self, env))
    }

    fn stretch_axis(&self) -> StretchAxis {
        View::stretch_axis(self)
    }

    fn into_subviews(self: Box<Self>) -> Result<Vec<AnyView>, AnyView> {
        View::into_subviews(*self).map_err(AnyView::new)
    }
}

/// A type-erased view.
///
/// Backends walk trees of `AnyView`, testing for the primitives they support
/// with [`downcast`](Self::downcast) and unfolding everything else with
/// [`View::body`].
pub struct AnyView(Box<dyn AnyViewImpl>);

impl Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyView({})", self.type_name())
    }
}

impl Default for AnyView {
    fn default() -> Self {
        Self::new(())
    }
}

impl AnyView {
    /// Erases the type of `view`. Erasing an `AnyView` again is a no-op.
    pub fn new<V: View>(view: V) -> Self {
        let mut slot = Some(view);
        if let Some(erased) = (&mut slot as &mut dyn Any).downcast_mut::<Option<Self>>()
            && let Some(inner) = erased.take()
        {
            return inner;
        }
        slot.map_or_else(Self::default, |view| Self(Box::new(view)))
    }

    /// Returns `true` if the erased view is a `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    /// Returns the [`TypeId`] of the erased view.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    /// Returns the type name of the erased view, useful in logs.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    /// Borrows the erased view as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Recovers the concrete view.
    ///
    /// # Errors
    ///
    /// Hands the view back unchanged if it is not a `T`.
    pub fn downcast<T: 'static>(self) -> Result<Box<T>, Self> {
        if self.is::<T>() {
            self.0
                .into_any()
                .downcast::<T>()
                .map_err(|_| unreachable!("type checked before downcast"))
        } else {
            Err(self)
        }
    }

    /// Splits the erased view into its ordered children.
    ///
    /// A single view that is not a container yields a one-element vector.
    #[must_use]
    pub fn into_subviews(self) -> Vec<Self> {
        match self.0.into_subviews() {
            Ok(children) => children,
            Err(single) => vec![single],
        }
    }
}

impl View for AnyView {
    fn body(self, env: &Environment) -> impl View {
        self.0.body(env)
    }

    fn stretch_axis(&self) -> StretchAxis {
        self.0.stretch_axis()
    }

    fn into_subviews(self) -> Result<Vec<AnyView>, Self> {
        self.0.into_subviews()
    }
}

/// A view wrapping a configuration struct. Generated by [`configurable!`](crate::configurable).
pub trait ConfigurableView: View {
    /// The configuration this view carries.
    type Config: ViewConfiguration;
    /// Consumes the view, returning its configuration.
    fn config(self) -> Self::Config;
}

/// A configuration that can be turned back into its view.
pub trait ViewConfiguration: 'static {
    /// The view produced from this configuration.
    type View: View;
    /// Builds the default view for this configuration.
    fn render(self) -> Self::View;
}

/// Replaces how a configurable view is drawn.
///
/// A `Hook<C>` stored in the [`Environment`] intercepts every view whose
/// configuration type is `C` below the point where it was installed. Styles
/// are implemented this way.
pub struct Hook<C>(Rc<dyn Fn(&Environment, C) -> AnyView>);

impl<C> Clone for Hook<C> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<C> Debug for Hook<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

impl<C: ViewConfiguration> Hook<C> {
    /// Wraps a function building a replacement view from the configuration.
    pub fn new<V, F>(f: F) -> Self
    where
        V: View,
        F: Fn(&Environment, C) -> V + 'static,
    {
        Self(Rc::new(move |env, config| AnyView::new(f(env, config))))
    }

    /// Builds the replacement view.
    ///
    /// The hook is removed from the environment seen by the replacement, so a
    /// style may fall back to the plain view of the same type without looping.
    pub fn apply(&self, env: &Environment, config: C) -> AnyView {
        let mut inner = env.clone();
        inner.remove::<Self>();
        let view = (self.0)(&inner, config);
        AnyView::new(crate::Metadata::new(view, inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting;

    impl View for Greeting {
        fn body(self, _env: &Environment) -> impl View {
            "hello"
        }
    }

    #[test]
    fn erasing_twice_keeps_the_inner_type() {
        let view = AnyView::new(AnyView::new(Greeting));
        assert!(view.is::<Greeting>());
    }

    #[test]
    fn downcast_returns_the_view_on_mismatch() {
        let view = AnyView::new(Greeting);
        let view = view.downcast::<&'static str>().unwrap_err();
        assert!(view.downcast::<Greeting>().is_ok());
    }

    #[test]
    fn body_unfolds_one_layer() {
        let env = Environment::new();
        let body = AnyView::new(Greeting).body(&env);
        let body = AnyView::new(body);
        assert_eq!(body.downcast_ref::<&'static str>(), Some(&"hello"));
    }

    #[test]
    fn unit_has_no_subviews() {
        assert!(AnyView::default().into_subviews().is_empty());
    }

    #[test]
    fn plain_view_is_its_own_single_subview() {
        let children = AnyView::new(Greeting).into_subviews();
        assert_eq!(children.len(), 1);
        assert!(children[0].is::<Greeting>());
    }
}
