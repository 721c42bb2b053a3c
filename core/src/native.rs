//! Views drawn by the backend itself.

use core::any::type_name;

use crate::{Environment, View, layout::StretchAxis};

/// A configuration handed to the backend unchanged.
///
/// # Panics
///
/// Unfolding a `Native` with [`View::body`] panics: a backend that reaches it
/// without recognising the configuration has no way to draw it.
#[derive(Debug)]
pub struct Native<T: NativeView>(pub T);

impl<T: 'static + NativeView> View for Native<T> {
    #[allow(unreachable_code, clippy::needless_return)]
    fn body(self, _env: &Environment) -> impl View {
        panic!("native view {} reached a backend that cannot draw it", type_name::<T>());
        return;
    }

    fn stretch_axis(&self) -> StretchAxis {
        NativeView::stretch_axis(&self.0)
    }
}

/// Layout hints for configurations drawn by the backend.
pub trait NativeView {
    /// Which axis the backend should stretch this view along.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}
