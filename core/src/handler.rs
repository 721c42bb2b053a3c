//! Callable actions attached to views.
//!
//! Actions are stored as [`ActionObject`]s and invoked by a backend with the
//! environment of the view they were attached to. Plain closures become
//! handlers through [`HandlerFn`]: both `|| ...` and `|env: &Environment| ...`
//! are accepted.

use core::{any::type_name, fmt::Debug, marker::PhantomData};

use crate::Environment;

/// A boxed action producing no result.
pub type ActionObject = BoxHandler<()>;

/// Something a backend can invoke with an environment.
pub trait Handler<T>: 'static {
    /// Runs the handler.
    fn handle(&mut self, env: &Environment) -> T;
}

impl<T> Debug for dyn Handler<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(type_name::<Self>())
    }
}

/// A boxed handler with dynamic dispatch.
pub type BoxHandler<T> = Box<dyn Handler<T>>;

impl<T: 'static> Handler<T> for BoxHandler<T> {
    fn handle(&mut self, env: &Environment) -> T {
        self.as_mut().handle(env)
    }
}

/// Closures usable as handlers. `P` describes what the closure takes.
pub trait HandlerFn<P, T>: 'static {
    /// Calls the closure, supplying what it asks for from `env`.
    fn handle_inner(&mut self, env: &Environment) -> T;
}

impl<F, R> HandlerFn<(), R> for F
where
    F: FnMut() -> R + 'static,
{
    fn handle_inner(&mut self, _env: &Environment) -> R {
        self()
    }
}

impl<F, R> HandlerFn<(Environment,), R> for F
where
    F: FnMut(&Environment) -> R + 'static,
{
    fn handle_inner(&mut self, env: &Environment) -> R {
        self(env)
    }
}

struct IntoHandler<H, P, T> {
    handler: H,
    _marker: PhantomData<fn(P) -> T>,
}

impl<H, P, T> Handler<T> for IntoHandler<H, P, T>
where
    H: HandlerFn<P, T>,
    P: 'static,
    T: 'static,
{
    fn handle(&mut self, env: &Environment) -> T {
        self.handler.handle_inner(env)
    }
}

/// Converts a closure into a [`Handler`].
pub fn into_handler<H, P, T>(handler: H) -> impl Handler<T>
where
    H: HandlerFn<P, T>,
    P: 'static,
    T: 'static,
{
    IntoHandler {
        handler,
        _marker: PhantomData,
    }
}

/// Boxes a closure as an [`ActionObject`].
pub fn action<H, P>(handler: H) -> ActionObject
where
    H: HandlerFn<P, ()>,
    P: 'static,
{
    Box::new(into_handler(handler))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn plain_closure_runs_on_every_call() {
        let hits = Rc::new(Cell::new(0));
        let mut handler = action({
            let hits = Rc::clone(&hits);
            move || hits.set(hits.get() + 1)
        });
        let env = Environment::new();
        handler.handle(&env);
        handler.handle(&env);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn closure_can_read_the_environment() {
        let seen = Rc::new(Cell::new(0_u8));
        let mut handler = action({
            let seen = Rc::clone(&seen);
            move |env: &Environment| seen.set(*env.get::<u8>().unwrap_or(&0))
        });
        handler.handle(&Environment::new().with(9_u8));
        assert_eq!(seen.get(), 9);
    }
}
