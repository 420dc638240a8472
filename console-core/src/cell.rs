use std::cell::RefCell;
use std::rc::Rc;

/// Shared, single-threaded home of a view model's state.
///
/// The browser UI backs this with a reactive signal; tests use
/// `Rc<RefCell<_>>`. Closures passed here must not await, so state is never
/// borrowed across a suspension point.
pub trait StateCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
