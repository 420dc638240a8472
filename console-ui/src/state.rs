use console_core::StateCell;
use dioxus::prelude::*;

/// Reactive signal as the home of view-model state, so components re-render
/// on every transition.
pub struct SignalCell<T: 'static>(pub Signal<T>);

impl<T: 'static> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SignalCell<T> {}

impl<T: 'static> StateCell<T> for SignalCell<T> {
    fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.read())
    }

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = self.0;
        let mut guard = signal.write();
        f(&mut guard)
    }
}
