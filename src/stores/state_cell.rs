use dioxus::prelude::*;

/// Shared, mutable handle to view state that async tasks can hold across awaits.
///
/// Components use a Dioxus `Signal`; tests use `Rc<RefCell<_>>`.
pub trait StateCell<T>: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut guard = signal.write();
        f(&mut guard)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.peek())
    }
}

#[cfg(test)]
impl<T: 'static> StateCell<T> for std::rc::Rc<std::cell::RefCell<T>> {
    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
