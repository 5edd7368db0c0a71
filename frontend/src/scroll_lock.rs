use log::warn;
use web_sys::window;

use crate::error::UiError;

/// Something whose scrolling can be switched off and back on.
pub trait ScrollSurface {
    fn set_suppressed(&self, suppressed: bool) -> Result<(), UiError>;
}

/// The page body, via `document.body.style.overflow`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn set_suppressed(&self, suppressed: bool) -> Result<(), UiError> {
        let body = window()
            .ok_or(UiError::NoWindow)?
            .document()
            .and_then(|document| document.body())
            .ok_or(UiError::NoBody)?;
        let value = if suppressed { "hidden" } else { "auto" };
        body.style()
            .set_property("overflow", value)
            .map_err(|e| UiError::Style {
                property: "overflow",
                reason: UiError::describe(&e),
            })
    }
}

/// Holds scrolling suppressed until dropped.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        if let Err(err) = surface.set_suppressed(true) {
            warn!("could not lock scroll: {}", err);
        }
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        if let Err(err) = self.surface.set_suppressed(false) {
            warn!("could not restore scroll: {}", err);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Records the last requested state and every call made.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) suppressed: Rc<Cell<bool>>,
        pub(crate) calls: Rc<RefCell<Vec<bool>>>,
    }

    impl ScrollSurface for RecordingSurface {
        fn set_suppressed(&self, suppressed: bool) -> Result<(), UiError> {
            self.suppressed.set(suppressed);
            self.calls.borrow_mut().push(suppressed);
            Ok(())
        }
    }

    struct BrokenSurface;

    impl ScrollSurface for BrokenSurface {
        fn set_suppressed(&self, _: bool) -> Result<(), UiError> {
            Err(UiError::NoBody)
        }
    }

    #[test]
    fn lock_suppresses_until_dropped() {
        let surface = RecordingSurface::default();
        let lock = ScrollLock::acquire(surface.clone());
        assert!(surface.suppressed.get());
        drop(lock);
        assert!(!surface.suppressed.get());
        assert_eq!(*surface.calls.borrow(), vec![true, false]);
    }

    #[test]
    fn lock_releases_during_unwind() {
        let surface = RecordingSurface::default();
        let inner = surface.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _lock = ScrollLock::acquire(inner);
            panic!("menu render failed");
        }));
        assert!(result.is_err());
        assert!(!surface.suppressed.get());
    }

    #[test]
    fn surface_errors_are_swallowed() {
        let lock = ScrollLock::acquire(BrokenSurface);
        drop(lock);
    }
}
