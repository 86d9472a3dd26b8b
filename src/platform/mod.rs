//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame vs. a virtual refresh clock)
//! - Input events
//! - The drawing surface

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub use headless::HeadlessLoop;

struct LoopControl {
    running: Cell<bool>,
    /// Cancels the callback currently scheduled with the host, if any
    cancel: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Handle to a repeating frame task.
///
/// Clones share the same task. Stopping cancels whatever callback is
/// pending, so nothing fires after `stop` returns.
#[derive(Clone)]
pub struct LoopHandle {
    inner: Rc<LoopControl>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LoopControl {
                running: Cell::new(true),
                cancel: RefCell::new(None),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Register how to cancel the callback that was just scheduled
    pub fn set_canceller(&self, cancel: impl FnOnce() + 'static) {
        *self.inner.cancel.borrow_mut() = Some(Box::new(cancel));
    }

    /// The pending callback has fired; there is nothing left to cancel
    pub fn clear_canceller(&self) {
        self.inner.cancel.borrow_mut().take();
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        let cancel = self.inner.cancel.borrow_mut().take();
        if let Some(cancel) = cancel {
            cancel();
        }
        log::info!("Frame loop stopped");
    }
}

impl std::fmt::Debug for LoopHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopHandle")
            .field("running", &self.is_running())
            .finish()
    }
}
