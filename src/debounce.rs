//! Debounced Calls
//!
//! A single pending-timer slot: every new call cancels the timer before it,
//! and only a call that survives the whole quiet window runs.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `f` once `delay_ms` pass without another `call`
    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        let timeout = Timeout::new(self.delay_ms, f);
        *self.pending.borrow_mut() = Some(timeout);
    }

    /// Drop any pending call
    pub fn cancel(&self) {
        let timeout: Option<Timeout> = self.pending.borrow_mut().take();
        if let Some(t) = timeout {
            t.cancel();
        }
    }
}
