//! Trailing-edge debounce for rapidly changing input.
//!
//! DESIGN
//! ======
//! [`DebounceGate`] is the pure core: every scheduled value gets a ticket and
//! only the newest ticket may fire. [`Debouncer`] wraps it with a
//! `gloo-timers` timeout in the browser. Replacing or dropping the timeout
//! cancels the pending callback, so superseding input and teardown both
//! cancel. Native builds keep the gate but arm no timer; [`Debouncer::flush`]
//! still delivers.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Ticketed holder for the latest pending value.
#[derive(Debug)]
pub struct DebounceGate<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for DebounceGate<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> DebounceGate<T> {
    /// Replace any pending value and return the ticket that may release it.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Release the pending value if `ticket` is still the newest one.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Release the pending value regardless of ticket.
    pub fn take(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

struct DebounceInner<T> {
    gate: DebounceGate<T>,
    #[cfg(feature = "csr")]
    timer: Option<gloo_timers::callback::Timeout>,
}

/// Timer-backed debouncer delivering the latest value to `emit` once input
/// has been quiet for `delay`.
pub struct Debouncer<T> {
    inner: Rc<RefCell<DebounceInner<T>>>,
    delay: Duration,
    emit: Rc<dyn Fn(T)>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

impl<T> Debouncer<T> {
    pub fn is_pending(&self) -> bool {
        self.inner.borrow().gate.is_pending()
    }
}

impl<T: 'static> Debouncer<T> {
    pub fn new(delay: Duration, emit: impl Fn(T) + 'static) -> Self {
        let inner = DebounceInner {
            gate: DebounceGate::default(),
            #[cfg(feature = "csr")]
            timer: None,
        };
        Self { inner: Rc::new(RefCell::new(inner)), delay, emit: Rc::new(emit) }
    }

    /// Record a new value and restart the quiescence window.
    pub fn push(&self, value: T) {
        let ticket = self.inner.borrow_mut().gate.schedule(value);
        #[cfg(feature = "csr")]
        {
            // The callback holds a weak handle so a parked timer never keeps
            // the debouncer alive.
            let inner = Rc::downgrade(&self.inner);
            let emit = Rc::clone(&self.emit);
            let millis = u32::try_from(self.delay.as_millis()).unwrap_or(u32::MAX);
            let timer = gloo_timers::callback::Timeout::new(millis, move || {
                let Some(inner) = inner.upgrade() else {
                    return;
                };
                let ready = inner.borrow_mut().gate.fire(ticket);
                if let Some(value) = ready {
                    emit(value);
                }
            });
            // Dropping the previous timeout clears it.
            self.inner.borrow_mut().timer = Some(timer);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ticket;
        }
    }

    /// Deliver the pending value immediately, if any.
    pub fn flush(&self) -> bool {
        let ready = {
            let mut inner = self.inner.borrow_mut();
            #[cfg(feature = "csr")]
            {
                inner.timer = None;
            }
            inner.gate.take()
        };
        match ready {
            Some(value) => {
                (self.emit)(value);
                true
            }
            None => false,
        }
    }

    /// Cancel any pending emission.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.gate.cancel();
        #[cfg(feature = "csr")]
        {
            inner.timer = None;
        }
    }
}
