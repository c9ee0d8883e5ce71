//! Debouncing as an explicit restart-on-input, fire-once task.
//!
//! [`Debouncer`] holds the pending value and decides which timer expiry may
//! commit it; [`schedule`] is the browser-side timer that reports expiry back.
//! Timers are never cancelled directly: a superseded ticket simply fires into
//! nothing.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Identifies one scheduled expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as pending and invalidate every earlier ticket.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Called when the timer for `ticket` elapses. Yields the pending value
    /// only for the latest ticket, and only once.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets become no-ops.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }
}

/// Run `on_elapsed(ticket)` after `delay_ms` on the browser event loop.
pub fn schedule<F>(ticket: DebounceTicket, delay_ms: u32, on_elapsed: F)
where
    F: FnOnce(DebounceTicket) + 'static,
{
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        on_elapsed(ticket);
    });
}
