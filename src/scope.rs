//! Cancellation scopes for in-flight requests.
//!
//! A front-end opens a [`CancelScope`] when a view appears and cancels it
//! (or drops it) when the view goes away. Requests run through
//! [`ScopeHandle::run`] then resolve to `None` instead of delivering a
//! result nobody is waiting for.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

pub struct CancelScope {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
    label: &'static str,
}

impl CancelScope {
    pub fn new(label: &'static str) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
            label,
        }
    }

    /// Cancel every request bound to this scope.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::SeqCst) {
            tracing::debug!(scope = self.label, "Scope cancelled");
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Create a handle for sharing with request tasks.
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            cancelled: Arc::clone(&self.cancelled),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Drop for CancelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Lightweight handle for checking and awaiting cancellation.
#[derive(Clone)]
pub struct ScopeHandle {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScopeHandle {
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub async fn cancelled(&self) {
        // Register with Notify before reading the flag, otherwise a cancel
        // landing between the check and the await would be missed.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Drive `fut` unless the scope is cancelled first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}
