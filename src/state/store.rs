//! Observable single-writer container around a [`Reducer`].

use std::marker::PhantomData;

use tokio::sync::watch;

use crate::state::mvi::Reducer;

/// Holds one state value and applies intents through its reducer.
///
/// `dispatch` is the only write path. Readers either take a snapshot with
/// [`Store::get`] or follow changes through [`Store::subscribe`];
/// subscribers are woken only when a dispatch actually changes the state.
pub struct Store<R: Reducer> {
    tx: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            _reducer: PhantomData,
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> R::State {
        self.tx.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.tx.borrow())
    }

    /// Apply `intent`. Returns `true` when the state changed.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.tx.send_if_modified(|state| {
            let old = std::mem::take(state);
            let new = R::reduce(old.clone(), intent);
            let changed = new != old;
            *state = new;
            changed
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.tx.subscribe()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
