//! Reducer primitives shared by every client-side store.
//!
//! A store owns one [`StoreState`] value. Front-ends never mutate it; they
//! send an [`Intent`] and the store's [`Reducer`] computes the next value.
//!
//! ```text
//! front-end ── Intent ──→ Reducer::reduce(state, intent) ──→ new state
//!     ↑                                                        │
//!     └──────────────── watch::Receiver ←──────────────────────┘
//! ```

/// Something that happened: a customer action or an API outcome.
pub trait Intent: Send + 'static {}

/// Value held by a store. `PartialEq` lets the store skip notifying
/// subscribers when a reduction changes nothing.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Pure transition function for one store.
pub trait Reducer {
    type State: StoreState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Apply `intents` in order.
    fn reduce_all(state: Self::State, intents: impl IntoIterator<Item = Self::Intent>) -> Self::State {
        intents.into_iter().fold(state, Self::reduce)
    }
}
