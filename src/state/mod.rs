//! Client-side state containers.
//!
//! Each container is an MVI triple (state, intent, reducer) held in a
//! [`Store`]. [`AppState`] owns one store of each kind and performs the
//! transitions that touch more than one of them.

pub mod app;
pub mod cart;
pub mod mvi;
pub mod notifications;
pub mod order_flow;
pub mod payment;
pub mod session;
pub mod store;

pub use app::{AppState, OrderBuildError};
pub use store::Store;
