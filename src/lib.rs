//! Headless core of the Chicken Nation food-ordering client.
//!
//! State containers for cart, order flow, session, payment and
//! notifications; a typed client for the backend REST API; in-memory menu
//! search; on-device persistence; reverse geocoding; display formatting.

pub mod api;
pub mod app;
pub mod config;
pub mod format;
pub mod geocoding;
pub mod logging;
pub mod model;
pub mod scope;
pub mod search;
pub mod state;
pub mod storage;
