//! Backend REST API wrappers.
//!
//! One method per endpoint on [`ApiClient`]. Each call issues a single
//! request, attaches the bearer token when a session is set and decodes
//! the body into the typed records of [`crate::model`]. No retries.

mod addresses;
mod auth;
mod catalog;
mod client;
mod error;
mod favorites;
mod loyalty;
mod orders;

use std::future::Future;

pub use client::ApiClient;
pub use error::ApiError;

use crate::scope::ScopeHandle;

/// Run an API call bound to `scope`.
///
/// Resolves to [`ApiError::Cancelled`] when the scope is cancelled before
/// the call finishes; the in-flight request is dropped.
pub async fn scoped<T>(
    scope: &ScopeHandle,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    scope.run(call).await.unwrap_or(Err(ApiError::Cancelled))
}
