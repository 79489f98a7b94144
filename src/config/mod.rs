//! Client configuration: API endpoint, timeouts, cache lifetimes,
//! geocoding provider and on-device storage location.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{build_auth_header, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, CacheConfig, Config, GeocodingConfig, StorageConfig};
