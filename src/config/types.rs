use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend REST API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for every API call (e.g., "https://api.chicken-nation.com").
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// User agent sent with API and geocoding requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Lifetimes of the read-through caches in front of catalog endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long the dish list stays fresh (default: 300).
    #[serde(default = "default_dishes_ttl")]
    pub dishes_ttl_seconds: u64,
    /// How long the restaurant list stays fresh (default: 600).
    #[serde(default = "default_restaurants_ttl")]
    pub restaurants_ttl_seconds: u64,
}

/// Reverse-geocoding provider (Nominatim-compatible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
}

/// On-device key-value storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding persisted keys. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "https://api.chicken-nation.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_user_agent() -> String {
    concat!("chicken-nation/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_dishes_ttl() -> u64 {
    300
}

fn default_restaurants_ttl() -> u64 {
    600
}

fn default_geocoding_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dishes_ttl_seconds: default_dishes_ttl(),
            restaurants_ttl_seconds: default_restaurants_ttl(),
        }
    }
}

impl CacheConfig {
    pub fn dishes_ttl(&self) -> Duration {
        Duration::from_secs(self.dishes_ttl_seconds)
    }

    pub fn restaurants_ttl(&self) -> Duration {
        Duration::from_secs(self.restaurants_ttl_seconds)
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
        }
    }
}

impl StorageConfig {
    /// Resolved storage directory.
    ///
    /// Falls back to `<data dir>/chicken-nation`, or the current directory
    /// when the platform has no data dir.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("chicken-nation"),
        }
    }
}
