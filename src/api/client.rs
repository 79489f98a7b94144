use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::config::{build_auth_header, CacheConfig, Config, SecureString};
use crate::model::{Dish, Restaurant};

/// Thin client over the backend REST API.
///
/// Cloning is cheap; clones share the connection pool, the bearer token and
/// the catalog caches.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
    token: Arc<RwLock<Option<SecureString>>>,
    pub(crate) dishes_cache: Cache<(), Arc<Vec<Dish>>>,
    pub(crate) restaurants_cache: Cache<(), Arc<Vec<Restaurant>>>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let api = &config.api;
        let base_url = Url::parse(&api.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api.base_url, e)))?;

        let http = Client::builder()
            .timeout(api.timeout())
            .connect_timeout(api.connect_timeout())
            .user_agent(api.user_agent.clone())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url,
            timeout: api.timeout(),
            token: Arc::new(RwLock::new(None)),
            dishes_cache: build_cache(&config.cache, CacheKind::Dishes),
            restaurants_cache: build_cache(&config.cache, CacheKind::Restaurants),
        })
    }

    /// Attach (or with `None`, stop attaching) a bearer token.
    pub fn set_token(&self, token: Option<SecureString>) {
        *self.token.write() = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.read().is_some()
    }

    /// Drop cached catalog data (pull-to-refresh).
    pub fn invalidate_cache(&self) {
        self.dishes_cache.invalidate_all();
        self.restaurants_cache.invalidate_all();
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.url(segments)?;
        tracing::debug!(method = %method, url = %url, "API request");
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.token.read().as_ref() {
            if let Some((name, value)) = build_auth_header(token) {
                builder = builder.header(name, value);
            }
        }
        Ok(builder)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        what: &'static str,
    ) -> Result<T, ApiError> {
        let builder = self.request(Method::GET, segments)?;
        self.send_json(builder, what).await
    }

    pub(crate) async fn send_with_body<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
        what: &'static str,
    ) -> Result<T, ApiError> {
        let builder = self.request(method, segments)?.json(body);
        self.send_json(builder, what).await
    }

    /// Send and decode a JSON body, accepting bare or `{"data": ...}` payloads.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        what: &'static str,
    ) -> Result<T, ApiError> {
        let bytes = self.send_raw(builder, what).await?;
        decode_body(&bytes, what)
    }

    /// Send and ignore the body of a successful response.
    pub(crate) async fn send_empty(
        &self,
        builder: RequestBuilder,
        what: &'static str,
    ) -> Result<(), ApiError> {
        self.send_raw(builder, what).await.map(|_| ())
    }

    async fn send_raw(&self, builder: RequestBuilder, what: &'static str) -> Result<Vec<u8>, ApiError> {
        let timeout_secs = self.timeout.as_secs();
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_secs))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_transport(e, timeout_secs))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let err = match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound { what },
            _ => ApiError::Status {
                status: status.as_u16(),
                message: error_message(&bytes),
            },
        };
        tracing::warn!(
            what = what,
            status = status.as_u16(),
            error_type = err.error_type(),
            "API call failed"
        );
        Err(err)
    }
}

#[derive(Clone, Copy)]
enum CacheKind {
    Dishes,
    Restaurants,
}

fn build_cache<V: Clone + Send + Sync + 'static>(config: &CacheConfig, kind: CacheKind) -> Cache<(), V> {
    let ttl = match kind {
        CacheKind::Dishes => config.dishes_ttl(),
        CacheKind::Restaurants => config.restaurants_ttl(),
    };
    Cache::builder().max_capacity(1).time_to_live(ttl).build()
}

fn decode_body<T: DeserializeOwned>(bytes: &[u8], what: &'static str) -> Result<T, ApiError> {
    let value: serde_json::Value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(bytes).map_err(|e| ApiError::Decode {
            what,
            message: e.to_string(),
        })?
    };

    if let Some(data) = value.get("data") {
        if let Ok(decoded) = serde_json::from_value::<T>(data.clone()) {
            return Ok(decoded);
        }
    }

    serde_json::from_value::<T>(value).map_err(|e| ApiError::Decode {
        what,
        message: e.to_string(),
    })
}

/// Pull a human message out of an error body.
fn error_message(bytes: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
        for key in ["message", "error"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) => return s.clone(),
                Some(serde_json::Value::Array(items)) => {
                    let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                    if !parts.is_empty() {
                        return parts.join(", ");
                    }
                }
                _ => {}
            }
        }
    }
    let text = String::from_utf8_lossy(bytes);
    text.chars().take(200).collect()
}
