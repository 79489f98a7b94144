//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use chicken_nation::api::ApiClient;
use chicken_nation::app::App;
use chicken_nation::config::{Config, ConfigStore};
use chicken_nation::model::{Dish, Supplement};
use chicken_nation::state::cart::CartItem;
use chicken_nation::storage::{KeyValueStore, MemoryStore};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Config pointed at `base_url` with short timeouts.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 2;
    config.api.connect_timeout_seconds = 1;
    config.geocoding.base_url = base_url.to_string();
    config
}

pub fn make_client(base_url: &str) -> ApiClient {
    ApiClient::new(&test_config(base_url)).expect("client")
}

/// App backed by an in-memory store; returns the store for inspection.
pub fn make_app(base_url: &str) -> (App, Arc<dyn KeyValueStore>) {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let config = ConfigStore::new(test_config(base_url), PathBuf::from("/tmp/chicken-nation-test.toml"));
    let app = App::with_store(config, Arc::clone(&store)).expect("app");
    (app, store)
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn dish(id: &str, name: &str, price: u64) -> Dish {
    Dish {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        price,
        promotion_price: None,
        image_url: None,
        category: "Plats".to_string(),
        restaurant_id: Some("r1".to_string()),
        restaurant_name: "Chicken Nation Cocody".to_string(),
        ingredients: Vec::new(),
        rating: 4.0,
        available: true,
        supplements: Vec::new(),
    }
}

pub fn supplement(id: &str, name: &str, price: u64, included: bool) -> Supplement {
    Supplement {
        id: id.to_string(),
        name: name.to_string(),
        price,
        included,
        category: None,
    }
}

pub fn cart_item(id: &str, unit_price: u64, quantity: u32) -> CartItem {
    CartItem::from_dish(&dish(id, id, unit_price), quantity, &[])
}

/// Menu served by the mock backend in app-level tests.
pub const MENU_JSON: &str = r#"[
  {"id": "d1", "name": "Poulet braisé", "description": "Demi poulet braisé, attiéké",
   "price": 5000, "category": "Plats", "restaurantId": "r1", "restaurantName": "Cocody",
   "ingredients": ["poulet", "attiéké"], "rating": 4.6,
   "supplements": [{"id": "s1", "name": "Alloco", "price": "500"},
                   {"id": "s2", "name": "Piment", "price": 0, "included": true}]},
  {"id": "d2", "name": "Burger poulet", "description": "Pain brioché, poulet pané",
   "price": "4500", "promotionPrice": 3600, "category": "Burgers", "restaurantId": "r1",
   "restaurantName": "Cocody", "rating": 4.1},
  {"id": "d3", "name": "Jus de bissap", "price": 1000, "category": "Boissons",
   "restaurantId": "r1", "restaurantName": "Cocody", "available": false}
]"#;

pub const AUTH_JSON: &str = r#"{"accessToken": "tok-123",
  "user": {"id": "u1", "phone": "+2250707070707", "firstName": "Awa"}}"#;

pub fn order_json(id: &str, order_type: &str, status: &str, total: u64) -> String {
    format!(
        r#"{{"id": "{}", "type": "{}", "status": "{}", "total": {}, "createdAt": "2026-10-16T12:00:00Z",
            "items": [{{"dishId": "d1", "name": "Poulet braisé", "quantity": 2, "unitPrice": 5000}}]}}"#,
        id, order_type, status, total
    )
}

pub fn payment_json(order_id: &str, method: &str, status: &str, redirect: Option<&str>) -> String {
    let redirect = redirect
        .map(|u| format!(r#", "redirectUrl": "{}""#, u))
        .unwrap_or_default();
    format!(
        r#"{{"orderId": "{}", "method": "{}", "status": "{}", "amount": 10000{}}}"#,
        order_id, method, status, redirect
    )
}
