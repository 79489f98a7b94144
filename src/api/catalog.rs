use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::{Dish, Restaurant};

impl ApiClient {
    /// Every dish on the menu. Served from cache while fresh.
    pub async fn get_all_menus(&self) -> Result<Arc<Vec<Dish>>, ApiError> {
        if let Some(hit) = self.dishes_cache.get(&()).await {
            tracing::debug!(count = hit.len(), "Dish list served from cache");
            return Ok(hit);
        }
        let dishes: Arc<Vec<Dish>> = Arc::new(self.get_json(&["v1", "dishes"], "dishes").await?);
        self.dishes_cache.insert((), Arc::clone(&dishes)).await;
        Ok(dishes)
    }

    pub async fn get_dish(&self, id: &str) -> Result<Dish, ApiError> {
        self.get_json(&["v1", "dishes", id], "dish").await
    }

    /// All outlets. Served from cache while fresh.
    pub async fn get_restaurants(&self) -> Result<Arc<Vec<Restaurant>>, ApiError> {
        if let Some(hit) = self.restaurants_cache.get(&()).await {
            return Ok(hit);
        }
        let restaurants: Arc<Vec<Restaurant>> =
            Arc::new(self.get_json(&["restaurants"], "restaurants").await?);
        self.restaurants_cache
            .insert((), Arc::clone(&restaurants))
            .await;
        Ok(restaurants)
    }

    pub async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ApiError> {
        self.get_json(&["restaurants", id], "restaurant").await
    }

    /// Dishes served by one outlet.
    pub async fn get_restaurant_menu(&self, id: &str) -> Result<Vec<Dish>, ApiError> {
        self.get_json(&["restaurants", id, "dishes"], "dishes").await
    }
}
