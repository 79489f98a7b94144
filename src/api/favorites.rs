use reqwest::Method;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::Favorite;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddFavorite<'a> {
    dish_id: &'a str,
}

impl ApiClient {
    pub async fn get_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, ApiError> {
        self.get_json(&["users", user_id, "favorites"], "favorites")
            .await
    }

    pub async fn add_to_favorites(&self, user_id: &str, dish_id: &str) -> Result<Favorite, ApiError> {
        self.send_with_body(
            Method::POST,
            &["users", user_id, "favorites"],
            &AddFavorite { dish_id },
            "favorite",
        )
        .await
    }

    pub async fn remove_from_favorites(&self, user_id: &str, dish_id: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["users", user_id, "favorites", dish_id])?;
        self.send_empty(builder, "favorite").await
    }
}
