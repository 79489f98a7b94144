use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::{Address, NewAddress};

impl ApiClient {
    pub async fn get_user_addresses(&self, user_id: &str) -> Result<Vec<Address>, ApiError> {
        self.get_json(&["users", user_id, "addresses"], "addresses")
            .await
    }

    pub async fn add_address(&self, user_id: &str, address: &NewAddress) -> Result<Address, ApiError> {
        self.send_with_body(
            Method::POST,
            &["users", user_id, "addresses"],
            address,
            "address",
        )
        .await
    }

    pub async fn update_address(
        &self,
        user_id: &str,
        address_id: &str,
        address: &NewAddress,
    ) -> Result<Address, ApiError> {
        self.send_with_body(
            Method::PATCH,
            &["users", user_id, "addresses", address_id],
            address,
            "address",
        )
        .await
    }

    pub async fn delete_address(&self, user_id: &str, address_id: &str) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, &["users", user_id, "addresses", address_id])?;
        self.send_empty(builder, "address").await
    }
}
