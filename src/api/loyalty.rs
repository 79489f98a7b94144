use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::LoyaltyAccount;

impl ApiClient {
    pub async fn get_loyalty(&self, user_id: &str) -> Result<LoyaltyAccount, ApiError> {
        self.get_json(&["users", user_id, "loyalty"], "loyalty account")
            .await
    }
}
