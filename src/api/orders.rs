use reqwest::Method;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::{Order, Payment, PaymentMethod, PlaceOrder};

#[derive(Serialize)]
struct PayRequest {
    method: PaymentMethod,
}

impl ApiClient {
    pub async fn place_order(&self, order: &PlaceOrder) -> Result<Order, ApiError> {
        let placed: Order = self
            .send_with_body(Method::POST, &["orders"], order, "order")
            .await?;
        tracing::info!(
            order_id = %placed.id,
            order_type = ?placed.order_type,
            total = placed.total,
            "Order placed"
        );
        Ok(placed)
    }

    pub async fn get_order(&self, order_id: &str) -> Result<Order, ApiError> {
        self.get_json(&["orders", order_id], "order").await
    }

    pub async fn get_user_orders(&self, user_id: &str) -> Result<Vec<Order>, ApiError> {
        self.get_json(&["users", user_id, "orders"], "orders").await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<Order, ApiError> {
        let builder = self.request(Method::POST, &["orders", order_id, "cancel"])?;
        self.send_json(builder, "order").await
    }

    pub async fn pay_order(&self, order_id: &str, method: PaymentMethod) -> Result<Payment, ApiError> {
        self.send_with_body(
            Method::POST,
            &["orders", order_id, "payments"],
            &PayRequest { method },
            "payment",
        )
        .await
    }
}
