use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::price::{deserialize_optional_price, deserialize_price};

/// Fulfillment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
    Table,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delivery => "Livraison",
            Self::Pickup => "À emporter",
            Self::Table => "Réservation de table",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableType {
    #[default]
    Standard,
    Vip,
    Terrace,
    Private,
}

/// Table reservation details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub people: u8,
    #[serde(default)]
    pub table_type: TableType,
}

impl Reservation {
    pub const MAX_PEOPLE: u8 = 20;

    pub fn is_valid(&self) -> bool {
        (1..=Self::MAX_PEOPLE).contains(&self.people)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    InProgress,
    Ready,
    Delivering,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Orders can be cancelled until the kitchen accepts them.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "En attente",
            Self::Accepted => "Acceptée",
            Self::InProgress => "En préparation",
            Self::Ready => "Prête",
            Self::Delivering => "En livraison",
            Self::Completed => "Terminée",
            Self::Cancelled => "Annulée",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub dish_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(deserialize_with = "deserialize_price")]
    pub unit_price: u64,
    #[serde(default)]
    pub supplements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(deserialize_with = "deserialize_price")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub delivery_fee: Option<u64>,
    #[serde(default)]
    pub address_id: Option<String>,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub reservation: Option<Reservation>,
    pub created_at: DateTime<Utc>,
}

/// One line of a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderLine {
    pub dish_id: String,
    pub quantity: u32,
    pub supplements: Vec<String>,
}

/// Create payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub items: Vec<PlaceOrderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
    pub payment_method: PaymentMethod,
    /// Client-computed total, checked by the backend.
    pub expected_total: u64,
    /// Lets the backend drop accidental double submissions.
    pub idempotency_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    MobileMoney,
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub order_id: String,
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    #[serde(deserialize_with = "deserialize_price")]
    pub amount: u64,
    /// Hosted checkout page for card / mobile-money payments.
    #[serde(default)]
    pub redirect_url: Option<String>,
}
