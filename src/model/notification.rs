use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a notification is about, with the context needed to act on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    #[serde(rename_all = "camelCase")]
    Order { order_id: String },
    #[serde(rename_all = "camelCase")]
    Promotion { dish_id: Option<String> },
    Loyalty { points: u64 },
    System,
}

impl NotificationKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Order { .. } => "ORDER",
            Self::Promotion { .. } => "PROMOTION",
            Self::Loyalty { .. } => "LOYALTY",
            Self::System => "SYSTEM",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}
