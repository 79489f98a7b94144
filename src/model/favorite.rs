use serde::{Deserialize, Serialize};

use super::dish::Dish;

/// A customer's bookmark on a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub dish_id: String,
    /// Embedded when the backend expands the relation.
    #[serde(default)]
    pub dish: Option<Dish>,
}
