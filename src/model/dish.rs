use serde::{Deserialize, Serialize};

use super::price::{deserialize_optional_price, deserialize_price};

/// A menu dish as served by `/v1/dishes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: u64,
    /// Discounted price while a promotion runs.
    #[serde(default, deserialize_with = "deserialize_optional_price")]
    pub promotion_price: Option<u64>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub restaurant_name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub supplements: Vec<Supplement>,
}

fn default_available() -> bool {
    true
}

impl Dish {
    /// Price the customer pays for one unit, promotion applied.
    pub fn effective_price(&self) -> u64 {
        match self.promotion_price {
            Some(promo) if promo < self.price => promo,
            _ => self.price,
        }
    }

    pub fn is_on_promotion(&self) -> bool {
        self.effective_price() < self.price
    }

    /// Discount in whole percent, rounded down.
    pub fn discount_percent(&self) -> Option<u8> {
        if !self.is_on_promotion() || self.price == 0 {
            return None;
        }
        let saved = self.price - self.effective_price();
        u8::try_from(saved * 100 / self.price).ok()
    }

    pub fn supplement(&self, id: &str) -> Option<&Supplement> {
        self.supplements.iter().find(|s| s.id == id)
    }
}

/// Add-on attached to a dish. Included supplements are free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplement {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: u64,
    #[serde(default)]
    pub included: bool,
    #[serde(default)]
    pub category: Option<String>,
}
