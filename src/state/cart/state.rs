use serde::{Deserialize, Serialize};

use crate::model::{Dish, PlaceOrderLine};
use crate::state::mvi::StoreState;

/// A supplement picked for a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSupplement {
    pub name: String,
    pub price: u64,
    /// Included supplements come with the dish and cost nothing.
    pub included: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Dish id; one line per dish.
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub supplements: Vec<SelectedSupplement>,
    /// Price before promotion, when the dish is discounted.
    pub original_price: Option<u64>,
    pub discount_percent: Option<u8>,
    pub restaurant_id: Option<String>,
}

impl CartItem {
    /// Build a line from a dish, keeping the supplements whose id is in
    /// `supplement_ids` (unknown ids are ignored).
    pub fn from_dish(dish: &Dish, quantity: u32, supplement_ids: &[String]) -> Self {
        let supplements = supplement_ids
            .iter()
            .filter_map(|id| dish.supplement(id))
            .map(|s| SelectedSupplement {
                name: s.name.clone(),
                price: s.price,
                included: s.included,
            })
            .collect();

        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            unit_price: dish.effective_price(),
            quantity,
            supplements,
            original_price: dish.is_on_promotion().then_some(dish.price),
            discount_percent: dish.discount_percent(),
            restaurant_id: dish.restaurant_id.clone(),
        }
    }

    /// Price of one unit with its paid supplements.
    pub fn unit_total(&self) -> u64 {
        self.supplements
            .iter()
            .filter(|s| !s.included)
            .fold(self.unit_price, |acc, s| acc.saturating_add(s.price))
    }

    pub fn line_total(&self) -> u64 {
        self.unit_total().saturating_mul(u64::from(self.quantity))
    }

    /// Amount saved on this line thanks to a promotion.
    pub fn discount_amount(&self) -> u64 {
        self.original_price
            .map(|original| original.saturating_sub(self.unit_price))
            .unwrap_or(0)
            .saturating_mul(u64::from(self.quantity))
    }

    pub fn to_order_line(&self) -> PlaceOrderLine {
        PlaceOrderLine {
            dish_id: self.id.clone(),
            quantity: self.quantity,
            supplements: self.supplements.iter().map(|s| s.name.clone()).collect(),
        }
    }
}

/// Cart contents plus totals derived on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    items: Vec<CartItem>,
    total: u64,
    item_count: u32,
}

impl StoreState for CartState {}

impl CartState {
    pub(super) fn from_items(items: Vec<CartItem>) -> Self {
        let items: Vec<CartItem> = items.into_iter().filter(|i| i.quantity > 0).collect();
        let total = items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()));
        let item_count = items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity));
        Self {
            items,
            total,
            item_count,
        }
    }

    pub(super) fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn total_discount(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.discount_amount()))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
