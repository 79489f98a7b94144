//! In-memory dish search.
//!
//! A linear scan over the loaded menu: keyword matching across the
//! descriptive fields, an inclusive price ceiling and a stable sort.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::model::Dish;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the backend order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    /// Inclusive ceiling on the effective price.
    pub max_price: Option<u64>,
    pub sort: SortOrder,
    /// Restrict to one category (case-insensitive exact match).
    pub category: Option<String>,
}

impl SearchQuery {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    fn keywords(&self) -> Vec<String> {
        self.text
            .split_whitespace()
            .map(|k| k.to_lowercase())
            .collect()
    }
}

/// True when every keyword occurs in at least one searchable field.
fn matches_keywords(dish: &Dish, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }

    let mut haystacks = vec![
        dish.name.to_lowercase(),
        dish.description.to_lowercase(),
        dish.restaurant_name.to_lowercase(),
        dish.category.to_lowercase(),
    ];
    haystacks.extend(dish.ingredients.iter().map(|i| i.to_lowercase()));

    keywords
        .iter()
        .all(|k| haystacks.iter().any(|h| h.contains(k.as_str())))
}

/// Filter and sort `dishes` according to `query`.
pub fn search<'a>(dishes: &'a [Dish], query: &SearchQuery) -> Vec<&'a Dish> {
    let keywords = query.keywords();
    let category = query.category.as_ref().map(|c| c.to_lowercase());

    let mut results: Vec<&Dish> = dishes
        .iter()
        .filter(|d| query.max_price.is_none_or(|max| d.effective_price() <= max))
        .filter(|d| {
            category
                .as_deref()
                .is_none_or(|c| d.category.to_lowercase() == c)
        })
        .filter(|d| matches_keywords(d, &keywords))
        .collect();

    match query.sort {
        SortOrder::Relevance => {}
        SortOrder::PriceAsc => results.sort_by_key(|d| d.effective_price()),
        SortOrder::PriceDesc => results.sort_by(|a, b| b.effective_price().cmp(&a.effective_price())),
        SortOrder::RatingDesc => results.sort_by(|a, b| {
            b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
        }),
    }

    results
}

/// Group dishes by category, categories sorted by name.
pub fn group_by_category(dishes: &[Dish]) -> BTreeMap<String, Vec<&Dish>> {
    let mut groups: BTreeMap<String, Vec<&Dish>> = BTreeMap::new();
    for dish in dishes {
        let key = if dish.category.trim().is_empty() {
            "Autres".to_string()
        } else {
            dish.category.clone()
        };
        groups.entry(key).or_default().push(dish);
    }
    groups
}

/// Highest effective price, for sizing a price slider.
pub fn max_price(dishes: &[Dish]) -> Option<u64> {
    dishes.iter().map(Dish::effective_price).max()
}
