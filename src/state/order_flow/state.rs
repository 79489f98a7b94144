use serde::{Deserialize, Serialize};

use crate::model::{OrderType, Reservation};
use crate::state::mvi::StoreState;

/// Where the customer is, as picked on the map or geocoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    pub street: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderFlowState {
    pub active_type: OrderType,
    pub reservation: Option<Reservation>,
    pub reservation_in_progress: bool,
    pub delivery_in_progress: bool,
    pub location: Option<Location>,
    pub selected_address: Option<String>,
    pub selected_restaurant: Option<String>,
}

impl StoreState for OrderFlowState {}

impl OrderFlowState {
    /// Reservation and delivery flows never run at the same time.
    pub fn is_consistent(&self) -> bool {
        !(self.reservation_in_progress && self.delivery_in_progress)
    }
}
