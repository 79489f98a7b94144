use crate::model::{OrderType, Reservation};
use crate::state::mvi::Intent;
use crate::state::order_flow::state::Location;

#[derive(Debug, Clone)]
pub enum OrderFlowIntent {
    /// Switch fulfillment mode. Leaving TABLE cancels the reservation,
    /// entering TABLE cancels the delivery flow.
    SetActiveType(OrderType),
    StartReservation,
    /// Ignored outside the TABLE flow.
    UpdateReservation(Reservation),
    CancelReservation,
    StartDelivery,
    CancelDelivery,
    SetLocation(Location),
    ClearLocation,
    SelectAddress { id: String },
    SelectRestaurant { id: String },
    /// Back to the home screen: default flow, location kept.
    Reset,
}

impl Intent for OrderFlowIntent {}
