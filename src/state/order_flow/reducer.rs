use crate::model::OrderType;
use crate::state::mvi::Reducer;
use crate::state::order_flow::intent::OrderFlowIntent;
use crate::state::order_flow::state::OrderFlowState;

pub struct OrderFlowReducer;

impl OrderFlowReducer {
    fn cancel_reservation(state: &mut OrderFlowState) {
        state.reservation_in_progress = false;
        state.reservation = None;
    }

    fn cancel_delivery(state: &mut OrderFlowState) {
        state.delivery_in_progress = false;
    }
}

impl Reducer for OrderFlowReducer {
    type State = OrderFlowState;
    type Intent = OrderFlowIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OrderFlowIntent::SetActiveType(order_type) => {
                match order_type {
                    OrderType::Delivery | OrderType::Pickup => Self::cancel_reservation(&mut state),
                    OrderType::Table => Self::cancel_delivery(&mut state),
                }
                if order_type == OrderType::Pickup {
                    Self::cancel_delivery(&mut state);
                }
                state.active_type = order_type;
            }
            OrderFlowIntent::StartReservation => {
                Self::cancel_delivery(&mut state);
                state.active_type = OrderType::Table;
                state.reservation_in_progress = true;
            }
            OrderFlowIntent::UpdateReservation(reservation) => {
                if state.active_type == OrderType::Table {
                    state.reservation = Some(reservation);
                    state.reservation_in_progress = true;
                }
            }
            OrderFlowIntent::CancelReservation => Self::cancel_reservation(&mut state),
            OrderFlowIntent::StartDelivery => {
                Self::cancel_reservation(&mut state);
                state.active_type = OrderType::Delivery;
                state.delivery_in_progress = true;
            }
            OrderFlowIntent::CancelDelivery => Self::cancel_delivery(&mut state),
            OrderFlowIntent::SetLocation(location) => state.location = Some(location),
            OrderFlowIntent::ClearLocation => state.location = None,
            OrderFlowIntent::SelectAddress { id } => state.selected_address = Some(id),
            OrderFlowIntent::SelectRestaurant { id } => state.selected_restaurant = Some(id),
            OrderFlowIntent::Reset => {
                return OrderFlowState {
                    location: state.location,
                    ..OrderFlowState::default()
                };
            }
        }
        state
    }
}
