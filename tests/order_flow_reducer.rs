use chicken_nation::model::{OrderType, Reservation, TableType};
use chicken_nation::state::mvi::Reducer;
use chicken_nation::state::order_flow::{Location, OrderFlowIntent, OrderFlowReducer, OrderFlowState};
use chrono::{NaiveDate, NaiveTime};

fn reservation(people: u8) -> Reservation {
    Reservation {
        date: NaiveDate::from_ymd_opt(2026, 10, 24).unwrap(),
        time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
        people,
        table_type: TableType::Terrace,
    }
}

fn location() -> Location {
    Location {
        latitude: 5.359,
        longitude: -3.984,
        formatted_address: "Rue des Jardins, Cocody".into(),
        street: Some("Rue des Jardins".into()),
        city: Some("Abidjan".into()),
    }
}

#[test]
fn default_is_delivery_and_consistent() {
    let state = OrderFlowState::default();
    assert_eq!(state.active_type, OrderType::Delivery);
    assert!(state.is_consistent());
}

#[test]
fn reservation_flow_sets_table_type() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![
            OrderFlowIntent::StartDelivery,
            OrderFlowIntent::StartReservation,
            OrderFlowIntent::UpdateReservation(reservation(4)),
        ],
    );
    assert_eq!(state.active_type, OrderType::Table);
    assert!(state.reservation_in_progress);
    assert!(!state.delivery_in_progress);
    assert_eq!(state.reservation, Some(reservation(4)));
    assert!(state.is_consistent());
}

#[test]
fn switching_to_delivery_drops_reservation() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![
            OrderFlowIntent::StartReservation,
            OrderFlowIntent::UpdateReservation(reservation(2)),
            OrderFlowIntent::SetActiveType(OrderType::Delivery),
        ],
    );
    assert_eq!(state.active_type, OrderType::Delivery);
    assert!(state.reservation.is_none());
    assert!(!state.reservation_in_progress);
}

#[test]
fn pickup_clears_both_flows() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![
            OrderFlowIntent::StartDelivery,
            OrderFlowIntent::SetActiveType(OrderType::Pickup),
        ],
    );
    assert_eq!(state.active_type, OrderType::Pickup);
    assert!(!state.delivery_in_progress);
    assert!(!state.reservation_in_progress);
    assert!(state.is_consistent());
}

#[test]
fn reservation_update_outside_table_is_ignored() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![OrderFlowIntent::UpdateReservation(reservation(2))],
    );
    assert!(state.reservation.is_none());
}

#[test]
fn every_intent_sequence_stays_consistent() {
    let intents = || {
        vec![
            OrderFlowIntent::StartDelivery,
            OrderFlowIntent::StartReservation,
            OrderFlowIntent::UpdateReservation(reservation(3)),
            OrderFlowIntent::SetActiveType(OrderType::Pickup),
            OrderFlowIntent::CancelDelivery,
            OrderFlowIntent::SetActiveType(OrderType::Table),
            OrderFlowIntent::CancelReservation,
            OrderFlowIntent::SetActiveType(OrderType::Delivery),
        ]
    };
    // Every prefix and every rotation of the sequence.
    for start in 0..intents().len() {
        let mut rotated = intents();
        rotated.rotate_left(start);
        let mut state = OrderFlowState::default();
        for intent in rotated {
            state = OrderFlowReducer::reduce(state, intent);
            assert!(state.is_consistent(), "inconsistent: {:?}", state);
        }
    }
}

#[test]
fn reset_keeps_location_only() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![
            OrderFlowIntent::SetLocation(location()),
            OrderFlowIntent::SelectAddress { id: "a1".into() },
            OrderFlowIntent::SelectRestaurant { id: "r1".into() },
            OrderFlowIntent::StartReservation,
            OrderFlowIntent::Reset,
        ],
    );
    assert_eq!(state.location, Some(location()));
    assert_eq!(state.selected_address, None);
    assert_eq!(state.selected_restaurant, None);
    assert_eq!(state.active_type, OrderType::Delivery);
}

#[test]
fn clear_location() {
    let state = OrderFlowReducer::reduce_all(
        OrderFlowState::default(),
        vec![
            OrderFlowIntent::SetLocation(location()),
            OrderFlowIntent::ClearLocation,
        ],
    );
    assert!(state.location.is_none());
}
