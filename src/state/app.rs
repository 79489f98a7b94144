use thiserror::Error;
use uuid::Uuid;

use crate::model::{OrderType, PaymentMethod, PlaceOrder};
use crate::state::cart::{CartIntent, CartReducer};
use crate::state::notifications::NotificationsReducer;
use crate::state::order_flow::{OrderFlowIntent, OrderFlowReducer};
use crate::state::payment::{PaymentIntent, PaymentReducer};
use crate::state::session::{AuthSession, SessionIntent, SessionReducer};
use crate::state::store::Store;

/// Reasons the current state cannot become an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderBuildError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Delivery orders need a delivery address")]
    MissingAddress,
    #[error("Pickup and table orders need a restaurant")]
    MissingRestaurant,
    #[error("Table orders need a reservation")]
    MissingReservation,
    #[error("Reservations are for 1 to 20 people")]
    InvalidReservation,
}

/// All client state containers of one running client.
#[derive(Default)]
pub struct AppState {
    pub session: Store<SessionReducer>,
    pub cart: Store<CartReducer>,
    pub order_flow: Store<OrderFlowReducer>,
    pub payment: Store<PaymentReducer>,
    pub notifications: Store<NotificationsReducer>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<AuthSession> {
        self.session.with(|s| s.session().cloned())
    }

    /// Sign out and drop everything tied to the previous customer.
    pub fn logout(&self) {
        self.session.dispatch(SessionIntent::LoggedOut);
        self.cart.dispatch(CartIntent::Clear);
        self.payment.dispatch(PaymentIntent::Reset);
        self.order_flow.dispatch(OrderFlowIntent::Reset);
        tracing::info!("Session closed, cart cleared");
    }

    /// The backend accepted and settled `order_id`.
    pub fn complete_order(&self, order_id: &str) {
        self.payment.dispatch(PaymentIntent::Confirmed {
            order_id: order_id.to_string(),
        });
        self.cart.dispatch(CartIntent::Clear);
        self.order_flow.dispatch(OrderFlowIntent::Reset);
        tracing::info!(order_id = %order_id, "Order completed");
    }

    /// Build the create payload from the cart and the active flow.
    pub fn build_order(&self, payment_method: PaymentMethod) -> Result<PlaceOrder, OrderBuildError> {
        let cart = self.cart.get();
        let flow = self.order_flow.get();

        if cart.is_empty() {
            return Err(OrderBuildError::EmptyCart);
        }

        let restaurant_id = flow.selected_restaurant.clone().or_else(|| {
            cart.items()
                .iter()
                .find_map(|item| item.restaurant_id.clone())
        });

        let (address_id, reservation) = match flow.active_type {
            OrderType::Delivery => {
                let address = flow
                    .selected_address
                    .clone()
                    .ok_or(OrderBuildError::MissingAddress)?;
                (Some(address), None)
            }
            OrderType::Pickup => {
                if restaurant_id.is_none() {
                    return Err(OrderBuildError::MissingRestaurant);
                }
                (None, None)
            }
            OrderType::Table => {
                let reservation = flow
                    .reservation
                    .clone()
                    .ok_or(OrderBuildError::MissingReservation)?;
                if !reservation.is_valid() {
                    return Err(OrderBuildError::InvalidReservation);
                }
                if restaurant_id.is_none() {
                    return Err(OrderBuildError::MissingRestaurant);
                }
                (None, Some(reservation))
            }
        };

        Ok(PlaceOrder {
            order_type: flow.active_type,
            items: cart.items().iter().map(|i| i.to_order_line()).collect(),
            address_id,
            restaurant_id,
            reservation,
            payment_method,
            expected_total: cart.total(),
            idempotency_key: Uuid::new_v4().to_string(),
        })
    }
}
