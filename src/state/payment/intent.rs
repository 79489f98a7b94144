use crate::model::PaymentMethod;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PaymentIntent {
    Start {
        order_id: String,
        method: PaymentMethod,
    },
    /// The provider needs the customer on a hosted page.
    RedirectReceived { order_id: String, url: String },
    Confirmed { order_id: String },
    Failed { order_id: String, reason: String },
    Reset,
}

impl Intent for PaymentIntent {}
