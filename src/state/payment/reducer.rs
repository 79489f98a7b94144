use crate::state::mvi::Reducer;
use crate::state::payment::intent::PaymentIntent;
use crate::state::payment::state::PaymentFlowState;

pub struct PaymentReducer;

impl Reducer for PaymentReducer {
    type State = PaymentFlowState;
    type Intent = PaymentIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaymentIntent::Start { order_id, method } => {
                if state.is_in_flight() {
                    state
                } else {
                    PaymentFlowState::Pending { order_id, method }
                }
            }
            PaymentIntent::RedirectReceived { order_id, url } => match state {
                PaymentFlowState::Pending { order_id: ref current, .. } if *current == order_id => {
                    PaymentFlowState::AwaitingConfirmation {
                        order_id,
                        redirect_url: url,
                    }
                }
                other => other,
            },
            PaymentIntent::Confirmed { order_id } => {
                if state.is_in_flight() && state.order_id() == Some(order_id.as_str()) {
                    PaymentFlowState::Succeeded { order_id }
                } else {
                    state
                }
            }
            PaymentIntent::Failed { order_id, reason } => {
                if state.is_in_flight() && state.order_id() == Some(order_id.as_str()) {
                    PaymentFlowState::Failed { order_id, reason }
                } else {
                    state
                }
            }
            PaymentIntent::Reset => PaymentFlowState::Idle,
        }
    }
}
