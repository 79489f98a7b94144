use crate::model::PaymentMethod;
use crate::state::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaymentFlowState {
    #[default]
    Idle,
    Pending {
        order_id: String,
        method: PaymentMethod,
    },
    AwaitingConfirmation {
        order_id: String,
        redirect_url: String,
    },
    Succeeded {
        order_id: String,
    },
    Failed {
        order_id: String,
        reason: String,
    },
}

impl StoreState for PaymentFlowState {}

impl PaymentFlowState {
    /// Order the flow is about, if any.
    pub fn order_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Pending { order_id, .. }
            | Self::AwaitingConfirmation { order_id, .. }
            | Self::Succeeded { order_id }
            | Self::Failed { order_id, .. } => Some(order_id),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Pending { .. } | Self::AwaitingConfirmation { .. })
    }
}
