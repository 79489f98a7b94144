mod intent;
mod reducer;
mod state;

pub use intent::PaymentIntent;
pub use reducer::PaymentReducer;
pub use state::PaymentFlowState;
