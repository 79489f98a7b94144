mod intent;
mod reducer;
mod state;

pub use intent::OrderFlowIntent;
pub use reducer::OrderFlowReducer;
pub use state::{Location, OrderFlowState};
