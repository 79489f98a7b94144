mod intent;
mod reducer;
mod sample;
mod state;

pub use intent::NotificationsIntent;
pub use reducer::NotificationsReducer;
pub use sample::sample_feed;
pub use state::NotificationsState;
