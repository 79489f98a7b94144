//! Typed records mirrored from the backend JSON.
//!
//! Every record is decoded strictly at the API boundary: required fields
//! must be present and prices must be non-negative amounts, whether the
//! backend sends them as numbers or numeric strings.

mod address;
mod dish;
mod favorite;
mod loyalty;
mod notification;
mod order;
mod price;
mod restaurant;
mod user;

pub use address::{Address, NewAddress};
pub use dish::{Dish, Supplement};
pub use favorite::Favorite;
pub use loyalty::{LoyaltyAccount, LoyaltyTier};
pub use notification::{Notification, NotificationKind};
pub use order::{
    Order, OrderLine, OrderStatus, OrderType, Payment, PaymentMethod, PaymentStatus, PlaceOrder,
    PlaceOrderLine, Reservation, TableType,
};
pub use price::{deserialize_optional_price, deserialize_price};
pub use restaurant::Restaurant;
pub use user::{AuthResponse, User};
