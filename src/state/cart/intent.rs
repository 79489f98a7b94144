use crate::state::cart::state::CartItem;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Insert, or replace the line with the same id.
    Add(CartItem),
    Remove { id: String },
    /// Set the quantity; zero removes the line.
    UpdateQuantity { id: String, quantity: u32 },
    Increment { id: String },
    /// Subtract one; the line goes away at zero.
    Decrement { id: String },
    /// Logout or completed order.
    Clear,
}

impl Intent for CartIntent {}
