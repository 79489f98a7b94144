use crate::state::cart::intent::CartIntent;
use crate::state::cart::state::CartState;
use crate::state::mvi::Reducer;

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut items = state.into_items();

        match intent {
            CartIntent::Add(item) => match items.iter_mut().find(|i| i.id == item.id) {
                Some(existing) => *existing = item,
                None => items.push(item),
            },
            CartIntent::Remove { id } => items.retain(|i| i.id != id),
            CartIntent::UpdateQuantity { id, quantity } => {
                if let Some(existing) = items.iter_mut().find(|i| i.id == id) {
                    existing.quantity = quantity;
                }
            }
            CartIntent::Increment { id } => {
                if let Some(existing) = items.iter_mut().find(|i| i.id == id) {
                    existing.quantity = existing.quantity.saturating_add(1);
                }
            }
            CartIntent::Decrement { id } => {
                if let Some(existing) = items.iter_mut().find(|i| i.id == id) {
                    existing.quantity = existing.quantity.saturating_sub(1);
                }
            }
            CartIntent::Clear => items.clear(),
        }

        // Rebuilding drops zero-quantity lines and recomputes totals.
        CartState::from_items(items)
    }
}
