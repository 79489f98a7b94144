use crate::state::mvi::Reducer;
use crate::state::notifications::intent::NotificationsIntent;
use crate::state::notifications::state::NotificationsState;

pub struct NotificationsReducer;

impl Reducer for NotificationsReducer {
    type State = NotificationsState;
    type Intent = NotificationsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NotificationsIntent::Load(items) => NotificationsState::from_items(items),
            NotificationsIntent::Push(notification) => {
                let mut items = state.into_items();
                items.retain(|n| n.id != notification.id);
                items.push(notification);
                NotificationsState::from_items(items)
            }
            NotificationsIntent::MarkRead { id } => {
                let mut items = state.into_items();
                if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                    n.read = true;
                }
                NotificationsState::from_items(items)
            }
            NotificationsIntent::MarkAllRead => {
                let mut items = state.into_items();
                items.iter_mut().for_each(|n| n.read = true);
                NotificationsState::from_items(items)
            }
            NotificationsIntent::Remove { id } => {
                let mut items = state.into_items();
                items.retain(|n| n.id != id);
                NotificationsState::from_items(items)
            }
            NotificationsIntent::Clear => NotificationsState::default(),
        }
    }
}
