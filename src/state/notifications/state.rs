use crate::model::Notification;
use crate::state::mvi::StoreState;

/// Notification feed, newest first, ids unique.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationsState {
    items: Vec<Notification>,
}

impl StoreState for NotificationsState {}

impl NotificationsState {
    pub(super) fn from_items(mut items: Vec<Notification>) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut seen = std::collections::HashSet::new();
        items.retain(|n| seen.insert(n.id.clone()));
        Self { items }
    }

    pub(super) fn into_items(self) -> Vec<Notification> {
        self.items
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}
