use crate::model::Notification;
use crate::state::mvi::Intent;

#[derive(Debug, Clone)]
pub enum NotificationsIntent {
    /// Replace the whole feed.
    Load(Vec<Notification>),
    /// Insert, or replace the notification with the same id.
    Push(Notification),
    MarkRead { id: String },
    MarkAllRead,
    Remove { id: String },
    Clear,
}

impl Intent for NotificationsIntent {}
