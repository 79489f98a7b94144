//! Built-in feed used until the backend exposes notifications.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::model::{Notification, NotificationKind};

pub fn sample_feed(now: DateTime<Utc>) -> Vec<Notification> {
    let entry = |kind, title: &str, message: &str, age: Duration, read| Notification {
        id: Uuid::new_v4().to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        read,
        created_at: now - age,
    };

    vec![
        entry(
            NotificationKind::Promotion { dish_id: None },
            "Offre du jour",
            "-20% sur tous les menus poulet braisé jusqu'à minuit.",
            Duration::minutes(12),
            false,
        ),
        entry(
            NotificationKind::Loyalty { points: 50 },
            "Points fidélité",
            "Vous avez gagné 50 points avec votre dernière commande.",
            Duration::hours(5),
            false,
        ),
        entry(
            NotificationKind::System,
            "Bienvenue",
            "Bienvenue chez Chicken Nation !",
            Duration::days(3),
            true,
        ),
    ]
}
