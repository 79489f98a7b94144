use chicken_nation::config::SecureString;
use chicken_nation::model::{Notification, NotificationKind, PaymentMethod};
use chicken_nation::state::mvi::Reducer;
use chicken_nation::state::notifications::{
    sample_feed, NotificationsIntent, NotificationsReducer, NotificationsState,
};
use chicken_nation::state::payment::{PaymentFlowState, PaymentIntent, PaymentReducer};
use chicken_nation::state::session::{AuthSession, SessionIntent, SessionReducer, SessionState};
use chrono::{Duration, TimeZone, Utc};

fn session(token: &str) -> AuthSession {
    AuthSession {
        token: SecureString::new(token),
        phone: "+2250707070707".into(),
        user_id: "u1".into(),
    }
}

// -- Session ------------------------------------------------------------------

#[test]
fn otp_then_authenticated() {
    let state = SessionReducer::reduce(
        SessionState::Anonymous,
        SessionIntent::OtpRequested {
            phone: "+2250707070707".into(),
        },
    );
    assert!(matches!(state, SessionState::AwaitingOtp { .. }));

    let state = SessionReducer::reduce(state, SessionIntent::Authenticated(session("tok")));
    assert!(state.is_authenticated());
    assert_eq!(state.session().unwrap().user_id, "u1");
}

#[test]
fn otp_request_keeps_existing_session() {
    let state = SessionState::Authenticated(session("tok"));
    let state = SessionReducer::reduce(
        state,
        SessionIntent::OtpRequested {
            phone: "+2250101010101".into(),
        },
    );
    assert!(state.is_authenticated());
}

#[test]
fn restore_with_empty_token_is_ignored() {
    let state = SessionReducer::reduce(SessionState::Anonymous, SessionIntent::Restore(session("")));
    assert_eq!(state, SessionState::Anonymous);
}

#[test]
fn logout_from_any_state() {
    for start in [
        SessionState::Anonymous,
        SessionState::AwaitingOtp { phone: "x".into() },
        SessionState::Authenticated(session("tok")),
    ] {
        let state = SessionReducer::reduce(start, SessionIntent::LoggedOut);
        assert_eq!(state, SessionState::Anonymous);
    }
}

// -- Payment ------------------------------------------------------------------

fn start(order_id: &str) -> PaymentIntent {
    PaymentIntent::Start {
        order_id: order_id.into(),
        method: PaymentMethod::MobileMoney,
    }
}

#[test]
fn payment_happy_path_with_redirect() {
    let state = PaymentReducer::reduce(PaymentFlowState::Idle, start("o1"));
    let state = PaymentReducer::reduce(
        state,
        PaymentIntent::RedirectReceived {
            order_id: "o1".into(),
            url: "https://pay.example/o1".into(),
        },
    );
    assert!(matches!(state, PaymentFlowState::AwaitingConfirmation { .. }));
    assert!(state.is_in_flight());

    let state = PaymentReducer::reduce(state, PaymentIntent::Confirmed { order_id: "o1".into() });
    assert_eq!(state, PaymentFlowState::Succeeded { order_id: "o1".into() });
    assert!(!state.is_in_flight());
}

#[test]
fn second_start_while_in_flight_is_ignored() {
    let state = PaymentReducer::reduce(PaymentFlowState::Idle, start("o1"));
    let state = PaymentReducer::reduce(state, start("o2"));
    assert_eq!(state.order_id(), Some("o1"));
}

#[test]
fn events_for_other_orders_are_ignored() {
    let state = PaymentReducer::reduce(PaymentFlowState::Idle, start("o1"));
    let state = PaymentReducer::reduce(state, PaymentIntent::Confirmed { order_id: "o2".into() });
    assert!(matches!(state, PaymentFlowState::Pending { .. }));

    let state = PaymentReducer::reduce(
        state,
        PaymentIntent::RedirectReceived {
            order_id: "o2".into(),
            url: "https://pay.example/o2".into(),
        },
    );
    assert!(matches!(state, PaymentFlowState::Pending { .. }));
}

#[test]
fn failure_then_retry() {
    let state = PaymentReducer::reduce(PaymentFlowState::Idle, start("o1"));
    let state = PaymentReducer::reduce(
        state,
        PaymentIntent::Failed {
            order_id: "o1".into(),
            reason: "refusé".into(),
        },
    );
    assert!(matches!(state, PaymentFlowState::Failed { .. }));

    let state = PaymentReducer::reduce(state, start("o1"));
    assert!(matches!(state, PaymentFlowState::Pending { .. }));
}

#[test]
fn confirmation_without_payment_is_ignored() {
    let state = PaymentReducer::reduce(PaymentFlowState::Idle, PaymentIntent::Confirmed { order_id: "o1".into() });
    assert_eq!(state, PaymentFlowState::Idle);
}

// -- Notifications ------------------------------------------------------------

fn notification(id: &str, minutes_ago: i64, read: bool) -> Notification {
    let base = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
    Notification {
        id: id.into(),
        kind: NotificationKind::Order {
            order_id: format!("o-{}", id),
        },
        title: "Commande".into(),
        message: "Votre commande est prête".into(),
        read,
        created_at: base - Duration::minutes(minutes_ago),
    }
}

#[test]
fn load_sorts_newest_first_and_dedupes() {
    let state = NotificationsReducer::reduce(
        NotificationsState::default(),
        NotificationsIntent::Load(vec![
            notification("a", 30, false),
            notification("b", 5, false),
            notification("a", 1, true),
        ]),
    );
    let ids: Vec<&str> = state.items().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], "a");
    assert!(state.get("a").unwrap().read);
}

#[test]
fn push_replaces_same_id() {
    let state = NotificationsReducer::reduce(
        NotificationsState::default(),
        NotificationsIntent::Load(vec![notification("a", 30, false)]),
    );
    let state = NotificationsReducer::reduce(state, NotificationsIntent::Push(notification("a", 0, true)));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn mark_read_and_remove() {
    let state = NotificationsReducer::reduce(
        NotificationsState::default(),
        NotificationsIntent::Load(vec![notification("a", 10, false), notification("b", 20, false)]),
    );
    assert_eq!(state.unread_count(), 2);

    let state = NotificationsReducer::reduce(state, NotificationsIntent::MarkRead { id: "a".into() });
    assert_eq!(state.unread_count(), 1);

    let state = NotificationsReducer::reduce(state, NotificationsIntent::Remove { id: "b".into() });
    assert_eq!(state.unread_count(), 0);

    let state = NotificationsReducer::reduce(state, NotificationsIntent::Clear);
    assert!(state.items().is_empty());
}

#[test]
fn sample_feed_has_unread_entries() {
    let now = Utc::now();
    let state = NotificationsReducer::reduce(
        NotificationsState::default(),
        NotificationsIntent::Load(sample_feed(now)),
    );
    assert_eq!(state.items().len(), 3);
    assert_eq!(state.unread_count(), 2);
    assert!(state.items().windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let state = NotificationsReducer::reduce(state, NotificationsIntent::MarkAllRead);
    assert_eq!(state.unread_count(), 0);
}
