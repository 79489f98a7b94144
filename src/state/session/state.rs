use crate::config::SecureString;
use crate::state::mvi::StoreState;

/// Access token plus the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: SecureString,
    pub phone: String,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    AwaitingOtp {
        phone: String,
    },
    Authenticated(AuthSession),
}

impl StoreState for SessionState {}

impl SessionState {
    pub fn session(&self) -> Option<&AuthSession> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
