use crate::state::mvi::Reducer;
use crate::state::session::intent::SessionIntent;
use crate::state::session::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::OtpRequested { phone } => match state {
                // Asking for a new code does not sign the current user out.
                SessionState::Authenticated(session) => SessionState::Authenticated(session),
                _ => SessionState::AwaitingOtp { phone },
            },
            SessionIntent::Authenticated(session) | SessionIntent::Restore(session) => {
                if session.token.is_empty() {
                    state
                } else {
                    SessionState::Authenticated(session)
                }
            }
            SessionIntent::LoggedOut => SessionState::Anonymous,
        }
    }
}
