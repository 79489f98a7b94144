use crate::state::mvi::Intent;
use crate::state::session::state::AuthSession;

#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// An OTP was sent to `phone`.
    OtpRequested { phone: String },
    /// OTP verified by the backend.
    Authenticated(AuthSession),
    /// Session loaded from on-device storage at startup.
    Restore(AuthSession),
    LoggedOut,
}

impl Intent for SessionIntent {}
