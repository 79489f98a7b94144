use reqwest::Method;
use serde::Serialize;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::model::AuthResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    phone: &'a str,
}

#[derive(Serialize)]
struct VerifyOtpRequest<'a> {
    phone: &'a str,
    code: &'a str,
}

impl ApiClient {
    /// Ask the backend to text a one-time code to `phone`.
    pub async fn request_otp(&self, phone: &str) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, &["auth", "login"])?
            .json(&LoginRequest { phone });
        self.send_empty(builder, "otp").await?;
        tracing::debug!("OTP requested");
        Ok(())
    }

    /// Exchange the code for an access token.
    ///
    /// On success the token is attached to every following request.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<AuthResponse, ApiError> {
        let response: AuthResponse = self
            .send_with_body(
                Method::POST,
                &["auth", "verify-otp"],
                &VerifyOtpRequest { phone, code },
                "session",
            )
            .await?;
        if response.access_token.is_empty() {
            return Err(ApiError::Decode {
                what: "session",
                message: "empty access token".to_string(),
            });
        }
        self.set_token(Some(response.access_token.clone()));
        tracing::info!(user_id = %response.user.id, "Signed in");
        Ok(response)
    }

    /// Revoke the token server-side. The local token is dropped even when
    /// the backend call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = match self.request(Method::POST, &["auth", "logout"]) {
            Ok(builder) => self.send_empty(builder, "session").await,
            Err(e) => Err(e),
        };
        self.set_token(None);
        result
    }
}
