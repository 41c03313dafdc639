use serde_json::Value;

use super::{
    client::ApiClient,
    types::{body_field, LoginRequest, RegisterRequest},
};
use crate::{error::AuthError, session, session::Session, utils::timing::sleep_ms};

/// The register endpoint may not issue a real token; the demo falls back to
/// a sentinel so the session lifecycle stays uniform.
pub const REGISTER_TOKEN_FALLBACK: &str = "demo-token";

/// How long the signup success message stays visible before the caller
/// redirects to the dashboard.
pub const REDIRECT_DELAY_MS: u32 = 2000;

/// Duration of the simulated password-reset round trip.
pub const RESET_DELAY_MS: u32 = 2000;

const LOGIN_FALLBACK_MESSAGE: &str = "Login failed. Please try again.";
const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// Local checks that run before any network call.
pub fn validate_registration(password: &str, confirm_password: &str) -> Result<(), AuthError> {
    if password != confirm_password {
        return Err(AuthError::Validation("Passwords do not match.".into()));
    }
    if password.len() < 6 {
        return Err(AuthError::Validation(
            "Password must be at least 6 characters long.".into(),
        ));
    }
    Ok(())
}

fn api_message(body: &Value, fallback: &str) -> String {
    body_field(body, "error").unwrap_or(fallback).to_string()
}

impl ApiClient {
    /// Credential POST. Succeeds only on a 2xx response that carries a
    /// token; the session store is untouched on every failure path.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Session, AuthError> {
        let base_url = self.resolved_base_url();
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http_client()
            .post(format!("{}/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        match body_field(&body, "token") {
            Some(token) if status.is_success() && !token.is_empty() => {
                session::persist_login(self.store(), token, email, remember_me);
                Ok(self.session())
            }
            _ => Err(AuthError::Api(api_message(&body, LOGIN_FALLBACK_MESSAGE))),
        }
    }

    /// Registers a new account. Validation short-circuits locally; on
    /// success the caller shows its success message and redirects after
    /// [`REDIRECT_DELAY_MS`].
    pub async fn register(
        &self,
        full_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Session, AuthError> {
        validate_registration(password, confirm_password)?;

        let base_url = self.resolved_base_url();
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http_client()
            .post(format!("{}/register", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let has_id = body.get("id").is_some_and(|id| !id.is_null());
        if status.is_success() && has_id {
            let token = match body_field(&body, "token") {
                Some(token) if !token.is_empty() => token,
                _ => REGISTER_TOKEN_FALLBACK,
            };
            session::persist_registration(self.store(), token, email, full_name);
            Ok(self.session())
        } else {
            Err(AuthError::Api(api_message(&body, REGISTER_FALLBACK_MESSAGE)))
        }
    }

    /// The demo API has no reset endpoint. The fixed delay is intentional:
    /// it keeps the loading indicator meaningful even though nothing is
    /// sent, so the form behaves like the real flow would.
    pub async fn request_password_reset(&self, _email: &str) -> Result<(), AuthError> {
        sleep_ms(RESET_DELAY_MS).await;
        Ok(())
    }

    pub fn logout(&self) {
        session::clear(self.store());
    }
}
