use crate::error::LoginErrorEnum;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Body returned by the authentication endpoint on success.
///
/// Only `accessToken` is interpreted; every other field is kept untouched
/// in `extra`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    access_token: Secret<String>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl AuthResult {
    /// Parse a response body, rejecting anything without a usable token.
    pub fn parse(body: &[u8]) -> Result<Self, LoginErrorEnum> {
        let result: AuthResult = serde_json::from_slice(body).map_err(|e| {
            tracing::error!("Failed to parse authentication response: {:?}", e);
            LoginErrorEnum::MalformedAuthResponse(e)
        })?;
        if result.access_token.expose_secret().trim().is_empty() {
            tracing::error!("Authentication response carries an empty access token");
            return Err(LoginErrorEnum::EmptyAccessToken);
        }
        Ok(result)
    }

    pub fn access_token(&self) -> &Secret<String> {
        &self.access_token
    }

    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }
}
