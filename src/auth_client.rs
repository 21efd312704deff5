use crate::constant::IDENTIFIER_FIELD;
use crate::domain::{AuthResult, Credentials};
use crate::error::LoginErrorEnum;
use crate::request::LoginData;
use reqwest::{Client, Url};
use std::time::Duration;

#[derive(Debug)]
pub struct AuthClient {
    http_client: Client,
    base_url: String,
    login_path: String,
    identifier_field: String,
}

impl AuthClient {
    /// Build a client for `base_url` + `login_path`.
    ///
    /// With `timeout` set to `None` a request waits for the endpoint for as
    /// long as it takes.
    pub fn new(
        base_url: String,
        login_path: String,
        timeout: Option<Duration>,
    ) -> Result<Self, LoginErrorEnum> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| {
            tracing::error!("Failed to build http client: {:?}", e);
            LoginErrorEnum::BuildHttpClientError(e)
        })?;
        Ok(AuthClient {
            http_client,
            base_url,
            login_path,
            identifier_field: IDENTIFIER_FIELD.into(),
        })
    }

    /// Send the identifier under `field` instead of `identifier`.
    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = field.into();
        self
    }

    pub fn identifier_field(&self) -> &str {
        &self.identifier_field
    }

    /// `login_path` is always resolved below the path of `base_url`:
    /// `https://host/api` + `/auth/login` gives `https://host/api/auth/login`.
    pub fn login_url(&self) -> Result<Url, LoginErrorEnum> {
        let mut base = Url::parse(&self.base_url).map_err(|e| {
            tracing::error!("Failed to parse url: url={}, e={:?}", &self.base_url, e);
            LoginErrorEnum::ParseUrlError
        })?;
        if !base.path().ends_with('/') {
            let directory = format!("{}/", base.path());
            base.set_path(&directory);
        }
        base.join(self.login_path.trim_start_matches('/'))
            .map_err(|e| {
                tracing::error!("Url failed to join {}: {:?}", &self.login_path, e);
                LoginErrorEnum::JoinUrlError
            })
    }

    /// Send one login request. No retry: whatever goes wrong is handed back.
    #[tracing::instrument(name = "Request access token", skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResult, LoginErrorEnum> {
        let url = self.login_url()?;
        let request_body = LoginData::new(&self.identifier_field, credentials);

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach authentication endpoint: {:?}", e);
                LoginErrorEnum::NetworkFailure(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Authentication endpoint answered {}", status);
            return Err(LoginErrorEnum::AuthRejected {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read authentication response: {:?}", e);
            LoginErrorEnum::NetworkFailure(e)
        })?;
        AuthResult::parse(&body)
    }
}
