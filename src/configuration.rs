use crate::auth_client::AuthClient;
use crate::constant::{IDENTIFIER_FIELD, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT};
use crate::error::LoginErrorEnum;
use crate::session_store::SessionStore;
use config::{Config, File};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub auth_client: AuthClientSettings,
    pub session: SessionSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AuthClientSettings {
    pub base_url: String,
    /// Resolved below the path of `base_url`, a leading `/` is ignored.
    pub login_path: String,
    /// JSON key of the identifier in the request body.
    #[serde(default = "default_identifier_field")]
    pub identifier_field: String,
    /// Absent means the client waits on the endpoint indefinitely.
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl AuthClientSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }

    pub fn client(&self) -> Result<AuthClient, LoginErrorEnum> {
        Ok(AuthClient::new(
            self.base_url.clone(),
            self.login_path.clone(),
            self.timeout(),
        )?
        .with_identifier_field(self.identifier_field.clone()))
    }
}

fn default_identifier_field() -> String {
    IDENTIFIER_FIELD.into()
}

#[derive(Deserialize, Clone, Debug)]
pub struct SessionSettings {
    pub file_path: PathBuf,
    pub token_key: String,
}

impl SessionSettings {
    pub fn store(&self) -> Result<SessionStore, LoginErrorEnum> {
        SessionStore::init(&self.file_path, self.token_key.clone())
    }
}

pub fn get_configuration() -> Result<Settings, LoginErrorEnum> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        LoginErrorEnum::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            LoginErrorEnum::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        // E.g. `APP_AUTH_CLIENT__BASE_URL=http://localhost:3000` sets
        // `Settings.auth_client.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            LoginErrorEnum::BuildConfigSourcesError(e)
        })?;
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        LoginErrorEnum::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for the client.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Self::Local),
            PRODUCTION_ENVIRONMENT => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'.",
                other
            )),
        }
    }
}
