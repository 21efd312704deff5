use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum LoginErrorEnum {
    // REMOTE AUTHENTICATION
    #[error("Failed to reach the authentication endpoint.")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("The authentication endpoint rejected the credentials with status {status}.")]
    AuthRejected { status: u16 },

    #[error("The authentication response is not a valid login result.")]
    MalformedAuthResponse(#[source] serde_json::Error),

    #[error("The authentication response carries an empty access token.")]
    EmptyAccessToken,

    #[error("A login is already being submitted.")]
    AlreadySubmitting,

    // VALIDATE URL
    #[error("Url is incorrect.")]
    ParseUrlError,

    #[error("Url join path error.")]
    JoinUrlError,

    #[error("Failed to build the http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    // SESSION FILE
    #[error("Failed to read the session file.")]
    ReadSessionFileError(#[source] std::io::Error),

    #[error("The session file is not a valid key/value map.")]
    ParseSessionFileError(#[source] serde_json::Error),

    #[error("Failed to serialize the session slots.")]
    SerializeSessionError(#[source] serde_json::Error),

    #[error("Failed to create the session directory.")]
    CreateSessionDirError(#[source] std::io::Error),

    #[error("Failed to write the session file.")]
    WriteSessionFileError(#[source] std::io::Error),

    // OTHER
    #[error("Failed to read user input.")]
    ReadInputError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for LoginErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl LoginErrorEnum {
    /// Whether the failure came back from the authentication exchange itself,
    /// as opposed to local I/O or setup.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            LoginErrorEnum::NetworkFailure(_)
                | LoginErrorEnum::AuthRejected { .. }
                | LoginErrorEnum::MalformedAuthResponse(_)
                | LoginErrorEnum::EmptyAccessToken
        )
    }
}
