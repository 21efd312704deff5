use crate::auth_client::AuthClient;
use crate::error::LoginErrorEnum;
use crate::form::CredentialForm;
use crate::navigation::{Notice, Notifier, Route, Router};
use crate::session_store::SessionStore;
use crate::telemetry;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Idle,
    /// A request is in flight.
    Submitting,
    /// The endpoint accepted the credentials; the token is being stored and
    /// the authenticated area opened.
    AuthenticatedTransition,
}

/// Drives one login: form snapshot, request, token, navigation.
pub struct LoginController<R, N> {
    auth_client: AuthClient,
    session: SessionStore,
    router: R,
    notifier: N,
    state: Mutex<LoginState>,
}

impl<R: Router, N: Notifier> LoginController<R, N> {
    pub fn new(auth_client: AuthClient, session: SessionStore, router: R, notifier: N) -> Self {
        Self {
            auth_client,
            session,
            router,
            notifier,
            state: Mutex::new(LoginState::Idle),
        }
    }

    pub fn state(&self) -> LoginState {
        *self.lock_state()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Submit whatever the form holds right now.
    ///
    /// On success the user is told, the token is saved and the dashboard is
    /// opened, in that order. On failure the user is told, nothing is saved,
    /// and the controller is back to `Idle`. A token that cannot be saved is a
    /// failure reported after the success notice, with no navigation. A call
    /// made while another one is still in flight is refused without sending
    /// anything.
    #[tracing::instrument(
        name = "Submit login",
        skip(self, form),
        fields(identifier = tracing::field::Empty)
    )]
    pub async fn submit(&self, form: &CredentialForm) -> Result<(), LoginErrorEnum> {
        let submission = self.begin()?;
        let credentials = form.current_value();
        if let Some(identifier) = credentials.identifier() {
            telemetry::record_field("identifier", &identifier);
        }
        if !credentials.is_complete() {
            tracing::info!("Submitting incomplete credentials");
        }

        let outcome = match self.auth_client.login(&credentials).await {
            Ok(result) => {
                submission.advance(LoginState::AuthenticatedTransition);
                self.notifier.notify(&Notice::LoginSucceeded);
                self.session
                    .save(result.access_token())
                    .map(|()| self.router.navigate(Route::Dashboard))
            }
            Err(error) => Err(error),
        };

        if let Err(error) = &outcome {
            if error.is_auth_failure() {
                tracing::warn!("Login did not complete: {}", error);
            } else {
                tracing::error!("Login did not complete: {:?}", error);
            }
            self.notifier.notify(&Notice::LoginFailed {
                message: error.to_string(),
            });
        }
        outcome
    }

    fn begin(&self) -> Result<Submission<'_>, LoginErrorEnum> {
        let mut state = self.lock_state();
        if *state != LoginState::Idle {
            tracing::warn!("Refusing to submit while in state {:?}", *state);
            return Err(LoginErrorEnum::AlreadySubmitting);
        }
        *state = LoginState::Submitting;
        Ok(Submission { state: &self.state })
    }

    fn lock_state(&self) -> MutexGuard<'_, LoginState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the controller out of `Idle` for as long as it lives, including
/// when the submit future is dropped half way.
struct Submission<'a> {
    state: &'a Mutex<LoginState>,
}

impl Submission<'_> {
    fn advance(&self, next: LoginState) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        self.advance(LoginState::Idle);
    }
}
