use crate::constant::PASSWORD_MASK;
use crate::domain::Credentials;
use secrecy::{ExposeSecret, Secret};

/// Editable login form.
///
/// Both fields start out absent and stay that way until the user types
/// something. The visibility flag only affects how the password is shown.
#[derive(Debug, Default)]
pub struct CredentialForm {
    identifier: Option<String>,
    password: Option<Secret<String>>,
    show_password: bool,
}

impl CredentialForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = Some(identifier.into());
    }

    pub fn set_password(&mut self, password: Secret<String>) {
        self.password = Some(password);
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Snapshot of the fields as they are right now. No validation.
    pub fn current_value(&self) -> Credentials {
        Credentials::new(self.identifier.clone(), self.password.clone())
    }

    /// The password as it should be rendered: verbatim when visible,
    /// one mask character per typed character otherwise.
    pub fn password_display(&self) -> String {
        match &self.password {
            None => String::new(),
            Some(password) if self.show_password => password.expose_secret().clone(),
            Some(password) => PASSWORD_MASK
                .to_string()
                .repeat(password.expose_secret().chars().count()),
        }
    }
}
