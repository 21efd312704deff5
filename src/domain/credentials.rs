use secrecy::{ExposeSecret, Secret};

/// Identifier/password pair taken from the form at submit time.
///
/// Either field may be absent: nothing is validated here, an incomplete
/// value is still sent to the endpoint.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub identifier: Option<String>,
    pub password: Option<Secret<String>>,
}

impl Credentials {
    pub fn new(identifier: Option<String>, password: Option<Secret<String>>) -> Self {
        Self {
            identifier,
            password,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    pub fn expose_password(&self) -> Option<&str> {
        self.password.as_ref().map(|p| p.expose_secret().as_str())
    }

    pub fn is_complete(&self) -> bool {
        self.identifier.is_some() && self.password.is_some()
    }
}
