use crate::constant::IDENTIFIER_FIELD;
use crate::domain::Credentials;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// JSON body of the login request; absent fields are sent as `null`.
///
/// The identifier goes out under `identifier_field`, so endpoints that expect
/// e.g. `emailOrMobile` or `username` can be served without code changes.
pub struct LoginData<'a> {
    pub identifier_field: &'a str,
    pub identifier: Option<&'a str>,
    pub password: Option<&'a str>,
}

impl<'a> LoginData<'a> {
    pub fn new(identifier_field: &'a str, credentials: &'a Credentials) -> Self {
        Self {
            identifier_field,
            identifier: credentials.identifier(),
            password: credentials.expose_password(),
        }
    }
}

impl<'a> From<&'a Credentials> for LoginData<'a> {
    fn from(value: &'a Credentials) -> Self {
        Self::new(IDENTIFIER_FIELD, value)
    }
}

impl Serialize for LoginData<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.identifier_field, &self.identifier)?;
        map.serialize_entry("password", &self.password)?;
        map.end()
    }
}
