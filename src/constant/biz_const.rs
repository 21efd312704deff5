/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// key of the access token in the session file, trailing colon included
pub const TOKEN_KEY: &str = "token:";

/// default JSON key of the identifier in the login request
pub const IDENTIFIER_FIELD: &str = "identifier";

/// text shown to the user once the endpoint accepts the credentials
pub const LOGIN_SUCCESS_MESSAGE: &str = "login success";

/// character used to hide the password while it is not visible
pub const PASSWORD_MASK: char = '*';
