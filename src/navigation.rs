//! Collaborators the login flow talks to without knowing what they do:
//! the router that opens a screen and the notifier that shows a message.

use crate::constant::LOGIN_SUCCESS_MESSAGE;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Screens the login flow knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    /// The authenticated area.
    Dashboard,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Login => "",
            Route::Dashboard => "dashboard",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.as_str())
    }
}

/// A message meant for the user, not for the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LoginSucceeded,
    LoginFailed { message: String },
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::LoginSucceeded => f.write_str(LOGIN_SUCCESS_MESSAGE),
            Notice::LoginFailed { message } => write!(f, "login failed: {}", message),
        }
    }
}

pub trait Router {
    fn navigate(&self, route: Route);
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<T: Router + ?Sized> Router for Arc<T> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}
