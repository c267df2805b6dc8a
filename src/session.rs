use crate::errors::{FormError, TransitionError};
use crate::models::{AuthForm, SessionStatus, UserProfile};

pub const DEMO_NAME: &str = "Demo User";
pub const DEMO_EMAIL: &str = "demo@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Validated auth form input. Nothing is checked beyond presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

impl AuthForm {
    pub fn validate(&self, mode: AuthMode) -> Result<Credentials, FormError> {
        let email = required(&self.email, "email")?;
        let password = required(&self.password, "password")?;
        let name = match mode {
            AuthMode::Login => None,
            AuthMode::Register => Some(required(&self.name, "name")?),
        };

        Ok(Credentials {
            mode,
            email,
            password,
            name,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    Authenticating,
    LoggedIn(UserProfile),
}

impl Session {
    /// Any stored token counts as a signed-in demo user.
    pub fn restore(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Session::LoggedIn(UserProfile {
                name: DEMO_NAME.to_string(),
                email: DEMO_EMAIL.to_string(),
            }),
            _ => Session::LoggedOut,
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self {
            Session::LoggedOut => SessionStatus::LoggedOut,
            Session::Authenticating => SessionStatus::Authenticating,
            Session::LoggedIn(_) => SessionStatus::LoggedIn,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::LoggedIn(user) => Some(user),
            _ => None,
        }
    }

    pub fn begin(&mut self) -> Result<(), TransitionError> {
        match self {
            Session::LoggedOut => {
                *self = Session::Authenticating;
                Ok(())
            }
            Session::Authenticating => Err(TransitionError::AuthInProgress),
            Session::LoggedIn(_) => Err(TransitionError::AlreadySignedIn),
        }
    }

    pub fn complete(&mut self, profile: UserProfile) -> Result<(), TransitionError> {
        if !matches!(self, Session::Authenticating) {
            return Err(TransitionError::NotAuthenticating);
        }
        *self = Session::LoggedIn(profile);
        Ok(())
    }

    /// Moves to `LoggedOut` from any state, returning the profile that was signed in.
    pub fn logout(&mut self) -> Option<UserProfile> {
        match std::mem::take(self) {
            Session::LoggedIn(user) => Some(user),
            _ => None,
        }
    }
}

/// Profile the sign-in collaborator fabricates for a set of credentials.
pub fn profile_for(credentials: &Credentials) -> UserProfile {
    let name = match (&credentials.mode, &credentials.name) {
        (AuthMode::Register, Some(name)) => name.clone(),
        _ => DEMO_NAME.to_string(),
    };
    UserProfile {
        name,
        email: credentials.email.clone(),
    }
}
