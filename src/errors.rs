use axum::http::StatusCode;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a whole number from 1 to 10")]
    OutOfRange(&'static str),
    #[error("unknown activity '{0}'")]
    UnknownActivity(String),
}

/// A state machine was asked to move along an edge it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("sign in required")]
    NotSignedIn,
    #[error("already signed in")]
    AlreadySignedIn,
    #[error("sign-in already in progress")]
    AuthInProgress,
    #[error("no sign-in in progress")]
    NotAuthenticating,
    #[error("a mood entry is already being saved")]
    SubmitPending,
    #[error("no mood entry is being saved")]
    NoSubmitPending,
    #[error("still waiting for the assistant to reply")]
    ReplyPending,
    #[error("no assistant reply is pending")]
    NoReplyPending,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotSignedIn => Self::unauthorized(err.to_string()),
            _ => Self::conflict(err.to_string()),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Form(err) => err.into(),
            TrackerError::Transition(err) => err.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
