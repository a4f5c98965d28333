// common/src/error.rs
use thiserror::Error;

/// Failures of the login and token checks.
///
/// Unknown identifiers and wrong passwords share one variant so callers
/// cannot tell which half of the pair was wrong.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("ID and password do not match")]
    InvalidCredentials,

    #[error("no login token was presented")]
    MissingToken,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token rejected: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Short message safe to show to the browser
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "ID and password do not match.",
            AuthError::Signing(_) => "Failed to sign the login token.",
            AuthError::MissingToken | AuthError::Verification(_) => "You are not authorized.",
        }
    }
}

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note text is empty")]
    EmptyText,
}

impl NoteError {
    pub fn prompt(&self) -> &'static str {
        match self {
            NoteError::EmptyText => "Please enter some text.",
        }
    }
}

#[derive(Debug, Error)]
pub enum UserListError {
    #[error("failed to read user list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed user list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate user id in user list: {0}")]
    DuplicateId(String),
}
