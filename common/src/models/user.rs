// common/src/models/user.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{AuthError, UserListError};

/// User list compiled into the binary, used when no `users_path` is configured
const BUNDLED_USERS: &str = include_str!("../../data/users.json");

/// One entry of the static user list.
///
/// `password` holds the value the login form submits (Base64 of what the user
/// typed) and is compared as an opaque string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
struct UserList {
    users: Vec<UserRecord>,
}

/// Outcome of looking a credential pair up in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck<'a> {
    UnknownId,
    WrongPassword,
    Matched(&'a UserRecord),
}

/// Read-only set of known users, loaded once at startup
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Result<Self, UserListError> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(UserListError::DuplicateId(user.id.clone()));
            }
        }
        Ok(Self { users })
    }

    /// Parse a `{"users": [...]}` document
    pub fn from_json(raw: &str) -> Result<Self, UserListError> {
        let list: UserList = serde_json::from_str(raw)?;
        Self::new(list.users)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, UserListError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| UserListError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn bundled() -> Result<Self, UserListError> {
        Self::from_json(BUNDLED_USERS)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn check(&self, id: &str, password: &str) -> CredentialCheck<'_> {
        match self.find(id) {
            None => CredentialCheck::UnknownId,
            Some(user) if user.password == password => CredentialCheck::Matched(user),
            Some(_) => CredentialCheck::WrongPassword,
        }
    }

    pub fn authenticate(&self, id: &str, password: &str) -> Result<&UserRecord, AuthError> {
        match self.check(id, password) {
            CredentialCheck::Matched(user) => Ok(user),
            CredentialCheck::UnknownId => {
                tracing::debug!("Login attempt for unknown id: {}", id);
                Err(AuthError::InvalidCredentials)
            },
            CredentialCheck::WrongPassword => {
                tracing::debug!("Login attempt with wrong password for id: {}", id);
                Err(AuthError::InvalidCredentials)
            },
        }
    }
}
