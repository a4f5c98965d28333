// web-server/src/lib.rs
pub mod api;
pub mod error;
pub mod notes;
pub mod pages;
pub mod session;
pub mod static_files;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use common::models::user::{UserDirectory, UserRecord};
use common::{generate_access_token, AuthConfig, AuthError, Config, UserListError};

/// Shared, read-only state handed to every handler
pub struct AppState {
    pub users: UserDirectory,
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(users: UserDirectory, auth: AuthConfig) -> Self {
        Self { users, auth }
    }

    /// Load the configured user list, or the bundled one when none is set
    pub fn from_config(config: &Config) -> Result<Self, UserListError> {
        let users = match &config.users_path {
            Some(path) => {
                tracing::info!("Loading user list from {}", path);
                UserDirectory::load(path)?
            },
            None => UserDirectory::bundled()?,
        };

        Ok(Self::new(users, config.auth.clone()))
    }

    /// Check a credential pair and sign a token for the matched user
    pub fn issue_token(&self, id: &str, password: &str) -> Result<(&UserRecord, String), AuthError> {
        let user = match self.users.authenticate(id, password) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Rejected login for id {}: {}", id, e);
                return Err(e);
            }
        };

        let token = generate_access_token(
            user,
            self.auth.secret.as_bytes(),
            self.auth.token_ttl(),
            Utc::now(),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign token for {}: {}", user.id, e);
            e
        })?;

        tracing::info!("Issued login token for {}", user.id);
        Ok((user, token))
    }
}

/// Simple health check
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

/// Register every route except static assets
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .configure(api::configure)
        .configure(pages::configure)
        .configure(notes::configure);
}
