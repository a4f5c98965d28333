// web-server/src/api/mod.rs
use actix_web::{web, Error, HttpRequest};
use actix_web::error::JsonPayloadError;
use common::AuthError;

use crate::error::ApiError;

pub mod user;

// Unreadable login bodies fail like any other credential mismatch
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    tracing::info!("Rejected unreadable login body: {}", err);
    ApiError::Auth(AuthError::InvalidCredentials).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .service(user::login)
            .service(user::identity)
    );
}
