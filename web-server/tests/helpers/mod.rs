#![allow(dead_code)]

use actix_web::web;
use chrono::{Duration, Utc};
use common::models::user::{UserDirectory, UserRecord};
use common::{generate_access_token, AuthConfig};
use web_server::AppState;

pub const USER_ID: &str = "alice";
pub const USER_NAME: &str = "Alice Kim";
/// What the user types into the login form
pub const TYPED_PASSWORD: &str = "alice-pass";
/// What the login form submits and the user list stores
pub const ENCODED_PASSWORD: &str = "YWxpY2UtcGFzcw==";
pub const SECRET: &str = "integration-secret";

pub fn user() -> UserRecord {
    UserRecord {
        id: USER_ID.to_string(),
        name: USER_NAME.to_string(),
        password: ENCODED_PASSWORD.to_string(),
    }
}

pub fn test_state() -> web::Data<AppState> {
    let users = UserDirectory::new(vec![user()]).expect("ids are unique");
    let auth = AuthConfig {
        secret: SECRET.to_string(),
        ..AuthConfig::default()
    };

    web::Data::new(AppState::new(users, auth))
}

pub fn fresh_token() -> String {
    generate_access_token(&user(), SECRET.as_bytes(), Duration::minutes(5), Utc::now())
        .expect("token should sign")
}

pub fn expired_token() -> String {
    generate_access_token(
        &user(),
        SECRET.as_bytes(),
        Duration::minutes(5),
        Utc::now() - Duration::minutes(10),
    )
    .expect("token should sign")
}

pub fn foreign_token() -> String {
    generate_access_token(&user(), b"someone-else", Duration::minutes(5), Utc::now())
        .expect("token should sign")
}

/// Valid right now, expiring after `ttl_seconds`
pub fn short_lived_token(ttl_seconds: i64) -> String {
    generate_access_token(&user(), SECRET.as_bytes(), Duration::seconds(ttl_seconds), Utc::now())
        .expect("token should sign")
}
