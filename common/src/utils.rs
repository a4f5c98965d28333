// common/src/utils.rs
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, decode, Header, Algorithm, Validation, EncodingKey, DecodingKey};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::error::AuthError;
use crate::models::session::SessionClaims;
use crate::models::user::UserRecord;

/// Setup tracing for consistent logging across the workspace
pub fn setup_tracing() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Sign a login token for `user`, valid for `ttl` from `issued_at`
pub fn generate_access_token(
    user: &UserRecord,
    secret: &[u8],
    ttl: Duration,
    issued_at: DateTime<Utc>,
) -> Result<String, AuthError> {
    let claims = SessionClaims::for_user(user, issued_at, ttl);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret)
    )
    .map_err(AuthError::Signing)
}

/// Verify signature and expiry of a login token and return its claims
pub fn validate_access_token(token: &str, secret: &[u8]) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // exp is exact; the token window is only a few minutes long
    validation.leeway = 0;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret),
        &validation
    )
    .map_err(AuthError::Verification)?;

    Ok(token_data.claims)
}
