// web-server/src/session.rs
use actix_web::cookie::time::Duration as CookieDuration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use common::models::session::SessionClaims;
use common::{validate_access_token, AuthConfig, AuthError};

/// Cookie carrying a freshly issued login token
pub fn token_cookie(auth: &AuthConfig, token: String) -> Cookie<'static> {
    // Browsers drop SameSite=None cookies that are not Secure
    let same_site = if auth.cookie_secure {
        SameSite::None
    } else {
        SameSite::Lax
    };

    Cookie::build(auth.cookie_name.clone(), token)
        .path("/")
        .http_only(true)
        .secure(auth.cookie_secure)
        .same_site(same_site)
        .max_age(CookieDuration::seconds(auth.token_ttl_seconds))
        .finish()
}

/// Empty cookie that makes the browser forget the login token
pub fn removal_cookie(auth: &AuthConfig) -> Cookie<'static> {
    Cookie::build(auth.cookie_name.clone(), "")
        .path("/")
        .max_age(CookieDuration::seconds(0))
        .finish()
}

pub fn has_token(req: &HttpRequest, auth: &AuthConfig) -> bool {
    req.cookie(&auth.cookie_name).is_some()
}

/// Verify the login token cookie and return its claims
pub fn authenticate(req: &HttpRequest, auth: &AuthConfig) -> Result<SessionClaims, AuthError> {
    let cookie = req.cookie(&auth.cookie_name).ok_or(AuthError::MissingToken)?;
    validate_access_token(cookie.value(), auth.secret.as_bytes())
}
