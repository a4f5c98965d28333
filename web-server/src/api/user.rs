// web-server/src/api/user.rs
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::session;
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub access_token: String,
}

// Exchange a credential pair for a signed login token
#[post("/user")]
pub async fn login(
    body: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let (_, access_token) = state.issue_token(&body.id, &body.password)?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        access_token,
    }))
}

// Return the claims of the login token cookie
#[get("/user")]
pub async fn identity(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let claims = session::authenticate(&req, &state.auth).map_err(|e| {
        tracing::info!("Identity request rejected: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(claims))
}
