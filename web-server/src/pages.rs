// web-server/src/pages.rs
use actix_web::http::{header, StatusCode};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::error::ApiError;
use crate::session;
use crate::AppState;

pub const LOGIN_FAILED_MESSAGE: &str = "Please check your ID or password.";
pub const ACCESS_DENIED_MESSAGE: &str = "You do not have access. Please log in again.";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "wall.html")]
pub struct WallTemplate {
    pub member_name: String,
}

/// One note rendered as a card on the wall
#[derive(Template)]
#[template(path = "note_card.html")]
pub struct NoteCardTemplate<'a> {
    pub id: u64,
    pub member_name: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub id: String,
    pub password: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(login)
        .service(logout);
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(mime::TEXT_HTML_UTF_8)
        .body(body)
}

fn login_page(status: StatusCode, error_message: Option<&str>) -> Result<HttpResponse, ApiError> {
    let page = LoginTemplate {
        error_message: error_message.map(str::to_string),
    }
    .render()?;

    Ok(html(status, page))
}

fn redirect_home() -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, "/"));
    builder
}

// Login form without a token cookie, the wall once one is present
#[get("/")]
pub async fn index(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    if !session::has_token(&req, &state.auth) {
        return login_page(StatusCode::OK, None);
    }

    match session::authenticate(&req, &state.auth) {
        Ok(claims) => {
            let page = WallTemplate {
                member_name: claims.member_name,
            }
            .render()?;
            Ok(html(StatusCode::OK, page))
        },
        Err(e) => {
            tracing::info!("Discarding unusable login token: {}", e);
            let mut response = login_page(StatusCode::OK, Some(ACCESS_DENIED_MESSAGE))?;
            if let Err(e) = response.add_cookie(&session::removal_cookie(&state.auth)) {
                tracing::error!("Failed to attach removal cookie: {}", e);
            }
            Ok(response)
        }
    }
}

// The browser form submits the password Base64-encoded, matching the stored list
#[post("/login")]
pub async fn login(
    form: web::Form<LoginForm>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let encoded_password = base64::encode(form.password.as_bytes());

    match state.issue_token(&form.id, &encoded_password) {
        Ok((_, token)) => Ok(redirect_home()
            .cookie(session::token_cookie(&state.auth, token))
            .finish()),
        Err(_) => login_page(StatusCode::UNAUTHORIZED, Some(LOGIN_FAILED_MESSAGE)),
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    redirect_home()
        .cookie(session::removal_cookie(&state.auth))
        .finish()
}
