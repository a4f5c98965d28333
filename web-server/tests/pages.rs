mod helpers;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::{header, StatusCode};
use actix_web::{dev::ServiceResponse, test, App};
use common::{validate_access_token, StaticFilesConfig};
use web_server::pages::{ACCESS_DENIED_MESSAGE, LOGIN_FAILED_MESSAGE};

use helpers::*;

fn login_cookie(resp: &ServiceResponse) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == "LoginToken")
        .map(|cookie| cookie.into_owned())
}

async fn body_text(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("page is utf-8")
}

#[actix_web::test]
async fn test_index_without_cookie_shows_login_form() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("action=\"/login\""));
    assert!(!body.contains("note-list"));
}

#[actix_web::test]
async fn test_form_login_sets_cookie_and_redirects() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("id", USER_ID), ("password", TYPED_PASSWORD)])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/")
    );

    let cookie = login_cookie(&resp).expect("login cookie is set");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::None));

    let claims = validate_access_token(cookie.value(), SECRET.as_bytes())
        .expect("cookie holds a valid token");
    assert_eq!(claims.member_id, USER_ID);
}

#[actix_web::test]
async fn test_form_login_failure_shows_message() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    // The form encodes the password itself, so the stored form must not be typed
    for (id, password) in [(USER_ID, "nope"), ("bob", TYPED_PASSWORD), (USER_ID, ENCODED_PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_form([("id", id), ("password", password)])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(login_cookie(&resp).is_none());
        assert!(body_text(resp).await.contains(LOGIN_FAILED_MESSAGE));
    }
}

#[actix_web::test]
async fn test_index_with_valid_cookie_shows_wall() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/")
        .cookie(Cookie::new("LoginToken", fresh_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains(USER_NAME));
    assert!(body.contains("note-list"));
    assert!(body.contains("action=\"/logout\""));
}

#[actix_web::test]
async fn test_index_with_expired_cookie_clears_it() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    for token in [expired_token(), foreign_token()] {
        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new("LoginToken", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let removal = login_cookie(&resp).expect("cookie is cleared");
        assert_eq!(removal.value(), "");

        let body = body_text(resp).await;
        assert!(body.contains(ACCESS_DENIED_MESSAGE));
        assert!(body.contains("action=\"/login\""));
    }
}

#[actix_web::test]
async fn test_logout_clears_cookie() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/logout")
        .cookie(Cookie::new("LoginToken", fresh_token()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let removal = login_cookie(&resp).expect("cookie is cleared");
    assert_eq!(removal.value(), "");
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(web_server::configure),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

#[actix_web::test]
async fn test_note_script_never_drops_notes_silently() {
    let static_config = StaticFilesConfig {
        path: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
    };
    let app = test::init_service(
        App::new()
            .app_data(test_state())
            .configure(|cfg| web_server::static_files::configure(cfg, &static_config)),
    )
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/static/notes.js").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let script = body_text(resp).await;
    // Sending waits for an open socket, and any close returns to the login page
    assert!(script.contains("socket.readyState !== WebSocket.OPEN"));
    assert!(script.contains("The connection was lost. Please log in again."));
    assert!(script.contains("You do not have access. Please log in again."));
}
