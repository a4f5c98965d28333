// web-server/src/static_files.rs
use actix_files::Files;
use actix_web::{web, HttpRequest, HttpResponse};
use common::StaticFilesConfig;
use serde_json::json;

// Fallback for unmatched routes
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    // API callers get JSON, browsers get plain text
    if req.path().starts_with("/api/") {
        return HttpResponse::NotFound().json(json!({
            "success": false,
            "errormessage": "Not found"
        }));
    }

    HttpResponse::NotFound().body("Not found")
}

// Serve stylesheet and page script under /static
pub fn configure(cfg: &mut web::ServiceConfig, config: &StaticFilesConfig) {
    cfg.service(
        Files::new("/static", &config.path)
            .prefer_utf8(true)
            .use_etag(true)
            .use_last_modified(true)
    );
}
