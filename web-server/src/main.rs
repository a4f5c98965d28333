// web-server/src/main.rs
use actix_web::{web, App, HttpServer};
use common::{setup_tracing, Config};
use web_server::{static_files, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Setup tracing
    setup_tracing();

    // Load configuration
    let config = Config::from_env();

    if config.uses_default_secret() {
        tracing::warn!("Signing tokens with the built-in demo secret; set APP__AUTH__SECRET to override it");
    }

    let state = AppState::from_config(&config).map_err(|e| {
        tracing::error!("Failed to load user list: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    // Save address before moving config into the server factory
    let server_addr = config.web_server_addr.clone();
    let static_config = config.static_files.clone();

    tracing::info!(
        "Starting Web Server on {} with {} known users",
        server_addr,
        state.users.len()
    );

    let state_data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .configure(web_server::configure)
            .configure(|cfg| static_files::configure(cfg, &static_config))
            .default_service(web::route().to(static_files::not_found))
    })
    .bind(&server_addr)?
    .run()
    .await
}
