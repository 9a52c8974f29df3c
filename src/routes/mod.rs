use actix_files::{self as fs, NamedFile};
use actix_web::{error, http::header, web, HttpResponse, Responder};
use log::{info, warn};
use std::path::Path;

use crate::models::{AppState, DebugInfo, SuccessQuery};

pub mod start_game;

async fn serve_page(app_state: &AppState, page: &str) -> actix_web::Result<NamedFile> {
    let path = app_state.config.page_path(page);
    NamedFile::open_async(&path).await.map_err(|e| {
        warn!("Could not open page {}: {}", path.display(), e);
        error::ErrorNotFound(format!("Page not found: {}", page))
    })
}

/// Landing page of the fundraiser
pub async fn index(app_state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    info!("Rendering index.html");
    serve_page(&app_state, "index.html").await
}

/// Payment is always simulated: go straight to the success step
pub async fn checkout() -> impl Responder {
    info!("Simulating checkout");
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/success"))
        .finish()
}

pub async fn success(query: web::Query<SuccessQuery>) -> impl Responder {
    match &query.session_id {
        Some(session_id) => info!("Checkout completed for session {}", session_id),
        None => info!("No session_id provided. This is either a simulated payment or direct access."),
    }
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/settings"))
        .finish()
}

/// Difficulty and color selection page
pub async fn game_settings(app_state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    info!("Loading game settings page...");
    serve_page(&app_state, "settings.html").await
}

/// Report where the server looks for its pages and the game
pub async fn debug(app_state: web::Data<AppState>) -> impl Responder {
    let config = &app_state.config;
    let info = DebugInfo {
        templates_dir: config.templates_dir.clone(),
        static_dir: config.static_dir.clone(),
        templates_exist: config.templates_dir.is_dir(),
        static_exists: config.static_dir.is_dir(),
        index_html_exists: config.page_path("index.html").is_file(),
        settings_html_exists: config.page_path("settings.html").is_file(),
        game_program: config.game_program.clone(),
        game_script: config.game_script.clone(),
        game_script_exists: config.game_script.exists(),
        engine_path: config.engine_path.clone(),
        engine_exists: config.engine_path.as_ref().map(|p| p.exists()),
        cwd: std::env::current_dir().ok(),
    };
    HttpResponse::Ok().json(info)
}

/// Configure the HTTP routes
pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(
            web::resource("/checkout")
                .route(web::get().to(checkout))
                .route(web::post().to(checkout)),
        )
        .service(web::resource("/success").route(web::get().to(success)))
        .service(web::resource("/settings").route(web::get().to(game_settings)))
        .service(web::resource("/start-game").route(web::get().to(start_game::start_game)))
        .service(web::resource("/debug").route(web::get().to(debug)))
        .service(fs::Files::new("/static", static_dir));
}
