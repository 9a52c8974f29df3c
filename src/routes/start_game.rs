use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};

use crate::models::{AppState, GameSettings, LaunchResult, StartGameQuery};

/// `GET /start-game?difficulty=<0-4>&color=<white|black>`
///
/// Validates both parameters and launches the game without waiting for it.
/// Every call may start another game; concurrent launches are not limited.
pub async fn start_game(req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    let query = match web::Query::<StartGameQuery>::from_query(req.query_string()) {
        Ok(query) => query.into_inner(),
        Err(e) => {
            warn!("Malformed start-game query '{}': {}", req.query_string(), e);
            return HttpResponse::BadRequest().json(LaunchResult::error(format!("Invalid query: {}", e)));
        }
    };

    let settings = match GameSettings::from_params(query.difficulty.as_deref(), query.color.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Rejected start-game request: {}", e);
            return HttpResponse::BadRequest().json(LaunchResult::error(e.to_string()));
        }
    };

    info!(
        "Starting game with: difficulty={} ({}), color={}",
        settings.difficulty,
        settings.difficulty.label(),
        settings.color
    );

    match app_state.launcher.launch(&settings) {
        Ok(handle) => {
            info!("Launched game {} for settings {:?}", handle.id, settings);
            HttpResponse::Ok().json(LaunchResult::success(settings))
        }
        Err(e) => {
            warn!("Error starting game: {}", e);
            let mut response = if e.is_missing_resource() {
                HttpResponse::NotFound()
            } else {
                HttpResponse::InternalServerError()
            };
            response.json(LaunchResult::error(e.to_string()))
        }
    }
}
