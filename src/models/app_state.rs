use std::sync::Arc;

use crate::config::ServerConfig;
use crate::game::GameLauncher;

/// Application state shared between requests. Nothing in it is mutated after startup.
pub struct AppState {
    pub config: ServerConfig,
    pub launcher: Arc<dyn GameLauncher>,
}

impl AppState {
    pub fn new(config: ServerConfig, launcher: Arc<dyn GameLauncher>) -> Self {
        AppState { config, launcher }
    }
}
