use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::game_settings::GameSettings;

/// Query string of `GET /start-game`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct StartGameQuery {
    pub difficulty: Option<String>,
    pub color: Option<String>,
}

/// Query string of `GET /success`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SuccessQuery {
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Success,
    Error,
}

/// Response body of `GET /start-game`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LaunchResult {
    pub status: LaunchStatus,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<GameSettings>,
}

impl LaunchResult {
    pub fn success(settings: GameSettings) -> Self {
        LaunchResult {
            status: LaunchStatus::Success,
            message: "Game started successfully!".to_string(),
            params: Some(settings),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        LaunchResult {
            status: LaunchStatus::Error,
            message: message.into(),
            params: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == LaunchStatus::Success
    }
}

/// Response body of `GET /debug`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DebugInfo {
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub templates_exist: bool,
    pub static_exists: bool,
    pub index_html_exists: bool,
    pub settings_html_exists: bool,
    pub game_program: String,
    pub game_script: PathBuf,
    pub game_script_exists: bool,
    pub engine_path: Option<PathBuf>,
    pub engine_exists: Option<bool>,
    pub cwd: Option<PathBuf>,
}
