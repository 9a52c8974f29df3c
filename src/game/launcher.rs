use log::{debug, info};
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;
use subprocess::{Popen, PopenConfig, PopenError};
use thiserror::Error;
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::models::GameSettings;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not find the game at path: {}", .0.display())]
    GameNotFound(PathBuf),

    #[error("Stockfish not found at path: {}", .0.display())]
    EngineNotFound(PathBuf),

    #[error("Error starting game: {0}")]
    Spawn(#[from] PopenError),
}

impl LaunchError {
    /// True when a file the game needs is missing, as opposed to the spawn itself failing
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, LaunchError::GameNotFound(_) | LaunchError::EngineNotFound(_))
    }
}

/// Reference to a game process that was started and then left to run on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameProcessHandle {
    pub id: Uuid,
    pub pid: Option<u32>,
    pub command: Vec<String>,
}

/// Starts external game processes
pub trait GameLauncher: Send + Sync {
    /// Start a game with the given settings without waiting for it to finish.
    /// Nothing is left running when this returns an error.
    fn launch(&self, settings: &GameSettings) -> Result<GameProcessHandle, LaunchError>;
}

/// Runs `<program> <script> --skill <n> --color <0|1>` as a detached process
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: String,
    script: PathBuf,
    engine_path: Option<PathBuf>,
}

impl ProcessLauncher {
    pub fn new(program: impl Into<String>, script: impl Into<PathBuf>) -> Self {
        ProcessLauncher {
            program: program.into(),
            script: script.into(),
            engine_path: None,
        }
    }

    pub fn with_engine(mut self, engine_path: impl Into<PathBuf>) -> Self {
        self.engine_path = Some(engine_path.into());
        self
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        let launcher = ProcessLauncher::new(config.game_program.clone(), config.game_script.clone());
        match &config.engine_path {
            Some(engine) => launcher.with_engine(engine.clone()),
            None => launcher,
        }
    }

    pub fn command(&self, settings: &GameSettings) -> Vec<String> {
        let mut argv = vec![self.program.clone(), self.script.display().to_string()];
        argv.extend(settings.process_args());
        argv
    }

    fn check_resources(&self) -> Result<(), LaunchError> {
        debug!("Looking for game at: {}", self.script.display());
        if !self.script.exists() {
            return Err(LaunchError::GameNotFound(self.script.clone()));
        }
        if let Some(engine) = &self.engine_path {
            if !engine.exists() {
                return Err(LaunchError::EngineNotFound(engine.clone()));
            }
        }
        Ok(())
    }

    fn popen_config(&self) -> PopenConfig {
        let env = self.engine_path.as_ref().map(|engine| {
            let mut env = PopenConfig::current_env();
            env.push((OsString::from("STOCKFISH_PATH"), engine.clone().into_os_string()));
            env
        });
        PopenConfig {
            detached: true,
            env,
            ..Default::default()
        }
    }
}

impl GameLauncher for ProcessLauncher {
    fn launch(&self, settings: &GameSettings) -> Result<GameProcessHandle, LaunchError> {
        self.check_resources()?;

        let command = self.command(settings);
        info!("Command: {}", command.join(" "));
        let process = Popen::create(command.as_slice(), self.popen_config())?;

        let handle = GameProcessHandle {
            id: Uuid::new_v4(),
            pid: process.pid(),
            command,
        };
        info!("Game process {} started with pid {:?}", handle.id, handle.pid);

        // Detached, so dropping the handle neither waits for nor kills the game
        Ok(handle)
    }
}
