use clap::Args;
use std::path::{Path, PathBuf};

/// Settings for `serve`. Every flag falls back to an environment variable.
#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "FUNDRAISER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "FUNDRAISER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Directory holding index.html and settings.html
    #[arg(long, env = "FUNDRAISER_TEMPLATES", default_value = "./templates")]
    pub templates_dir: PathBuf,

    #[arg(long, env = "FUNDRAISER_STATIC", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Program used to run the game
    #[arg(long, env = "FUNDRAISER_GAME_PROGRAM", default_value = "python3")]
    pub game_program: String,

    /// Game entry point handed to the game program as its first argument
    #[arg(long, env = "FUNDRAISER_GAME_SCRIPT", default_value = "./main.py")]
    pub game_script: PathBuf,

    /// Stockfish binary the game needs; checked before launching when set
    #[arg(long, env = "STOCKFISH_PATH")]
    pub engine_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn page_path(&self, page: &str) -> PathBuf {
        self.templates_dir.join(page)
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            templates_dir: PathBuf::from("./templates"),
            static_dir: PathBuf::from("./static"),
            game_program: "python3".to_string(),
            game_script: PathBuf::from("./main.py"),
            engine_path: None,
        }
    }
}
