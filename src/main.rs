use actix_web::{web, App, HttpServer};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::io;
use std::sync::Arc;

mod config;
mod game;
mod models;
mod routes;
mod settings;

use config::ServerConfig;
use game::ProcessLauncher;
use models::{AppState, Difficulty, PlayerColor};
use settings::{HttpTransport, LaunchPhase, LaunchRequester, SettingsPage};

#[derive(Parser)]
#[command(name = "chess_fundraiser", version, about = "Chess fundraiser site and game launcher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the fundraiser web server
    Serve(ServerConfig),
    /// Pick settings and ask a running server to start a game
    Play(PlayArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long, env = "FUNDRAISER_URL", default_value = "http://127.0.0.1:5000")]
    server: String,

    /// AI difficulty, 0 (beginner) to 4 (impossible)
    #[arg(long)]
    difficulty: Difficulty,

    /// Side to play: white or black
    #[arg(long)]
    color: PlayerColor,
}

async fn serve(config: ServerConfig) -> io::Result<()> {
    let (host, port) = config.bind_address();
    info!("Starting chess fundraiser server at http://{}:{}", host, port);
    info!("Template folder: {}", config.templates_dir.display());
    info!("Static folder: {}", config.static_dir.display());

    let launcher = Arc::new(ProcessLauncher::from_config(&config));
    let static_dir = config.static_dir().to_path_buf();
    let app_state = web::Data::new(AppState::new(config, launcher));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(|cfg| routes::configure_routes(cfg, &static_dir))
    })
    .bind((host, port))?
    .run()
    .await
}

async fn play(args: PlayArgs) -> io::Result<()> {
    let mut page = SettingsPage::new();
    page.select_difficulty(args.difficulty);
    page.select_color(args.color);
    println!(
        "Difficulty: {} ({}), color: {}",
        args.difficulty.level(),
        args.difficulty.label(),
        args.color.label()
    );

    let requester = LaunchRequester::new(HttpTransport::new(args.server));
    requester
        .request_launch(&mut page, |view| {
            if let Some(status) = &view.status {
                println!("{}", status);
            }
        })
        .await;

    match page.phase() {
        LaunchPhase::Failed(message) => Err(io::Error::new(io::ErrorKind::Other, message.clone())),
        _ => Ok(()),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match Cli::parse().command {
        Command::Serve(config) => serve(config).await,
        Command::Play(args) => play(args).await,
    }
}
