pub mod launcher;
pub mod utils;

pub use launcher::{GameLauncher, ProcessLauncher};
