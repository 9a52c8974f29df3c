pub mod app_state;
pub mod game_settings;
pub mod messages;

// Re-export important types
pub use app_state::*;
pub use game_settings::*;
pub use messages::*;
