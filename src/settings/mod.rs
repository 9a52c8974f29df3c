//! The settings page the player uses to pick a difficulty and color and
//! start a game. State changes live in [`page`], what gets shown is derived
//! by [`render`], and [`requester`] sends the start-game request.

pub mod page;
pub mod render;
pub mod requester;

pub use page::{LaunchPhase, SettingsPage};
pub use requester::{HttpTransport, LaunchRequester};
