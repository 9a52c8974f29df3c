use crate::models::{Difficulty, GameSettings, PlayerColor, Selection};

pub const PENDING_MESSAGE: &str = "Starting game...";
pub const TERMINAL_MESSAGE: &str = "The game window should now be open. Enjoy your game!";
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to start the game. Please try again.";

/// Where the page is in its launch handshake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchPhase {
    Idle,
    Pending,
    /// The server accepted the launch; holds the message it returned
    Launched(String),
    /// Shown after the success message has been on screen for a while
    Settled,
    Failed(String),
}

/// How a launch request ended, as seen from the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched(String),
    /// The server refused; the message is absent when it gave none
    Rejected(Option<String>),
    /// No usable response arrived
    Unreachable,
}

/// State of one settings page session
#[derive(Debug, Clone)]
pub struct SettingsPage {
    selection: Selection,
    phase: LaunchPhase,
    start_enabled: bool,
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPage {
    pub fn new() -> Self {
        SettingsPage {
            selection: Selection::default(),
            phase: LaunchPhase::Idle,
            start_enabled: false,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> &LaunchPhase {
        &self.phase
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.selection.difficulty = Some(difficulty);
        self.refresh_start_button();
    }

    pub fn select_color(&mut self, color: PlayerColor) {
        self.selection.color = Some(color);
        self.refresh_start_button();
    }

    pub fn can_start(&self) -> bool {
        self.selection.is_complete()
    }

    /// Press the start button. Returns the settings to send, or `None` when
    /// the button is disabled and nothing should be requested.
    pub fn begin_launch(&mut self) -> Option<GameSettings> {
        if !self.start_enabled {
            return None;
        }
        let settings = self.selection.complete()?;
        self.phase = LaunchPhase::Pending;
        self.refresh_start_button();
        Some(settings)
    }

    pub fn finish_launch(&mut self, outcome: LaunchOutcome) {
        if self.phase != LaunchPhase::Pending {
            return;
        }
        self.phase = match outcome {
            LaunchOutcome::Launched(message) => LaunchPhase::Launched(message),
            LaunchOutcome::Rejected(Some(message)) => LaunchPhase::Failed(message),
            LaunchOutcome::Rejected(None) | LaunchOutcome::Unreachable => {
                LaunchPhase::Failed(FALLBACK_ERROR_MESSAGE.to_string())
            }
        };
        self.refresh_start_button();
    }

    /// Replace the success message with the closing one
    pub fn settle(&mut self) {
        if let LaunchPhase::Launched(_) = self.phase {
            self.phase = LaunchPhase::Settled;
            self.refresh_start_button();
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        match &self.phase {
            LaunchPhase::Idle => None,
            LaunchPhase::Pending => Some(PENDING_MESSAGE),
            LaunchPhase::Launched(message) | LaunchPhase::Failed(message) => Some(message),
            LaunchPhase::Settled => Some(TERMINAL_MESSAGE),
        }
    }

    // Once a launch succeeds the button stays off for the rest of the page.
    fn refresh_start_button(&mut self) {
        let launch_allowed = matches!(self.phase, LaunchPhase::Idle | LaunchPhase::Failed(_));
        self.start_enabled = launch_allowed && self.can_start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_page() -> SettingsPage {
        let mut page = SettingsPage::new();
        page.select_difficulty(Difficulty::Easy);
        page.select_color(PlayerColor::White);
        page
    }

    #[test]
    fn start_needs_one_choice_from_each_category() {
        for difficulty in Difficulty::ALL {
            for color in PlayerColor::ALL {
                let mut page = SettingsPage::new();
                assert!(!page.can_start());
                assert!(!page.start_enabled());

                page.select_difficulty(difficulty);
                assert!(!page.can_start());
                assert!(!page.start_enabled());

                page.select_color(color);
                assert!(page.can_start());
                assert!(page.start_enabled());
            }
        }

        let mut page = SettingsPage::new();
        page.select_color(PlayerColor::Black);
        assert!(!page.can_start());
    }

    #[test]
    fn later_selection_replaces_earlier_one() {
        let mut page = SettingsPage::new();
        page.select_difficulty(Difficulty::Easy);
        page.select_difficulty(Difficulty::Hard);
        page.select_color(PlayerColor::White);
        page.select_color(PlayerColor::Black);
        assert_eq!(page.selection().difficulty, Some(Difficulty::Hard));
        assert_eq!(page.selection().color, Some(PlayerColor::Black));
    }

    #[test]
    fn reselecting_the_same_value_is_idempotent() {
        let mut page = ready_page();
        let before = (page.start_enabled(), *page.selection());
        page.select_color(PlayerColor::White);
        assert_eq!((page.start_enabled(), *page.selection()), before);
    }

    #[test]
    fn begin_launch_is_a_no_op_when_disabled() {
        let mut page = SettingsPage::new();
        page.select_difficulty(Difficulty::Hard);
        assert_eq!(page.begin_launch(), None);
        assert_eq!(page.phase(), &LaunchPhase::Idle);
    }

    #[test]
    fn pending_disables_start() {
        let mut page = ready_page();
        let settings = page.begin_launch().unwrap();
        assert_eq!(settings, GameSettings::new(Difficulty::Easy, PlayerColor::White));
        assert_eq!(page.status_message(), Some(PENDING_MESSAGE));
        assert!(!page.start_enabled());

        page.select_difficulty(Difficulty::Intermediate);
        assert!(!page.start_enabled());
        assert_eq!(page.begin_launch(), None);
    }

    #[test]
    fn success_keeps_start_disabled_through_settling() {
        let mut page = ready_page();
        page.begin_launch();
        page.finish_launch(LaunchOutcome::Launched("Game launched".to_string()));
        assert_eq!(page.status_message(), Some("Game launched"));
        assert!(!page.start_enabled());

        page.settle();
        assert_eq!(page.status_message(), Some(TERMINAL_MESSAGE));
        assert!(!page.start_enabled());

        page.select_color(PlayerColor::Black);
        assert!(!page.start_enabled());
    }

    #[test]
    fn rejection_shows_server_message_and_reenables_start() {
        let mut page = ready_page();
        page.begin_launch();
        page.finish_launch(LaunchOutcome::Rejected(Some("Stockfish not found".to_string())));
        assert_eq!(page.status_message(), Some("Stockfish not found"));
        assert!(page.start_enabled());
        assert!(page.begin_launch().is_some());
    }

    #[test]
    fn unreachable_server_shows_fallback_and_reenables_start() {
        for outcome in [LaunchOutcome::Unreachable, LaunchOutcome::Rejected(None)] {
            let mut page = ready_page();
            page.begin_launch();
            page.finish_launch(outcome);
            assert_eq!(page.status_message(), Some(FALLBACK_ERROR_MESSAGE));
            assert!(page.start_enabled());
        }
    }

    #[test]
    fn settle_only_follows_success() {
        let mut page = ready_page();
        page.settle();
        assert_eq!(page.phase(), &LaunchPhase::Idle);

        page.begin_launch();
        page.finish_launch(LaunchOutcome::Unreachable);
        page.settle();
        assert!(matches!(page.phase(), LaunchPhase::Failed(_)));
    }
}
