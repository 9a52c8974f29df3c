use std::fmt;

use crate::models::{Difficulty, PlayerColor};
use crate::settings::page::{LaunchPhase, SettingsPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub text: String,
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.kind {
            StatusKind::Info => "info",
            StatusKind::Pending => "....",
            StatusKind::Success => " ok ",
            StatusKind::Error => "FAIL",
        };
        write!(f, "[{}] {}", tag, self.text)
    }
}

/// Everything the settings page shows, derived from its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    pub difficulty_buttons: Vec<ButtonView>,
    pub color_buttons: Vec<ButtonView>,
    pub start_enabled: bool,
    pub status: Option<StatusView>,
}

pub fn render(page: &SettingsPage) -> SettingsView {
    let selection = page.selection();

    let difficulty_buttons = Difficulty::ALL
        .iter()
        .map(|&difficulty| ButtonView {
            label: difficulty.label(),
            value: difficulty.to_string(),
            selected: selection.difficulty == Some(difficulty),
        })
        .collect();

    let color_buttons = PlayerColor::ALL
        .iter()
        .map(|&color| ButtonView {
            label: color.label(),
            value: color.to_string(),
            selected: selection.color == Some(color),
        })
        .collect();

    let kind = match page.phase() {
        LaunchPhase::Idle | LaunchPhase::Settled => StatusKind::Info,
        LaunchPhase::Pending => StatusKind::Pending,
        LaunchPhase::Launched(_) => StatusKind::Success,
        LaunchPhase::Failed(_) => StatusKind::Error,
    };
    let status = page.status_message().map(|text| StatusView {
        kind,
        text: text.to_string(),
    });

    SettingsView {
        difficulty_buttons,
        color_buttons,
        start_enabled: page.start_enabled(),
        status,
    }
}
