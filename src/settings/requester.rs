use futures::future::{BoxFuture, FutureExt};
use log::{debug, info, warn};
use std::time::Duration;
use thiserror::Error;

use crate::models::{GameSettings, LaunchResult};
use crate::settings::page::{LaunchOutcome, SettingsPage};
use crate::settings::render::{render, SettingsView};

/// How long the success message stays up before the closing message replaces it
pub const SUCCESS_DISPLAY_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Carries one start-game request to the server
pub trait LaunchTransport {
    fn send(&self, settings: GameSettings) -> BoxFuture<'_, Result<LaunchResult, TransportError>>;
}

/// Talks to `GET /start-game` over HTTP
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn start_game_url(&self) -> String {
        format!("{}/start-game", self.base_url.trim_end_matches('/'))
    }
}

impl LaunchTransport for HttpTransport {
    fn send(&self, settings: GameSettings) -> BoxFuture<'_, Result<LaunchResult, TransportError>> {
        async move {
            let response = self
                .client
                .get(self.start_game_url())
                .query(&[
                    ("difficulty", settings.difficulty.to_string()),
                    ("color", settings.color.to_string()),
                ])
                .send()
                .await?;
            debug!("start-game answered with HTTP {}", response.status());

            // Error statuses still carry a JSON body worth showing
            let body = response.bytes().await?;
            Ok(serde_json::from_slice::<LaunchResult>(&body)?)
        }
        .boxed()
    }
}

/// Drives a settings page through one launch request
pub struct LaunchRequester<T> {
    transport: T,
}

impl<T: LaunchTransport> LaunchRequester<T> {
    pub fn new(transport: T) -> Self {
        LaunchRequester { transport }
    }

    /// Press start on `page` and follow the request to its end, calling
    /// `on_render` after every state change. Returns false, having sent
    /// nothing, when the start button is disabled.
    pub async fn request_launch<F>(&self, page: &mut SettingsPage, mut on_render: F) -> bool
    where
        F: FnMut(&SettingsView),
    {
        let Some(settings) = page.begin_launch() else {
            debug!("Start pressed while disabled; no request sent");
            return false;
        };
        on_render(&render(page));

        info!(
            "Requesting launch: difficulty={}, color={}",
            settings.difficulty, settings.color
        );
        let outcome = match self.transport.send(settings).await {
            Ok(result) if result.is_success() => LaunchOutcome::Launched(result.message),
            Ok(result) => {
                warn!("Server refused launch: {}", result.message);
                LaunchOutcome::Rejected(Some(result.message).filter(|m| !m.is_empty()))
            }
            Err(e) => {
                warn!("Launch request failed: {}", e);
                LaunchOutcome::Unreachable
            }
        };
        let launched = matches!(outcome, LaunchOutcome::Launched(_));
        page.finish_launch(outcome);
        on_render(&render(page));

        if launched {
            tokio::time::sleep(SUCCESS_DISPLAY_DELAY).await;
            page.settle();
            on_render(&render(page));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, PlayerColor};
    use crate::settings::page::{FALLBACK_ERROR_MESSAGE, PENDING_MESSAGE, TERMINAL_MESSAGE};
    use crate::settings::render::StatusKind;
    use std::sync::Mutex;
    use tokio::time::Instant;

    enum Reply {
        Result(LaunchResult),
        Malformed,
    }

    struct FakeTransport {
        reply: Reply,
        sent: Mutex<Vec<GameSettings>>,
    }

    impl FakeTransport {
        fn new(reply: Reply) -> Self {
            FakeTransport {
                reply,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl LaunchTransport for FakeTransport {
        fn send(&self, settings: GameSettings) -> BoxFuture<'_, Result<LaunchResult, TransportError>> {
            self.sent.lock().unwrap().push(settings);
            let reply = match &self.reply {
                Reply::Result(result) => Ok(result.clone()),
                Reply::Malformed => serde_json::from_str::<LaunchResult>("<html>")
                    .map_err(TransportError::from),
            };
            async move { reply }.boxed()
        }
    }

    fn ready_page() -> SettingsPage {
        let mut page = SettingsPage::new();
        page.select_difficulty(Difficulty::Intermediate);
        page.select_color(PlayerColor::Black);
        page
    }

    fn success(message: &str) -> Reply {
        Reply::Result(LaunchResult {
            message: message.to_string(),
            ..LaunchResult::success(GameSettings::new(Difficulty::Intermediate, PlayerColor::Black))
        })
    }

    #[tokio::test]
    async fn no_request_when_start_is_disabled() {
        let requester = LaunchRequester::new(FakeTransport::new(success("Game launched")));
        let mut page = SettingsPage::new();
        page.select_color(PlayerColor::White);

        let mut renders = 0;
        assert!(!requester.request_launch(&mut page, |_| renders += 1).await);
        assert_eq!(renders, 0);
        assert!(requester.transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn success_message_gives_way_after_two_seconds() {
        let requester = LaunchRequester::new(FakeTransport::new(success("Game launched")));
        let mut page = ready_page();

        let mut seen = Vec::new();
        let sent = requester
            .request_launch(&mut page, |view| {
                let status = view.status.clone().unwrap();
                seen.push((Instant::now(), status.text, status.kind, view.start_enabled));
            })
            .await;

        assert!(sent);
        assert_eq!(
            *requester.transport.sent.lock().unwrap(),
            vec![GameSettings::new(Difficulty::Intermediate, PlayerColor::Black)]
        );
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].1, PENDING_MESSAGE);
        assert_eq!(seen[0].2, StatusKind::Pending);
        assert_eq!(seen[1].1, "Game launched");
        assert_eq!(seen[1].2, StatusKind::Success);
        assert_eq!(seen[2].1, TERMINAL_MESSAGE);
        assert!(seen[2].0 - seen[1].0 >= SUCCESS_DISPLAY_DELAY);
        assert!(seen.iter().all(|(_, _, _, enabled)| !enabled));
        assert!(!page.start_enabled());
    }

    #[tokio::test]
    async fn server_error_is_shown_and_start_reenabled() {
        let requester =
            LaunchRequester::new(FakeTransport::new(Reply::Result(LaunchResult::error("Stockfish not found"))));
        let mut page = ready_page();

        let mut last = None;
        requester.request_launch(&mut page, |view| last = Some(view.clone())).await;

        let view = last.unwrap();
        assert_eq!(view.status.unwrap().text, "Stockfish not found");
        assert!(view.start_enabled);
    }

    #[tokio::test]
    async fn error_without_message_uses_fallback() {
        let requester = LaunchRequester::new(FakeTransport::new(Reply::Result(LaunchResult::error(""))));
        let mut page = ready_page();
        requester.request_launch(&mut page, |_| {}).await;
        assert_eq!(page.status_message(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(page.start_enabled());
    }

    #[tokio::test]
    async fn malformed_response_uses_fallback() {
        let requester = LaunchRequester::new(FakeTransport::new(Reply::Malformed));
        let mut page = ready_page();
        requester.request_launch(&mut page, |_| {}).await;
        assert_eq!(page.status_message(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(page.start_enabled());
    }

    #[tokio::test]
    async fn unreachable_server_uses_fallback() {
        let requester = LaunchRequester::new(HttpTransport::new("http://127.0.0.1:1/"));
        assert_eq!(requester.transport.start_game_url(), "http://127.0.0.1:1/start-game");

        let mut page = ready_page();
        assert!(requester.request_launch(&mut page, |_| {}).await);
        assert_eq!(page.status_message(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(page.start_enabled());
    }
}
