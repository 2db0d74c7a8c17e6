//! Platform-agnostic application lifecycle.
//!
//! [`run_app_session`] is the async body a Dioxus `use_coroutine` should
//! run. It owns the [`GameClient`] and is the single place that mutates
//! the [`AppState`] signals; screens only send [`UiMessage`]s through the
//! coroutine handle. Platform crates provide a clock and an alert hook
//! (browser `alert()` on web, a modal dialog on desktop).

use dioxus::prelude::*;
use futures_util::StreamExt;
use kofi_client::api::GameApi;
use kofi_client::controller::GameClient;
use kofi_client::error::ApiError;
use kofi_core::protocol::new_session_id;

use crate::{ActionDraft, AppState, UiMessage};

/// Fallback shown when an action failure carries no server `detail`.
const SUBMIT_FALLBACK: &str = "Failed to submit action";

impl AppState {
    /// Copy the client's fields into the signals so screens re-render.
    fn sync<A>(&mut self, client: &GameClient<A>) {
        self.phase.set(client.phase);
        self.identity.set(client.identity.clone());
        self.game.set(client.game.clone());
        self.result.set(client.result.clone());
    }
}

/// Drive the entire client lifecycle.
///
/// One message is handled at a time, so at most one request is in flight
/// per user-initiated action. Failed operations leave the state exactly
/// as it was (the [`GameClient`] guarantees this); this layer only decides
/// how each failure is surfaced.
pub async fn run_app_session<A, C, F>(
    mut rx: UnboundedReceiver<UiMessage>,
    mut state: AppState,
    api: A,
    now_ms: C,
    alert: F,
) where
    A: GameApi,
    C: Fn() -> u64,
    F: Fn(&str),
{
    let mut client = GameClient::new(api);

    while let Some(msg) = rx.next().await {
        match msg {
            UiMessage::StartGame {
                player1_id,
                player2_id,
            } => {
                let session_id = new_session_id(now_ms());
                match client.start_game(session_id, player1_id, player2_id).await {
                    Ok(()) => state.sync(&client),
                    Err(_) => alert("Failed to start game. Please try again."),
                }
            }

            UiMessage::JoinGame {
                session_id,
                player_id,
            } => {
                // Local-only transition; data arrives on the first refresh.
                client.join_game(session_id, player_id);
                state.sync(&client);
            }

            UiMessage::Refresh => {
                // A failed refresh keeps the previous snapshot on screen.
                if client.refresh().await.is_ok() {
                    state.sync(&client);
                }
            }

            UiMessage::SubmitAction { action, pace } => {
                state.submitting.set(true);
                state.action_error.set(String::new());
                match client.submit_action(action, pace).await {
                    Ok(()) => {
                        state.draft.set(ActionDraft::default());
                        state.sync(&client);
                    }
                    Err(e) => {
                        state
                            .action_error
                            .set(e.detail().unwrap_or(SUBMIT_FALLBACK).to_string());
                    }
                }
                state.submitting.set(false);
            }

            UiMessage::EndGame => match client.end_game().await {
                Ok(()) => state.sync(&client),
                Err(ApiError::NoSession) => {
                    // End Game only renders inside a session.
                    tracing::warn!("end-game requested with no session");
                }
                Err(_) => alert("Failed to end game. Please try again."),
            },

            UiMessage::Reset => {
                client.reset();
                state.draft.set(ActionDraft::default());
                state.action_error.set(String::new());
                state.sync(&client);
            }
        }
    }
}
