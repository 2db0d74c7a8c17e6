//! Shared Dioxus UI for the Kofi storytelling app.
//!
//! This crate is platform-agnostic — it provides the screen components,
//! the shared `UiMessage` type, and the signal bundle both the web
//! (`kofi-web`) and desktop (`kofi-gui`) frontends render from. Screen
//! routing follows [`Phase`] directly; there is no separate screen enum.

pub mod app_logic;
pub mod components;

use dioxus::prelude::*;
use kofi_core::protocol::{GameData, GameResult};
use kofi_core::session::{Phase, SessionIdentity};

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

/// Default pace for a fresh action draft (middle of the 1–5 scale).
pub const DEFAULT_PACE: u8 = 3;

/// The action being composed in the session view.
///
/// Lives in the shared state (not component-local) so the coroutine can
/// clear it after a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDraft {
    pub action: String,
    pub pace: u8,
}

impl Default for ActionDraft {
    fn default() -> Self {
        Self {
            action: String::new(),
            pace: DEFAULT_PACE,
        }
    }
}

/// Messages sent from UI components to the background coroutine.
#[derive(Debug, Clone)]
pub enum UiMessage {
    /// Create a new session with both player names.
    StartGame {
        player1_id: String,
        player2_id: String,
    },
    /// Join an existing session (local-only, no request).
    JoinGame {
        session_id: String,
        player_id: String,
    },
    /// Re-fetch the session status.
    Refresh,
    /// Submit the local player's action.
    SubmitAction { action: String, pace: u8 },
    /// End the session and fetch the result.
    EndGame,
    /// Back to the lobby, clearing everything.
    Reset,
}

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

/// Bundle of signals the coroutine writes and the screens read.
///
/// `Signal` is `Copy`, so the whole bundle is cheap to pass as a prop.
/// Only the coroutine mutates it — components send [`UiMessage`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppState {
    pub phase: Signal<Phase>,
    pub identity: Signal<Option<SessionIdentity>>,
    pub game: Signal<Option<GameData>>,
    pub result: Signal<Option<GameResult>>,
    pub draft: Signal<ActionDraft>,
    /// Inline error shown under the action form.
    pub action_error: Signal<String>,
    /// `true` while a submit request is in flight.
    pub submitting: Signal<bool>,
}

/// Hook that creates the full signal bundle with lobby defaults.
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_signal(Phase::default),
        identity: use_signal(|| None),
        game: use_signal(|| None),
        result: use_signal(|| None),
        draft: use_signal(ActionDraft::default),
        action_error: use_signal(String::new),
        submitting: use_signal(|| false),
    }
}
