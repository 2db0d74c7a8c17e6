//! Wire types for the Kofi backend's HTTP JSON API.
//!
//! Field names match the backend exactly; the client treats every payload
//! as opaque data to display. Endpoints return different subsets of the
//! session record, so most [`GameData`] fields are optional.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Player slots
// ---------------------------------------------------------------------------

/// Which of the two seats currently holds the turn.
///
/// The backend reports the slot (`"player1"` / `"player2"`), not the
/// player's chosen name — mapping a slot back to a local identity is the
/// client's job (see [`crate::session`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::Player1 => PlayerSlot::Player2,
            PlayerSlot::Player2 => PlayerSlot::Player1,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::Player1 => f.write_str("player1"),
            PlayerSlot::Player2 => f.write_str("player2"),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /start-game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub session_id: String,
    pub player1_id: String,
    pub player2_id: String,
}

/// Body of `POST /player-action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerActionRequest {
    pub session_id: String,
    pub player_id: String,
    pub action: String,
    /// Narrative impact magnitude, 1 (subtle) to 5 (major twist).
    pub pace: u8,
}

/// Body of `POST /end-game`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndGameRequest {
    pub session_id: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// One submitted action as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryAction {
    pub player_id: String,
    pub action: String,
    pub pace: u8,
    /// ISO timestamp set by the server. Absent in some payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Session/game data as returned by `/start-game` and `/game-status/{id}`.
///
/// `/start-game` returns only the narration fields; `/game-status` returns
/// the full session record. Everything is optional so one type can decode
/// both shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player1_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player2_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrator_setting: Option<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub story_actions: Vec<StoryAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player: Option<PlayerSlot>,
    /// Backend lifecycle string (`waiting`, `active`, `completed`).
    /// Displayed verbatim, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_status: Option<String>,
}

/// Response of `POST /player-action`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub action: StoryAction,
    pub current_player: PlayerSlot,
    #[serde(default)]
    pub story_actions: Vec<StoryAction>,
}

/// Response of `POST /end-game` — the finished game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub final_story: String,
    #[serde(default)]
    pub judge_result: String,
    #[serde(default)]
    pub video_script: String,
    #[serde(default)]
    pub objectives: Vec<String>,
}

/// Error body returned by the backend on rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

// ---------------------------------------------------------------------------
// Session ID generation
// ---------------------------------------------------------------------------

/// Build a new session ID from a millisecond timestamp.
///
/// The caller supplies the clock (`Date.now()` on web, `SystemTime` on
/// desktop) so this stays pure and target-independent.
pub fn new_session_id(now_ms: u64) -> String {
    format!("session_{now_ms}")
}
