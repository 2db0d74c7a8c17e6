//! Client-side session model: phase lifecycle and turn derivation.
//!
//! The client never decides turn order itself — it only maps the
//! server-reported current-player slot onto the local player identity.

use crate::protocol::{GameData, PlayerSlot};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Coarse client lifecycle for one session.
///
/// Transitions only move forward (`Lobby → Active → Completed`); the sole
/// way back is a full reset to `Lobby`, which also clears all session
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Lobby,
    Active,
    Completed,
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Who we are in the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Opaque session identifier shared by both players.
    pub session_id: String,
    /// The local player's chosen name.
    pub player_id: String,
}

// ---------------------------------------------------------------------------
// Turn derivation
// ---------------------------------------------------------------------------

/// Return `true` if `player_id` holds the turn in `game`.
///
/// The server reports the turn as a seat slot. We resolve the slot by
/// checking whether the local id matches the recorded `player1_id`; anyone
/// else is treated as player 2. Returns `false` whenever the data needed
/// for the comparison hasn't been fetched yet.
pub fn is_player_turn(game: &GameData, player_id: &str) -> bool {
    let (Some(current), Some(p1)) = (game.current_player, game.player1_id.as_deref()) else {
        return false;
    };
    match current {
        PlayerSlot::Player1 => p1 == player_id,
        PlayerSlot::Player2 => p1 != player_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(current: PlayerSlot, p1: &str) -> GameData {
        GameData {
            player1_id: Some(p1.to_string()),
            current_player: Some(current),
            ..Default::default()
        }
    }

    #[test]
    fn player1_turn_matches_first_name() {
        let g = game(PlayerSlot::Player1, "Alice");
        assert!(is_player_turn(&g, "Alice"));
        assert!(!is_player_turn(&g, "Bob"));
    }

    #[test]
    fn player2_turn_matches_anyone_else() {
        let g = game(PlayerSlot::Player2, "Alice");
        assert!(!is_player_turn(&g, "Alice"));
        assert!(is_player_turn(&g, "Bob"));
    }

    #[test]
    fn never_our_turn_without_session_data() {
        // Before the first status fetch (join flow) or when the server
        // omitted the seat mapping, the form must stay hidden.
        assert!(!is_player_turn(&GameData::default(), "Alice"));

        let missing_p1 = GameData {
            current_player: Some(PlayerSlot::Player1),
            ..Default::default()
        };
        assert!(!is_player_turn(&missing_p1, "Alice"));
    }

    #[test]
    fn phase_defaults_to_lobby() {
        assert_eq!(Phase::default(), Phase::Lobby);
    }
}
