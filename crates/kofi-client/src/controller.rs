//! The single client-side state container.
//!
//! [`GameClient`] owns the phase, the session identity, and the mirrored
//! server data, and is the only place that mutates them. Frontends call
//! one async operation at a time in response to user events; a failed
//! operation leaves every field exactly as it was (errors are surfaced,
//! never retried).

use kofi_core::protocol::{
    ActionResponse, EndGameRequest, GameData, GameResult, PlayerActionRequest, StartGameRequest,
};
use kofi_core::session::{Phase, SessionIdentity};

use crate::api::GameApi;
use crate::error::ApiError;

/// Client state container, generic over the API transport.
pub struct GameClient<A> {
    api: A,
    /// Current lifecycle phase. Moves forward only; see [`Phase`].
    pub phase: Phase,
    /// Set while a session is underway (`Active` or `Completed`).
    pub identity: Option<SessionIdentity>,
    /// Last session data received from the server. `None` right after a
    /// join until the first refresh.
    pub game: Option<GameData>,
    /// Final result, present once `Completed`.
    pub result: Option<GameResult>,
}

impl<A: GameApi> GameClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            phase: Phase::Lobby,
            identity: None,
            game: None,
            result: None,
        }
    }

    /// The local player id, if a session is underway.
    pub fn player_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.player_id.as_str())
    }

    /// Create a new session with both player names.
    ///
    /// On success the local player becomes `player1`, the returned game
    /// data is stored, and the phase advances to `Active`. On failure
    /// nothing changes.
    pub async fn start_game(
        &mut self,
        session_id: String,
        player1_id: String,
        player2_id: String,
    ) -> Result<(), ApiError> {
        let req = StartGameRequest {
            session_id: session_id.clone(),
            player1_id: player1_id.clone(),
            player2_id: player2_id.clone(),
        };
        let mut game = self.api.start_game(&req).await.inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "start-game request failed");
        })?;

        // /start-game doesn't echo the seat assignments; record them
        // locally so turn derivation works before the first refresh.
        game.player1_id.get_or_insert(player1_id.clone());
        game.player2_id.get_or_insert(player2_id);

        self.identity = Some(SessionIdentity {
            session_id,
            player_id: player1_id,
        });
        self.game = Some(game);
        self.phase = Phase::Active;
        Ok(())
    }

    /// Join an existing session. Local-only: no request is made, and the
    /// session data stays empty until the first [`refresh`](Self::refresh).
    pub fn join_game(&mut self, session_id: String, player_id: String) {
        self.identity = Some(SessionIdentity {
            session_id,
            player_id,
        });
        self.game = None;
        self.result = None;
        self.phase = Phase::Active;
    }

    /// Re-fetch the session record and replace the local copy.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let session_id = self.session_id()?;
        let game = self.api.game_status(&session_id).await.inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "game-status request failed");
        })?;
        self.game = Some(game);
        Ok(())
    }

    /// Submit the local player's next action.
    ///
    /// On success the server's updated turn pointer and action list replace
    /// the local copies. Validation is the server's job; the UI only gates
    /// the submit button.
    pub async fn submit_action(&mut self, action: String, pace: u8) -> Result<(), ApiError> {
        let identity = self.identity.as_ref().ok_or(ApiError::NoSession)?;
        let req = PlayerActionRequest {
            session_id: identity.session_id.clone(),
            player_id: identity.player_id.clone(),
            action,
            pace,
        };
        let resp = self.api.player_action(&req).await.inspect_err(|e| {
            tracing::warn!(session_id = %req.session_id, error = %e, "player-action request failed");
        })?;
        self.apply_action_response(resp);
        Ok(())
    }

    /// End the session and fetch the judged result.
    ///
    /// Advances to `Completed` only on success; on failure the phase and
    /// session data are untouched.
    pub async fn end_game(&mut self) -> Result<(), ApiError> {
        let session_id = self.session_id()?;
        let req = EndGameRequest {
            session_id: session_id.clone(),
        };
        let result = self.api.end_game(&req).await.inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "end-game request failed");
        })?;
        self.result = Some(result);
        self.phase = Phase::Completed;
        Ok(())
    }

    /// Return to the lobby, clearing all session state.
    pub fn reset(&mut self) {
        self.identity = None;
        self.game = None;
        self.result = None;
        self.phase = Phase::Lobby;
    }

    // -- private -----------------------------------------------------------

    fn session_id(&self) -> Result<String, ApiError> {
        self.identity
            .as_ref()
            .map(|id| id.session_id.clone())
            .ok_or(ApiError::NoSession)
    }

    /// Fold a `/player-action` response into the stored game data.
    ///
    /// The endpoint returns only the turn pointer and the action list;
    /// narration and objectives from earlier fetches are kept. Those
    /// fields never change server-side after setup, so the merged copy
    /// matches what a full re-fetch would return.
    fn apply_action_response(&mut self, resp: ActionResponse) {
        let game = self.game.get_or_insert_with(GameData::default);
        game.current_player = Some(resp.current_player);
        game.story_actions = resp.story_actions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kofi_core::protocol::{PlayerSlot, StoryAction};
    use std::cell::RefCell;

    /// Scripted stub API. Each endpoint pops its next canned response;
    /// calling an endpoint with no script panics, which doubles as a
    /// "no network call happened" assertion.
    #[derive(Default)]
    struct StubApi {
        start: RefCell<Vec<Result<GameData, ApiError>>>,
        status: RefCell<Vec<Result<GameData, ApiError>>>,
        action: RefCell<Vec<Result<ActionResponse, ApiError>>>,
        end: RefCell<Vec<Result<GameResult, ApiError>>>,
    }

    impl GameApi for StubApi {
        async fn start_game(&self, _req: &StartGameRequest) -> Result<GameData, ApiError> {
            self.start.borrow_mut().pop().expect("unexpected start-game call")
        }

        async fn game_status(&self, _session_id: &str) -> Result<GameData, ApiError> {
            self.status.borrow_mut().pop().expect("unexpected game-status call")
        }

        async fn player_action(&self, _req: &PlayerActionRequest) -> Result<ActionResponse, ApiError> {
            self.action.borrow_mut().pop().expect("unexpected player-action call")
        }

        async fn end_game(&self, _req: &EndGameRequest) -> Result<GameResult, ApiError> {
            self.end.borrow_mut().pop().expect("unexpected end-game call")
        }
    }

    fn started_game_data() -> GameData {
        GameData {
            session_id: Some("session_1".into()),
            narrator_setting: Some("A fog-bound harbor.".into()),
            objectives: vec!["Escape by sea".into(), "Seal the harbor".into()],
            current_player: Some(PlayerSlot::Player1),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn start_transitions_lobby_to_active() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        let mut client = GameClient::new(api);

        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();

        assert_eq!(client.phase, Phase::Active);
        assert_eq!(client.player_id(), Some("Alice"));
        let game = client.game.as_ref().unwrap();
        // Seat assignments recorded locally even though /start-game
        // doesn't return them.
        assert_eq!(game.player1_id.as_deref(), Some("Alice"));
        assert_eq!(game.player2_id.as_deref(), Some("Bob"));
    }

    #[tokio::test]
    async fn failed_start_leaves_lobby() {
        let api = StubApi::default();
        api.start
            .borrow_mut()
            .push(Err(ApiError::Network("connection refused".into())));
        let mut client = GameClient::new(api);

        let err = client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(client.phase, Phase::Lobby);
        assert!(client.identity.is_none());
        assert!(client.game.is_none());
    }

    #[tokio::test]
    async fn join_is_local_only() {
        // Stub has no scripted responses: any network call panics.
        let mut client = GameClient::new(StubApi::default());
        client.join_game("session_9".into(), "Bob".into());

        assert_eq!(client.phase, Phase::Active);
        assert_eq!(client.player_id(), Some("Bob"));
        assert!(client.game.is_none());
    }

    #[tokio::test]
    async fn refresh_replaces_game_data() {
        let api = StubApi::default();
        let mut full = started_game_data();
        full.player1_id = Some("Alice".into());
        full.current_player = Some(PlayerSlot::Player2);
        api.status.borrow_mut().push(Ok(full));

        let mut client = GameClient::new(api);
        client.join_game("session_1".into(), "Bob".into());
        client.refresh().await.unwrap();

        let game = client.game.as_ref().unwrap();
        assert_eq!(game.current_player, Some(PlayerSlot::Player2));
        assert!(kofi_core::session::is_player_turn(game, "Bob"));
    }

    #[tokio::test]
    async fn submit_applies_turn_and_actions() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        let submitted = StoryAction {
            player_id: "Alice".into(),
            action: "I light the beacon.".into(),
            pace: 3,
            timestamp: None,
        };
        api.action.borrow_mut().push(Ok(ActionResponse {
            status: Some("success".into()),
            action: submitted.clone(),
            current_player: PlayerSlot::Player2,
            story_actions: vec![submitted],
        }));

        let mut client = GameClient::new(api);
        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();
        client
            .submit_action("I light the beacon.".into(), 3)
            .await
            .unwrap();

        let game = client.game.as_ref().unwrap();
        assert_eq!(game.story_actions.len(), 1);
        assert_eq!(game.current_player, Some(PlayerSlot::Player2));
        // Narration from the start response survives the partial update.
        assert!(game.narrator_setting.is_some());
        assert!(!kofi_core::session::is_player_turn(game, "Alice"));
    }

    #[tokio::test]
    async fn rejected_action_keeps_state() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        api.action
            .borrow_mut()
            .push(Err(ApiError::Server("Not your turn".into())));

        let mut client = GameClient::new(api);
        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();
        let err = client.submit_action("I run.".into(), 2).await.unwrap_err();

        assert_eq!(err.detail(), Some("Not your turn"));
        assert_eq!(client.phase, Phase::Active);
        assert!(client.game.as_ref().unwrap().story_actions.is_empty());
    }

    #[tokio::test]
    async fn end_game_completes_only_on_success() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        api.end
            .borrow_mut()
            .push(Err(ApiError::Server("Game session not found".into())));

        let mut client = GameClient::new(api);
        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();

        client.end_game().await.unwrap_err();
        assert_eq!(client.phase, Phase::Active);
        assert!(client.result.is_none());
        assert!(client.game.is_some());
    }

    #[tokio::test]
    async fn end_game_stores_result() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        api.end.borrow_mut().push(Ok(GameResult {
            session_id: Some("session_1".into()),
            final_story: "A fog-bound harbor.\nAction 1: I light the beacon.\n".into(),
            judge_result: "Player 1 achieved their objective.".into(),
            video_script: "Fade in on a dark harbor…".into(),
            objectives: vec!["Escape by sea".into(), "Seal the harbor".into()],
        }));

        let mut client = GameClient::new(api);
        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();
        client.end_game().await.unwrap();

        assert_eq!(client.phase, Phase::Completed);
        assert!(client.result.as_ref().unwrap().final_story.contains("Action 1"));
    }

    #[tokio::test]
    async fn reset_restores_lobby_defaults() {
        let api = StubApi::default();
        api.start.borrow_mut().push(Ok(started_game_data()));
        api.end.borrow_mut().push(Ok(GameResult::default()));

        let mut client = GameClient::new(api);
        client
            .start_game("session_1".into(), "Alice".into(), "Bob".into())
            .await
            .unwrap();
        client.end_game().await.unwrap();
        client.reset();

        assert_eq!(client.phase, Phase::Lobby);
        assert!(client.identity.is_none());
        assert!(client.game.is_none());
        assert!(client.result.is_none());
    }

    #[tokio::test]
    async fn operations_without_session_fail_fast() {
        let mut client = GameClient::new(StubApi::default());
        assert!(matches!(client.refresh().await, Err(ApiError::NoSession)));
        assert!(matches!(client.end_game().await, Err(ApiError::NoSession)));
        assert!(matches!(
            client.submit_action("I run.".into(), 3).await,
            Err(ApiError::NoSession)
        ));
    }
}
