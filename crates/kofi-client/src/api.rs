//! HTTP transport for the Kofi backend.
//!
//! The API surface is a trait so the controller can be exercised in tests
//! against a stub with no network. The real implementation, [`ApiClient`],
//! uses `reqwest`, which compiles to `fetch` on wasm32 and hyper on native
//! — one implementation serves both frontends.

use kofi_core::protocol::{
    ActionResponse, EndGameRequest, ErrorBody, GameData, GameResult, PlayerActionRequest,
    StartGameRequest,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

// ---------------------------------------------------------------------------
// API trait
// ---------------------------------------------------------------------------

/// The four backend endpoints the client consumes.
pub trait GameApi {
    /// `POST /start-game` — create a session and get the opening narration.
    fn start_game(
        &self,
        req: &StartGameRequest,
    ) -> impl Future<Output = Result<GameData, ApiError>>;

    /// `GET /game-status/{session_id}` — fetch the full session record.
    fn game_status(&self, session_id: &str) -> impl Future<Output = Result<GameData, ApiError>>;

    /// `POST /player-action` — submit the local player's next action.
    fn player_action(
        &self,
        req: &PlayerActionRequest,
    ) -> impl Future<Output = Result<ActionResponse, ApiError>>;

    /// `POST /end-game` — finish the session and get the judged result.
    fn end_game(&self, req: &EndGameRequest) -> impl Future<Output = Result<GameResult, ApiError>>;
}

// ---------------------------------------------------------------------------
// reqwest implementation
// ---------------------------------------------------------------------------

/// HTTP client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000`).
    /// A trailing slash is stripped so paths can be joined naively.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode_response(resp).await
    }
}

/// Turn a response into `T`, extracting the FastAPI `{detail}` body on
/// non-2xx statuses.
async fn decode_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let detail = resp
            .json::<ErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("server returned {status}"));
        Err(ApiError::Server(detail))
    }
}

impl GameApi for ApiClient {
    async fn start_game(&self, req: &StartGameRequest) -> Result<GameData, ApiError> {
        self.post_json("/start-game", req).await
    }

    async fn game_status(&self, session_id: &str) -> Result<GameData, ApiError> {
        self.get_json(&format!("/game-status/{session_id}")).await
    }

    async fn player_action(&self, req: &PlayerActionRequest) -> Result<ActionResponse, ApiError> {
        self.post_json("/player-action", req).await
    }

    async fn end_game(&self, req: &EndGameRequest) -> Result<GameResult, ApiError> {
        self.post_json("/end-game", req).await
    }
}
