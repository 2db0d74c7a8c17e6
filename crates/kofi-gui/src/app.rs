//! Root application component for the desktop frontend.
//!
//! Same screens and lifecycle as the web build; only the platform hooks
//! differ — `SystemTime` for the clock, an `rfd` modal for blocking error
//! dialogs, and a runtime `KOFI_API_BASE` environment variable for the
//! backend base URL.

use std::time::{SystemTime, UNIX_EPOCH};

use dioxus::prelude::*;
use kofi_client::api::ApiClient;
use kofi_core::session::Phase;
use kofi_ui::app_logic::run_app_session;
use kofi_ui::components::{lobby_screen, results_screen, session_screen};
use kofi_ui::{UiMessage, use_app_state};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Default backend address when `KOFI_API_BASE` is unset.
const DEFAULT_API_BASE: &str = "http://localhost:8000";

fn api_base() -> String {
    std::env::var("KOFI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Milliseconds since the Unix epoch, for session ID generation.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Blocking modal for session start/end failures.
fn alert(message: &str) {
    rfd::MessageDialog::new()
        .set_title("Kofi")
        .set_level(rfd::MessageLevel::Error)
        .set_description(message)
        .show();
}

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let state = use_app_state();

    let _coroutine = use_coroutine(move |rx: UnboundedReceiver<UiMessage>| {
        let api = ApiClient::new(api_base());
        tracing::info!(base_url = api.base_url(), "connecting to backend");
        run_app_session(rx, state, api, now_ms, alert)
    });

    let phase = *state.phase.read();

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900 text-white font-sans px-4 py-8",
            header { class: "text-center mb-8",
                h1 { class: "text-4xl font-bold mb-2", "Kofi" }
                p { class: "text-xl text-gray-400", "AI-Powered Collaborative Storytelling" }
            }
            match phase {
                Phase::Lobby => rsx! { lobby_screen::LobbyScreen {} },
                Phase::Active => rsx! { session_screen::SessionScreen { state } },
                Phase::Completed => rsx! { results_screen::ResultsScreen { state } },
            }
        }
    }
}
