//! Root application component for the web frontend.
//!
//! Spawns the lifecycle coroutine, routes between the lobby, session, and
//! results screens by phase, and wires in the browser-specific hooks: the
//! `Date.now()` clock, `window.alert()` for blocking error dialogs, and
//! the page origin as the default API base URL.

use dioxus::prelude::*;
use kofi_client::api::ApiClient;
use kofi_core::session::Phase;
use kofi_ui::app_logic::run_app_session;
use kofi_ui::components::{lobby_screen, results_screen, session_screen};
use kofi_ui::{UiMessage, use_app_state};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Backend base URL: compile-time `KOFI_API_BASE` override, otherwise the
/// page origin (backend and frontend served from the same host).
fn api_base() -> String {
    match option_env!("KOFI_API_BASE") {
        Some(base) => base.to_string(),
        None => page_origin(),
    }
}

/// `http(s)://host[:port]` of the current page.
fn page_origin() -> String {
    let window = web_sys::window().expect("no global `window`");
    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let host = location.host().unwrap_or_default();
    format!("{protocol}//{host}")
}

/// Blocking alert for session start/end failures.
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let state = use_app_state();

    // Single mutation path: components send UiMessage via the handle, the
    // coroutine talks HTTP and writes the signals.
    let _coroutine = use_coroutine(move |rx: UnboundedReceiver<UiMessage>| {
        run_app_session(
            rx,
            state,
            ApiClient::new(api_base()),
            || js_sys::Date::now() as u64,
            alert,
        )
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
