//! Lobby screen — create a new game or join an existing session.

use dioxus::prelude::*;

use crate::UiMessage;

#[component]
pub fn LobbyScreen() -> Element {
    let mut player1 = use_signal(String::new);
    let mut player2 = use_signal(String::new);
    let mut session_id = use_signal(String::new);
    let mut join_name = use_signal(String::new);
    let mut validation_error = use_signal(String::new);
    let coroutine = use_coroutine_handle::<UiMessage>();

    let on_create = move |_| {
        let p1 = player1.read().trim().to_string();
        let p2 = player2.read().trim().to_string();
        if p1.is_empty() || p2.is_empty() {
            validation_error.set("Both player names are required".to_string());
            return;
        }
        validation_error.set(String::new());
        coroutine.send(UiMessage::StartGame {
            player1_id: p1,
            player2_id: p2,
        });
    };

    let on_join = move |_| {
        let id = session_id.read().trim().to_string();
        let name = join_name.read().trim().to_string();
        if id.is_empty() || name.is_empty() {
            validation_error.set("Session ID and your name are required".to_string());
            return;
        }
        validation_error.set(String::new());
        coroutine.send(UiMessage::JoinGame {
            session_id: id,
            player_id: name,
        });
    };

    let val_err = validation_error.read().clone();

    rsx! {
        div { class: "max-w-2xl mx-auto",
            div { class: "bg-gray-800 rounded-2xl shadow-2xl p-8 flex flex-col gap-6",
                h2 { class: "text-2xl font-bold text-center text-indigo-300", "Welcome to Kofi" }

                // Create new game
                div { class: "bg-gray-700 rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "text-xl font-semibold", "Create New Game" }
                    div { class: "flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Player 1 name" }
                        input {
                            class: "bg-gray-600 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-indigo-500",
                            r#type: "text",
                            placeholder: "Enter your name",
                            value: "{player1}",
                            oninput: move |e| player1.set(e.value()),
                        }
                    }
                    div { class: "flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Player 2 name" }
                        input {
                            class: "bg-gray-600 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-indigo-500",
                            r#type: "text",
                            placeholder: "Enter opponent's name",
                            value: "{player2}",
                            oninput: move |e| player2.set(e.value()),
                        }
                    }
                    button {
                        class: "w-full bg-indigo-600 hover:bg-indigo-500 text-white font-semibold rounded-lg py-3 transition",
                        onclick: on_create,
                        "Start New Game"
                    }
                }

                // Join existing game
                div { class: "bg-gray-700 rounded-lg p-6 flex flex-col gap-4",
                    h3 { class: "text-xl font-semibold", "Join Existing Game" }
                    div { class: "flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Session ID" }
                        input {
                            class: "bg-gray-600 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-indigo-500",
                            r#type: "text",
                            placeholder: "Enter session ID",
                            value: "{session_id}",
                            oninput: move |e| session_id.set(e.value()),
                        }
                    }
                    div { class: "flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Your name" }
                        input {
                            class: "bg-gray-600 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-indigo-500",
                            r#type: "text",
                            placeholder: "Enter your name",
                            value: "{join_name}",
                            oninput: move |e| join_name.set(e.value()),
                        }
                    }
                    button {
                        class: "w-full bg-emerald-600 hover:bg-emerald-500 text-white font-semibold rounded-lg py-3 transition",
                        onclick: on_join,
                        "Join Game"
                    }
                }

                if !val_err.is_empty() {
                    p { class: "text-red-400 text-sm text-center", "{val_err}" }
                }

                // How to play
                div { class: "bg-gray-700 rounded-lg p-6",
                    h3 { class: "text-lg font-semibold mb-3", "How to Play" }
                    ul { class: "flex flex-col gap-2 text-sm text-gray-300",
                        li { "• Two players collaborate to create a story" }
                        li { "• Each player takes turns writing 50-word actions" }
                        li { "• Use the pace slider to control story impact (1 = subtle, 5 = major twist)" }
                        li { "• AI moderates for consistency and appropriate pacing" }
                        li { "• At the end, AI judges which objective was achieved" }
                        li { "• A video summary is generated from your story" }
                    }
                }
            }
        }
    }
}
