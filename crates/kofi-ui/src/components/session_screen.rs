//! Session screen — story setting, objectives, progress, and the action form.
//!
//! The action form only renders when the server-reported turn belongs to
//! the local player; everyone else sees the turn indicator and the manual
//! Refresh control (updates are pull-based, there is no push channel).

use dioxus::prelude::*;
use kofi_core::session::is_player_turn;
use kofi_core::stats::{ActionCounts, MAX_ACTION_WORDS};

use crate::{AppState, UiMessage};

#[component]
pub fn SessionScreen(state: AppState) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let identity = state.identity.read().clone();
    let Some(identity) = identity else {
        // Unreachable in practice: the app only routes here with a session.
        return rsx! {};
    };

    let game = state.game.read().clone();
    let my_turn = game
        .as_ref()
        .is_some_and(|g| is_player_turn(g, &identity.player_id));

    rsx! {
        div { class: "max-w-4xl mx-auto",
            div { class: "bg-gray-800 rounded-2xl shadow-2xl p-8 flex flex-col gap-6",

                // Header
                div {
                    h2 { class: "text-2xl font-bold mb-2", "Story Session" }
                    p { class: "text-gray-400 text-sm", "Session ID: {identity.session_id}" }
                    p { class: "text-gray-400 text-sm", "Playing as: {identity.player_id}" }
                }

                if let Some(game) = game {
                    // Story setting
                    if let Some(setting) = &game.narrator_setting {
                        div { class: "bg-gray-700 rounded-lg p-6",
                            h3 { class: "text-lg font-semibold mb-3", "Story Setting" }
                            p { class: "text-gray-300 leading-relaxed", "{setting}" }
                        }
                    }

                    // Objectives
                    if !game.objectives.is_empty() {
                        div { class: "bg-gray-700 rounded-lg p-6",
                            h3 { class: "text-lg font-semibold mb-3", "Objectives" }
                            div { class: "flex flex-col gap-2",
                                for (i, objective) in game.objectives.iter().enumerate() {
                                    {
                                        let number = i + 1;
                                        rsx! {
                                            div { class: "flex items-center gap-3",
                                                span { class: "w-6 h-6 bg-indigo-600 rounded-full flex items-center justify-center text-sm font-bold",
                                                    "{number}"
                                                }
                                                span { class: "text-gray-300", "{objective}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    // Story progress
                    if !game.story_actions.is_empty() {
                        div { class: "bg-gray-700 rounded-lg p-6",
                            h3 { class: "text-lg font-semibold mb-3", "Story Progress" }
                            div { class: "flex flex-col gap-4",
                                for entry in game.story_actions.iter() {
                                    div { class: "border-l-4 border-indigo-500 pl-4",
                                        div { class: "flex justify-between items-start mb-1",
                                            span { class: "font-medium text-indigo-300", "{entry.player_id}" }
                                            span { class: "text-sm text-gray-400", "Pace: {entry.pace}/5" }
                                        }
                                        p { class: "text-gray-300", "{entry.action}" }
                                    }
                                }
                            }
                        }
                    }
                }

                // Turn status + refresh
                div { class: "bg-gray-700 rounded-lg p-4 flex items-center justify-between",
                    span { class: "text-lg font-medium",
                        if my_turn { "Your Turn" } else { "Opponent's Turn" }
                    }
                    button {
                        class: "px-4 py-2 bg-indigo-600 hover:bg-indigo-500 rounded-lg transition",
                        onclick: move |_| coroutine.send(UiMessage::Refresh),
                        "Refresh"
                    }
                }

                // Action form (only on our turn)
                if my_turn {
                    ActionForm { state }
                }

                // End game
                div { class: "text-center",
                    button {
                        class: "px-6 py-2 bg-red-600 hover:bg-red-500 rounded-lg transition",
                        onclick: move |_| coroutine.send(UiMessage::EndGame),
                        "End Game"
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Action form
// ---------------------------------------------------------------------------

#[component]
fn ActionForm(state: AppState) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let mut draft = state.draft;
    let current = draft.read().clone();
    let counts = ActionCounts::of(&current.action);
    let submitting = *state.submitting.read();
    let error = state.action_error.read().clone();

    let can_submit = !submitting && counts.submittable(&current.action);
    let word_class = if counts.words > MAX_ACTION_WORDS {
        "text-sm text-red-400"
    } else {
        "text-sm text-gray-400"
    };

    let action_text = current.action.clone();
    let pace = current.pace;
    let pace_text = pace_label(pace);
    let on_submit = move |_| {
        if !can_submit {
            return;
        }
        coroutine.send(UiMessage::SubmitAction {
            action: action_text.trim().to_string(),
            pace,
        });
    };

    rsx! {
        div { class: "bg-gray-700 rounded-lg p-6 flex flex-col gap-4",
            h3 { class: "text-lg font-semibold", "Your Action" }

            div { class: "flex flex-col gap-1",
                label { class: "text-sm text-gray-400", "Action (max 50 words, single sentence)" }
                textarea {
                    class: "bg-gray-600 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-indigo-500 resize-none",
                    rows: "3",
                    placeholder: "Write your action here…",
                    disabled: submitting,
                    value: "{current.action}",
                    oninput: move |e| draft.write().action = e.value(),
                }
                div { class: "flex justify-between items-center",
                    span { class: "{word_class}", "{counts.words}/{MAX_ACTION_WORDS} words" }
                    span { class: "text-sm text-gray-400", "{counts.sentences} sentences" }
                }
            }

            div { class: "flex flex-col gap-1",
                label { class: "text-sm text-gray-400", "Pace: {pace} ({pace_text})" }
                input {
                    class: "w-full",
                    r#type: "range",
                    min: "1",
                    max: "5",
                    disabled: submitting,
                    value: "{pace}",
                    oninput: move |e| {
                        if let Ok(p) = e.value().parse::<u8>() {
                            draft.write().pace = p;
                        }
                    },
                }
                div { class: "flex justify-between text-xs text-gray-400",
                    span { "Subtle" }
                    span { "Major Twist" }
                }
            }

            if !error.is_empty() {
                div { class: "p-3 bg-red-900 border border-red-500 rounded-lg",
                    p { class: "text-red-300 text-sm", "{error}" }
                }
            }

            button {
                class: "w-full bg-emerald-600 hover:bg-emerald-500 text-white font-semibold rounded-lg py-3 transition disabled:bg-gray-500",
                disabled: !can_submit,
                onclick: on_submit,
                if submitting { "Submitting…" } else { "Submit Action" }
            }
        }
    }
}

/// Human label for a pace value.
fn pace_label(pace: u8) -> &'static str {
    match pace {
        1 => "Subtle",
        5 => "Major Twist",
        _ => "Moderate",
    }
}
