//! Results screen — final story, judge verdict, video script, statistics.
//!
//! Purely presentational. The statistics come from
//! [`StoryStats`](kofi_core::stats::StoryStats) and are display heuristics
//! over the story text, not authoritative game data.

use dioxus::prelude::*;
use kofi_core::stats::StoryStats;

use crate::{AppState, UiMessage};

#[component]
pub fn ResultsScreen(state: AppState) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let result = state.result.read().clone();
    let Some(result) = result else {
        return rsx! {};
    };

    let stats = StoryStats::of(&result.final_story);

    rsx! {
        div { class: "max-w-4xl mx-auto",
            div { class: "bg-gray-800 rounded-2xl shadow-2xl p-8 flex flex-col gap-6",
                h2 { class: "text-3xl font-bold text-center", "Game Complete!" }

                // Final story
                div { class: "bg-gray-700 rounded-lg p-6",
                    h3 { class: "text-xl font-semibold mb-4", "The Complete Story" }
                    div { class: "bg-gray-900 rounded-lg p-4",
                        p { class: "text-gray-300 leading-relaxed whitespace-pre-line", "{result.final_story}" }
                    }
                }

                // Judge verdict
                div { class: "bg-gray-700 rounded-lg p-6",
                    h3 { class: "text-xl font-semibold mb-4", "🏆 AI Judge's Verdict" }
                    div { class: "bg-yellow-900 border border-yellow-600 rounded-lg p-4",
                        p { class: "text-gray-300 leading-relaxed whitespace-pre-line", "{result.judge_result}" }
                    }
                }

                // Video script
                div { class: "bg-gray-700 rounded-lg p-6",
                    h3 { class: "text-xl font-semibold mb-4", "🎬 Video Summary Script" }
                    div { class: "bg-indigo-900 border border-indigo-600 rounded-lg p-4",
                        p { class: "text-gray-300 leading-relaxed whitespace-pre-line", "{result.video_script}" }
                    }
                    p { class: "text-sm text-gray-400 mt-3",
                        "This script can be fed to an AI video generator for a visual summary of your story."
                    }
                }

                // Original objectives
                if !result.objectives.is_empty() {
                    div { class: "bg-gray-700 rounded-lg p-6",
                        h3 { class: "text-xl font-semibold mb-4", "Original Objectives" }
                        div { class: "flex flex-col gap-3",
                            for (i, objective) in result.objectives.iter().enumerate() {
                                {
                                    let number = i + 1;
                                    rsx! {
                                        div { class: "flex items-center gap-3",
                                            span { class: "w-8 h-8 bg-indigo-600 rounded-full flex items-center justify-center text-sm font-bold",
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

                // Statistics
                div { class: "bg-gray-700 rounded-lg p-6",
                    h3 { class: "text-xl font-semibold mb-4", "Story Statistics" }
                    div { class: "grid grid-cols-3 gap-4",
                        div { class: "text-center",
                            div { class: "text-2xl font-bold text-indigo-400", "{stats.total_actions}" }
                            div { class: "text-sm text-gray-400", "Total Actions" }
                        }
                        div { class: "text-center",
                            div { class: "text-2xl font-bold text-emerald-400", "{stats.reading_minutes}" }
                            div { class: "text-sm text-gray-400", "Story Length (minutes)" }
                        }
                        div { class: "text-center",
                            div { class: "text-2xl font-bold text-purple-400", "{stats.player_turns}" }
                            div { class: "text-sm text-gray-400", "Player Turns" }
                        }
                    }
                }

                // Reset
                div { class: "text-center",
                    button {
                        class: "bg-indigo-600 hover:bg-indigo-500 text-white font-semibold rounded-lg py-3 px-8 transition",
                        onclick: move |_| coroutine.send(UiMessage::Reset),
                        "Start New Game"
                    }
                }
            }
        }
    }
}
