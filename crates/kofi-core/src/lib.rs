//! Core types for the Kofi storytelling client.
//!
//! Contains the HTTP wire protocol types, the client-side session/phase
//! model, and the naive text statistics used by the UI. No networking or
//! UI framework dependency — everything here is plain data and pure
//! functions, shared by the web and desktop frontends.

pub mod protocol;
pub mod session;
pub mod stats;
