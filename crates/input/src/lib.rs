//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to game [`Command`](crate::types::Command)s
//! and to menu intents. Holds no state: repeat behavior is whatever the
//! terminal's key repeat delivers, one command per key event.

pub mod map;

pub use blockfall_types as types;

pub use map::{command_for_key, menu_intent, MenuIntent};
