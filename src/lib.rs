//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and holds the pieces
//! of the terminal program that are worth testing on their own: the
//! environment-driven [`config`] and the JSON-lines [`event_log`].

pub mod config;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
