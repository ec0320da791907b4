//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a session
//! [`Snapshot`](blockfall_core::Snapshot) into a framebuffer, and the renderer
//! flushes only what changed to the terminal. Each board cell is two
//! columns wide to roughly square it up.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
