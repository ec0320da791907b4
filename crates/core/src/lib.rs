//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else. It has no
//! dependency on terminals, input devices or clocks: the shell hands it the
//! elapsed time and the commands issued during a frame, and gets back a
//! render-ready [`Snapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetrominoes as 5x5 masks per rotation state, plus colors
//! - [`board`]: the 10x20 grid rebuilt from locked cells, and placement validation
//! - [`locked`]: the durable set of locked cells, keyed by signed coordinate
//! - [`piece`]: the active piece (kind, anchor, rotation index)
//! - [`rotation`]: clockwise rotation with the two-step sideways kick
//! - [`lock`]: merging a piece into the locked set and clearing full rows
//! - [`loss`]: the game-over predicate
//! - [`scoring`]: line-clear points and the score-driven fall interval
//! - [`rng`]: injectable piece sources (seeded uniform, LCG, fixed sequence)
//! - [`config`]: the ruleset constants as an immutable [`GameConfig`] value
//! - [`session`]: one game, advanced a frame at a time by [`Session::step`]
//! - [`snapshot`]: the render-ready view returned by every step
//! - [`event`]: the [`LockEvent`] recorded on each lock
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use blockfall_core::{new_session, Status};
//! use blockfall_types::Command;
//!
//! let mut session = new_session(12345);
//! let snap = session.step(Duration::from_millis(16), &[Command::HardDrop]);
//!
//! // Hard drop locks immediately; a fresh piece is already active.
//! assert_eq!(snap.score, 0);
//! assert_eq!(session.locked().len(), 4);
//! assert_eq!(session.status(), Status::Playing);
//! ```
//!
//! # Tick order
//!
//! Within one [`Session::step`] call: gravity, then commands in the order
//! given, then lock and clear, then the loss check.

pub mod board;
pub mod config;
pub mod event;
pub mod lock;
pub mod locked;
pub mod loss;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{is_valid, Board};
pub use config::GameConfig;
pub use event::LockEvent;
pub use lock::{clear_rows, lock_piece, ClearedRows};
pub use locked::LockedCells;
pub use loss::is_lost;
pub use piece::{Piece, PieceCells};
pub use rng::{FixedSequence, PieceSource, SimpleRng, UniformSource};
pub use rotation::{rotate_cw, RotateOutcome};
pub use scoring::{fall_interval, line_score};
pub use session::{new_session, Session, Status};
pub use shapes::{color, rotation_states, Mask};
pub use snapshot::{ActiveSnapshot, NextSnapshot, Snapshot};
