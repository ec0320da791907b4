//! Session module - one game, advanced a frame at a time
//!
//! A [`Session`] owns all game state: the locked cells, the active and next
//! pieces, the score and the gravity timer. The shell calls
//! [`Session::step`] once per frame with the elapsed time and the commands
//! issued during that frame. Each step runs, in order:
//!
//! 1. rebuild the board from the locked cells
//! 2. gravity: accumulate time, drop one row when the interval is reached
//! 3. apply each command against that board (Quit stops here)
//! 4. paint the active piece onto the board
//! 5. on a pending lock: merge, promote the next piece, draw a new one, clear rows, score
//! 6. loss check

use std::time::Duration;

use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::GameConfig;
use crate::event::LockEvent;
use crate::lock::{clear_rows, lock_piece};
use crate::locked::LockedCells;
use crate::loss::is_lost;
use crate::piece::Piece;
use crate::rng::{PieceSource, UniformSource};
use crate::rotation::rotate_cw;
use crate::scoring::{fall_interval, line_score};
use crate::snapshot::Snapshot;
use crate::types::Command;

/// Whether a session still accepts ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// The stack reached the ceiling.
    GameOver,
    /// The player quit.
    Quit,
}

/// Default configuration and a seeded uniform source.
pub fn new_session(seed: u64) -> Session {
    Session::new(GameConfig::default(), UniformSource::seeded(seed))
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session<S = UniformSource<StdRng>> {
    config: GameConfig,
    source: S,
    locked: LockedCells,
    active: Piece,
    next: Piece,
    score: u32,
    fall_timer: Duration,
    status: Status,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl<S: PieceSource> Session<S> {
    /// Start a game: empty field, score 0, active and next pieces drawn in that order
    pub fn new(config: GameConfig, mut source: S) -> Self {
        let active = Piece::spawn(source.next_kind(), config.spawn);
        let next = Piece::spawn(source.next_kind(), config.spawn);
        Self {
            config,
            source,
            locked: LockedCells::new(),
            active,
            next,
            score: 0,
            fall_timer: Duration::ZERO,
            status: Status::Playing,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn locked(&self) -> &LockedCells {
        &self.locked
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Current gravity interval, derived from the score
    pub fn fall_interval(&self) -> Duration {
        fall_interval(&self.config, self.score)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Board as the renderer sees it: locked cells plus the active piece
    pub fn board(&self) -> Board {
        let mut board = Board::from_locked(&self.locked);
        board.overlay(&self.active.cells(), self.active.color());
        board
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.board().to_grid(),
            active: self.active.into(),
            next: self.next.into(),
            score: self.score,
            game_over: self.status == Status::GameOver,
            quit: self.status == Status::Quit,
        }
    }

    /// Advance one frame.
    ///
    /// Once the session has ended this changes nothing and returns the
    /// final snapshot.
    pub fn step(&mut self, elapsed: Duration, commands: &[Command]) -> Snapshot {
        if self.status != Status::Playing {
            return self.snapshot();
        }

        let mut board = Board::from_locked(&self.locked);
        let mut lock_pending = self.apply_gravity(elapsed, &board);

        for &command in commands {
            match command {
                Command::Quit => {
                    self.status = Status::Quit;
                    return self.snapshot();
                }
                Command::HardDrop => {
                    self.hard_drop(&board);
                    lock_pending = true;
                }
                other => {
                    self.apply_command(other, &board);
                }
            }
        }

        board.overlay(&self.active.cells(), self.active.color());

        if lock_pending {
            self.lock_active(&board);
        }

        if is_lost(&self.locked) {
            self.status = Status::GameOver;
        }

        self.snapshot()
    }

    /// Returns true when the piece could not fall and must lock
    fn apply_gravity(&mut self, elapsed: Duration, board: &Board) -> bool {
        self.fall_timer += elapsed;
        if self.fall_timer < self.fall_interval() {
            return false;
        }
        self.fall_timer = Duration::ZERO;
        !self.try_move(0, 1, board)
    }

    /// Apply a movement or rotation command. Returns false if it was rejected.
    fn apply_command(&mut self, command: Command, board: &Board) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0, board),
            Command::MoveRight => self.try_move(1, 0, board),
            Command::SoftDrop => self.try_move(0, 1, board),
            Command::RotateCw => rotate_cw(&mut self.active, board).succeeded(),
            Command::HardDrop | Command::Quit => false,
        }
    }

    /// Try to move the active piece, reverting if the result is invalid
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8, board: &Board) -> bool {
        match self.active.shifted(dx, dy) {
            Some(moved) if moved.is_valid(board) => {
                self.active = moved;
                true
            }
            _ => false,
        }
    }

    /// Drop the active piece to the lowest valid row.
    ///
    /// Bounded by the floor: each step moves one row down and row 20 is
    /// never valid. Returns the number of rows dropped.
    pub(crate) fn hard_drop(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.try_move(0, 1, board) {
            rows += 1;
        }
        rows
    }

    /// Lock the active piece, bring in the next one and clear full rows
    fn lock_active(&mut self, board: &Board) {
        let piece = self.active;
        let cells = lock_piece(&piece, &mut self.locked);

        self.active = self.next;
        self.next = Piece::spawn(self.source.next_kind(), self.config.spawn);

        let cleared_rows = clear_rows(board, &mut self.locked);
        let score_delta = line_score(&self.config, cleared_rows.len());
        self.score = self.score.saturating_add(score_delta);

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            cells,
            cleared_rows,
            score_delta,
            score: self.score,
        });
    }
}
