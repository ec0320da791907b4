//! JSON-lines event log.
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event":"session_start","seed":12345}
//! {"event":"lock","piece":"t","cells":[[4,19],[5,19],[6,19],[5,18]],"rows_cleared":0,"cleared_rows":[],"score_delta":0,"score":0}
//! {"event":"session_end","score":300,"reason":"game_over"}
//! ```
//!
//! The log never ends the game: the first failed write disables it.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::core::LockEvent;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    GameOver,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        /// None when the source was seeded from OS entropy.
        seed: Option<u64>,
    },
    Lock {
        piece: &'static str,
        cells: Vec<[i8; 2]>,
        rows_cleared: usize,
        cleared_rows: Vec<i8>,
        score_delta: u32,
        score: u32,
    },
    SessionEnd {
        score: u32,
        reason: EndReason,
    },
}

impl From<&LockEvent> for LogRecord {
    fn from(event: &LockEvent) -> Self {
        LogRecord::Lock {
            piece: event.kind.as_str(),
            cells: event.cells.iter().map(|c| [c.x, c.y]).collect(),
            rows_cleared: event.rows_cleared(),
            cleared_rows: event.cleared_rows.to_vec(),
            score_delta: event.score_delta,
            score: event.score,
        }
    }
}

/// Appends [`LogRecord`]s to a writer, or does nothing when disabled.
pub struct EventLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
    buf: Vec<u8>,
}

impl EventLog {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Write one record and flush. On failure the log disables itself.
    pub fn record(&mut self, record: &LogRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).and_then(|_| writer.flush()).is_err() {
            self.writer = None;
        }
    }

    /// The underlying writer, if the log is still enabled.
    pub fn into_inner(self) -> Option<W> {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use crate::core::{new_session, Session};
    use crate::types::Command;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(log: EventLog<Vec<u8>>) -> Vec<serde_json::Value> {
        let bytes = log.into_inner().unwrap();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_session_records() {
        let mut log = EventLog::from_writer(Vec::new());
        log.record(&LogRecord::SessionStart { seed: Some(7) });
        log.record(&LogRecord::SessionEnd {
            score: 300,
            reason: EndReason::Quit,
        });

        let lines = lines(log);
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({"event": "session_start", "seed": 7})
        );
        assert_eq!(
            lines[1],
            serde_json::json!({"event": "session_end", "score": 300, "reason": "quit"})
        );
    }

    #[test]
    fn test_lock_record_from_event() {
        let mut session: Session = new_session(99);
        session.step(std::time::Duration::ZERO, &[Command::HardDrop]);
        let event = session.take_last_event().unwrap();

        let mut log = EventLog::from_writer(Vec::new());
        log.record(&LogRecord::from(&event));

        let lines = lines(log);
        let lock = &lines[0];
        assert_eq!(lock["event"], "lock");
        assert_eq!(lock["piece"], event.kind.as_str());
        assert_eq!(lock["cells"].as_array().unwrap().len(), 4);
        assert_eq!(lock["rows_cleared"], 0);
        assert_eq!(lock["cleared_rows"], serde_json::json!([]));
        assert_eq!(lock["score"], 0);
    }

    #[test]
    fn test_write_failure_disables_log() {
        let mut log = EventLog::from_writer(FailingWriter);
        assert!(log.is_enabled());
        log.record(&LogRecord::SessionStart { seed: None });
        assert!(!log.is_enabled());
        // Later records are dropped silently.
        log.record(&LogRecord::SessionStart { seed: None });
        assert!(log.into_inner().is_none());
    }

    #[test]
    fn test_disabled_log_is_noop() {
        let mut log = EventLog::disabled();
        assert!(!log.is_enabled());
        log.record(&LogRecord::SessionStart { seed: Some(1) });
    }
}
