//! Terminal runner (default binary).
//!
//! Start menu, then one game per Enter press. Input comes from crossterm,
//! rendering goes through the framebuffer view and the diffing renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::{ShellConfig, GAME_OVER_HOLD};
use blockfall::core::{GameConfig, Session, Status, UniformSource};
use blockfall::event_log::{EndReason, EventLog, LogRecord};
use blockfall::input::{command_for_key, menu_intent, MenuIntent};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = ShellConfig::from_env();
    let mut log = match &config.log_path {
        Some(path) => EventLog::open(path).unwrap_or_else(|e| {
            eprintln!("[blockfall] event log disabled: {}: {}", path, e);
            EventLog::disabled()
        }),
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Shared per-process screen state.
struct Screen {
    view: GameView,
    fb: FrameBuffer,
}

impl Screen {
    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

fn run(term: &mut TerminalRenderer, config: &ShellConfig, log: &mut EventLog) -> Result<()> {
    let mut screen = Screen {
        view: GameView::default(),
        fb: FrameBuffer::new(0, 0),
    };

    loop {
        match menu(term, &mut screen, config)? {
            MenuIntent::Exit => return Ok(()),
            MenuIntent::Start => play(term, &mut screen, config, log)?,
        }
    }
}

fn menu(term: &mut TerminalRenderer, screen: &mut Screen, config: &ShellConfig) -> Result<MenuIntent> {
    loop {
        screen.view.render_menu_into(Screen::viewport(), &mut screen.fb);
        term.draw_swap(&mut screen.fb)?;

        if !event::poll(config.frame_duration())? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(intent) = menu_intent(key) {
                    return Ok(intent);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn play(
    term: &mut TerminalRenderer,
    screen: &mut Screen,
    config: &ShellConfig,
    log: &mut EventLog,
) -> Result<()> {
    let source = match config.seed {
        Some(seed) => UniformSource::seeded(seed),
        None => UniformSource::from_entropy(),
    };
    let mut session = Session::new(GameConfig::default(), source);
    log.record(&LogRecord::SessionStart { seed: config.seed });

    let frame = config.frame_duration();
    let mut commands = Vec::with_capacity(16);
    let mut last = Instant::now();

    loop {
        // Collect this frame's commands in arrival order.
        commands.clear();
        let deadline = last + frame;
        while let Some(timeout) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => commands.extend(command_for_key(key)),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        let snap = session.step(now - last, &commands);
        last = now;

        if let Some(event) = session.take_last_event() {
            log.record(&LogRecord::from(&event));
        }

        screen.view.render_into(&snap, Screen::viewport(), &mut screen.fb);
        term.draw_swap(&mut screen.fb)?;

        let reason = match session.status() {
            Status::Playing => continue,
            Status::Quit => EndReason::Quit,
            Status::GameOver => {
                std::thread::sleep(GAME_OVER_HOLD);
                drain_input()?;
                EndReason::GameOver
            }
        };
        log.record(&LogRecord::SessionEnd {
            score: session.score(),
            reason,
        });
        return Ok(());
    }
}

/// Drop keys pressed while the game-over screen was up.
fn drain_input() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    Ok(())
}
