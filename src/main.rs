//! Terminal runner (default binary).
//!
//! Wires the engine to crossterm input, the framebuffer renderer and the drop
//! timer. The engine decides when the timer runs; this loop only waits for
//! whichever comes first, a key press or the next tick.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, error, info};

use fruit_blocks::core::{GameEngine, GameObserver, GameSnapshot, TimerSignal};
use fruit_blocks::input::{command_for_event, should_quit};
use fruit_blocks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use fruit_blocks::types::Command;
use fruit_blocks::{logging, DropTimer, GameConfig};

/// How long the game-over screen stays up before an automatic restart.
const AUTO_RESTART_DELAY: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("read configuration")?;
    logging::init(config.log_path.as_deref())?;

    let seed = config.seed_or_clock();
    info!("starting with seed {seed}, config {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("game loop failed: {err:#}");
    }
    result
}

/// Presentation side of the engine's events.
struct Presenter {
    timer: DropTimer,
    latest: GameSnapshot,
    dirty: bool,
    auto_restart: bool,
    game_over_at: Option<Instant>,
}

impl Presenter {
    fn new(auto_restart: bool) -> Self {
        Self {
            timer: DropTimer::new(),
            latest: GameSnapshot::default(),
            dirty: true,
            auto_restart,
            game_over_at: None,
        }
    }

    fn restart_due(&self, now: Instant) -> bool {
        self.auto_restart
            && self
                .game_over_at
                .is_some_and(|at| now.duration_since(at) >= AUTO_RESTART_DELAY)
    }
}

impl GameObserver for Presenter {
    fn on_state_changed(&mut self, snapshot: &GameSnapshot) {
        self.latest = *snapshot;
        self.dirty = true;
    }

    fn on_score_changed(&mut self, score: u32) {
        debug!("score {score}");
    }

    fn on_game_over(&mut self, score: u32) {
        info!("game over with score {score}");
        self.game_over_at = Some(Instant::now());
    }

    fn on_timer(&mut self, signal: TimerSignal) {
        if let TimerSignal::Arm { .. } = signal {
            self.game_over_at = None;
        }
        self.timer.apply(signal, Instant::now());
    }
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, seed: u32) -> Result<()> {
    let mut game = GameEngine::new(seed).with_drop_interval_ms(config.drop_interval_ms);
    let mut presenter = Presenter::new(config.auto_restart);

    let events = game.start();
    game.dispatch(&events, &mut presenter);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        if presenter.dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&presenter.latest, Viewport::new(w, h), &mut fb);
            term.present(&mut fb)?;
            presenter.dirty = false;
        }

        let timeout = presenter.timer.time_until_due(Instant::now());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    info!("quit requested (score {})", game.score());
                    return Ok(());
                }
                Event::Resize(..) => {
                    term.invalidate();
                    presenter.dirty = true;
                }
                _ => {}
            }

            if let Some(command) = command_for_event(&ev) {
                game.apply_with(command, &mut presenter);
            }
        }

        let now = Instant::now();
        if presenter.timer.fire(now) {
            let events = game.tick();
            game.dispatch(&events, &mut presenter);
        }
        if presenter.restart_due(now) {
            game.apply_with(Command::Reset, &mut presenter);
        }
    }
}
