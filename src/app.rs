//! Game loop and the context it runs in.
//!
//! [`Context`] owns everything process-wide the loop needs (terminal session,
//! clock, frame pacing). It is created once before the loop starts and torn down
//! after it ends; nothing lives in globals.
//!
//! One frame is: drain input → render → update and win check (until won) →
//! wait out the rest of the frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::config::AppConfig;
use crate::core::{GameState, SetupResult};
use crate::input::map_event;
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::{frame_ms, InputEvent, WINDOW_TITLE};

/// Monotonic milliseconds since the clock was started.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// What the loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Terminal geometry changed; redraw everything next frame.
    Redraw,
    Quit,
}

/// Apply one input event to the game.
///
/// Only fails if a restart cannot build a new board.
pub fn apply_input(
    game: &mut GameState,
    view: &GameView,
    viewport: Viewport,
    input: InputEvent,
    now_ms: u64,
) -> SetupResult<Flow> {
    match input {
        InputEvent::CloseRequested => return Ok(Flow::Quit),
        InputEvent::PointerReleased { column, row } => {
            if let Some(point) = view.point_at(viewport, column, row) {
                game.handle_pointer_release(point);
            }
        }
        InputEvent::Restart => game.restart(now_ms)?,
        InputEvent::Resized => return Ok(Flow::Redraw),
    }
    Ok(Flow::Continue)
}

/// Update and win check, skipped once the game is won.
pub fn advance(game: &mut GameState, now_ms: u64) {
    if game.game_over() {
        return;
    }
    game.update(now_ms);
    if game.check_win() {
        tracing::info!(score = game.score(), "player won");
    }
}

/// Terminal session, clock and frame timing for one run of the game.
pub struct Context {
    renderer: TerminalRenderer,
    clock: Clock,
    frame: Duration,
    entered: bool,
}

impl Context {
    /// Take over the terminal.
    pub fn init(config: &AppConfig, clock: Clock) -> Result<Self> {
        let mut ctx = Self::armed(config, clock);
        ctx.renderer.enter(WINDOW_TITLE)?;
        Ok(ctx)
    }

    /// A context that restores the terminal on drop, even if entering fails
    /// halfway through.
    fn armed(config: &AppConfig, clock: Clock) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            clock,
            frame: Duration::from_millis(frame_ms(config.frame_rate)),
            entered: true,
        }
    }

    /// Give the terminal back.
    pub fn teardown(mut self) -> Result<()> {
        self.entered = false;
        self.renderer.exit()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        if self.entered {
            // Error paths still get a usable terminal back.
            let _ = self.renderer.exit();
        }
    }
}

/// Run frames until a close is requested.
pub fn run(ctx: &mut Context, game: &mut GameState, view: &GameView) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = ctx.viewport();
    tracing::info!(frame_ms = ctx.frame.as_millis() as u64, "game loop started");

    loop {
        let frame_start = Instant::now();

        while event::poll(Duration::ZERO)? {
            let Some(input) = map_event(&event::read()?) else {
                continue;
            };
            match apply_input(game, view, viewport, input, ctx.now_ms())? {
                Flow::Continue => {}
                Flow::Redraw => {
                    viewport = ctx.viewport();
                    ctx.renderer.invalidate();
                }
                Flow::Quit => {
                    tracing::info!(score = game.score(), won = game.game_over(), "game loop stopped");
                    return Ok(());
                }
            }
        }

        view.render_into(game, viewport, &mut fb);
        ctx.renderer.present(&mut fb)?;

        advance(game, ctx.now_ms());

        // Sleep out the frame, waking early if input arrives.
        let remaining = ctx.frame.saturating_sub(frame_start.elapsed());
        if !remaining.is_zero() {
            event::poll(remaining)?;
        }
    }
}
