use crate::render::{render, DrawSurface};
use crate::systems::compute_unit;
use crate::{Config, GameError, GameState, Params, PlayField, Side};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Abstract environment (Time, Logging)
pub trait Environment {
    fn now(&self) -> f64; // ms
    fn log(&self, msg: String);
}

/// Receives every point scored; purely observational
pub trait ScoreDisplay {
    fn update(&mut self, side: Side, score: u32);
}

/// Loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Before the first start; only the field is kept up to date
    Idle,
    /// Ticking a live game
    Running,
    /// The stop hook fired; nothing ticks any more
    Stopped,
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Reschedule { delay_ms: u32 },
    Idle,
    Stopped,
}

/// Cancellation flag shared between the loop and whoever wants to stop it
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Milliseconds since the last tick; a clock that ran backwards is an error
pub fn elapsed_ms(last_ms: f64, now_ms: f64) -> Result<f64, GameError> {
    let elapsed = now_ms - last_ms;
    if elapsed < 0.0 {
        Err(GameError::ClockSkew {
            elapsed_ms: elapsed,
        })
    } else {
        Ok(elapsed)
    }
}

/// Convert elapsed wall time to simulation delta units.
///
/// A tick where the clock did not advance still moves one nominal unit so
/// the game cannot stall.
pub fn delta_units(elapsed_ms: f64, config: &Config) -> f32 {
    if elapsed_ms > 0.0 {
        (elapsed_ms / config.ms_per_delta_unit) as f32
    } else {
        Params::STALLED_DELTA_UNITS
    }
}

/// Drives one game from start to stop.
///
/// The loop does not own a timer. The host calls [`GameLoop::tick`] and
/// re-arms a one-shot timer from the returned [`TickOutcome`], so tests can
/// single-step with an injected clock.
pub struct GameLoop {
    pub env: Box<dyn Environment>,
    config: Config,
    field: PlayField,
    state: LoopState,
    game: Option<GameState>,
    last_tick_ms: f64,
    tick: u64,
    stop: StopHandle,
}

impl GameLoop {
    pub fn new(
        env: Box<dyn Environment>,
        config: Config,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Self, GameError> {
        config.validate()?;
        // A hidden page can report 0x0; start at unit 1 and wait for a resize
        let field = match compute_unit(viewport_width, viewport_height) {
            Ok(unit) => PlayField::from_unit(unit),
            Err(err) => {
                env.log(format!("Pong: {err}, starting at unit 1"));
                PlayField::default()
            }
        };
        let now = env.now();

        Ok(Self {
            env,
            config,
            field,
            state: LoopState::Idle,
            game: None,
            last_tick_ms: now,
            tick: 0,
            stop: StopHandle::new(),
        })
    }

    /// Start a fresh game, replacing any game in progress
    pub fn start(&mut self, seed: u64) -> Result<(), GameError> {
        if self.state == LoopState::Stopped || self.stop.is_stopped() {
            return Err(GameError::LoopStopped);
        }

        let now = self.env.now();
        self.game = Some(GameState::new(self.field, self.config.clone(), seed, now));
        self.last_tick_ms = now;
        self.tick = 0;
        self.state = LoopState::Running;
        self.env.log(format!(
            "Pong: Game started, seed={seed}, unit={:.3}",
            self.field.unit
        ));
        Ok(())
    }

    /// Run one tick: advance physics unless paused, then always draw
    pub fn tick(
        &mut self,
        surface: &mut dyn DrawSurface,
        scores: &mut dyn ScoreDisplay,
    ) -> TickOutcome {
        if self.stop.is_stopped() && self.state != LoopState::Stopped {
            self.state = LoopState::Stopped;
            self.env
                .log(format!("Pong: Game loop stopped after {} ticks", self.tick));
        }

        let game = match (self.state, self.game.as_mut()) {
            (LoopState::Stopped, _) => return TickOutcome::Stopped,
            (LoopState::Running, Some(game)) => game,
            _ => return TickOutcome::Idle,
        };

        let now = self.env.now();
        let elapsed = match elapsed_ms(self.last_tick_ms, now) {
            Ok(elapsed) => elapsed,
            Err(err) => {
                self.env.log(format!("Pong: {err}, treating as a stalled tick"));
                0.0
            }
        };
        let dt = delta_units(elapsed, &self.config);
        self.last_tick_ms = now;
        self.tick += 1;

        if let Some(event) = game.advance(dt, now) {
            scores.update(event.winner, event.score);
            let score = game.scores();
            self.env.log(format!(
                "Pong: Point to {}, computer={} player={}",
                event.winner.label(),
                score.computer,
                score.player
            ));
        }

        render(&game.world, &game.field, surface);

        if self.tick % Params::HEARTBEAT_TICKS == 0 {
            let score = game.scores();
            self.env.log(format!(
                "Pong: Game running, tick={}, dt={dt:.2}, paused={}, computer={} player={}",
                self.tick, game.paused, score.computer, score.player
            ));
        }

        TickOutcome::Reschedule {
            delay_ms: self.config.tick_delay_ms,
        }
    }

    /// Recompute the unit for a new viewport.
    ///
    /// A live game is rescaled. Before the first start only the field is
    /// updated, which is reported as `ResizeBeforeStart`.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) -> Result<f32, GameError> {
        let unit = match compute_unit(viewport_width, viewport_height) {
            Ok(unit) => unit,
            Err(err) => {
                self.env.log(format!("Pong: {err}, keeping unit {:.3}", self.field.unit));
                return Err(err);
            }
        };

        match self.game.as_mut() {
            Some(game) => {
                game.resize(unit);
                self.field = game.field;
                Ok(unit)
            }
            None => {
                self.field = PlayField::from_unit(unit);
                let err = GameError::ResizeBeforeStart;
                self.env.log(format!("Pong: {err}, unit={unit:.3}"));
                Err(err)
            }
        }
    }

    /// Move the player's paddle to a pointer or touch position
    pub fn pointer_move(&mut self, y: f32) -> Result<(), GameError> {
        match self.game.as_mut() {
            Some(game) => game.set_player_y(y),
            None => Err(GameError::NotRunning),
        }
    }

    pub fn toggle_pause(&mut self) -> Result<bool, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotRunning)?;
        game.paused = !game.paused;
        self.env.log(format!("Pong: paused={}", game.paused));
        Ok(game.paused)
    }

    /// The sound flag has no effect on play
    pub fn toggle_sound(&mut self) -> Result<bool, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NotRunning)?;
        game.sound_enabled = !game.sound_enabled;
        self.env.log(format!("Pong: sound={}", game.sound_enabled));
        Ok(game.sound_enabled)
    }

    /// Draw the current game without ticking
    pub fn render(&self, surface: &mut dyn DrawSurface) -> Result<(), GameError> {
        let game = self.game.as_ref().ok_or(GameError::NotRunning)?;
        render(&game.world, &game.field, surface);
        Ok(())
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }
}
