use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::game_state::{SnakeGameState, TickOutcome};
use super::renderer::GameRenderer;
use super::scheduler::{GameScheduler, WALL_RELOCATION_DELAY_MS};
use super::settings::SnakeSettings;
use super::types::{Direction, FinishReason, GameStatus};

/// Runs one game: lifecycle, timer callbacks and player input.
///
/// Timers are armed through `S` and fire back into [`on_tick`] and
/// [`on_wall_timer`]; every visible change is pushed to `R`.
///
/// [`on_tick`]: SnakeController::on_tick
/// [`on_wall_timer`]: SnakeController::on_wall_timer
pub struct SnakeController<S: GameScheduler, R: GameRenderer> {
    settings: SnakeSettings,
    state: SnakeGameState,
    scheduler: S,
    renderer: R,
    rng: SessionRng,
}

impl<S: GameScheduler, R: GameRenderer> SnakeController<S, R> {
    /// Rejects the settings as a whole if any field is out of range.
    pub fn new(settings: SnakeSettings, scheduler: S, renderer: R, mut rng: SessionRng) -> Result<Self, String> {
        let violations = settings.violations();
        if !violations.is_empty() {
            for violation in &violations {
                log!("Invalid settings: {}", violation);
            }
            return Err(format!("Invalid settings: {}", violations.join("; ")));
        }

        let state = SnakeGameState::new(&settings, &mut rng)?;
        let mut controller = Self {
            settings,
            state,
            scheduler,
            renderer,
            rng,
        };
        controller.render();
        log!(
            "Game ready: {}x{} field, speed {}, win length {}, seed {}",
            settings.cols_count,
            settings.rows_count,
            settings.speed,
            settings.win_length,
            controller.rng.seed()
        );
        Ok(controller)
    }

    pub fn reset(&mut self) -> Result<(), String> {
        self.stop();
        self.state.reset(&mut self.rng)?;
        self.render();
        log!("Game reset");
        Ok(())
    }

    pub fn play(&mut self) {
        if self.state.status() != GameStatus::Stopped {
            return;
        }
        self.state.set_playing();
        self.scheduler.start_ticks(self.settings.tick_interval());
        let delay = self.next_wall_relocation_delay();
        self.scheduler.schedule_wall_relocation(delay);
        log!("Game started");
    }

    pub fn stop(&mut self) {
        self.state.set_stopped();
        self.cancel_timers();
    }

    pub fn finish(&mut self, reason: FinishReason) {
        self.state.finish(reason);
        self.cancel_timers();
        log!("Game finished: {}. Score: {}", reason, self.state.score());
    }

    pub fn toggle_play(&mut self) {
        match self.state.status() {
            GameStatus::Playing => {
                self.stop();
                log!("Game paused");
            }
            GameStatus::Stopped => self.play(),
            GameStatus::Finished => {}
        }
    }

    pub fn new_game(&mut self) -> Result<(), String> {
        self.reset()
    }

    pub fn on_tick(&mut self) {
        if self.state.status() != GameStatus::Playing {
            return;
        }

        match self.state.tick(&mut self.rng) {
            Ok(TickOutcome::Finished(reason)) => self.finish(reason),
            Ok(TickOutcome::Moved) | Ok(TickOutcome::Ate) => self.render(),
            Err(e) => log!("Tick failed: {}", e),
        }
    }

    pub fn on_wall_timer(&mut self) {
        if self.state.status() != GameStatus::Playing {
            return;
        }

        let delay = self.next_wall_relocation_delay();
        self.scheduler.schedule_wall_relocation(delay);

        match self.state.relocate_wall(&mut self.rng) {
            Ok(_) => self.render(),
            Err(e) => log!("Wall relocation failed: {}", e),
        }
    }

    /// Returns whether the direction was accepted.
    pub fn handle_direction(&mut self, direction: Direction) -> bool {
        if self.state.status() != GameStatus::Playing {
            return false;
        }
        self.state.try_set_direction(direction)
    }

    pub fn handle_key_code(&mut self, key_code: u32) -> bool {
        match Direction::from_key_code(key_code) {
            Some(direction) => self.handle_direction(direction),
            None => false,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn cancel_timers(&mut self) {
        self.scheduler.stop_ticks();
        self.scheduler.cancel_wall_relocation();
    }

    fn next_wall_relocation_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(WALL_RELOCATION_DELAY_MS))
    }

    fn render(&mut self) {
        self.renderer.render(
            self.state.snake().body(),
            self.state.walls().points(),
            self.state.food().coordinates(),
        );
    }
}
