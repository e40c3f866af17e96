use std::time::Duration;
use tokio::time::Instant;

use common::games::snake::GameScheduler;

/// Keeps timer deadlines on the tokio clock. The event loop sleeps until the
/// earliest one and reports back with [`tick_elapsed`] / [`wall_elapsed`].
///
/// [`tick_elapsed`]: TokioScheduler::tick_elapsed
/// [`wall_elapsed`]: TokioScheduler::wall_elapsed
#[derive(Debug, Default)]
pub struct TokioScheduler {
    tick: Option<(Instant, Duration)>,
    wall_relocation: Option<Instant>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.tick.map(|(deadline, _)| deadline)
    }

    pub fn next_wall_relocation(&self) -> Option<Instant> {
        self.wall_relocation
    }

    /// Moves the repeating deadline one period forward.
    pub fn tick_elapsed(&mut self) {
        if let Some((deadline, period)) = self.tick.as_mut() {
            *deadline += *period;
        }
    }

    /// The wall timer is one-shot; the controller re-arms it.
    pub fn wall_elapsed(&mut self) {
        self.wall_relocation = None;
    }
}

impl GameScheduler for TokioScheduler {
    fn start_ticks(&mut self, period: Duration) {
        self.tick = Some((Instant::now() + period, period));
    }

    fn stop_ticks(&mut self) {
        self.tick = None;
    }

    fn schedule_wall_relocation(&mut self, delay: Duration) {
        self.wall_relocation = Some(Instant::now() + delay);
    }

    fn cancel_wall_relocation(&mut self) {
        self.wall_relocation = None;
    }
}
