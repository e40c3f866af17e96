use std::ops::Range;
use std::time::Duration;

/// Wall relocation fires again after a random delay in this range of
/// milliseconds.
pub const WALL_RELOCATION_DELAY_MS: Range<u64> = 5000..15000;

/// Timers the controller arms and cancels. The driver owning the real clock
/// calls back into the controller when they fire.
pub trait GameScheduler {
    fn start_ticks(&mut self, period: Duration);
    fn stop_ticks(&mut self);
    fn schedule_wall_relocation(&mut self, delay: Duration);
    fn cancel_wall_relocation(&mut self);
}

/// Records armed timers without keeping time, for stepping a game by hand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualScheduler {
    tick_period: Option<Duration>,
    wall_relocation_delay: Option<Duration>,
    wall_relocations_scheduled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_period(&self) -> Option<Duration> {
        self.tick_period
    }

    pub fn wall_relocation_delay(&self) -> Option<Duration> {
        self.wall_relocation_delay
    }

    pub fn wall_relocations_scheduled(&self) -> u32 {
        self.wall_relocations_scheduled
    }

    pub fn is_ticking(&self) -> bool {
        self.tick_period.is_some()
    }

    /// Consumes the pending one-shot wall timer, as a real timer would on fire.
    pub fn take_wall_relocation(&mut self) -> Option<Duration> {
        self.wall_relocation_delay.take()
    }
}

impl GameScheduler for ManualScheduler {
    fn start_ticks(&mut self, period: Duration) {
        self.tick_period = Some(period);
    }

    fn stop_ticks(&mut self) {
        self.tick_period = None;
    }

    fn schedule_wall_relocation(&mut self, delay: Duration) {
        self.wall_relocation_delay = Some(delay);
        self.wall_relocations_scheduled += 1;
    }

    fn cancel_wall_relocation(&mut self) {
        self.wall_relocation_delay = None;
    }
}
