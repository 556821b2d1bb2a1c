//! Tick scheduling for the lighting engine.
//!
//! Portable pacing without async/await or platform timers: the caller is
//! responsible for sleeping between ticks. Both periodic drivers (the
//! animation and the status envelope) share one fixed tick period and run
//! from this single serialized context.

use embassy_time::{Duration, Instant};

use crate::Transport;
use crate::engine::LightingEngine;
use crate::power::PowerRail;
use crate::settings::SettingsStore;
use crate::status::{StatusSource, TICK_MS};

/// Fixed tick period shared by both drivers.
pub const TICK_PERIOD: Duration = Duration::from_millis(TICK_MS);

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero when behind schedule).
    pub sleep_duration: Duration,
}

/// Drives the engine at the fixed cadence.
///
/// Each tick drains the command queue, runs the animation driver while the
/// strip is on, runs the status driver while an overlay window is active,
/// and polls the persistence deadline. If the caller falls more than two
/// periods behind, timing resets to now instead of bursting to catch up.
pub struct TickScheduler<'a, T, P, S, V, const PIXELS: usize, const COMMANDS: usize>
where
    T: Transport,
    P: PowerRail,
    S: SettingsStore,
    V: StatusSource,
{
    engine: LightingEngine<'a, T, P, S, V, PIXELS, COMMANDS>,
    next_tick: Instant,
}

impl<'a, T, P, S, V, const PIXELS: usize, const COMMANDS: usize>
    TickScheduler<'a, T, P, S, V, PIXELS, COMMANDS>
where
    T: Transport,
    P: PowerRail,
    S: SettingsStore,
    V: StatusSource,
{
    pub fn new(engine: LightingEngine<'a, T, P, S, V, PIXELS, COMMANDS>) -> Self {
        Self {
            engine,
            next_tick: Instant::from_millis(0),
        }
    }

    /// Run one tick and return timing information for the caller's sleep.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = Duration::from_millis(TICK_PERIOD.as_millis() * 2);
        if now.as_millis() > self.next_tick.as_millis() + max_drift.as_millis() {
            self.next_tick = now;
        }

        self.engine.process_commands(now);
        if self.engine.is_on() {
            self.engine.animation_tick();
        }
        self.engine.status_tick();
        self.engine.flush_status_refresh();
        self.engine.poll_persistence(now);

        self.next_tick += TICK_PERIOD;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &LightingEngine<'a, T, P, S, V, PIXELS, COMMANDS> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut LightingEngine<'a, T, P, S, V, PIXELS, COMMANDS> {
        &mut self.engine
    }
}
