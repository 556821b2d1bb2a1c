//! Lighting engine - the main orchestrator.
//!
//! Owns the animation state and the frame buffers, drains the command
//! channel, and runs the animation and status drivers. Everything mutates
//! from the single tick context, so no locking is needed beyond the
//! command queue itself.

use embassy_time::{Duration, Instant};

use crate::Transport;
use crate::color::{BrightnessRange, Hsb};
use crate::command::{Command, CommandReceiver};
use crate::compositor::{BLACKOUT_CHARGE, DIM_CHARGE, FrameCompositor};
use crate::effect::{self, EffectId};
use crate::error::{CommandError, ConfigError};
use crate::power::{PowerController, PowerRail};
use crate::settings::{DEFAULT_SAVE_DEBOUNCE, PersistenceManager, SettingsStore};
use crate::state::{AnimationState, SPEED_MAX, SPEED_MIN};
use crate::status::{FADE_IN_END, IndicatorMap, StatusOverlay, StatusSource, WINDOW_END, WiredState};

/// Configuration for the lighting engine.
#[derive(Debug, Clone)]
pub struct EngineConfig<'a> {
    /// Output brightness window for the effect algorithms.
    pub brightness: BrightnessRange,
    /// Compiled-in default color, used when no valid record is persisted.
    pub start_color: Hsb,
    pub start_speed: u8,
    pub start_effect: EffectId,
    pub on_start: bool,
    /// Hue degrees per change-hue command.
    pub hue_step: u16,
    /// Saturation percent per change-sat command.
    pub sat_step: u8,
    /// Brightness percent per change-brt command.
    pub brt_step: u8,
    /// Quiet interval before a scheduled save is written out.
    pub save_debounce: Duration,
    /// Turn the strip off while the keyboard is idle.
    pub auto_off_idle: bool,
    /// Follow USB power presence with the on-state.
    pub auto_off_usb: bool,
    pub indicators: IndicatorMap<'a>,
}

impl Default for EngineConfig<'_> {
    fn default() -> Self {
        Self {
            brightness: BrightnessRange::full(),
            start_color: Hsb::new(0, 100, 100),
            start_speed: 3,
            start_effect: EffectId::Solid,
            on_start: true,
            hue_step: 10,
            sat_step: 10,
            brt_step: 10,
            save_debounce: DEFAULT_SAVE_DEBOUNCE,
            auto_off_idle: false,
            auto_off_usb: false,
            indicators: IndicatorMap::default(),
        }
    }
}

/// The lighting state machine and frame pipeline for one strip.
pub struct LightingEngine<'a, T, P, S, V, const PIXELS: usize, const COMMANDS: usize>
where
    T: Transport,
    P: PowerRail,
    S: SettingsStore,
    V: StatusSource,
{
    commands: CommandReceiver<'a, COMMANDS>,
    transport: T,
    power: PowerController<P>,
    persistence: PersistenceManager<S>,
    source: V,
    overlay: StatusOverlay,
    config: EngineConfig<'a>,
    state: AnimationState,
    frames: FrameCompositor<PIXELS>,
    refresh_pending: bool,
}

impl<'a, T, P, S, V, const PIXELS: usize, const COMMANDS: usize>
    LightingEngine<'a, T, P, S, V, PIXELS, COMMANDS>
where
    T: Transport,
    P: PowerRail,
    S: SettingsStore,
    V: StatusSource,
{
    /// Build the engine, restore persisted preferences and bring the power
    /// rail in line with the initial state.
    pub fn new(
        commands: CommandReceiver<'a, COMMANDS>,
        transport: T,
        rail: P,
        store: S,
        source: V,
        config: EngineConfig<'a>,
    ) -> Result<Self, ConfigError> {
        if PIXELS == 0 {
            return Err(ConfigError::NoPixels);
        }
        config.indicators.validate(PIXELS)?;

        let mut state = AnimationState {
            color: config.start_color,
            speed: config.start_speed.clamp(SPEED_MIN, SPEED_MAX),
            effect: config.start_effect,
            phase_step: 0,
            on: config.on_start,
            status_active: false,
            status_step: 0,
        };

        let mut persistence = PersistenceManager::new(store, config.save_debounce);
        persistence.load(&mut state);
        state.phase_step = 0;
        state.status_active = false;
        state.status_step = 0;

        if config.auto_off_usb {
            state.on = source.wired_state() != WiredState::None;
        }

        let mut engine = Self {
            commands,
            transport,
            power: PowerController::new(rail),
            persistence,
            overlay: StatusOverlay::new(config.brightness.max()),
            source,
            config,
            state,
            frames: FrameCompositor::new(),
            refresh_pending: false,
        };
        engine.update_power_rail();
        Ok(engine)
    }

    pub fn is_on(&self) -> bool {
        self.state.on
    }

    pub fn status_active(&self) -> bool {
        self.state.status_active
    }

    /// Read-only view of the animation state.
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Whether the strip is currently on. Fails when no usable transport
    /// is attached.
    pub fn query_on_state(&self) -> Result<bool, CommandError> {
        if !self.transport.is_ready() {
            return Err(CommandError::NotReady);
        }
        Ok(self.state.on)
    }

    /// Drain and apply all queued commands.
    pub fn process_commands(&mut self, now: Instant) {
        while let Ok(command) = self.commands.try_receive() {
            self.handle(command, now);
        }
    }

    fn handle(&mut self, command: Command, now: Instant) {
        match command {
            Command::On => self.turn_on(now),
            Command::Off => self.turn_off(now),
            Command::Toggle => {
                if self.state.on {
                    self.turn_off(now);
                } else {
                    self.turn_on(now);
                }
            }
            Command::SelectEffect(effect) => {
                self.state.effect = effect;
                self.state.phase_step = 0;
                self.persistence.schedule(now);
            }
            Command::CycleEffect(direction) => {
                self.state.effect = self.state.effect.cycled(direction);
                self.state.phase_step = 0;
                self.persistence.schedule(now);
            }
            Command::ChangeHue(direction) => {
                self.state.color = self.state.hue_shifted(direction, self.config.hue_step);
                self.persistence.schedule(now);
            }
            Command::ChangeSat(direction) => {
                self.state.color = self.state.sat_shifted(direction, self.config.sat_step);
                self.persistence.schedule(now);
            }
            Command::ChangeBrt(direction) => {
                self.state.color = self.state.brt_shifted(direction, self.config.brt_step);
                self.persistence.schedule(now);
            }
            Command::ChangeSpeed(direction) => {
                // Decrementing at the floor is a silent no-op, no save.
                if self.state.speed == SPEED_MIN && direction < 0 {
                    return;
                }
                let speed = i16::from(self.state.speed) + i16::from(direction);
                self.state.speed = speed.clamp(i16::from(SPEED_MIN), i16::from(SPEED_MAX)) as u8;
                self.persistence.schedule(now);
            }
            Command::StatusPulse => self.status_pulse(),
            Command::SetColor(color) => {
                self.state.color = color;
                self.persistence.schedule(now);
            }
            Command::ActivityChanged(active) => {
                if self.config.auto_off_idle {
                    self.auto_state(active, now);
                }
            }
            Command::UsbPowerChanged(powered) => {
                if self.config.auto_off_usb {
                    self.auto_state(powered, now);
                }
            }
        }
    }

    fn turn_on(&mut self, now: Instant) {
        self.state.on = true;
        self.update_power_rail();
        self.state.phase_step = 0;
        self.persistence.schedule(now);
    }

    fn turn_off(&mut self, now: Instant) {
        self.state.on = false;
        // One final black frame before the rail drops.
        self.frames.clear_base();
        self.write_pixels();
        self.update_power_rail();
        self.persistence.schedule(now);
    }

    fn auto_state(&mut self, new_state: bool, now: Instant) {
        if self.state.on == new_state {
            return;
        }
        if new_state {
            self.turn_on(now);
        } else {
            self.turn_off(now);
        }
    }

    /// Start (or re-arm) the status overlay window.
    ///
    /// A pulse during an active window clamps the step back to the
    /// fade-in boundary so the overlay never restarts mid-fade-out at
    /// partial weight.
    fn status_pulse(&mut self) {
        if !self.state.status_active {
            self.state.status_step = 0;
        } else if self.state.status_step > FADE_IN_END {
            self.state.status_step = FADE_IN_END;
        }
        self.state.status_active = true;
        self.write_pixels();
        self.update_power_rail();
    }

    /// One animation driver tick: render the selected effect and push a
    /// frame. The scheduler gates this on the on-state.
    pub fn animation_tick(&mut self) {
        effect::render(
            &mut self.state,
            self.config.brightness,
            self.frames.base_mut(),
        );
        self.write_pixels();
    }

    /// One status driver tick: advance the envelope, request a coalesced
    /// refresh, and finish the window once the step passes its end.
    pub fn status_tick(&mut self) {
        if !self.state.status_active {
            return;
        }
        self.state.status_step += 1;
        if self.state.status_step > WINDOW_END {
            self.state.status_active = false;
        }
        self.refresh_pending = true;
    }

    /// Flush a pending status refresh, if one was requested since the last
    /// compositor pass.
    pub fn flush_status_refresh(&mut self) {
        if !self.refresh_pending {
            return;
        }
        self.refresh_pending = false;
        self.write_pixels();
        if !self.state.status_active {
            self.update_power_rail();
        }
    }

    /// Flush a due debounced save.
    pub fn poll_persistence(&mut self, now: Instant) {
        self.persistence.poll(now, &self.state);
    }

    /// Compose and push one frame, applying the battery output policy.
    fn write_pixels(&mut self) {
        let charge = self.source.battery_charge_percent();

        let mut weight = 0;
        if self.state.status_active {
            weight = self.overlay.generate(
                self.frames.overlay_mut(),
                &self.source,
                &self.config.indicators,
                self.state.status_step,
            );
        }

        // Fast path: no overlay and battery level OK.
        if weight == 0 && charge >= DIM_CHARGE {
            if let Err(err) = self.transport.write_frame(self.frames.base()) {
                engine_log!("Failed to update the strip: {:?}", err);
            }
            return;
        }

        let mut release_rail = false;
        if charge < BLACKOUT_CHARGE
            && self.state.on
            && self.power.is_applied()
            && !self.state.status_active
        {
            // Rail is up and the animation alone is draining a critically
            // low battery: force off, exactly once.
            self.state.on = false;
            release_rail = true;
        }

        let frame = self.frames.compose(weight, charge);
        if let Err(err) = self.transport.write_frame(frame) {
            engine_log!("Failed to update the strip: {:?}", err);
        }

        if release_rail {
            self.update_power_rail();
        }
    }

    fn update_power_rail(&mut self) {
        let charge = self.source.battery_charge_percent();
        self.power
            .update(self.state.on, self.state.status_active, charge);
    }
}
