#![no_std]

#[macro_use]
mod log;

pub mod channel;
pub mod color;
pub mod command;
pub mod compositor;
pub mod effect;
pub mod engine;
pub mod error;
pub mod power;
pub mod scheduler;
pub mod settings;
pub mod state;
pub mod status;

pub use channel::{Channel, QueueEmpty, QueueFull, Receiver, Sender};
pub use color::{BRT_MAX, BrightnessRange, HUE_MAX, Hsb, Rgb, SAT_MAX, hsb_to_rgb};
pub use command::{Command, CommandChannel, CommandReceiver, CommandSender};
pub use compositor::FrameCompositor;
pub use effect::{EFFECT_COUNT, EffectId};
pub use engine::{EngineConfig, LightingEngine};
pub use error::{CommandError, ConfigError, RailError, StoreError, TransportError};
pub use power::PowerRail;
pub use scheduler::{TICK_PERIOD, TickResult, TickScheduler};
pub use settings::{DEFAULT_SAVE_DEBOUNCE, SAVED_STATE_LEN, SETTINGS_KEY, SettingsStore};
pub use state::{AnimationState, SPEED_MAX, SPEED_MIN};
pub use status::{
    ActiveTransport, FULL_WEIGHT, IndicatorMap, LOCK_CAPS, LOCK_NUM, LOCK_SCROLL, ProfileStatus,
    RemoteBattery, StatusOverlay, StatusSource, TICK_MS, WiredState, blend_weight,
};

pub use embassy_time::{Duration, Instant};

/// Abstract LED strip transport
///
/// Implement this trait to support different hardware platforms.
/// The lighting engine is generic over this trait.
pub trait Transport {
    /// Push a composed frame to the physical strip.
    ///
    /// A failed write is logged by the engine and the frame is dropped;
    /// the next tick retries naturally with a fresh frame.
    fn write_frame(&mut self, colors: &[Rgb]) -> Result<(), TransportError>;

    /// Whether the transport is attached and able to accept frames.
    fn is_ready(&self) -> bool {
        true
    }
}
