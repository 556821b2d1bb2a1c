//! Persistence of user lighting preferences.
//!
//! The animation state is stored as a fixed-size, versionless byte record
//! under a namespaced key. Saves are debounced with a cancel-and-reschedule
//! deadline so a burst of rapid adjustments (holding a hue key, say)
//! collapses into a single write.

use embassy_time::{Duration, Instant};

use crate::color::Hsb;
use crate::effect::EffectId;
use crate::error::StoreError;
use crate::state::{AnimationState, SPEED_MAX, SPEED_MIN};

/// Key under which the state record is stored.
pub const SETTINGS_KEY: &str = "keyglow/state";

/// Serialized record: hue (u16 LE), saturation, brightness, speed, effect,
/// on flag. No version field and no migration; a record of any other size
/// is rejected.
pub const SAVED_STATE_LEN: usize = 7;

/// Default debounce window for persisting state changes.
pub const DEFAULT_SAVE_DEBOUNCE: Duration = Duration::from_millis(60_000);

/// Non-volatile key-value store collaborator.
pub trait SettingsStore {
    fn save(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Load the record under `key` into `buf`, returning the stored length.
    fn load(&mut self, key: &str, buf: &mut [u8]) -> Result<usize, StoreError>;
}

pub(crate) fn encode_state(state: &AnimationState) -> [u8; SAVED_STATE_LEN] {
    let hue = state.color.h.to_le_bytes();
    [
        hue[0],
        hue[1],
        state.color.s,
        state.color.b,
        state.speed,
        state.effect.as_raw(),
        u8::from(state.on),
    ]
}

pub(crate) fn decode_state(bytes: &[u8], state: &mut AnimationState) -> Result<(), StoreError> {
    if bytes.len() != SAVED_STATE_LEN {
        return Err(StoreError::SizeMismatch);
    }

    let color = Hsb::new(u16::from_le_bytes([bytes[0], bytes[1]]), bytes[2], bytes[3]);
    let speed = bytes[4];
    let effect = EffectId::from_raw(bytes[5]).ok_or(StoreError::Failed)?;
    if !color.in_range() || !(SPEED_MIN..=SPEED_MAX).contains(&speed) {
        return Err(StoreError::Failed);
    }

    state.color = color;
    state.speed = speed;
    state.effect = effect;
    state.on = bytes[6] != 0;
    Ok(())
}

/// Debounced writer of the animation state.
pub(crate) struct PersistenceManager<S: SettingsStore> {
    store: S,
    enabled: bool,
    deadline: Option<Instant>,
    debounce: Duration,
}

impl<S: SettingsStore> PersistenceManager<S> {
    pub(crate) const fn new(store: S, debounce: Duration) -> Self {
        Self {
            store,
            enabled: true,
            deadline: None,
            debounce,
        }
    }

    /// Restore persisted state, keeping `state` untouched when no valid
    /// record exists.
    pub(crate) fn load(&mut self, state: &mut AnimationState) {
        let mut buf = [0u8; SAVED_STATE_LEN * 2];
        match self.store.load(SETTINGS_KEY, &mut buf) {
            Ok(len) => {
                if let Err(err) = decode_state(&buf[..len.min(buf.len())], state) {
                    engine_log!("Rejecting persisted lighting state: {:?}", err);
                }
            }
            Err(StoreError::NotFound) => {}
            Err(err) => {
                engine_log!("Failed to load lighting state: {:?}", err);
            }
        }
    }

    /// Schedule a deferred save, replacing any pending deadline.
    pub(crate) fn schedule(&mut self, now: Instant) {
        if self.enabled {
            self.deadline = Some(now + self.debounce);
        }
    }

    /// Write the pending record once the debounce window has elapsed.
    ///
    /// A failed write disables persistence; the engine keeps operating on
    /// its in-memory state.
    pub(crate) fn poll(&mut self, now: Instant, state: &AnimationState) {
        let Some(deadline) = self.deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.deadline = None;

        let record = encode_state(state);
        if let Err(err) = self.store.save(SETTINGS_KEY, &record) {
            engine_log!("Failed to save lighting state: {:?}", err);
            self.enabled = false;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }
}
