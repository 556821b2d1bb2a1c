//! Status overlay generator.
//!
//! Builds a secondary pixel buffer reflecting live device status (battery,
//! connectivity, active layers, lock state) on the positions given by an
//! externally supplied indicator map, and reports the blend weight of the
//! time-windowed fade envelope.

use crate::color::Rgb;
use crate::error::ConfigError;

/// Fixed scheduler tick period in milliseconds.
pub const TICK_MS: u64 = 25;

/// Fully opaque overlay weight.
pub const FULL_WEIGHT: u16 = 256;

/// Fade-in completes 500 ms into the status window.
pub(crate) const FADE_IN_END: u16 = (500 / TICK_MS) as u16;
/// Hold at full weight until 8000 ms.
const HOLD_END: u16 = (8000 / TICK_MS) as u16;
/// Fade-out spans the final 2000 ms.
const FADE_OUT_SPAN: u16 = (2000 / TICK_MS) as u16;
/// The overlay is finished past 10000 ms.
pub(crate) const WINDOW_END: u16 = (10_000 / TICK_MS) as u16;

pub const LOCK_NUM: u8 = 1 << 0;
pub const LOCK_CAPS: u8 = 1 << 1;
pub const LOCK_SCROLL: u8 = 1 << 2;

/// State of one wireless connection profile slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileStatus {
    Unused,
    Paired,
    Connected,
}

/// State of the wired connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiredState {
    /// No cable.
    None,
    /// Powered but no data link.
    Powered,
    /// Data link established.
    Active,
}

/// Which transport currently carries output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTransport {
    Wired,
    Wireless,
}

/// Remote (split peripheral) battery reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteBattery {
    /// Charge percentage, 0..=100.
    Charge(u8),
    /// The peripheral is configured but not connected.
    NotConnected,
    /// No reading available for this index.
    Unavailable,
}

/// Live device status consumed by the overlay generator.
///
/// All methods are cheap queries; the generator calls them once per
/// overlay refresh from the tick loop.
pub trait StatusSource {
    /// Local battery state of charge, 0..=100.
    fn battery_charge_percent(&self) -> u8;

    /// Remote peripheral battery state of charge, if such a source exists.
    fn remote_battery_charge_percent(&self, index: u8) -> RemoteBattery {
        let _ = index;
        RemoteBattery::Unavailable
    }

    /// Number of configured wireless profile slots.
    fn profile_count(&self) -> usize;

    fn profile_status(&self, index: usize) -> ProfileStatus;

    /// Index of the currently selected wireless profile.
    fn active_profile(&self) -> usize;

    fn wired_state(&self) -> WiredState;

    fn active_transport(&self) -> ActiveTransport;

    /// Whether the user-preferred transport is the one currently active.
    fn preferred_transport_is_active(&self) -> bool;

    /// Bitmask of `LOCK_NUM` / `LOCK_CAPS` / `LOCK_SCROLL`.
    fn lock_indicator_bits(&self) -> u8;

    fn layer_active(&self, index: usize) -> bool;
}

/// Immutable table mapping logical indicators to pixel positions.
///
/// Slices map one entry per battery level step, layer, or profile slot;
/// absent indicators are `None` or empty and simply not drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorMap<'a> {
    pub battery_local: &'a [u8],
    pub battery_remote: &'a [u8],
    pub layers: &'a [u8],
    pub profiles: &'a [u8],
    pub numlock: Option<u8>,
    pub capslock: Option<u8>,
    pub scrolllock: Option<u8>,
    pub output_fallback: Option<u8>,
    pub wired: Option<u8>,
}

impl IndicatorMap<'_> {
    /// Check that every referenced pixel fits on the strip.
    pub(crate) fn validate(&self, pixel_count: usize) -> Result<(), ConfigError> {
        let slices = [
            self.battery_local,
            self.battery_remote,
            self.layers,
            self.profiles,
        ];
        for slice in slices {
            if slice.iter().any(|&px| usize::from(px) >= pixel_count) {
                return Err(ConfigError::IndicatorOutOfRange);
            }
        }
        let singles = [
            self.numlock,
            self.capslock,
            self.scrolllock,
            self.output_fallback,
            self.wired,
        ];
        for single in singles.into_iter().flatten() {
            if usize::from(single) >= pixel_count {
                return Err(ConfigError::IndicatorOutOfRange);
            }
        }
        Ok(())
    }
}

/// Indicator palette, pre-scaled to the configured maximum brightness so
/// status pixels never exceed the steady-state output level.
#[derive(Debug, Clone, Copy)]
struct Palette {
    critical: Rgb,
    warn: Rgb,
    accent_cool: Rgb,
    accent_secondary: Rgb,
    neutral: Rgb,
}

fn scaled(brt_max: u8, r: u8, g: u8, b: u8) -> Rgb {
    let scale = |channel: u8| (u16::from(brt_max) * u16::from(channel) / 0xff) as u8;
    Rgb {
        r: scale(r),
        g: scale(g),
        b: scale(b),
    }
}

impl Palette {
    fn new(brt_max: u8) -> Self {
        Self {
            critical: scaled(brt_max, 0xff, 0x00, 0x00),
            warn: scaled(brt_max, 0xff, 0xff, 0x00),
            accent_cool: scaled(brt_max, 0x00, 0xbe, 0xff),
            accent_secondary: scaled(brt_max, 0x6b, 0x1f, 0xce),
            neutral: scaled(brt_max, 0xff, 0xff, 0xff),
        }
    }
}

/// Blend weight of the status envelope at the given step: linear fade-in,
/// full-weight hold, linear fade-out, zero once the window has passed.
pub fn blend_weight(status_step: u16) -> u16 {
    let mut blend = i32::from(FULL_WEIGHT);
    if status_step < FADE_IN_END {
        blend = i32::from(status_step) * blend / i32::from(FADE_IN_END);
    } else if status_step > HOLD_END {
        blend = i32::from(FULL_WEIGHT)
            - i32::from(status_step - HOLD_END) * i32::from(FULL_WEIGHT) / i32::from(FADE_OUT_SPAN);
    }
    blend.clamp(0, i32::from(FULL_WEIGHT)) as u16
}

/// Generates the status overlay buffer.
pub struct StatusOverlay {
    palette: Palette,
}

impl StatusOverlay {
    /// Build a generator whose palette is scaled to the given maximum
    /// brightness.
    pub fn new(brt_max: u8) -> Self {
        Self {
            palette: Palette::new(brt_max),
        }
    }

    /// Fill the overlay buffer from live status and return the current
    /// blend weight.
    pub fn generate<V: StatusSource>(
        &self,
        pixels: &mut [Rgb],
        source: &V,
        map: &IndicatorMap<'_>,
        status_step: u16,
    ) -> u16 {
        pixels.fill(Rgb::default());

        self.battery_level(pixels, source.battery_charge_percent(), map.battery_local);

        if !map.battery_remote.is_empty() {
            match source.remote_battery_charge_percent(0) {
                RemoteBattery::Charge(level) => {
                    self.battery_level(pixels, level, map.battery_remote);
                }
                RemoteBattery::NotConnected => {
                    fill(pixels, self.palette.critical, map.battery_remote);
                }
                RemoteBattery::Unavailable => {
                    engine_log!("No remote battery reading for peripheral 0");
                }
            }
        }

        let lock_bits = source.lock_indicator_bits();
        if lock_bits & LOCK_CAPS != 0
            && let Some(px) = map.capslock
        {
            pixels[usize::from(px)] = self.palette.warn;
        }
        if lock_bits & LOCK_NUM != 0
            && let Some(px) = map.numlock
        {
            pixels[usize::from(px)] = self.palette.warn;
        }
        if lock_bits & LOCK_SCROLL != 0
            && let Some(px) = map.scrolllock
        {
            pixels[usize::from(px)] = self.palette.warn;
        }

        for (layer, &px) in map.layers.iter().enumerate() {
            if source.layer_active(layer) {
                pixels[usize::from(px)] = self.palette.accent_secondary;
            }
        }

        if !source.preferred_transport_is_active()
            && let Some(px) = map.output_fallback
        {
            pixels[usize::from(px)] = self.palette.critical;
        }

        let wireless_active = source.active_transport() == ActiveTransport::Wireless;
        let active_profile = source.active_profile();
        let slots = source.profile_count().min(map.profiles.len());
        for (slot, &px) in map.profiles.iter().enumerate().take(slots) {
            let pixel = &mut pixels[usize::from(px)];
            *pixel = match source.profile_status(slot) {
                ProfileStatus::Connected if wireless_active && active_profile == slot => {
                    self.palette.neutral
                }
                ProfileStatus::Connected => self.palette.accent_cool,
                ProfileStatus::Paired => self.palette.critical,
                ProfileStatus::Unused => self.palette.accent_secondary,
            };
        }

        if let Some(px) = map.wired {
            let wired_active = source.active_transport() == ActiveTransport::Wired;
            pixels[usize::from(px)] = match source.wired_state() {
                WiredState::Active if wired_active => self.palette.neutral,
                WiredState::Active => self.palette.accent_cool,
                WiredState::Powered => self.palette.critical,
                WiredState::None => self.palette.accent_secondary,
            };
        }

        blend_weight(status_step)
    }

    /// Bucket a 0..=100 charge onto the indicator pixels, lighting every
    /// position whose threshold the charge reaches, colored by tier.
    fn battery_level(&self, pixels: &mut [Rgb], level: u8, addresses: &[u8]) {
        let color = if level > 40 {
            self.palette.accent_cool
        } else if level > 20 {
            self.palette.warn
        } else {
            self.palette.critical
        };

        let steps = addresses.len().max(2) - 1;
        for (i, &px) in addresses.iter().enumerate() {
            let min_level = i * 100 / steps;
            if usize::from(level) >= min_level {
                pixels[usize::from(px)] = color;
            }
        }
    }
}

fn fill(pixels: &mut [Rgb], color: Rgb, addresses: &[u8]) {
    for &px in addresses {
        pixels[usize::from(px)] = color;
    }
}
