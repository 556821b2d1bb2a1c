//! Animation state owned by the lighting engine.

use crate::color::{BRT_MAX, HUE_MAX, Hsb, SAT_MAX};
use crate::effect::EffectId;

pub const SPEED_MIN: u8 = 1;
pub const SPEED_MAX: u8 = 5;

/// The single mutable state record of the engine.
///
/// Created at startup from persisted bytes (or compiled-in defaults),
/// mutated only inside the tick loop, and never destroyed while powered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    pub color: Hsb,
    pub speed: u8,
    pub effect: EffectId,
    pub phase_step: u16,
    pub on: bool,
    pub status_active: bool,
    pub status_step: u16,
}

impl AnimationState {
    /// Color with hue shifted by one step, wrapping around the hue circle.
    pub(crate) fn hue_shifted(&self, direction: i8, step: u16) -> Hsb {
        let mut color = self.color;
        let shifted = i32::from(color.h) + i32::from(direction) * i32::from(step);
        color.h = shifted.rem_euclid(i32::from(HUE_MAX)) as u16;
        color
    }

    /// Color with saturation shifted by one step, clamped to `[0, 100]`.
    pub(crate) fn sat_shifted(&self, direction: i8, step: u8) -> Hsb {
        let mut color = self.color;
        let shifted = i16::from(color.s) + i16::from(direction) * i16::from(step);
        color.s = shifted.clamp(0, i16::from(SAT_MAX)) as u8;
        color
    }

    /// Color with brightness shifted by one step, clamped to `[0, 100]`.
    pub(crate) fn brt_shifted(&self, direction: i8, step: u8) -> Hsb {
        let mut color = self.color;
        let shifted = i16::from(color.b) + i16::from(direction) * i16::from(step);
        color.b = shifted.clamp(0, i16::from(BRT_MAX)) as u8;
        color
    }
}
