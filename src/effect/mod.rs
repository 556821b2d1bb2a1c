//! Effect system with compile-time known effect variants
//!
//! Each effect is a pure function of the animation state: given the same
//! state it fills the base buffer deterministically, then advances the
//! phase counter for the next tick.

mod breathe;
mod solid;
mod spectrum;
mod swirl;

use crate::color::{BrightnessRange, Rgb};
use crate::state::AnimationState;

const EFFECT_NAME_SOLID: &str = "solid";
const EFFECT_NAME_BREATHE: &str = "breathe";
const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_SWIRL: &str = "swirl";

const EFFECT_ID_SOLID: u8 = 0;
const EFFECT_ID_BREATHE: u8 = 1;
const EFFECT_ID_SPECTRUM: u8 = 2;
const EFFECT_ID_SWIRL: u8 = 3;

/// Number of selectable effects.
pub const EFFECT_COUNT: u8 = 4;

const EFFECT_TABLE: [EffectId; EFFECT_COUNT as usize] = [
    EffectId::Solid,
    EffectId::Breathe,
    EffectId::Spectrum,
    EffectId::Swirl,
];

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Solid = EFFECT_ID_SOLID,
    Breathe = EFFECT_ID_BREATHE,
    Spectrum = EFFECT_ID_SPECTRUM,
    Swirl = EFFECT_ID_SWIRL,
}

impl Default for EffectId {
    fn default() -> Self {
        Self::Solid
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SOLID => Self::Solid,
            EFFECT_ID_BREATHE => Self::Breathe,
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_SWIRL => Self::Swirl,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => EFFECT_NAME_SOLID,
            Self::Breathe => EFFECT_NAME_BREATHE,
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::Swirl => EFFECT_NAME_SWIRL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SOLID => Some(Self::Solid),
            EFFECT_NAME_BREATHE => Some(Self::Breathe),
            EFFECT_NAME_SPECTRUM => Some(Self::Spectrum),
            EFFECT_NAME_SWIRL => Some(Self::Swirl),
            _ => None,
        }
    }

    /// The neighboring effect in the given direction, wrapping modulo the
    /// effect count.
    pub fn cycled(self, direction: i8) -> Self {
        let count = i16::from(EFFECT_COUNT);
        let next = (i16::from(self.as_raw()) + count + i16::from(direction)) % count;
        EFFECT_TABLE[next as usize]
    }
}

/// Render one frame of the selected effect into the base buffer.
pub fn render(state: &mut AnimationState, range: BrightnessRange, pixels: &mut [Rgb]) {
    match state.effect {
        EffectId::Solid => solid::render(state, range, pixels),
        EffectId::Breathe => breathe::render(state, range, pixels),
        EffectId::Spectrum => spectrum::render(state, range, pixels),
        EffectId::Swirl => swirl::render(state, range, pixels),
    }
}
