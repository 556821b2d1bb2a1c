//! Spectrum effect
//!
//! Cycles the whole strip through the hue circle, keeping the stored
//! saturation and brightness.

use crate::color::{BrightnessRange, HUE_MAX, Hsb, Rgb, hsb_to_rgb};
use crate::state::AnimationState;

pub(super) fn render(state: &mut AnimationState, range: BrightnessRange, pixels: &mut [Rgb]) {
    let hsb = Hsb {
        h: state.phase_step % HUE_MAX,
        ..state.color
    };
    pixels.fill(hsb_to_rgb(range.scale_min_max(hsb)));

    state.phase_step = (state.phase_step + u16::from(state.speed)) % HUE_MAX;
}
