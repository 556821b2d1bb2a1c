//! Breathe effect
//!
//! Triangle-wave brightness over a 2400-step period: peaks at steps 0 and
//! 2400, true black at the trough (step 1200). Uses the zero-to-max
//! brightness window so the trough actually reaches black.

use crate::color::{BrightnessRange, Hsb, Rgb, hsb_to_rgb};
use crate::state::AnimationState;

const PERIOD: u16 = 2400;
const TROUGH: u16 = 1200;

pub(super) fn render(state: &mut AnimationState, range: BrightnessRange, pixels: &mut [Rgb]) {
    let brightness = (state.phase_step.abs_diff(TROUGH) / 12) as u8;
    let hsb = Hsb {
        b: brightness,
        ..state.color
    };
    pixels.fill(hsb_to_rgb(range.scale_zero_max(hsb)));

    state.phase_step += u16::from(state.speed) * 10;
    if state.phase_step > PERIOD {
        state.phase_step = 0;
    }
}
