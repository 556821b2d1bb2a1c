//! Solid fill effect
//!
//! Fills the strip with the stored color. Does not advance the phase.

use crate::color::{BrightnessRange, Rgb, hsb_to_rgb};
use crate::state::AnimationState;

pub(super) fn render(state: &AnimationState, range: BrightnessRange, pixels: &mut [Rgb]) {
    let rgb = hsb_to_rgb(range.scale_min_max(state.color));
    pixels.fill(rgb);
}
