//! Swirl effect
//!
//! Spreads the hue circle across the strip and rotates it, so the rainbow
//! appears to travel along the pixels.

use crate::color::{BrightnessRange, HUE_MAX, Hsb, Rgb, hsb_to_rgb};
use crate::state::AnimationState;

#[allow(clippy::cast_possible_truncation)]
pub(super) fn render(state: &mut AnimationState, range: BrightnessRange, pixels: &mut [Rgb]) {
    if pixels.is_empty() {
        return;
    }

    let count = pixels.len() as u16;
    for (i, pixel) in pixels.iter_mut().enumerate() {
        let hsb = Hsb {
            h: (HUE_MAX / count * (i as u16) + state.phase_step) % HUE_MAX,
            ..state.color
        };
        *pixel = hsb_to_rgb(range.scale_min_max(hsb));
    }

    state.phase_step = (state.phase_step + u16::from(state.speed) * 2) % HUE_MAX;
}
