//! Frame composition and battery output policy.
//!
//! Owns the three pixel buffers: `base` (effect output), `overlay`
//! (status output) and the blended output frame handed to the transport.

use crate::color::Rgb;
use crate::status::FULL_WEIGHT;

/// Below this charge the base contribution is forced to black.
pub(crate) const BLACKOUT_CHARGE: u8 = 10;
/// Below this charge every output channel is halved.
pub(crate) const DIM_CHARGE: u8 = 20;

/// Fixed-size frame buffers for one strip.
pub struct FrameCompositor<const PIXELS: usize> {
    base: [Rgb; PIXELS],
    overlay: [Rgb; PIXELS],
    out: [Rgb; PIXELS],
}

impl<const PIXELS: usize> FrameCompositor<PIXELS> {
    pub fn new() -> Self {
        Self {
            base: [Rgb::default(); PIXELS],
            overlay: [Rgb::default(); PIXELS],
            out: [Rgb::default(); PIXELS],
        }
    }

    pub fn base(&self) -> &[Rgb] {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut [Rgb] {
        &mut self.base
    }

    pub fn overlay_mut(&mut self) -> &mut [Rgb] {
        &mut self.overlay
    }

    pub fn clear_base(&mut self) {
        self.base.fill(Rgb::default());
    }

    /// Blend base and overlay per the given weight and apply the
    /// battery-derived output policy, returning the finished frame.
    ///
    /// Weight 0 passes the base through untouched; `FULL_WEIGHT` and above
    /// passes the overlay. In between, each channel is mixed with integer
    /// arithmetic: `(overlay*w)>>8 + (base*(256-w))>>8`. A charge below
    /// `DIM_CHARGE` then halves every channel with a right shift.
    pub fn compose(&mut self, weight: u16, charge: u8) -> &[Rgb] {
        if charge < BLACKOUT_CHARGE {
            self.base.fill(Rgb::default());
        }

        if weight == 0 {
            self.out = self.base;
        } else if weight >= FULL_WEIGHT {
            self.out = self.overlay;
        } else {
            let blend_l = weight;
            let blend_r = FULL_WEIGHT - weight;
            let mix = |over: u8, under: u8| {
                ((u16::from(over) * blend_l) >> 8) as u8 + ((u16::from(under) * blend_r) >> 8) as u8
            };
            for ((out, over), under) in self.out.iter_mut().zip(&self.overlay).zip(&self.base) {
                *out = Rgb {
                    r: mix(over.r, under.r),
                    g: mix(over.g, under.g),
                    b: mix(over.b, under.b),
                };
            }
        }

        if charge < DIM_CHARGE {
            for pixel in &mut self.out {
                pixel.r >>= 1;
                pixel.g >>= 1;
                pixel.b >>= 1;
            }
        }

        &self.out
    }
}

impl<const PIXELS: usize> Default for FrameCompositor<PIXELS> {
    fn default() -> Self {
        Self::new()
    }
}
