//! HSB color model and conversion to RGB pixels.

use smart_leds::RGB8;

use crate::error::ConfigError;

pub type Rgb = RGB8;

/// Hue is always strictly below this value.
pub const HUE_MAX: u16 = 360;
pub const SAT_MAX: u8 = 100;
pub const BRT_MAX: u8 = 100;

/// Hue in degrees, saturation and brightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsb {
    pub h: u16,
    pub s: u8,
    pub b: u8,
}

impl Hsb {
    pub const fn new(h: u16, s: u8, b: u8) -> Self {
        Self { h, s, b }
    }

    /// Whether all three channels are within their permitted ranges.
    pub const fn in_range(self) -> bool {
        self.h < HUE_MAX && self.s <= SAT_MAX && self.b <= BRT_MAX
    }
}

/// Configured output brightness window.
///
/// Steady effects map their brightness onto `[min, max]` so that brightness
/// zero never fully darkens them; breathe maps onto `[0, max]` so it can
/// reach true black at its trough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessRange {
    min: u8,
    max: u8,
}

impl BrightnessRange {
    pub const fn new(min: u8, max: u8) -> Result<Self, ConfigError> {
        if min > max || max > BRT_MAX {
            return Err(ConfigError::BrightnessRange);
        }
        Ok(Self { min, max })
    }

    /// The full `[0, 100]` window.
    pub const fn full() -> Self {
        Self {
            min: 0,
            max: BRT_MAX,
        }
    }

    pub const fn min(self) -> u8 {
        self.min
    }

    pub const fn max(self) -> u8 {
        self.max
    }

    /// Remap brightness from `[0, 100]` onto `[min, max]`.
    pub fn scale_min_max(self, mut hsb: Hsb) -> Hsb {
        let span = u16::from(self.max - self.min);
        hsb.b = self.min + (span * u16::from(hsb.b) / u16::from(BRT_MAX)) as u8;
        hsb
    }

    /// Remap brightness from `[0, 100]` onto `[0, max]`.
    pub fn scale_zero_max(self, mut hsb: Hsb) -> Hsb {
        hsb.b = (u16::from(hsb.b) * u16::from(self.max) / u16::from(BRT_MAX)) as u8;
        hsb
    }
}

impl Default for BrightnessRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Convert an HSB color to an RGB pixel using the standard sector algorithm.
///
/// Each channel is scaled to `[0, 255]` and truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::many_single_char_names)]
pub fn hsb_to_rgb(hsb: Hsb) -> Rgb {
    let i = (hsb.h / 60) as u8;
    let v = f32::from(hsb.b) / f32::from(BRT_MAX);
    let s = f32::from(hsb.s) / f32::from(SAT_MAX);
    let f = f32::from(hsb.h) / f32::from(HUE_MAX) * 6.0 - f32::from(i);
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: (r * 255.0) as u8,
        g: (g * 255.0) as u8,
        b: (b * 255.0) as u8,
    }
}
