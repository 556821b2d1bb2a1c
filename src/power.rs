//! Power rail policy.
//!
//! Derives the desired state of the externally switched strip supply from
//! the lighting state and battery charge, and only touches the rail on an
//! actual state transition.

use crate::compositor::BLACKOUT_CHARGE;
use crate::error::RailError;

/// Externally switched power supply feeding the strip hardware.
pub trait PowerRail {
    fn enable(&mut self) -> Result<(), RailError>;
    fn disable(&mut self) -> Result<(), RailError>;
}

pub(crate) struct PowerController<P: PowerRail> {
    rail: P,
    applied: bool,
}

impl<P: PowerRail> PowerController<P> {
    pub(crate) const fn new(rail: P) -> Self {
        Self {
            rail,
            applied: false,
        }
    }

    pub(crate) const fn is_applied(&self) -> bool {
        self.applied
    }

    /// Re-derive the desired rail state and switch on divergence.
    ///
    /// The rail stays up while either the animation or a status pulse
    /// needs it, except when the animation alone would drain a battery
    /// below the blackout threshold. A failed switch leaves the
    /// bookkeeping untouched, so the next divergence retries.
    pub(crate) fn update(&mut self, on: bool, status_active: bool, charge: u8) {
        let mut desired = on || status_active;
        if on && !status_active && charge < BLACKOUT_CHARGE {
            desired = false;
        }

        if desired == self.applied {
            return;
        }

        let result = if desired {
            self.rail.enable()
        } else {
            self.rail.disable()
        };
        match result {
            Ok(()) => self.applied = desired,
            Err(err) => {
                engine_log!("Unable to switch the power rail: {:?}", err);
            }
        }
    }
}
