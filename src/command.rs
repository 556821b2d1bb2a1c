//! Command surface of the lighting engine.
//!
//! The input layer never touches engine state directly: every mutation is
//! expressed as a [`Command`] enqueued through a [`CommandSender`] and
//! applied inside the tick loop. Range validation happens at the sender
//! boundary, so an invalid request is rejected before anything is queued.

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Hsb;
use crate::effect::EffectId;
use crate::error::CommandError;

/// A request to change the lighting state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    On,
    Off,
    Toggle,
    SelectEffect(EffectId),
    CycleEffect(i8),
    ChangeHue(i8),
    ChangeSat(i8),
    ChangeBrt(i8),
    ChangeSpeed(i8),
    StatusPulse,
    SetColor(Hsb),
    /// Keyboard activity state changed (idle auto-off trigger).
    ActivityChanged(bool),
    /// USB power presence changed (USB auto-off trigger).
    UsbPowerChanged(bool),
}

/// Type alias for the command channel.
pub type CommandChannel<const SIZE: usize> = Channel<Command, SIZE>;

/// Type alias for the engine-side receiver.
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, Command, SIZE>;

/// Validated sender handle for the input layer.
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    inner: Sender<'a, Command, SIZE>,
}

impl<'a, const SIZE: usize> CommandSender<'a, SIZE> {
    pub const fn new(channel: &'a CommandChannel<SIZE>) -> Self {
        Self {
            inner: channel.sender(),
        }
    }

    pub fn on(&self) -> Result<(), CommandError> {
        self.send(Command::On)
    }

    pub fn off(&self) -> Result<(), CommandError> {
        self.send(Command::Off)
    }

    pub fn toggle(&self) -> Result<(), CommandError> {
        self.send(Command::Toggle)
    }

    /// Select an effect by index. Rejects indices outside the effect table.
    pub fn select_effect(&self, index: u8) -> Result<(), CommandError> {
        let effect = EffectId::from_raw(index).ok_or(CommandError::InvalidArgument)?;
        self.send(Command::SelectEffect(effect))
    }

    pub fn cycle_effect(&self, direction: i8) -> Result<(), CommandError> {
        self.send(Command::CycleEffect(direction))
    }

    pub fn change_hue(&self, direction: i8) -> Result<(), CommandError> {
        self.send(Command::ChangeHue(direction))
    }

    pub fn change_sat(&self, direction: i8) -> Result<(), CommandError> {
        self.send(Command::ChangeSat(direction))
    }

    pub fn change_brt(&self, direction: i8) -> Result<(), CommandError> {
        self.send(Command::ChangeBrt(direction))
    }

    pub fn change_speed(&self, direction: i8) -> Result<(), CommandError> {
        self.send(Command::ChangeSpeed(direction))
    }

    pub fn status_pulse(&self) -> Result<(), CommandError> {
        self.send(Command::StatusPulse)
    }

    /// Set the color directly. Rejects any out-of-range channel; no state
    /// changes on rejection.
    pub fn set_color(&self, color: Hsb) -> Result<(), CommandError> {
        if !color.in_range() {
            return Err(CommandError::InvalidArgument);
        }
        self.send(Command::SetColor(color))
    }

    pub fn activity_changed(&self, active: bool) -> Result<(), CommandError> {
        self.send(Command::ActivityChanged(active))
    }

    pub fn usb_power_changed(&self, powered: bool) -> Result<(), CommandError> {
        self.send(Command::UsbPowerChanged(powered))
    }

    fn send(&self, command: Command) -> Result<(), CommandError> {
        self.inner
            .try_send(command)
            .map_err(|_| CommandError::QueueFull)
    }
}
