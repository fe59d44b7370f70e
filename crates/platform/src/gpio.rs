//! GPIO ownership and level control
//!
//! Pins are identified by their system-wide number. A pin must be requested
//! from the [`PinRegistry`] before it can be driven, and freed afterwards.

use core::fmt;

use thiserror_no_std::Error;

/// System-wide GPIO number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct GpioNum(u16);

impl GpioNum {
    /// Wrap a raw system GPIO number.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Return the raw system GPIO number.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for GpioNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Errors reported by GPIO drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// The pin is already owned by another user.
    #[error("gpio {0} is already requested")]
    Busy(GpioNum),
    /// The pin number does not exist on this platform.
    #[error("gpio {0} is not a valid pin")]
    InvalidPin(GpioNum),
    /// The pin controller refused the requested electrical configuration.
    #[error("gpio {0} rejected its configuration")]
    ConfigRejected(GpioNum),
}

/// Pin-ownership registry.
///
/// Every pin has at most one owner. [`request`](PinRegistry::request) fails
/// while the pin is held, and [`free`](PinRegistry::free) always succeeds.
pub trait PinRegistry {
    /// Error type
    type Error: core::fmt::Debug;

    /// Take ownership of `pin`, tagging it with `label` for diagnostics.
    fn request(&mut self, pin: GpioNum, label: &'static str) -> Result<(), Self::Error>;

    /// Release ownership of `pin`.
    fn free(&mut self, pin: GpioNum);

    /// Switch an owned pin to output and drive it to `state`.
    fn set_level(&mut self, pin: GpioNum, state: PinState);
}
