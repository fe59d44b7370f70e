//! Machine driver error types

use platform::gpio::GpioNum;
use thiserror_no_std::Error;

use crate::amp::AmpLine;

/// Speaker amplifier sequencing failure.
///
/// No variant leaves a line held: by the time one is returned, every line
/// acquired during the failed transition has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmpError<E> {
    /// An enable line could not be requested.
    #[error("failed to request {line} amplifier gpio {pin}")]
    Acquire {
        /// Which line
        line: AmpLine,
        /// Its system GPIO number
        pin: GpioNum,
        /// Error reported by the pin registry
        cause: E,
    },
}

/// Link init hook failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError<E> {
    /// The card's mixer controls could not be registered.
    #[error("failed to register mixer controls")]
    Controls(E),
}

/// Module init failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModuleError<E> {
    /// The host could not allocate the platform device.
    #[error("platform device allocation failed")]
    OutOfMemory,
    /// The host refused to add the platform device.
    #[error("failed to add platform device")]
    DeviceAdd(E),
}
