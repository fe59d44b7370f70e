//! [`PinRegistry`] over `embedded-hal` output pins
//!
//! Boards without a kernel GPIO core still need request/free semantics for
//! shared enable lines. [`HalPinBank`] owns a fixed set of
//! `embedded_hal::digital::OutputPin`s, each published under a system GPIO
//! number, and tracks who holds each one.

use embedded_hal::digital::OutputPin;

use crate::gpio::{GpioError, GpioNum, PinRegistry, PinState};
use crate::pmic_gpio::{Direction, PmGpioConfig, PmicGpio};

struct Slot<P> {
    num: GpioNum,
    pin: P,
    owner: Option<&'static str>,
}

/// Fixed bank of `N` output pins with ownership tracking.
pub struct HalPinBank<P, const N: usize> {
    slots: [Slot<P>; N],
}

impl<P: OutputPin, const N: usize> HalPinBank<P, N> {
    /// Publish `pins` under their system GPIO numbers. All start free.
    pub fn new(pins: [(GpioNum, P); N]) -> Self {
        Self {
            slots: pins.map(|(num, pin)| Slot {
                num,
                pin,
                owner: None,
            }),
        }
    }

    /// Label of the current owner of `pin`.
    pub fn owner(&self, pin: GpioNum) -> Option<&'static str> {
        self.slots
            .iter()
            .find(|s| s.num == pin)
            .and_then(|s| s.owner)
    }

    /// Give the pins back.
    pub fn release(self) -> [(GpioNum, P); N] {
        self.slots.map(|s| (s.num, s.pin))
    }

    fn slot_mut(&mut self, pin: GpioNum) -> Result<&mut Slot<P>, GpioError> {
        self.slots
            .iter_mut()
            .find(|s| s.num == pin)
            .ok_or(GpioError::InvalidPin(pin))
    }
}

impl<P: OutputPin, const N: usize> PinRegistry for HalPinBank<P, N> {
    type Error = GpioError;

    fn request(&mut self, pin: GpioNum, label: &'static str) -> Result<(), Self::Error> {
        let slot = self.slot_mut(pin)?;
        if slot.owner.is_some() {
            return Err(GpioError::Busy(pin));
        }
        slot.owner = Some(label);
        Ok(())
    }

    fn free(&mut self, pin: GpioNum) {
        if let Ok(slot) = self.slot_mut(pin) {
            slot.owner = None;
        }
    }

    fn set_level(&mut self, pin: GpioNum, state: PinState) {
        let Ok(slot) = self.slot_mut(pin) else {
            return;
        };
        if slot.owner.is_none() {
            #[cfg(feature = "defmt")]
            defmt::warn!("gpio {} driven while not requested", pin);
        }
        let level = match state {
            PinState::High => embedded_hal::digital::PinState::High,
            PinState::Low => embedded_hal::digital::PinState::Low,
        };
        if slot.pin.set_state(level).is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("gpio {}: write failed", pin);
        }
    }
}

impl<P: OutputPin, const N: usize> PmicGpio for HalPinBank<P, N> {
    type Error = GpioError;

    /// Output-only bank: accepts any enabled output configuration and
    /// drives the requested initial level.
    fn configure(&mut self, pin: GpioNum, config: &PmGpioConfig) -> Result<(), Self::Error> {
        let slot = self.slot_mut(pin)?;
        if config.disable_pin || config.direction == Direction::Input {
            return Err(GpioError::ConfigRejected(pin));
        }
        slot.pin
            .set_state(config.output_value.into())
            .map_err(|_| GpioError::ConfigRejected(pin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as MockState, Transaction as PinTransaction,
    };

    const A: GpioNum = GpioNum::new(169);
    const B: GpioNum = GpioNum::new(170);

    fn done(bank: HalPinBank<PinMock, 2>) {
        for (_, mut pin) in bank.release() {
            pin.done();
        }
    }

    #[test]
    fn request_is_exclusive() {
        let mut bank = HalPinBank::new([(A, PinMock::new(&[])), (B, PinMock::new(&[]))]);

        bank.request(A, "amp").unwrap();
        assert_eq!(bank.owner(A), Some("amp"));
        assert_eq!(bank.request(A, "other"), Err(GpioError::Busy(A)));

        bank.free(A);
        assert_eq!(bank.owner(A), None);
        bank.request(A, "other").unwrap();
        done(bank);
    }

    #[test]
    fn unknown_pin_is_invalid() {
        let mut bank = HalPinBank::new([(A, PinMock::new(&[])), (B, PinMock::new(&[]))]);
        let missing = GpioNum::new(1);
        assert_eq!(
            bank.request(missing, "x"),
            Err(GpioError::InvalidPin(missing))
        );
        done(bank);
    }

    #[test]
    fn set_level_drives_the_pin() {
        let expectations = [
            PinTransaction::set(MockState::High),
            PinTransaction::set(MockState::Low),
        ];
        let mut bank = HalPinBank::new([(A, PinMock::new(&expectations)), (B, PinMock::new(&[]))]);

        bank.request(A, "amp").unwrap();
        bank.set_level(A, PinState::High);
        bank.set_level(A, PinState::Low);
        done(bank);
    }

    #[test]
    fn configure_rejects_input_direction() {
        let expectations = [PinTransaction::set(MockState::High)];
        let mut bank = HalPinBank::new([(A, PinMock::new(&expectations)), (B, PinMock::new(&[]))]);

        let mut input = PmGpioConfig::output_high();
        input.direction = Direction::Input;
        assert_eq!(
            bank.configure(B, &input),
            Err(GpioError::ConfigRejected(B))
        );
        bank.configure(A, &PmGpioConfig::output_high()).unwrap();
        done(bank);
    }

    #[test]
    fn configure_rejects_disabled_pin() {
        let mut bank = HalPinBank::new([(A, PinMock::new(&[])), (B, PinMock::new(&[]))]);

        let mut disabled = PmGpioConfig::output_high();
        disabled.disable_pin = true;
        assert_eq!(
            bank.configure(A, &disabled),
            Err(GpioError::ConfigRejected(A))
        );
        done(bank);
    }
}
