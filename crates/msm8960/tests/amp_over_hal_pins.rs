//! SpeakerAmp driving real `embedded-hal` output pins through HalPinBank.
//!
//! Each line sees: configure (initial level high), drive high, and drive
//! low on release. The mock pins fail the test on any other write.

use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};
use msm8960_audio::config::{PAMP_LEFT, PAMP_RIGHT};
use msm8960_audio::{AmpConfig, AmpError, AmpLine, SpeakerAmp};
use platform::gpio::{GpioError, GpioNum};
use platform::hal_pins::HalPinBank;

fn on_then_off() -> [Transaction; 3] {
    [
        Transaction::set(State::High),
        Transaction::set(State::High),
        Transaction::set(State::Low),
    ]
}

fn done(bank: HalPinBank<PinMock, 2>) {
    for (_, mut pin) in bank.release() {
        pin.done();
    }
}

#[test]
fn power_cycle_over_hal_pins() {
    let bank = HalPinBank::new([
        (PAMP_LEFT, PinMock::new(&on_then_off())),
        (PAMP_RIGHT, PinMock::new(&on_then_off())),
    ]);
    let mut amp = SpeakerAmp::new(bank, AmpConfig::default());

    amp.power_on().unwrap();
    assert!(amp.is_on());
    assert_eq!(amp.gpio().owner(PAMP_LEFT), Some("CDC PAMPL"));
    assert_eq!(amp.gpio().owner(PAMP_RIGHT), Some("CDC PAMPR"));

    amp.power_off();
    assert!(!amp.is_on());

    let bank = amp.into_inner();
    assert_eq!(bank.owner(PAMP_LEFT), None);
    assert_eq!(bank.owner(PAMP_RIGHT), None);
    done(bank);
}

/// The bank does not publish the right line: left is driven low and
/// released before power_on returns.
#[test]
fn missing_right_line_rolls_back_left() {
    let unrelated = GpioNum::new(1);
    let bank = HalPinBank::new([
        (PAMP_LEFT, PinMock::new(&on_then_off())),
        (unrelated, PinMock::new(&[])),
    ]);
    let mut amp = SpeakerAmp::new(bank, AmpConfig::default());

    let err = amp.power_on().unwrap_err();
    assert_eq!(
        err,
        AmpError::Acquire {
            line: AmpLine::Right,
            pin: PAMP_RIGHT,
            cause: GpioError::InvalidPin(PAMP_RIGHT),
        }
    );
    assert!(!amp.is_on());
    assert_eq!(amp.gpio().owner(PAMP_LEFT), None);

    done(amp.into_inner());
}
