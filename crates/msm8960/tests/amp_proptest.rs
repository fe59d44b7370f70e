//! Property-based tests for amplifier sequencing.
//! Verifies the ownership invariant over arbitrary call sequences and
//! injected registry failures, not just the fixed scenarios.

use msm8960_audio::config::{PAMP_LEFT, PAMP_RIGHT};
use msm8960_audio::{AmpConfig, OnConfigFailure, SpeakerAmp};
use platform::gpio::PinState;
use platform::mocks::{MockPinRegistry, PinCall};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    On,
    Off,
    BreakLeft,
    BreakRight,
    BreakConfig,
    Heal,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::On),
        4 => Just(Op::Off),
        1 => Just(Op::BreakLeft),
        1 => Just(Op::BreakRight),
        1 => Just(Op::BreakConfig),
        2 => Just(Op::Heal),
    ]
}

fn policy() -> impl Strategy<Value = OnConfigFailure> {
    prop_oneof![
        Just(OnConfigFailure::DriveAnyway),
        Just(OnConfigFailure::LeaveUndriven),
    ]
}

proptest! {
    /// Ownership count is always 0 or 2, and matches the reported state.
    #[test]
    fn never_exactly_one_line_held(ops in proptest::collection::vec(op(), 0..48), policy in policy()) {
        let config = AmpConfig::default().with_config_failure_policy(policy);
        let mut amp = SpeakerAmp::new(MockPinRegistry::new(), config);

        for op in ops {
            match op {
                Op::On => { let _ = amp.power_on(); }
                Op::Off => { amp.power_off(); }
                Op::BreakLeft => amp.gpio_mut().fail_request(PAMP_LEFT),
                Op::BreakRight => amp.gpio_mut().fail_request(PAMP_RIGHT),
                Op::BreakConfig => amp.gpio_mut().fail_configure(PAMP_LEFT),
                Op::Heal => amp.gpio_mut().clear_failures(),
            }

            let left = amp.gpio().is_owned(PAMP_LEFT);
            let right = amp.gpio().is_owned(PAMP_RIGHT);
            prop_assert_eq!(left, right, "exactly one line held after {:?}", op);
            prop_assert_eq!(left, amp.is_on());
        }
    }

    /// power_on twice holds the same resources as power_on once.
    #[test]
    fn power_on_is_idempotent(repeats in 1usize..6) {
        let mut amp = SpeakerAmp::new(MockPinRegistry::new(), AmpConfig::default());
        for _ in 0..repeats {
            amp.power_on().unwrap();
        }
        prop_assert_eq!(amp.gpio().owned_count(), 2);
        prop_assert_eq!(amp.gpio().count(PinCall::Request(PAMP_LEFT, "CDC PAMPL")), 1);
        prop_assert_eq!(amp.gpio().count(PinCall::Request(PAMP_RIGHT, "CDC PAMPR")), 1);
    }

    /// Every request is matched by a free once the amplifier ends up off.
    #[test]
    fn off_at_end_means_no_leak(ops in proptest::collection::vec(op(), 0..48)) {
        let mut amp = SpeakerAmp::new(MockPinRegistry::new(), AmpConfig::default());
        for op in ops {
            match op {
                Op::On => { let _ = amp.power_on(); }
                Op::Off => { amp.power_off(); }
                Op::BreakLeft => amp.gpio_mut().fail_request(PAMP_LEFT),
                Op::BreakRight => amp.gpio_mut().fail_request(PAMP_RIGHT),
                Op::BreakConfig => amp.gpio_mut().fail_configure(PAMP_RIGHT),
                Op::Heal => amp.gpio_mut().clear_failures(),
            }
        }
        let gpio = amp.into_inner();
        prop_assert_eq!(gpio.owned_count(), 0);
        prop_assert_ne!(gpio.level(PAMP_LEFT), Some(PinState::High));
        prop_assert_ne!(gpio.level(PAMP_RIGHT), Some(PinState::High));
    }
}
