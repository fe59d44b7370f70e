//! Tests for the "Speaker Function" control path.
//!
//! Writing the control only toggles the `Ext Spk` DAPM endpoint. The
//! amplifier follows later, when DAPM delivers the widget event.

use msm8960_audio::config::{CODEC_NAME, EXT_SPK, SPEAKER_FUNCTION};
use msm8960_audio::{AmpConfig, Msm8960Card, SpeakerFunction};
use platform::control::{ControlChange, ControlError};
use platform::dapm::{DapmEvent, WidgetEventHandler};
use platform::mocks::{CodecCall, MockCodec, MockPinRegistry};

fn card() -> Msm8960Card<MockPinRegistry> {
    Msm8960Card::new(MockPinRegistry::new(), AmpConfig::default())
}

/// The control reads back as "Off" before anything is written.
#[test]
fn initial_selection_is_off() {
    let card = card();
    assert_eq!(card.control_get(SPEAKER_FUNCTION), Ok(0));
    assert_eq!(card.speaker().selection(), SpeakerFunction::Off);
}

/// Writing the current value makes no DAPM calls and reports no change.
#[test]
fn unchanged_write_is_silent() {
    let mut card = card();
    let mut dapm = MockCodec::new(CODEC_NAME);

    assert_eq!(
        card.control_put(SPEAKER_FUNCTION, 0, &mut dapm),
        Ok(ControlChange::Unchanged)
    );
    assert!(dapm.calls().is_empty());

    card.control_put(SPEAKER_FUNCTION, 1, &mut dapm).unwrap();
    dapm.clear_calls();
    assert_eq!(
        card.control_put(SPEAKER_FUNCTION, 1, &mut dapm),
        Ok(ControlChange::Unchanged)
    );
    assert!(dapm.calls().is_empty());
}

/// A new value stores, issues one enable/disable and one sync, and reports change.
#[test]
fn changed_write_toggles_pin_and_syncs_once() {
    let mut card = card();
    let mut dapm = MockCodec::new(CODEC_NAME);

    assert_eq!(
        card.control_put(SPEAKER_FUNCTION, 1, &mut dapm),
        Ok(ControlChange::Changed)
    );
    assert_eq!(card.control_get(SPEAKER_FUNCTION), Ok(1));
    assert_eq!(dapm.calls(), &[CodecCall::EnablePin(EXT_SPK), CodecCall::Sync]);

    dapm.clear_calls();
    assert_eq!(
        card.control_put(SPEAKER_FUNCTION, 0, &mut dapm),
        Ok(ControlChange::Changed)
    );
    assert_eq!(card.control_get(SPEAKER_FUNCTION), Ok(0));
    assert_eq!(dapm.calls(), &[CodecCall::DisablePin(EXT_SPK), CodecCall::Sync]);
    assert_eq!(dapm.pin_enabled(EXT_SPK), Some(false));
}

/// Out-of-range items are rejected without side effects.
#[test]
fn out_of_range_item_is_rejected() {
    let mut card = card();
    let mut dapm = MockCodec::new(CODEC_NAME);

    assert_eq!(
        card.control_put(SPEAKER_FUNCTION, 2, &mut dapm),
        Err(ControlError::InvalidItem {
            control: SPEAKER_FUNCTION,
            index: 2
        })
    );
    assert_eq!(card.control_get(SPEAKER_FUNCTION), Ok(0));
    assert!(dapm.calls().is_empty());
}

/// The control never drives the amplifier; only the widget event does.
#[test]
fn control_write_does_not_touch_the_amplifier() {
    let mut card = card();
    let mut dapm = MockCodec::new(CODEC_NAME);

    card.control_put(SPEAKER_FUNCTION, 1, &mut dapm).unwrap();
    assert!(!card.amp().is_on());
    assert!(card.amp().gpio().calls().is_empty());

    card.on_widget_event(EXT_SPK, DapmEvent::PostPmu).unwrap();
    assert!(card.amp().is_on());

    card.control_put(SPEAKER_FUNCTION, 0, &mut dapm).unwrap();
    assert!(card.amp().is_on(), "amp stays on until DAPM powers the widget down");

    card.on_widget_event(EXT_SPK, DapmEvent::PrePmd).unwrap();
    assert!(!card.amp().is_on());
}
