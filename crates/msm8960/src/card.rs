//! Card context
//!
//! Holds all mutable state of the machine driver: the speaker amplifier
//! sequencer and the "Speaker Function" selection. The audio framework
//! serializes every callback, which `&mut self` expresses directly.

use core::convert::Infallible;

use platform::control::{ControlChange, ControlError, ControlRegistry};
use platform::dai::{CodecRuntime, DaiLink, SoundCard};
use platform::dapm::{DapmContext, DapmEvent, WidgetEventHandler};
use platform::gpio::PinRegistry;
use platform::pmic_gpio::PmicGpio;

use crate::amp::SpeakerAmp;
use crate::config::{AmpConfig, EXT_SPK, SPEAKER_FUNCTION};
use crate::error::CardError;
use crate::speaker::SpeakerControl;
use crate::topology::{LinkInit, CARD, CONTROLS, ROUTES, WIDGETS};

/// MSM8960 card context.
///
/// Dropping the context does not touch the amplifier lines; tear it down
/// with [`shutdown`](Self::shutdown), [`into_inner`](Self::into_inner) or
/// [`SndDevice::exit`](crate::module::SndDevice::exit).
pub struct Msm8960Card<R>
where
    R: PmicGpio,
{
    amp: SpeakerAmp<R>,
    speaker: SpeakerControl,
}

impl<R> Msm8960Card<R>
where
    R: PinRegistry + PmicGpio,
{
    /// Create the context with the amplifier off and the speaker
    /// function set to `Off`.
    pub fn new(gpio: R, config: AmpConfig) -> Self {
        Self {
            amp: SpeakerAmp::new(gpio, config),
            speaker: SpeakerControl::new(),
        }
    }

    /// Static card descriptor.
    pub fn descriptor(&self) -> &'static SoundCard<LinkInit> {
        &CARD
    }

    /// Speaker amplifier sequencer.
    pub fn amp(&self) -> &SpeakerAmp<R> {
        &self.amp
    }

    /// Mutable speaker amplifier sequencer.
    pub fn amp_mut(&mut self) -> &mut SpeakerAmp<R> {
        &mut self.amp
    }

    /// "Speaker Function" state.
    pub fn speaker(&self) -> &SpeakerControl {
        &self.speaker
    }

    /// Run `link`'s init hook on its codec runtime.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Controls`] if the codec refused the mixer
    /// controls; widgets and routes are then left unregistered.
    pub fn init_link<C: CodecRuntime>(
        &mut self,
        link: &DaiLink<LinkInit>,
        rtd: &mut C,
    ) -> Result<(), CardError<<C as ControlRegistry>::Error>> {
        match link.init {
            Some(LinkInit::SpeakerPath) => Self::speaker_path_init(rtd),
            None => Ok(()),
        }
    }

    fn speaker_path_init<C: CodecRuntime>(
        rtd: &mut C,
    ) -> Result<(), CardError<<C as ControlRegistry>::Error>> {
        debug!("speaker path init on {}", rtd.codec_name());

        rtd.enable_pin(EXT_SPK);
        rtd.add_controls(&CONTROLS).map_err(CardError::Controls)?;
        if rtd.new_widgets(&WIDGETS).is_err() {
            warn!("failed to add board widgets");
        }
        if rtd.add_routes(&ROUTES).is_err() {
            warn!("failed to add board routes");
        }
        rtd.sync();
        Ok(())
    }

    /// Control get.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::UnknownControl`] for controls this card does
    /// not own.
    pub fn control_get(&self, name: &str) -> Result<u32, ControlError> {
        match name {
            SPEAKER_FUNCTION => Ok(self.speaker.get()),
            _ => Err(ControlError::UnknownControl),
        }
    }

    /// Control put.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::UnknownControl`] for controls this card does
    /// not own and [`ControlError::InvalidItem`] for out-of-range values.
    pub fn control_put<D: DapmContext>(
        &mut self,
        name: &str,
        value: u32,
        dapm: &mut D,
    ) -> Result<ControlChange, ControlError> {
        match name {
            SPEAKER_FUNCTION => self.speaker.set(dapm, value),
            _ => Err(ControlError::UnknownControl),
        }
    }

    /// Power the amplifier off. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        self.amp.power_off();
    }

    /// Shut down and hand back the GPIO controller.
    pub fn into_inner(self) -> R {
        self.amp.into_inner()
    }
}

impl<R> WidgetEventHandler for Msm8960Card<R>
where
    R: PinRegistry + PmicGpio,
{
    type Error = Infallible;

    fn on_widget_event(&mut self, widget: &str, event: DapmEvent) -> Result<(), Self::Error> {
        if widget == EXT_SPK {
            self.amp.on_widget_event(widget, event)
        } else {
            trace!("ignoring event for widget {}", widget);
            Ok(())
        }
    }
}
