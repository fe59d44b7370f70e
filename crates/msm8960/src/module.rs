//! Card registration with the platform-device host.

use platform::dai::SoundCard;
use platform::gpio::PinRegistry;
use platform::host::{DeviceId, SocAudioHost};
use platform::pmic_gpio::PmicGpio;

use crate::card::Msm8960Card;
use crate::config::{SOC_AUDIO_DEVICE, SOC_AUDIO_DEVICE_ID};
use crate::error::ModuleError;
use crate::topology::{LinkInit, CARD};

/// Card descriptor type handed to the host.
pub type CardRef = &'static SoundCard<LinkInit>;

/// The registered `soc-audio` platform device.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping the handle leaks the registered device; call `exit`"]
pub struct SndDevice {
    device: DeviceId,
}

impl SndDevice {
    /// Allocate the `soc-audio` device, attach the card and add it.
    ///
    /// # Errors
    ///
    /// - [`ModuleError::OutOfMemory`] if the host could not allocate the device.
    /// - [`ModuleError::DeviceAdd`] if the host refused to add it; the
    ///   allocated device has been put again.
    pub fn init<H: SocAudioHost<CardRef>>(host: &mut H) -> Result<Self, ModuleError<H::Error>> {
        let Some(device) = host.device_alloc(SOC_AUDIO_DEVICE, SOC_AUDIO_DEVICE_ID) else {
            error!("platform device allocation failed");
            return Err(ModuleError::OutOfMemory);
        };

        if let Err(e) = host.device_add(device, &CARD) {
            error!("failed to add {} platform device", SOC_AUDIO_DEVICE);
            host.device_put(device);
            return Err(ModuleError::DeviceAdd(e));
        }

        info!("registered {} with {} links", CARD.name, CARD.num_links());
        Ok(Self { device })
    }

    /// Host handle of the device.
    pub fn device(&self) -> DeviceId {
        self.device
    }

    /// Power the card's amplifier off, then unregister the device.
    pub fn exit<H, R>(self, host: &mut H, card: &mut Msm8960Card<R>)
    where
        H: SocAudioHost<CardRef>,
        R: PinRegistry + PmicGpio,
    {
        info!("unregistering {}", CARD.name);
        card.shutdown();
        host.device_unregister(self.device);
    }
}
