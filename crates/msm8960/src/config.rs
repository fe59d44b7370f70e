//! MSM8960 board configuration
//!
//! Pin assignments, names shared between the topology tables and the
//! runtime handlers, and the amplifier policy knobs. All names here are
//! part of the user-visible card layout; change them only together with
//! the UCM/mixer configuration that refers to them.
//!
//! # Speaker amplifier enable lines
//!
//! | Line  | PM8921 GPIO | System GPIO | Label       |
//! |-------|-------------|-------------|-------------|
//! | Left  | 18          | 169         | `CDC PAMPL` |
//! | Right | 19          | 170         | `CDC PAMPR` |

use platform::gpio::GpioNum;
use platform::pmic_gpio::{pm_to_sys, PmGpioConfig, PM8921_GPIO_BASE};

/// Left-channel amplifier enable line.
pub const PAMP_LEFT: GpioNum = pm_to_sys(PM8921_GPIO_BASE, 18);
/// Right-channel amplifier enable line.
pub const PAMP_RIGHT: GpioNum = pm_to_sys(PM8921_GPIO_BASE, 19);

/// Ownership label of the left enable line.
pub const PAMP_LEFT_LABEL: &str = "CDC PAMPL";
/// Ownership label of the right enable line.
pub const PAMP_RIGHT_LABEL: &str = "CDC PAMPR";

/// Card name
pub const CARD_NAME: &str = "msm8960-snd-card";
/// Driver name of the audio core's platform device
pub const SOC_AUDIO_DEVICE: &str = "soc-audio";
/// Instance id of the platform device
pub const SOC_AUDIO_DEVICE_ID: u32 = 0;

/// Codec the primary I2S back-ends are wired to
pub const CODEC_NAME: &str = "tabla_codec";

/// External speaker widget and endpoint pin
pub const EXT_SPK: &str = "Ext Spk";
/// Codec line output feeding the external speaker amplifier
pub const LINEOUT: &str = "LINEOUT";
/// Speaker path selection control
pub const SPEAKER_FUNCTION: &str = "Speaker Function";

/// PMIC configuration applied to each amplifier enable line.
pub const AMP_LINE_CONFIG: PmGpioConfig = PmGpioConfig::output_high();

/// What to do with a line whose PMIC configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OnConfigFailure {
    /// Drive the line high anyway.
    #[default]
    DriveAnyway,
    /// Keep the line requested but leave it undriven.
    LeaveUndriven,
}

/// One amplifier enable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmpPin {
    /// System GPIO number
    pub pin: GpioNum,
    /// Ownership label
    pub label: &'static str,
}

/// Speaker amplifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmpConfig {
    /// Left-channel enable line
    pub left: AmpPin,
    /// Right-channel enable line
    pub right: AmpPin,
    /// PMIC configuration applied before each line is driven
    pub line_config: PmGpioConfig,
    /// Configuration failure policy
    pub on_config_failure: OnConfigFailure,
}

impl AmpConfig {
    /// MSM8960 reference board wiring.
    pub const fn msm8960() -> Self {
        Self {
            left: AmpPin {
                pin: PAMP_LEFT,
                label: PAMP_LEFT_LABEL,
            },
            right: AmpPin {
                pin: PAMP_RIGHT,
                label: PAMP_RIGHT_LABEL,
            },
            line_config: AMP_LINE_CONFIG,
            on_config_failure: OnConfigFailure::DriveAnyway,
        }
    }

    /// Same wiring with a different configuration failure policy.
    #[must_use]
    pub const fn with_config_failure_policy(mut self, policy: OnConfigFailure) -> Self {
        self.on_config_failure = policy;
        self
    }
}

impl Default for AmpConfig {
    fn default() -> Self {
        Self::msm8960()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amp_lines_sit_after_the_soc_gpios() {
        assert_eq!(PAMP_LEFT.get(), 169);
        assert_eq!(PAMP_RIGHT.get(), 170);
    }

    #[test]
    fn default_policy_drives_anyway() {
        let cfg = AmpConfig::default();
        assert_eq!(cfg.on_config_failure, OnConfigFailure::DriveAnyway);
        assert_eq!(cfg.left.label, "CDC PAMPL");
        assert_eq!(cfg.right.label, "CDC PAMPR");
    }

    #[test]
    fn policy_override_keeps_wiring() {
        let cfg = AmpConfig::msm8960().with_config_failure_policy(OnConfigFailure::LeaveUndriven);
        assert_eq!(cfg.on_config_failure, OnConfigFailure::LeaveUndriven);
        assert_eq!(cfg.left.pin, PAMP_LEFT);
    }
}
