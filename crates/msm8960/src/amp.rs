//! External stereo speaker amplifier power sequencing.
//!
//! The amplifier has one enable line per channel, both on PM8921 GPIOs.
//! The lines are acquired and driven together and released together:
//!
//! ## Power-on
//! ```text
//! request L ─▶ configure L ─▶ drive L high ─▶ request R ─▶ configure R ─▶ drive R high ─▶ [PoweredOn]
//!     │                                          │
//!     └─ fail: [PoweredOff]                      └─ fail: drive L low, free L ─▶ [PoweredOff]
//! ```
//!
//! ## Power-off
//! ```text
//! [PoweredOn] ─▶ drive L low, free L ─▶ drive R low, free R ─▶ [PoweredOff]
//! ```
//!
//! A rejected PMIC configuration is logged and never aborts the sequence;
//! [`OnConfigFailure`] decides whether the line is still driven.
//!
//! Ownership is either both lines or none. [`SpeakerAmp::state`] is
//! `PoweredOn` exactly when both are held.

use core::convert::Infallible;
use core::fmt;

use platform::dapm::{DapmEvent, WidgetEventHandler};
use platform::gpio::{PinRegistry, PinState};
use platform::pmic_gpio::PmicGpio;

use crate::config::{AmpConfig, AmpPin, OnConfigFailure};
use crate::error::AmpError;

/// Amplifier channel enable line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmpLine {
    /// Left channel
    Left,
    /// Right channel
    Right,
}

impl fmt::Display for AmpLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Amplifier power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AmpState {
    /// Neither enable line is held.
    PoweredOff,
    /// Both enable lines are held and driven.
    PoweredOn,
}

/// Result of a power transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerTransition {
    /// Already in the requested state; nothing was touched.
    Unchanged,
    /// The state changed.
    Switched {
        /// Lines whose PMIC configuration was rejected (0 on power-off).
        unconfigured_lines: u8,
    },
}

/// Speaker amplifier sequencer.
///
/// Owns the GPIO controller handle `R`, which must provide both pin
/// ownership and PMIC configuration.
pub struct SpeakerAmp<R>
where
    R: PmicGpio,
{
    gpio: R,
    config: AmpConfig,
    state: AmpState,
    config_error: Option<<R as PmicGpio>::Error>,
}

impl<R> SpeakerAmp<R>
where
    R: PinRegistry + PmicGpio,
{
    /// Create a sequencer in the `PoweredOff` state. No line is touched.
    pub fn new(gpio: R, config: AmpConfig) -> Self {
        Self {
            gpio,
            config,
            state: AmpState::PoweredOff,
            config_error: None,
        }
    }

    /// Current power state.
    pub fn state(&self) -> AmpState {
        self.state
    }

    /// `true` when both enable lines are held and driven.
    pub fn is_on(&self) -> bool {
        self.state == AmpState::PoweredOn
    }

    /// Last PMIC configuration error seen by the most recent
    /// [`power_on`](Self::power_on), if any line was rejected.
    pub fn config_error(&self) -> Option<&<R as PmicGpio>::Error> {
        self.config_error.as_ref()
    }

    /// Active configuration.
    pub fn config(&self) -> &AmpConfig {
        &self.config
    }

    /// Borrow the GPIO controller.
    pub fn gpio(&self) -> &R {
        &self.gpio
    }

    /// Mutably borrow the GPIO controller.
    ///
    /// Releasing the amplifier lines through this handle breaks the
    /// sequencer's bookkeeping; use [`power_off`](Self::power_off).
    pub fn gpio_mut(&mut self) -> &mut R {
        &mut self.gpio
    }

    /// Power the amplifier off and hand back the GPIO controller.
    pub fn into_inner(mut self) -> R {
        self.power_off();
        self.gpio
    }

    /// Acquire and drive both enable lines.
    ///
    /// # Errors
    ///
    /// Returns [`AmpError::Acquire`] if either line could not be requested.
    /// Any line acquired before the failure has been released again and the
    /// state is still `PoweredOff`.
    pub fn power_on(&mut self) -> Result<PowerTransition, AmpError<<R as PinRegistry>::Error>> {
        if self.is_on() {
            return Ok(PowerTransition::Unchanged);
        }

        debug!("enable stereo speaker amp");
        self.config_error = None;
        let left = self.config.left;
        let right = self.config.right;

        self.acquire(AmpLine::Left, left)?;
        let mut unconfigured = u8::from(!self.configure_and_drive(AmpLine::Left, left));

        if let Err(e) = self.acquire(AmpLine::Right, right) {
            self.gpio.set_level(left.pin, PinState::Low);
            self.gpio.free(left.pin);
            return Err(e);
        }
        if !self.configure_and_drive(AmpLine::Right, right) {
            unconfigured = unconfigured.saturating_add(1);
        }

        self.state = AmpState::PoweredOn;
        Ok(PowerTransition::Switched {
            unconfigured_lines: unconfigured,
        })
    }

    /// Drive both enable lines low and release them.
    pub fn power_off(&mut self) -> PowerTransition {
        if !self.is_on() {
            return PowerTransition::Unchanged;
        }

        debug!("disable stereo speaker amp");
        for line in [self.config.left, self.config.right] {
            self.gpio.set_level(line.pin, PinState::Low);
            self.gpio.free(line.pin);
        }
        self.state = AmpState::PoweredOff;
        PowerTransition::Switched {
            unconfigured_lines: 0,
        }
    }

    fn acquire(
        &mut self,
        line: AmpLine,
        amp_pin: AmpPin,
    ) -> Result<(), AmpError<<R as PinRegistry>::Error>> {
        self.gpio
            .request(amp_pin.pin, amp_pin.label)
            .map_err(|cause| {
                error!("error requesting {} amp gpio {}", line, amp_pin.pin);
                AmpError::Acquire {
                    line,
                    pin: amp_pin.pin,
                    cause,
                }
            })
    }

    /// Returns `false` if the PMIC rejected the configuration.
    fn configure_and_drive(&mut self, line: AmpLine, amp_pin: AmpPin) -> bool {
        let configured = match self.gpio.configure(amp_pin.pin, &self.config.line_config) {
            Ok(()) => true,
            Err(cause) => {
                #[cfg(feature = "defmt")]
                defmt::error!(
                    "failed to configure {} amp gpio {}: {}",
                    line,
                    amp_pin.pin,
                    defmt::Debug2Format(&cause)
                );
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "failed to configure {} amp gpio {}: {:?}",
                    line,
                    amp_pin.pin,
                    cause
                );
                #[cfg(not(any(feature = "defmt", feature = "tracing")))]
                let _ = line;
                self.config_error = Some(cause);
                false
            }
        };
        if configured || self.config.on_config_failure == OnConfigFailure::DriveAnyway {
            self.gpio.set_level(amp_pin.pin, PinState::High);
        }
        configured
    }
}

/// Widget event entry point. Acquisition failures are logged and never
/// reported to the DAPM engine; the amplifier just stays off.
impl<R> WidgetEventHandler for SpeakerAmp<R>
where
    R: PinRegistry + PmicGpio,
{
    type Error = Infallible;

    fn on_widget_event(&mut self, widget: &str, event: DapmEvent) -> Result<(), Self::Error> {
        trace!("{} event, power up: {}", widget, event.is_power_up());
        if event.is_power_up() {
            if self.power_on().is_err() {
                warn!("speaker amp left powered off");
            }
        } else {
            self.power_off();
        }
        Ok(())
    }
}
