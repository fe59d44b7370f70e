//! PM8921 PMIC GPIO configuration.
//!
//! The PMIC exposes its GPIOs through the system GPIO number space. PMIC
//! GPIOs are numbered from 1 and start right after the SoC's own GPIO
//! interrupts:
//!
//! ```text
//! sys = pm_gpio - 1 + PM8921_GPIO_BASE
//! ```

use crate::gpio::GpioNum;

/// First system GPIO number owned by the PM8921 (`NR_GPIO_IRQS` on MSM8960).
pub const PM8921_GPIO_BASE: u16 = 152;

/// Map a 1-based PMIC GPIO index onto the system GPIO number space.
///
/// `pm_gpio == 0` is not a valid PMIC GPIO; it maps onto `base` itself.
#[must_use]
pub const fn pm_to_sys(base: u16, pm_gpio: u16) -> GpioNum {
    GpioNum::new(base.saturating_add(pm_gpio.saturating_sub(1)))
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Input only
    Input,
    /// Output only
    Output,
    /// Bidirectional
    Both,
}

/// Output buffer type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputBuffer {
    /// Push-pull
    Cmos,
    /// Open drain
    OpenDrain,
}

/// Pull resistor selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pull {
    /// 30 µA pull-up
    Up30,
    /// 1.5 µA pull-up
    Up1p5,
    /// 31.5 µA pull-up
    Up31p5,
    /// 1.5 µA + 30 µA boost pull-up
    Up1p5Boost30,
    /// Pull-down
    Down,
    /// No pull
    None,
}

/// Supply rail the pin's I/O cell is referenced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VinSelect {
    /// VPH_PWR
    Vph,
    /// BB
    Bb,
    /// S4 (1.8 V)
    S4,
    /// L15
    L15,
    /// L4
    L4,
    /// L3
    L3,
    /// L17
    L17,
}

/// Output drive strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Strength {
    /// Output disabled
    NoDrive,
    /// High drive
    High,
    /// Medium drive
    Med,
    /// Low drive
    Low,
}

/// Pin function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Function {
    /// Plain GPIO
    Normal,
    /// Paired with the adjacent pin
    Paired,
    /// Special function 1
    Func1,
    /// Special function 2
    Func2,
    /// DTEST1
    Dtest1,
    /// DTEST2
    Dtest2,
    /// DTEST3
    Dtest3,
    /// DTEST4
    Dtest4,
}

/// Electrical configuration of a single PMIC GPIO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PmGpioConfig {
    /// Direction
    pub direction: Direction,
    /// Output buffer type
    pub output_buffer: OutputBuffer,
    /// Initial output level (`true` = high)
    pub output_value: bool,
    /// Pull resistor
    pub pull: Pull,
    /// Supply reference
    pub vin_sel: VinSelect,
    /// Drive strength
    pub out_strength: Strength,
    /// Pin function
    pub function: Function,
    /// Invert interrupt polarity
    pub inv_int_pol: bool,
    /// Disable the pin entirely
    pub disable_pin: bool,
}

impl PmGpioConfig {
    /// Push-pull output on S4, medium drive, no pull, driven high.
    #[must_use]
    pub const fn output_high() -> Self {
        Self {
            direction: Direction::Output,
            output_buffer: OutputBuffer::Cmos,
            output_value: true,
            pull: Pull::None,
            vin_sel: VinSelect::S4,
            out_strength: Strength::Med,
            function: Function::Normal,
            inv_int_pol: false,
            disable_pin: false,
        }
    }
}

/// PMIC GPIO configuration interface.
pub trait PmicGpio {
    /// Error type
    type Error: core::fmt::Debug;

    /// Apply `config` to `pin`.
    fn configure(&mut self, pin: GpioNum, config: &PmGpioConfig) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pmic_gpio_one_is_the_base() {
        assert_eq!(pm_to_sys(PM8921_GPIO_BASE, 1).get(), PM8921_GPIO_BASE);
    }

    #[test]
    fn pmic_gpio_18_and_19_map_after_base() {
        assert_eq!(pm_to_sys(PM8921_GPIO_BASE, 18).get(), 169);
        assert_eq!(pm_to_sys(PM8921_GPIO_BASE, 19).get(), 170);
    }

    #[test]
    fn pmic_gpio_zero_does_not_underflow() {
        assert_eq!(pm_to_sys(10, 0).get(), 10);
    }

    #[test]
    fn output_high_drives_high() {
        let cfg = PmGpioConfig::output_high();
        assert_eq!(cfg.direction, Direction::Output);
        assert!(cfg.output_value);
        assert!(!cfg.disable_pin);
    }
}
