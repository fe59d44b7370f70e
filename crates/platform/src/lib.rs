//! Audio platform abstraction layer for SoC machine drivers
//!
//! This crate provides the trait seams a board-level machine driver sits
//! on, plus the descriptor types it fills in. Everything here is owned by
//! external subsystems on real hardware; machine drivers only configure
//! them.
//!
//! # Architecture Layers
//!
//! ```text
//! Machine driver (msm8960-audio crate)
//!         ↓
//! Platform abstraction (this crate - traits and descriptors)
//!         ↓
//! GPIO core / PMIC / DAPM engine / control core / device host
//! ```
//!
//! # Seams
//!
//! - [`PinRegistry`] - GPIO request/free and level control
//! - [`PmicGpio`] - PMIC GPIO electrical configuration
//! - [`DapmContext`] - Endpoint pins, widgets and routes
//! - [`WidgetEventHandler`] - Widget power events
//! - [`ControlRegistry`] - Mixer control registration
//! - [`CodecRuntime`] - Per-link runtime handed to init hooks
//! - [`SocAudioHost`] - Platform-device registration
//!
//! # Features
//!
//! - `std`: Expose [`mocks`] outside of unit tests
//! - `defmt`: Enable defmt logging and `defmt::Format` derives

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer defmt over println! in lib code
#![allow(clippy::doc_markdown)] // pin and widget names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod control;
pub mod dai;
pub mod dapm;
pub mod gpio;
pub mod hal_pins;
pub mod host;
pub mod mocks;
pub mod pmic_gpio;

pub use control::{ControlChange, ControlError, ControlRegistry, EnumControl};
pub use dai::{CodecRuntime, DaiLink, DspLink, DspTrigger, SoundCard};
pub use dapm::{DapmContext, DapmEvent, Route, Widget, WidgetEventHandler, WidgetKind};
pub use gpio::{GpioError, GpioNum, PinRegistry, PinState};
pub use hal_pins::HalPinBank;
pub use host::{DeviceId, SocAudioHost};
pub use pmic_gpio::{pm_to_sys, PmGpioConfig, PmicGpio, PM8921_GPIO_BASE};
