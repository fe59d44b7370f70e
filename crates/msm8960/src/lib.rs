//! MSM8960 audio machine driver
//!
//! Binds the Tabla codec, the LPASS DSP front-ends and the primary I2S
//! back-ends into one sound card, and sequences the external stereo
//! speaker amplifier.
//!
//! # Structure
//!
//! - [`topology`] — DAI links, DAPM widgets/routes and mixer controls
//! - [`amp`] — speaker amplifier power sequencing ([`SpeakerAmp`])
//! - [`speaker`] — "Speaker Function" control ([`SpeakerControl`])
//! - [`card`] — card context tying the above to framework callbacks
//! - [`module`] — registration with the platform-device host
//! - [`config`] — board constants and policy knobs
//!
//! # Dependency Injection
//!
//! Every external subsystem is a trait from the `platform` crate. The card
//! context owns the GPIO controller; DAPM and codec runtimes are passed
//! into each callback:
//!
//! ```rust
//! use msm8960_audio::config::{CODEC_NAME, EXT_SPK};
//! use msm8960_audio::topology::lpass;
//! use msm8960_audio::{AmpConfig, Msm8960Card, SndDevice, CARD};
//! use platform::dapm::{DapmEvent, WidgetEventHandler};
//! use platform::mocks::{MockCodec, MockHost, MockPinRegistry};
//!
//! let mut host = MockHost::new();
//! let mut card = Msm8960Card::new(MockPinRegistry::new(), AmpConfig::default());
//! let dev = SndDevice::init(&mut host).unwrap();
//!
//! if let Some(link) = CARD.link(lpass::BE_PRI_I2S_RX) {
//!     card.init_link(link, &mut MockCodec::new(CODEC_NAME)).unwrap();
//! }
//! card.on_widget_event(EXT_SPK, DapmEvent::PostPmu).unwrap();
//! assert!(card.amp().is_on());
//!
//! dev.exit(&mut host, &mut card);
//! assert!(!card.amp().is_on());
//! ```
//!
//! # Features
//!
//! - `std`: Enable `platform` mocks outside of unit tests
//! - `defmt`: Log through defmt (hardware builds)
//! - `tracing`: Log through tracing (host builds)

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

// Must come first: the log macros are textually scoped.
mod fmt;

pub mod amp;
pub mod card;
pub mod config;
pub mod error;
pub mod module;
pub mod speaker;
pub mod topology;

pub use amp::{AmpLine, AmpState, PowerTransition, SpeakerAmp};
pub use card::Msm8960Card;
pub use config::{AmpConfig, AmpPin, OnConfigFailure};
pub use error::{AmpError, CardError, ModuleError};
pub use module::SndDevice;
pub use speaker::{SpeakerControl, SpeakerFunction};
pub use topology::{LinkInit, CARD};
