//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests. Every mock records its calls
//! so tests can assert on ordering as well as final state.

#![cfg(any(test, feature = "std"))]
#![allow(clippy::arithmetic_side_effects)] // Mock counters; overflow not a concern in tests

use heapless::Vec;

use crate::control::{ControlRegistry, EnumControl};
use crate::dai::CodecRuntime;
use crate::dapm::{DapmContext, Route, Widget};
use crate::gpio::{GpioError, GpioNum, PinRegistry, PinState};
use crate::host::{DeviceId, SocAudioHost};
use crate::pmic_gpio::{PmGpioConfig, PmicGpio};

/// Capacity of every mock call log.
pub const CALL_LOG_DEPTH: usize = 256;

/// Error injected by a mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

// ── Pin registry ─────────────────────────────────────────────────────────────

/// Call recorded by [`MockPinRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinCall {
    /// `request(pin, label)`
    Request(GpioNum, &'static str),
    /// `free(pin)`
    Free(GpioNum),
    /// `configure(pin, ..)`
    Configure(GpioNum),
    /// `set_level(pin, state)`
    SetLevel(GpioNum, PinState),
}

/// Mock GPIO controller: pin-ownership registry plus PMIC configuration.
pub struct MockPinRegistry {
    owned: Vec<GpioNum, 16>,
    levels: Vec<(GpioNum, PinState), 16>,
    reject_request: Vec<GpioNum, 8>,
    reject_config: Vec<GpioNum, 8>,
    calls: Vec<PinCall, CALL_LOG_DEPTH>,
    last_config: Option<PmGpioConfig>,
}

impl MockPinRegistry {
    /// Create a registry where every pin is free.
    pub fn new() -> Self {
        Self {
            owned: Vec::new(),
            levels: Vec::new(),
            reject_request: Vec::new(),
            reject_config: Vec::new(),
            calls: Vec::new(),
            last_config: None,
        }
    }

    /// Mark `pin` as owned by someone else; requests for it fail with
    /// [`GpioError::Busy`].
    pub fn claim(&mut self, pin: GpioNum) {
        if !self.owned.contains(&pin) {
            let _ = self.owned.push(pin);
        }
    }

    /// Make requests for `pin` fail with [`GpioError::InvalidPin`].
    pub fn fail_request(&mut self, pin: GpioNum) {
        let _ = self.reject_request.push(pin);
    }

    /// Make configuration of `pin` fail with [`GpioError::ConfigRejected`].
    pub fn fail_configure(&mut self, pin: GpioNum) {
        let _ = self.reject_config.push(pin);
    }

    /// Remove all injected failures.
    pub fn clear_failures(&mut self) {
        self.reject_request.clear();
        self.reject_config.clear();
    }

    /// Returns `true` if `pin` is currently owned.
    pub fn is_owned(&self, pin: GpioNum) -> bool {
        self.owned.contains(&pin)
    }

    /// Number of currently owned pins.
    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    /// Last level driven on `pin`, if any.
    pub fn level(&self, pin: GpioNum) -> Option<PinState> {
        self.levels
            .iter()
            .find(|(p, _)| *p == pin)
            .map(|(_, state)| *state)
    }

    /// Last configuration applied by [`PmicGpio::configure`].
    pub fn last_config(&self) -> Option<PmGpioConfig> {
        self.last_config
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[PinCall] {
        &self.calls
    }

    /// Number of recorded calls matching `call`.
    pub fn count(&self, call: PinCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Forget recorded calls (ownership and levels are kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: PinCall) {
        let _ = self.calls.push(call);
    }
}

impl Default for MockPinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PinRegistry for MockPinRegistry {
    type Error = GpioError;

    fn request(&mut self, pin: GpioNum, label: &'static str) -> Result<(), Self::Error> {
        self.record(PinCall::Request(pin, label));
        if self.reject_request.contains(&pin) {
            return Err(GpioError::InvalidPin(pin));
        }
        if self.owned.contains(&pin) {
            return Err(GpioError::Busy(pin));
        }
        self.owned.push(pin).map_err(|_| GpioError::InvalidPin(pin))
    }

    fn free(&mut self, pin: GpioNum) {
        self.record(PinCall::Free(pin));
        if let Some(pos) = self.owned.iter().position(|p| *p == pin) {
            self.owned.swap_remove(pos);
        }
    }

    fn set_level(&mut self, pin: GpioNum, state: PinState) {
        self.record(PinCall::SetLevel(pin, state));
        if let Some(entry) = self.levels.iter_mut().find(|(p, _)| *p == pin) {
            entry.1 = state;
        } else {
            let _ = self.levels.push((pin, state));
        }
    }
}

impl PmicGpio for MockPinRegistry {
    type Error = GpioError;

    fn configure(&mut self, pin: GpioNum, config: &PmGpioConfig) -> Result<(), Self::Error> {
        self.record(PinCall::Configure(pin));
        if self.reject_config.contains(&pin) {
            return Err(GpioError::ConfigRejected(pin));
        }
        self.last_config = Some(*config);
        Ok(())
    }
}

// ── Codec runtime ────────────────────────────────────────────────────────────

/// Call recorded by [`MockCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecCall {
    /// `enable_pin(name)`
    EnablePin(&'static str),
    /// `disable_pin(name)`
    DisablePin(&'static str),
    /// `sync()`
    Sync,
    /// `new_widgets(..)` with this many widgets
    NewWidgets(usize),
    /// `add_routes(..)` with this many routes
    AddRoutes(usize),
    /// `add_controls(..)` with this many controls
    AddControls(usize),
}

/// Mock codec runtime: DAPM context and control registry.
pub struct MockCodec {
    name: &'static str,
    calls: Vec<CodecCall, CALL_LOG_DEPTH>,
    pins: Vec<(&'static str, bool), 16>,
    widgets: Vec<Widget, 16>,
    routes: Vec<Route, 16>,
    controls: Vec<EnumControl, 16>,
    fail_controls: bool,
    fail_widgets: bool,
    fail_routes: bool,
}

impl MockCodec {
    /// Create a mock runtime bound to codec `name`.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Vec::new(),
            pins: Vec::new(),
            widgets: Vec::new(),
            routes: Vec::new(),
            controls: Vec::new(),
            fail_controls: false,
            fail_widgets: false,
            fail_routes: false,
        }
    }

    /// Make `add_controls` fail.
    pub fn fail_controls(&mut self) {
        self.fail_controls = true;
    }

    /// Make `new_widgets` fail.
    pub fn fail_widgets(&mut self) {
        self.fail_widgets = true;
    }

    /// Make `add_routes` fail.
    pub fn fail_routes(&mut self) {
        self.fail_routes = true;
    }

    /// Requested state of endpoint `pin`, if it was ever touched.
    pub fn pin_enabled(&self, pin: &str) -> Option<bool> {
        self.pins.iter().find(|(p, _)| *p == pin).map(|(_, on)| *on)
    }

    /// Registered widgets.
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Registered controls.
    pub fn controls(&self) -> &[EnumControl] {
        &self.controls
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[CodecCall] {
        &self.calls
    }

    /// Number of recorded calls matching `call`.
    pub fn count(&self, call: CodecCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: CodecCall) {
        let _ = self.calls.push(call);
    }

    fn set_pin(&mut self, pin: &'static str, on: bool) {
        if let Some(entry) = self.pins.iter_mut().find(|(p, _)| *p == pin) {
            entry.1 = on;
        } else {
            let _ = self.pins.push((pin, on));
        }
    }
}

impl DapmContext for MockCodec {
    type Error = MockError;

    fn enable_pin(&mut self, pin: &'static str) {
        self.record(CodecCall::EnablePin(pin));
        self.set_pin(pin, true);
    }

    fn disable_pin(&mut self, pin: &'static str) {
        self.record(CodecCall::DisablePin(pin));
        self.set_pin(pin, false);
    }

    fn sync(&mut self) {
        self.record(CodecCall::Sync);
    }

    fn new_widgets(&mut self, widgets: &'static [Widget]) -> Result<(), Self::Error> {
        self.record(CodecCall::NewWidgets(widgets.len()));
        if self.fail_widgets {
            return Err(MockError);
        }
        for w in widgets {
            let _ = self.widgets.push(*w);
        }
        Ok(())
    }

    fn add_routes(&mut self, routes: &'static [Route]) -> Result<(), Self::Error> {
        self.record(CodecCall::AddRoutes(routes.len()));
        if self.fail_routes {
            return Err(MockError);
        }
        for r in routes {
            let _ = self.routes.push(*r);
        }
        Ok(())
    }
}

impl ControlRegistry for MockCodec {
    type Error = MockError;

    fn add_controls(&mut self, controls: &'static [EnumControl]) -> Result<(), Self::Error> {
        self.record(CodecCall::AddControls(controls.len()));
        if self.fail_controls {
            return Err(MockError);
        }
        for c in controls {
            let _ = self.controls.push(*c);
        }
        Ok(())
    }
}

impl CodecRuntime for MockCodec {
    fn codec_name(&self) -> &str {
        self.name
    }
}

// ── Platform-device host ─────────────────────────────────────────────────────

/// Mock platform-device host.
pub struct MockHost<C> {
    next_id: u32,
    allocated: Vec<(DeviceId, &'static str, u32), 8>,
    card: Option<C>,
    fail_alloc: bool,
    fail_add: bool,
    /// Number of successful `device_add` calls.
    pub add_count: usize,
    /// Number of `device_put` calls.
    pub put_count: usize,
    /// Number of `device_unregister` calls.
    pub unregister_count: usize,
}

impl<C> MockHost<C> {
    /// Create a host that accepts every device.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            allocated: Vec::new(),
            card: None,
            fail_alloc: false,
            fail_add: false,
            add_count: 0,
            put_count: 0,
            unregister_count: 0,
        }
    }

    /// Make `device_alloc` return `None`.
    pub fn fail_alloc(&mut self) {
        self.fail_alloc = true;
    }

    /// Make `device_add` fail.
    pub fn fail_add(&mut self) {
        self.fail_add = true;
    }

    /// Card attached to the added device.
    pub fn card(&self) -> Option<&C> {
        self.card.as_ref()
    }

    /// Name and instance id of a live device.
    pub fn device(&self, device: DeviceId) -> Option<(&'static str, u32)> {
        self.allocated
            .iter()
            .find(|(d, _, _)| *d == device)
            .map(|(_, name, id)| (*name, *id))
    }

    /// Number of live devices (allocated and not yet put or unregistered).
    pub fn live_devices(&self) -> usize {
        self.allocated.len()
    }

    fn release(&mut self, device: DeviceId) {
        if let Some(pos) = self.allocated.iter().position(|(d, _, _)| *d == device) {
            self.allocated.swap_remove(pos);
        }
    }
}

impl<C> Default for MockHost<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> SocAudioHost<C> for MockHost<C> {
    type Error = MockError;

    fn device_alloc(&mut self, name: &'static str, id: u32) -> Option<DeviceId> {
        if self.fail_alloc {
            return None;
        }
        let device = DeviceId(self.next_id);
        self.allocated.push((device, name, id)).ok()?;
        self.next_id += 1;
        Some(device)
    }

    fn device_add(&mut self, _device: DeviceId, card: C) -> Result<(), Self::Error> {
        if self.fail_add {
            return Err(MockError);
        }
        self.card = Some(card);
        self.add_count += 1;
        Ok(())
    }

    fn device_put(&mut self, device: DeviceId) {
        self.put_count += 1;
        self.release(device);
    }

    fn device_unregister(&mut self, device: DeviceId) {
        self.unregister_count += 1;
        self.card = None;
        self.release(device);
    }
}
