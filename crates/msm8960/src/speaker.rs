//! "Speaker Function" control
//!
//! User-selectable speaker path state. Writing the control only toggles
//! the `Ext Spk` endpoint in DAPM; the amplifier itself follows later
//! through the widget event when the DAPM engine powers the path.

use core::fmt;

use platform::control::{ControlChange, ControlError};
use platform::dapm::DapmContext;

use crate::config::EXT_SPK;
use crate::topology::SPEAKER_FUNCTION_CONTROL;

/// Speaker path selection, indexed as the control's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum SpeakerFunction {
    /// Speaker endpoint disconnected
    #[default]
    Off = 0,
    /// Speaker endpoint connected
    On = 1,
}

impl SpeakerFunction {
    /// Item labels, in index order.
    pub const ITEMS: &'static [&'static str] = &["Off", "On"];

    /// Control item index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Selection for control item `index`.
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Off),
            1 => Some(Self::On),
            _ => None,
        }
    }
}

impl fmt::Display for SpeakerFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "Off",
            Self::On => "On",
        })
    }
}

/// Backing store and put handler of the "Speaker Function" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpeakerControl {
    selection: SpeakerFunction,
}

impl SpeakerControl {
    /// Starts at [`SpeakerFunction::Off`].
    pub const fn new() -> Self {
        Self {
            selection: SpeakerFunction::Off,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> SpeakerFunction {
        self.selection
    }

    /// Control get: current item index.
    pub fn get(&self) -> u32 {
        trace!("speaker function = {}", self.selection);
        self.selection.index()
    }

    /// Control put.
    ///
    /// An unchanged value makes no DAPM calls. A new value is stored, then
    /// `Ext Spk` is enabled or disabled and DAPM is synced once.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidItem`] if `index` is not an item of
    /// the control; nothing is changed.
    pub fn set<D: DapmContext>(
        &mut self,
        dapm: &mut D,
        index: u32,
    ) -> Result<ControlChange, ControlError> {
        SPEAKER_FUNCTION_CONTROL.validate(index)?;
        let selection = SpeakerFunction::from_index(index).ok_or(ControlError::InvalidItem {
            control: SPEAKER_FUNCTION_CONTROL.name,
            index,
        })?;
        if selection == self.selection {
            return Ok(ControlChange::Unchanged);
        }

        debug!("speaker function {} -> {}", self.selection, selection);
        self.selection = selection;
        self.apply(dapm);
        Ok(ControlChange::Changed)
    }

    /// Push the current selection to DAPM and sync.
    pub fn apply<D: DapmContext>(&self, dapm: &mut D) {
        match self.selection {
            SpeakerFunction::On => dapm.enable_pin(EXT_SPK),
            SpeakerFunction::Off => dapm.disable_pin(EXT_SPK),
        }
        dapm.sync();
    }
}
