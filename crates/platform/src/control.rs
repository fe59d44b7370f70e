//! Mixer control abstraction
//!
//! Controls are named values user space can read and write. Only
//! externally-backed enumerated controls are modelled here: the control
//! core stores nothing, the driver answers get/put itself.

use thiserror_no_std::Error;

/// Enumerated control whose value lives in the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumControl {
    /// Control name as seen by user space
    pub name: &'static str,
    /// Item labels; the control value is an index into this list
    pub items: &'static [&'static str],
}

impl EnumControl {
    /// Number of selectable items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Label of item `index`, if it exists.
    #[must_use]
    pub fn item(&self, index: u32) -> Option<&'static str> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .copied()
    }

    /// Check that `index` names an item of this control.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError::InvalidItem`] if `index` is out of range.
    pub fn validate(&self, index: u32) -> Result<(), ControlError> {
        match self.item(index) {
            Some(_) => Ok(()),
            None => Err(ControlError::InvalidItem {
                control: self.name,
                index,
            }),
        }
    }
}

/// Outcome of a control write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlChange {
    /// The written value equalled the current one.
    Unchanged,
    /// The value changed; listeners are notified.
    Changed,
}

impl ControlChange {
    /// `true` for [`ControlChange::Changed`].
    #[must_use]
    pub const fn changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Errors reported by control get/put handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// The written item index does not exist.
    #[error("control '{control}' has no item {index}")]
    InvalidItem {
        /// Control name
        control: &'static str,
        /// Rejected index
        index: u32,
    },
    /// No control with this name belongs to the driver.
    #[error("unknown control")]
    UnknownControl,
}

/// Control registration interface.
pub trait ControlRegistry {
    /// Error type
    type Error: core::fmt::Debug;

    /// Register `controls` with the card.
    fn add_controls(&mut self, controls: &'static [EnumControl]) -> Result<(), Self::Error>;
}
