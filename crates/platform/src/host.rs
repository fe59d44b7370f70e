//! Platform-device host
//!
//! Machine drivers publish their card by allocating a platform device of
//! the audio core's driver name, attaching the card descriptor, and adding
//! the device. The host owns the device afterwards.

/// Opaque handle to an allocated platform device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId(pub u32);

/// Platform-device host interface.
pub trait SocAudioHost<C> {
    /// Error type
    type Error: core::fmt::Debug;

    /// Allocate a device named `name` with instance `id`.
    ///
    /// Returns `None` when the host is out of memory.
    fn device_alloc(&mut self, name: &'static str, id: u32) -> Option<DeviceId>;

    /// Attach `card` as the device's driver data and add it to the bus.
    fn device_add(&mut self, device: DeviceId, card: C) -> Result<(), Self::Error>;

    /// Drop the reference returned by [`device_alloc`](SocAudioHost::device_alloc)
    /// for a device that was never added.
    fn device_put(&mut self, device: DeviceId);

    /// Remove an added device.
    fn device_unregister(&mut self, device: DeviceId);
}
