use log::debug;

use usbgps_types::Baud;

#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("invalid device pool capacity: {0}")]
    InvalidCapacity(i32),

    #[error("device pool is full ({0} entries)")]
    OutOfCapacity(usize),
}

/// A single entry from the device list file. Identity is the
/// (vendor_id, product_id) pair; duplicates are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    pub vendor_id: u16,
    pub product_id: u16,
    pub baud: Baud,
}

/// Ordered pool of known GPS dongle profiles.
///
/// The capacity is fixed up front from the `<devices>` element's declared
/// child count, and inserting past it is an error. Lookups scan in insertion
/// order, so when the device list carries duplicate (vid, pid) pairs the
/// earliest entry wins.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    profiles: Vec<DeviceProfile>,
    capacity: usize,
}

impl DeviceRegistry {
    pub fn with_capacity(capacity: i32) -> Result<Self, RegistryError> {
        if capacity <= 0 {
            return Err(RegistryError::InvalidCapacity(capacity));
        }

        Ok(Self {
            profiles: Vec::with_capacity(capacity as usize),
            capacity: capacity as usize,
        })
    }

    pub fn add(&mut self, profile: DeviceProfile) -> Result<(), RegistryError> {
        if self.profiles.len() >= self.capacity {
            return Err(RegistryError::OutOfCapacity(self.capacity));
        }

        debug!(
            "Registering {:04x}:{:04x} at {} baud",
            profile.vendor_id, profile.product_id, profile.baud
        );
        self.profiles.push(profile);
        Ok(())
    }

    /// First profile matching the (vendor, product) pair, in insertion order.
    pub fn lookup(&self, vendor_id: u16, product_id: u16) -> Option<&DeviceProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.vendor_id == vendor_id && profile.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries along with the declared capacity. Safe to call on an
    /// already-cleared registry.
    pub fn clear(&mut self) {
        self.profiles = Vec::new();
        self.capacity = 0;
    }
}
