//! USB GPS dongle location.
//!
//! Builds a profile registry from the device list file, enumerates the live
//! USB bus and reports the device node and baud rate of the first attached
//! device matching a registered profile.

pub mod error;
pub mod matcher;
pub mod scan;

pub use error::ScanError;
pub use matcher::{match_device, GpsDevice};
pub use scan::{scan_source, scan_usb_gps_device, scan_with, DEVICE_LIST_FILE};
