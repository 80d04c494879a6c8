use log::debug;

use usbgps_config::DeviceRegistry;
use usbgps_types::Baud;
use usbgps_usb::UsbDeviceInfo;

/// The located dongle: its device node and the baud rate its profile calls
/// for. Ownership transfers to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpsDevice {
    pub device_path: String,
    pub baud: Baud,
}

/// The first live device whose (vendor, product) pair has a registry entry
/// wins; enumeration order decides ties.
pub fn match_device(live: &[UsbDeviceInfo], registry: &DeviceRegistry) -> Option<GpsDevice> {
    for device in live {
        if let Some(profile) = registry.lookup(device.vendor_id, device.product_id) {
            let device_path = device.device_node_path();
            debug!(
                "Matched {:04x}:{:04x} at {}",
                device.vendor_id, device.product_id, device_path
            );

            return Some(GpsDevice {
                device_path,
                baud: profile.baud,
            });
        }
    }

    None
}
