pub use rusb;

pub mod error;
mod libusb;

pub use error::UsbError;
pub use libusb::LibUsbEnumerator;

/// Identity and bus location of one attached USB device, captured from its
/// descriptor during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub bus_number: u8,
    pub address: u8,
}

impl UsbDeviceInfo {
    /// The device node the kernel exposes for this bus position.
    pub fn device_node_path(&self) -> String {
        format!("/dev/bus/usb/{:03}/{:03}", self.bus_number, self.address)
    }
}

/// Source of live USB device enumerations, in bus/topology order. The real
/// implementation drives libusb; tests substitute their own.
pub trait UsbEnumerator {
    fn list_devices(&mut self) -> Result<Vec<UsbDeviceInfo>, UsbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_node_path_is_zero_padded() {
        let device = UsbDeviceInfo {
            vendor_id: 0x1546,
            product_id: 0x01A7,
            bus_number: 1,
            address: 7,
        };
        assert_eq!(device.device_node_path(), "/dev/bus/usb/001/007");

        let device = UsbDeviceInfo {
            vendor_id: 0x1546,
            product_id: 0x01A7,
            bus_number: 12,
            address: 103,
        };
        assert_eq!(device.device_node_path(), "/dev/bus/usb/012/103");
    }
}
