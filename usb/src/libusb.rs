use log::warn;
use rusb::{Context, UsbContext};

use crate::error::UsbError;
use crate::{UsbDeviceInfo, UsbEnumerator};

/// Live enumeration through libusb. Each call brings the library up, walks
/// the bus, and shuts it back down again; the context and device list are
/// released when the call returns.
#[derive(Debug, Default)]
pub struct LibUsbEnumerator;

impl UsbEnumerator for LibUsbEnumerator {
    fn list_devices(&mut self) -> Result<Vec<UsbDeviceInfo>, UsbError> {
        let context = Context::new().map_err(UsbError::Init)?;
        let devices = context.devices().map_err(UsbError::Enumeration)?;

        let mut found = Vec::new();
        for device in devices.iter() {
            let descriptor = match device.device_descriptor() {
                Ok(descriptor) => descriptor,
                Err(error) => {
                    warn!("failed to get device descriptor: {error}");
                    continue;
                }
            };

            found.push(UsbDeviceInfo {
                vendor_id: descriptor.vendor_id(),
                product_id: descriptor.product_id(),
                bus_number: device.bus_number(),
                address: device.address(),
            });
        }

        Ok(found)
    }
}
