use std::io::Read;
use std::path::Path;

use log::{info, warn};

use usbgps_config::{ConfigWarning, GpsSettings};
use usbgps_usb::{LibUsbEnumerator, UsbEnumerator};

use crate::error::ScanError;
use crate::matcher::{match_device, GpsDevice};

/// Compiled-in location of the device list file.
pub const DEVICE_LIST_FILE: &str = "/etc/odroid-usbgps.xml";

/// Scan the fixed device list against the live USB bus.
pub fn scan_usb_gps_device() -> Result<GpsDevice, ScanError> {
    scan_with(Path::new(DEVICE_LIST_FILE), &mut LibUsbEnumerator)
}

/// Scan the device list at `path` with the given enumerator.
pub fn scan_with(path: &Path, usb: &mut dyn UsbEnumerator) -> Result<GpsDevice, ScanError> {
    let mut settings = GpsSettings::new();
    let warnings = settings.load_file(path)?;
    run_scan(&settings, warnings, usb)
}

/// Like [`scan_with`], reading the device list from an in-memory source.
pub fn scan_source<R: Read>(source: R, usb: &mut dyn UsbEnumerator) -> Result<GpsDevice, ScanError> {
    let mut settings = GpsSettings::new();
    let warnings = settings.load(source)?;
    run_scan(&settings, warnings, usb)
}

// USB is only touched once the registry holds at least one profile, and the
// enumerator's resources are released before the settings drop.
fn run_scan(
    settings: &GpsSettings,
    warnings: Vec<ConfigWarning>,
    usb: &mut dyn UsbEnumerator,
) -> Result<GpsDevice, ScanError> {
    for warning in &warnings {
        warn!("device list: {warning}");
    }

    let registry = match settings.registry() {
        Some(registry) if !registry.is_empty() => registry,
        _ => return Err(ScanError::NotFound),
    };
    info!("{} device(s) are listed", registry.len());

    let live = usb.list_devices()?;
    match_device(&live, registry).ok_or(ScanError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use usbgps_types::Baud;
    use usbgps_usb::{rusb, UsbDeviceInfo, UsbError};

    struct StubUsb {
        devices: Vec<UsbDeviceInfo>,
        calls: usize,
        fail: bool,
    }

    impl StubUsb {
        fn with_devices(devices: Vec<UsbDeviceInfo>) -> Self {
            Self {
                devices,
                calls: 0,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                devices: Vec::new(),
                calls: 0,
                fail: true,
            }
        }
    }

    impl UsbEnumerator for StubUsb {
        fn list_devices(&mut self) -> Result<Vec<UsbDeviceInfo>, UsbError> {
            self.calls += 1;
            if self.fail {
                return Err(UsbError::Init(rusb::Error::NoDevice));
            }
            Ok(self.devices.clone())
        }
    }

    const ONE_DEVICE: &str = r#"<odroid-gps>
        <devices>
            <usbdev vid="1546" pid="01a7" baudrate="9600"/>
        </devices>
    </odroid-gps>"#;

    fn live(vendor_id: u16, product_id: u16, bus_number: u8, address: u8) -> UsbDeviceInfo {
        UsbDeviceInfo {
            vendor_id,
            product_id,
            bus_number,
            address,
        }
    }

    #[test]
    fn test_scan_finds_listed_device() {
        let mut usb = StubUsb::with_devices(vec![live(0x1546, 0x01A7, 1, 7)]);

        let found = scan_source(ONE_DEVICE.as_bytes(), &mut usb).unwrap();
        assert_eq!(found.device_path, "/dev/bus/usb/001/007");
        assert_eq!(found.baud, Baud::Baud9600);
        assert_eq!(usb.calls, 1);
    }

    #[test]
    fn test_scan_without_live_match_is_not_found() {
        let mut usb = StubUsb::with_devices(vec![live(0x0403, 0x6001, 1, 2)]);

        let result = scan_source(ONE_DEVICE.as_bytes(), &mut usb);
        assert!(matches!(result, Err(ScanError::NotFound)));
        assert_eq!(usb.calls, 1);
    }

    #[test]
    fn test_scan_with_empty_enumeration_is_not_found() {
        let mut usb = StubUsb::with_devices(Vec::new());

        let result = scan_source(ONE_DEVICE.as_bytes(), &mut usb);
        assert!(matches!(result, Err(ScanError::NotFound)));
    }

    #[test]
    fn test_wrong_root_element_never_touches_usb() {
        let source = r#"<not-gps>
            <devices>
                <usbdev vid="1546" pid="01a7"/>
            </devices>
        </not-gps>"#;
        let mut usb = StubUsb::with_devices(vec![live(0x1546, 0x01A7, 1, 7)]);

        let result = scan_source(source.as_bytes(), &mut usb);
        assert!(matches!(result, Err(ScanError::NotFound)));
        assert_eq!(usb.calls, 0);
    }

    #[test]
    fn test_usb_failure_is_device_unavailable() {
        let mut usb = StubUsb::failing();

        let result = scan_source(ONE_DEVICE.as_bytes(), &mut usb);
        assert!(matches!(result, Err(ScanError::DeviceUnavailable(_))));
    }

    #[test]
    fn test_malformed_device_list_is_config_error() {
        let mut usb = StubUsb::with_devices(Vec::new());

        let result = scan_source(&b"not xml at all"[..], &mut usb);
        assert!(matches!(result, Err(ScanError::Config(_))));
        assert_eq!(usb.calls, 0);
    }

    #[test]
    fn test_duplicate_profiles_resolve_to_the_earliest_baud() {
        let source = r#"<odroid-gps>
            <devices>
                <usbdev vid="10" pid="20" baudrate="2400"/>
                <usbdev vid="10" pid="20" baudrate="4800"/>
            </devices>
        </odroid-gps>"#;
        let mut usb = StubUsb::with_devices(vec![live(0x10, 0x20, 3, 14)]);

        let found = scan_source(source.as_bytes(), &mut usb).unwrap();
        assert_eq!(found.baud, Baud::Baud2400);
        assert_eq!(found.device_path, "/dev/bus/usb/003/014");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        let config = ScanError::Config(usbgps_config::ConfigError::IOError(
            std::io::Error::other("gone"),
        ));
        let unavailable = ScanError::DeviceUnavailable(UsbError::Init(rusb::Error::NoDevice));
        let not_found = ScanError::NotFound;

        let codes = [
            config.exit_code(),
            unavailable.exit_code(),
            not_found.exit_code(),
        ];
        assert!(codes.iter().all(|&code| code != 0));
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
