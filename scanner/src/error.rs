use usbgps_config::ConfigError;
use usbgps_usb::UsbError;

#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    #[error("device list error: {0}")]
    Config(#[from] ConfigError),

    #[error("USB subsystem unavailable: {0}")]
    DeviceUnavailable(#[from] UsbError),

    #[error("no matching GPS device found")]
    NotFound,
}

impl ScanError {
    /// Process exit code for the daemon, one per failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScanError::Config(_) => 1,
            ScanError::DeviceUnavailable(_) => 3,
            ScanError::NotFound => 4,
        }
    }
}
