#[derive(thiserror::Error, Debug)]
pub enum UsbError {
    #[error("USB subsystem init failed: {0}")]
    Init(#[source] rusb::Error),

    #[error("USB enumeration failed: {0}")]
    Enumeration(#[source] rusb::Error),
}
