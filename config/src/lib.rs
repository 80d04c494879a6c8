pub mod error;
pub mod loader;
pub mod registry;

pub use error::ConfigError;
pub use loader::{ConfigWarning, GpsSettings, ROOT_ELEMENT};
pub use registry::{DeviceProfile, DeviceRegistry, RegistryError};
