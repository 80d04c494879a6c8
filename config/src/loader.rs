use std::fs::File;
use std::io::Read;
use std::num::ParseIntError;
use std::path::Path;

use log::{debug, warn};
use xmltree::{Element, XMLNode};

use usbgps_types::Baud;

use crate::error::ConfigError;
use crate::registry::{DeviceProfile, DeviceRegistry, RegistryError};

/// Root element name the device list file must carry. Documents with any
/// other root are ignored wholesale, leaving zero devices registered.
pub const ROOT_ELEMENT: &str = "odroid-gps";

/// Non-fatal problems found while populating the registry. The load itself
/// still succeeds; entries that produced a warning are skipped.
#[derive(thiserror::Error, Debug)]
pub enum ConfigWarning {
    #[error("idVendor or idProduct is missing")]
    MissingId,

    #[error("bad {attribute} attribute: {source}")]
    InvalidHex {
        attribute: &'static str,
        source: ParseIntError,
    },

    #[error("usbdev entry outside of a <devices> pool")]
    NoDevicePool,

    #[error("device pool: {0}")]
    Registry(#[from] RegistryError),
}

/// Per-scan state built from the device list file.
///
/// Owns the profile registry together with the `<default>` override, so a
/// scan carries no shared mutable state. A fresh instance (or `reset`) is the
/// pristine state every scan starts from.
#[derive(Debug, Default)]
pub struct GpsSettings {
    registry: Option<DeviceRegistry>,
    default_device: Option<String>,
    default_baud: Baud,
}

impl GpsSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Vec<ConfigWarning>, ConfigError> {
        let file = File::open(path.as_ref())?;
        self.load(file)
    }

    pub fn load<R: Read>(&mut self, source: R) -> Result<Vec<ConfigWarning>, ConfigError> {
        let root = Element::parse(source)?;

        let mut warnings = Vec::new();
        if root.name == ROOT_ELEMENT {
            self.traverse(&root.children, &mut warnings);
        } else {
            warn!("Ignoring device list with root element <{}>", root.name);
        }

        debug!("{} device(s) are listed", self.device_count());
        Ok(warnings)
    }

    /// Walk a sibling chain: handle each element, then descend into its
    /// children, then move on to the next sibling. A failed pool creation
    /// stops the rest of the chain.
    fn traverse(&mut self, siblings: &[XMLNode], warnings: &mut Vec<ConfigWarning>) {
        for node in siblings {
            let element = match node.as_element() {
                Some(element) => element,
                None => continue,
            };

            match element.name.as_str() {
                "default" => self.set_defaults(element),
                "devices" => {
                    let count = element
                        .children
                        .iter()
                        .filter(|child| child.as_element().is_some())
                        .count();

                    // A new pool replaces whatever an earlier <devices>
                    // element built.
                    match DeviceRegistry::with_capacity(count as i32) {
                        Ok(registry) => self.registry = Some(registry),
                        Err(error) => {
                            warn!("{error}");
                            warnings.push(error.into());
                            break;
                        }
                    }
                }
                "usbdev" => {
                    if let Err(warning) = self.add_device(element) {
                        warn!("{warning}");
                        warnings.push(warning);
                    }
                }
                _ => {}
            }

            self.traverse(&element.children, warnings);
        }
    }

    fn set_defaults(&mut self, element: &Element) {
        self.default_device = element.attributes.get("device").cloned();

        if let Some(token) = element.attributes.get("baudrate") {
            self.default_baud = self.baud_or_default(Some(token.as_str()));
        }
    }

    fn add_device(&mut self, element: &Element) -> Result<(), ConfigWarning> {
        let (vid, pid) = match (
            element.attributes.get("vid"),
            element.attributes.get("pid"),
        ) {
            (Some(vid), Some(pid)) => (vid, pid),
            _ => return Err(ConfigWarning::MissingId),
        };

        let vendor_id = parse_hex(vid).map_err(|source| ConfigWarning::InvalidHex {
            attribute: "vid",
            source,
        })?;
        let product_id = parse_hex(pid).map_err(|source| ConfigWarning::InvalidHex {
            attribute: "pid",
            source,
        })?;
        let baud = self.baud_or_default(element.attributes.get("baudrate").map(String::as_str));

        let registry = self.registry.as_mut().ok_or(ConfigWarning::NoDevicePool)?;
        registry.add(DeviceProfile {
            vendor_id,
            product_id,
            baud,
        })?;

        Ok(())
    }

    /// Resolve a baud token against the configured default. Unknown or
    /// missing tokens silently fall back.
    pub fn baud_or_default(&self, token: Option<&str>) -> Baud {
        token.and_then(Baud::from_token).unwrap_or(self.default_baud)
    }

    pub fn registry(&self) -> Option<&DeviceRegistry> {
        self.registry.as_ref()
    }

    pub fn device_count(&self) -> usize {
        self.registry.as_ref().map_or(0, DeviceRegistry::len)
    }

    pub fn default_baud(&self) -> Baud {
        self.default_baud
    }

    /// The `<default>` element's device hint. Parsed for completeness only:
    /// matching always resolves against the live USB enumeration and never
    /// consults this value.
    pub fn default_device(&self) -> Option<&str> {
        self.default_device.as_deref()
    }

    /// Return to the pristine state a scan starts from.
    pub fn reset(&mut self) {
        self.registry = None;
        self.default_device = None;
        self.default_baud = Baud::default();
    }
}

fn parse_hex(text: &str) -> Result<u16, ParseIntError> {
    let digits = text.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    u16::from_str_radix(digits, 16)
}
