#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Serial baud rates supported by the known GPS dongles.
///
/// The token table is fixed; `Display` and `FromStr` round-trip the textual
/// tokens used by the device list file ("2400", "4800", "9600").
#[derive(Copy, Clone, Debug, Display, EnumString, EnumIter, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Baud {
    #[strum(serialize = "2400")]
    Baud2400,
    #[strum(serialize = "4800")]
    Baud4800,
    #[strum(serialize = "9600")]
    Baud9600,
}

impl Baud {
    /// Exact-match lookup of a baud-rate token. Unknown tokens are not an
    /// error here; callers fall back to their configured default.
    pub fn from_token(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// The numeric rate, for configuring a serial line.
    pub fn speed(self) -> u32 {
        match self {
            Baud::Baud2400 => 2400,
            Baud::Baud4800 => 4800,
            Baud::Baud9600 => 9600,
        }
    }
}

impl Default for Baud {
    fn default() -> Self {
        Baud::Baud9600
    }
}
