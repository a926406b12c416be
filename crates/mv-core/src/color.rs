//! Display colours for lines and highlights.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// An 8-bit RGB triple.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Colour used for the source→destination highlight path.
    pub const HIGHLIGHT: Rgb = Rgb(0, 255, 0);

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> CoreResult<Rgb> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::Parse(format!(
                "invalid colour {s:?}: expected #RRGGBB"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| CoreError::Parse(format!("invalid colour {s:?}: bad hex digit")))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    #[inline]
    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl FromStr for Rgb {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
