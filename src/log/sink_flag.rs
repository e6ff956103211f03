use std::{fmt, str::FromStr};

use crate::log::error::ParseSinkFlagError;

/// Output selection bitmask: bit 0 enables the console, bit 1 the log file.
///
/// Any bit pattern is accepted. Values outside the four canonical ones are
/// routed to both destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SinkFlag(u8);

/// Where a [`SinkFlag`] sends output once classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Discard,
    Console,
    File,
    ConsoleAndFile,
}

impl SinkFlag {
    pub const NONE: SinkFlag = SinkFlag(0x00);
    pub const CONSOLE: SinkFlag = SinkFlag(0x01);
    pub const FILE: SinkFlag = SinkFlag(0x02);
    pub const CONSOLE_FILE: SinkFlag = SinkFlag(0x03);

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        SinkFlag(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when the file bit is set; the log file is opened for these flags.
    #[must_use]
    pub const fn wants_file(self) -> bool {
        self.0 & Self::FILE.0 == Self::FILE.0
    }

    #[must_use]
    pub const fn route(self) -> Route {
        match self.0 {
            0x00 => Route::Discard,
            0x01 => Route::Console,
            0x02 => Route::File,
            _ => Route::ConsoleAndFile,
        }
    }
}

impl From<u8> for SinkFlag {
    fn from(bits: u8) -> Self {
        SinkFlag(bits)
    }
}

impl FromStr for SinkFlag {
    type Err = ParseSinkFlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(bits) = s.parse::<u8>() {
            return Ok(SinkFlag(bits));
        }
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::NONE),
            "console" | "stdout" => Ok(Self::CONSOLE),
            "file" => Ok(Self::FILE),
            "console-file" | "console_file" | "consolefile" | "both" => Ok(Self::CONSOLE_FILE),
            _ => Err(ParseSinkFlagError(s.to_owned())),
        }
    }
}

impl fmt::Display for SinkFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => f.write_str("none"),
            Self::CONSOLE => f.write_str("console"),
            Self::FILE => f.write_str("file"),
            Self::CONSOLE_FILE => f.write_str("console-file"),
            SinkFlag(bits) => write!(f, "{bits:#04x}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn canonical_flags_route_to_their_destination() {
        assert_eq!(SinkFlag::NONE.route(), Route::Discard);
        assert_eq!(SinkFlag::CONSOLE.route(), Route::Console);
        assert_eq!(SinkFlag::FILE.route(), Route::File);
        assert_eq!(SinkFlag::CONSOLE_FILE.route(), Route::ConsoleAndFile);
    }

    #[test]
    fn unknown_bitmasks_fall_back_to_console_and_file() {
        for bits in [4u8, 7, 0x10, 0xff] {
            assert_eq!(SinkFlag::from_bits(bits).route(), Route::ConsoleAndFile);
        }
    }

    #[test]
    fn file_bit_decides_whether_a_file_is_opened() {
        assert!(!SinkFlag::NONE.wants_file());
        assert!(!SinkFlag::CONSOLE.wants_file());
        assert!(SinkFlag::FILE.wants_file());
        assert!(SinkFlag::CONSOLE_FILE.wants_file());
        assert!(SinkFlag::from_bits(7).wants_file());
        // Falls back to both destinations, but no file bit means no file.
        assert!(!SinkFlag::from_bits(4).wants_file());
    }

    #[test]
    fn parses_names_and_bitmasks() {
        assert_eq!("console".parse::<SinkFlag>().unwrap(), SinkFlag::CONSOLE);
        assert_eq!("Both".parse::<SinkFlag>().unwrap(), SinkFlag::CONSOLE_FILE);
        assert_eq!("7".parse::<SinkFlag>().unwrap().bits(), 7);
        assert!("syslog".parse::<SinkFlag>().is_err());
        assert_eq!(SinkFlag::from_bits(7).to_string(), "0x07");
        assert_eq!(SinkFlag::FILE.to_string(), "file");
    }
}
