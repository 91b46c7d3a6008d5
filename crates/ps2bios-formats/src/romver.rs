//! ROMVER version payload decoding.
//!
//! The `ROMVER` entry of a BIOS image carries a fixed 14-byte ASCII
//! payload identifying the firmware build:
//!
//! ```text
//! 0 1 6 0 H C 2 0 0 1 0 7 0 4
//! └┬─┘ └┬─┘ │ │ └──┬──┘ └┬┘ └┬┘
//! major minor│ │  year  month day
//!           zone build
//! ```
//!
//! Decoding is infallible: every byte pattern maps to *some* version,
//! with unrecognized codes preserved as-is. Whether a payload exists at
//! all is the concern of [`crate::romdir::scan_version`].

use std::fmt;

/// Length of the `ROMVER` payload in bytes.
pub const ROMVER_LEN: usize = 14;

/// Console region encoded in the zone byte of a `ROMVER` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// `'T'`: DTL-T10000 development tool.
    T10k,
    /// `'X'`: test units.
    Test,
    /// `'J'`: Japan.
    Japan,
    /// `'A'`: North America.
    Usa,
    /// `'E'`: Europe and PAL territories.
    Europe,
    /// `'H'`: Hong Kong and Asia.
    HongKong,
    /// `'P'`: region-free.
    Free,
    /// `'C'`: China.
    China,
    /// Any unrecognized code byte, kept verbatim.
    Other(u8),
}

impl Zone {
    /// Map a zone code byte to its region.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            b'T' => Self::T10k,
            b'X' => Self::Test,
            b'J' => Self::Japan,
            b'A' => Self::Usa,
            b'E' => Self::Europe,
            b'H' => Self::HongKong,
            b'P' => Self::Free,
            b'C' => Self::China,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T10k => f.pad("T10K"),
            Self::Test => f.pad("Test"),
            Self::Japan => f.pad("Japan"),
            Self::Usa => f.pad("USA"),
            Self::Europe => f.pad("Europe"),
            Self::HongKong => f.pad("HK"),
            Self::Free => f.pad("Free"),
            Self::China => f.pad("China"),
            Self::Other(code) => {
                let mut buf = [0u8; 4];
                f.pad(char::from(*code).encode_utf8(&mut buf))
            }
        }
    }
}

/// Firmware build kind encoded in the flag byte of a `ROMVER` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    /// `'C'`: retail console firmware.
    Console,
    /// `'D'`: development build.
    Devel,
    /// Anything else; rendered as an empty string.
    Unknown,
}

impl BuildKind {
    /// Map a build flag byte to its kind.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            b'C' => Self::Console,
            b'D' => Self::Devel,
            _ => Self::Unknown,
        }
    }

    /// Label shown in the BIOS description.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Console => "Console",
            Self::Devel => "Devel",
            Self::Unknown => "",
        }
    }
}

/// Decoded `ROMVER` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomVersion {
    /// Major version number (payload bytes 0-1).
    pub major: u8,
    /// Minor version number (payload bytes 2-3).
    pub minor: u8,
    /// Console region (payload byte 4).
    pub zone: Zone,
    /// Build kind (payload byte 5).
    pub build: BuildKind,
    /// Release date digits, `yyyymmdd`, as stored (payload bytes 6-13).
    date: [u8; 8],
}

impl RomVersion {
    /// Decode a raw 14-byte payload.
    ///
    /// Never fails: unknown zone and build codes are preserved via
    /// [`Zone::Other`] and [`BuildKind::Unknown`], and non-numeric
    /// version digits decode as zero.
    #[must_use]
    pub fn parse(payload: &[u8; ROMVER_LEN]) -> Self {
        let mut date = [0u8; 8];
        date.copy_from_slice(&payload[6..14]);

        Self {
            major: digit_pair(payload[0], payload[1]),
            minor: digit_pair(payload[2], payload[3]),
            zone: Zone::from_code(payload[4]),
            build: BuildKind::from_code(payload[5]),
            date,
        }
    }

    /// Version packed as `(major << 8) | minor`.
    #[must_use]
    pub const fn packed(&self) -> u32 {
        ((self.major as u32) << 8) | self.minor as u32
    }

    /// Release year digits as stored.
    #[must_use]
    pub fn year(&self) -> String {
        ascii(&self.date[0..4])
    }

    /// Release month digits as stored.
    #[must_use]
    pub fn month(&self) -> String {
        ascii(&self.date[4..6])
    }

    /// Release day digits as stored.
    #[must_use]
    pub fn day(&self) -> String {
        ascii(&self.date[6..8])
    }
}

impl fmt::Display for RomVersion {
    /// Classic BIOS-picker line, e.g. `"USA     v2.00(14/06/2004)  Console"`.
    ///
    /// The zone is padded to 7 columns and the date reads day/month/year.
    /// The two spaces before the build label are kept even when the label
    /// is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<7} v{}.{:02}({}/{}/{})  {}",
            self.zone,
            self.major,
            self.minor,
            self.day(),
            self.month(),
            self.year(),
            self.build.label()
        )
    }
}

/// Decode a two-digit ASCII field, treating non-digits as zero.
fn digit_pair(hi: u8, lo: u8) -> u8 {
    let digit = |b: u8| char::from(b).to_digit(10).unwrap_or(0) as u8;
    digit(hi) * 10 + digit(lo)
}

fn ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
