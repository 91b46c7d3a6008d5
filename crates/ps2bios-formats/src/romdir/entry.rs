//! One packed ROMDIR record.

use binrw::{BinRead, BinWrite};
use std::io::{Cursor, Read};

use crate::romdir::constants::{DATA_ALIGN, ENTRY_SIZE, NAME_LEN, RESET_SENTINEL};
use crate::romdir::error::Result;

/// One 16-byte ROMDIR record.
///
/// Records carry no offsets; a component's position in the image is the
/// running sum of the padded sizes of every record before it.
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[br(little)]
#[bw(little)]
pub struct RomdirEntry {
    /// Component name, NUL-padded; not NUL-terminated at full width.
    pub name: [u8; NAME_LEN],

    /// Size of the component's EXTINFO record in bytes.
    pub extinfo_size: u16,

    /// Size of the component's data in bytes.
    pub file_size: u32,
}

impl RomdirEntry {
    /// Build a record with `name` NUL-padded to field width.
    ///
    /// # Panics
    ///
    /// Panics when `name` exceeds the 10-byte field.
    #[must_use]
    pub fn new(name: &str, extinfo_size: u16, file_size: u32) -> Self {
        assert!(
            name.len() <= NAME_LEN,
            "entry name {name:?} exceeds {NAME_LEN} bytes"
        );

        let mut field = [0u8; NAME_LEN];
        field[..name.len()].copy_from_slice(name.as_bytes());

        Self {
            name: field,
            extinfo_size,
            file_size,
        }
    }

    /// Read one record from `reader`, returning `None` at end of data.
    ///
    /// A partial trailing record also counts as end of data.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Option<Self>> {
        let mut raw = [0u8; ENTRY_SIZE];
        match reader.read_exact(&mut raw) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(e.into()),
        }

        Ok(Some(Self::read(&mut Cursor::new(&raw))?))
    }

    /// Name bytes up to the first NUL.
    #[must_use]
    pub fn name_bytes(&self) -> &[u8] {
        let end = self.name.iter().position(|&b| b == 0).unwrap_or(NAME_LEN);
        &self.name[..end]
    }

    /// Name as text, lossily decoded.
    #[must_use]
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.name_bytes()).into_owned()
    }

    /// Whether this record terminates the table.
    #[must_use]
    pub fn is_terminator(&self) -> bool {
        self.name[0] == 0
    }

    /// Whether this record is the boot sentinel that anchors the table.
    /// Matches on the 5-byte prefix only.
    #[must_use]
    pub fn is_reset(&self) -> bool {
        self.name.starts_with(RESET_SENTINEL)
    }

    /// Exact name match.
    #[must_use]
    pub fn name_is(&self, name: &str) -> bool {
        self.name_bytes() == name.as_bytes()
    }

    /// Image bytes this record's data occupies, padded to the 16-byte
    /// grid. Sizes already on the grid are unchanged.
    #[must_use]
    pub fn padded_size(&self) -> u64 {
        u64::from(self.file_size).next_multiple_of(DATA_ALIGN)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_little_endian_record() {
        let mut data = Vec::new();
        data.extend_from_slice(b"ROMVER\0\0\0\0");
        data.extend_from_slice(&[0x08, 0x00]); // extinfo_size
        data.extend_from_slice(&[0x0E, 0x00, 0x00, 0x00]); // file_size

        let mut cursor = Cursor::new(&data);
        let entry = RomdirEntry::read(&mut cursor).expect("record should parse");

        assert_eq!(entry.name(), "ROMVER");
        assert_eq!(entry.extinfo_size, 8);
        assert_eq!(entry.file_size, 14);
        assert_eq!(cursor.position(), ENTRY_SIZE as u64);
    }

    #[test]
    fn round_trips_through_binrw() {
        let original = RomdirEntry::new("EXTINFO", 0x1234, 0xDEAD);

        let mut buffer = Cursor::new(Vec::new());
        original.write(&mut buffer).expect("record should serialize");
        assert_eq!(buffer.get_ref().len(), ENTRY_SIZE);

        buffer.set_position(0);
        let parsed = RomdirEntry::read(&mut buffer).expect("record should parse");
        assert_eq!(parsed, original);
    }

    #[test]
    fn full_width_name_has_no_terminator() {
        let entry = RomdirEntry::new("IOPBTCONF1", 0, 0);

        assert_eq!(entry.name_bytes().len(), NAME_LEN);
        assert_eq!(entry.name(), "IOPBTCONF1");
        assert!(!entry.is_terminator());
    }

    #[test]
    fn empty_name_terminates_table() {
        assert!(RomdirEntry::new("", 0, 0).is_terminator());
        assert!(!RomdirEntry::new("RESET", 0, 0).is_terminator());
    }

    #[test]
    fn reset_matches_on_prefix() {
        assert!(RomdirEntry::new("RESET", 0, 0).is_reset());
        assert!(RomdirEntry::new("RESETX", 0, 0).is_reset());
        assert!(!RomdirEntry::new("RESE", 0, 0).is_reset());
        assert!(!RomdirEntry::new("ROMVER", 0, 0).is_reset());
    }

    #[test]
    fn name_match_is_exact() {
        let entry = RomdirEntry::new("ROMVER", 0, 14);

        assert!(entry.name_is("ROMVER"));
        assert!(!entry.name_is("ROMVE"));
        assert!(!entry.name_is("ROMVERX"));
    }

    #[test]
    fn padded_size_rounds_to_grid() {
        for (size, padded) in [(0, 0), (5, 16), (16, 16), (17, 32), (32, 32), (33, 48)] {
            assert_eq!(RomdirEntry::new("X", 0, size).padded_size(), padded);
        }
    }

    #[test]
    fn short_data_reads_as_end_of_table() {
        let mut cursor = Cursor::new(&b"RESET\0\0"[..]);

        assert!(
            RomdirEntry::read_from(&mut cursor)
                .expect("short read should not error")
                .is_none()
        );
    }
}
