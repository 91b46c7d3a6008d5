//! Materialized view of a ROMDIR table.

use std::io::{Cursor, Read, Seek, SeekFrom};

use crate::romdir::constants::MAX_SENTINEL_SCAN;
use crate::romdir::entry::RomdirEntry;
use crate::romdir::error::{Result, RomdirError};

/// One named component of a BIOS image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomFile {
    /// Component name as stored in the table.
    pub name: String,
    /// Absolute offset of the component's data in the image.
    pub offset: u64,
    /// Declared data size in bytes.
    pub size: u32,
    /// Size of the component's EXTINFO record in bytes.
    pub extinfo_size: u16,
}

/// Parsed ROMDIR table with resolved data offsets.
///
/// The table is walked once up front; lookups afterwards never touch the
/// image. Offsets accumulate from 0 in table order, each component
/// padded to the 16-byte grid.
#[derive(Debug, Clone)]
pub struct RomDir {
    files: Vec<RomFile>,
    data_end: u64,
}

impl RomDir {
    /// Parse the directory table of an in-memory image.
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::read_from(&mut Cursor::new(data))
    }

    /// Parse the directory table from any seekable view of an image.
    ///
    /// Always starts from the beginning of the view. The table may end
    /// either with an empty-name record or with the data itself; both
    /// terminate the walk cleanly.
    pub fn read_from<R: Read + Seek>(reader: &mut R) -> Result<Self> {
        reader.seek(SeekFrom::Start(0))?;

        let mut entry = find_reset(reader)?;
        let mut files = Vec::new();
        let mut offset: u64 = 0;
        let mut tail_padding: u64 = 0;

        while !entry.is_terminator() {
            files.push(RomFile {
                name: entry.name(),
                offset,
                size: entry.file_size,
                extinfo_size: entry.extinfo_size,
            });

            let padded = entry.padded_size();
            tail_padding = padded - u64::from(entry.file_size);
            offset += padded;

            match RomdirEntry::read_from(reader)? {
                Some(next) => entry = next,
                None => break,
            }
        }

        // The walk pads every component it passes, including the last
        // one; take that final padding back so data_end points one past
        // the last data byte.
        Ok(Self {
            files,
            data_end: offset.saturating_sub(tail_padding),
        })
    }

    /// Look up a component by exact name. First match wins.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RomFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// All components in table order.
    #[must_use]
    pub fn files(&self) -> &[RomFile] {
        &self.files
    }

    /// End of the data region covered by the table.
    #[must_use]
    pub const fn data_end(&self) -> u64 {
        self.data_end
    }

    /// Borrow the data bytes of a named component out of `data`.
    ///
    /// Returns `None` when the component is absent or its declared range
    /// does not fit inside `data`.
    #[must_use]
    pub fn extract<'a>(&self, data: &'a [u8], name: &str) -> Option<&'a [u8]> {
        let file = self.find(name)?;
        let start = usize::try_from(file.offset).ok()?;
        let end = start.checked_add(file.size as usize)?;
        data.get(start..end)
    }
}

/// Search the start of the view for the boot sentinel record.
///
/// Records are read back to back from offset 0, so the table is found
/// wherever the boot code embeds it, as long as it sits on the 16-byte
/// grid. Both running out of data and exhausting the iteration ceiling
/// mean the image is not a BIOS.
fn find_reset<R: Read>(reader: &mut R) -> Result<RomdirEntry> {
    for _ in 0..MAX_SENTINEL_SCAN {
        match RomdirEntry::read_from(reader)? {
            Some(entry) if entry.is_reset() => return Ok(entry),
            Some(_) => {}
            None => break,
        }
    }

    Err(RomdirError::InvalidBiosFormat("RESET tag not found"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use binrw::BinWrite;

    fn raw_table(entries: &[RomdirEntry]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        for entry in entries {
            entry.write(&mut cursor).expect("record should serialize");
        }
        cursor.into_inner()
    }

    #[test]
    fn resolves_offsets_in_table_order() {
        let table = raw_table(&[
            RomdirEntry::new("RESET", 0, 16),
            RomdirEntry::new("EELOAD", 0, 17),
            RomdirEntry::new("IOPBOOT", 0, 32),
            RomdirEntry::new("EXTINFO", 0, 5),
            RomdirEntry::new("", 0, 0),
        ]);

        let dir = RomDir::parse(&table).expect("table should parse");
        let offsets: Vec<u64> = dir.files().iter().map(|f| f.offset).collect();

        assert_eq!(offsets, [0, 16, 48, 80]);
        assert_eq!(dir.data_end(), 85);
    }

    #[test]
    fn zero_size_components_do_not_advance() {
        let table = raw_table(&[
            RomdirEntry::new("RESET", 0, 16),
            RomdirEntry::new("SIO2MAN", 0, 0),
            RomdirEntry::new("EELOAD", 0, 32),
            RomdirEntry::new("", 0, 0),
        ]);

        let dir = RomDir::parse(&table).expect("table should parse");
        let offsets: Vec<u64> = dir.files().iter().map(|f| f.offset).collect();

        assert_eq!(offsets, [0, 16, 16]);
        assert_eq!(dir.data_end(), 48);
    }

    #[test]
    fn table_may_end_without_terminator() {
        let table = raw_table(&[
            RomdirEntry::new("RESET", 0, 16),
            RomdirEntry::new("EELOAD", 0, 16),
        ]);

        let dir = RomDir::parse(&table).expect("table should parse");

        assert_eq!(dir.files().len(), 2);
        assert_eq!(dir.data_end(), 32);
    }

    #[test]
    fn missing_sentinel_is_rejected() {
        let err = RomDir::parse(&[0u8; 256]).expect_err("parse should fail");
        assert!(matches!(err, RomdirError::InvalidBiosFormat(_)));
        assert!(err.to_string().contains("RESET"));
    }

    #[test]
    fn empty_image_is_rejected() {
        let err = RomDir::parse(&[]).expect_err("parse should fail");
        assert!(matches!(err, RomdirError::InvalidBiosFormat(_)));
    }

    #[test]
    fn duplicate_names_resolve_to_first_match() {
        let table = raw_table(&[
            RomdirEntry::new("RESET", 0, 16),
            RomdirEntry::new("EXTINFO", 0, 16),
            RomdirEntry::new("EXTINFO", 0, 16),
            RomdirEntry::new("", 0, 0),
        ]);

        let dir = RomDir::parse(&table).expect("table should parse");

        assert_eq!(dir.find("EXTINFO").expect("entry should exist").offset, 16);
    }
}
