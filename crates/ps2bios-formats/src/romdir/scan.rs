//! Version discovery over a BIOS image.

use std::io::{Read, Seek, SeekFrom};

use crate::romdir::constants::ROMVER_NAME;
use crate::romdir::directory::RomDir;
use crate::romdir::error::{Result, RomdirError};
use crate::romver::{ROMVER_LEN, RomVersion};

/// Result of a successful version scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionScan {
    /// Decoded `ROMVER` payload.
    pub version: RomVersion,
    /// Description line; gains a completeness percentage when the view
    /// holds fewer bytes than the directory declares.
    pub description: String,
    /// End of the directory's data region.
    pub data_end: u64,
}

/// Locate the directory table and decode the `ROMVER` payload.
///
/// This is the "which BIOS is this" operation: it walks the table, reads
/// the 14-byte version payload at its accumulated data offset, and
/// renders the description line. When the view is shorter than the data
/// the table declares, the description is suffixed with the rounded
/// percentage actually present, so truncated dumps identify themselves.
///
/// Scanning always starts from the beginning of the view; calling this
/// twice on the same view yields the same result.
///
/// # Errors
///
/// [`RomdirError::InvalidBiosFormat`] when the sentinel or the `ROMVER`
/// entry is missing, [`RomdirError::TruncatedRead`] when the table
/// promises a version payload the view cannot deliver.
pub fn scan_version<R: Read + Seek>(reader: &mut R) -> Result<VersionScan> {
    let dir = RomDir::read_from(reader)?;

    // A table can carry several ROMVER records; the last one wins.
    let romver = dir
        .files()
        .iter()
        .rfind(|f| f.name == ROMVER_NAME)
        .ok_or(RomdirError::InvalidBiosFormat("ROMVER entry not found"))?;

    let payload = read_payload(reader, romver.offset)?;
    let version = RomVersion::parse(&payload);

    let mut description = version.to_string();
    let view_len = reader.seek(SeekFrom::End(0))?;
    if view_len < dir.data_end() {
        let pct = (view_len * 100 + dir.data_end() / 2) / dir.data_end();
        description.push_str(&format!(" {pct}%"));
    }

    Ok(VersionScan {
        version,
        description,
        data_end: dir.data_end(),
    })
}

/// Read the version payload at `offset`. Unlike the table walk, running
/// out of data here is fatal: the table itself promised the payload.
fn read_payload<R: Read + Seek>(reader: &mut R, offset: u64) -> Result<[u8; ROMVER_LEN]> {
    reader.seek(SeekFrom::Start(offset))?;

    let mut payload = [0u8; ROMVER_LEN];
    reader.read_exact(&mut payload).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            RomdirError::TruncatedRead {
                offset,
                expected: ROMVER_LEN,
            }
        } else {
            RomdirError::Io(e)
        }
    })?;

    Ok(payload)
}
