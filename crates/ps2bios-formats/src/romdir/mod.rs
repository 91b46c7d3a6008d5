//! ROMDIR component directory parsing.
//!
//! Every PS2 BIOS image embeds a flat directory called ROMDIR: a run of
//! packed 16-byte records, one per component baked into the ROM. The
//! table has no header and no magic of its own; it is located by
//! searching the image for the record naming the boot code, `RESET`.
//! A record with an empty name terminates the table.
//!
//! Records carry sizes but no offsets. Component data is laid out in
//! table order starting at offset 0, each payload padded to a 16-byte
//! grid, so a component's data offset is the running sum of the padded
//! sizes of every record before it:
//!
//! ```text
//! offset 0 ──► RESET payload (boot code)
//!              ...component data, 16-byte aligned...
//! aligned  ──► RESET │ ROMDIR │ EXTINFO │ ROMVER │ ... │ (empty name)
//!              └ 16-byte records: name[10] extinfo_size:u16 file_size:u32 ┘
//! ```
//!
//! Two consumers are provided: [`scan_version`] answers "which BIOS is
//! this" by decoding the `ROMVER` payload, and [`RomDir`] materializes
//! the whole table for name lookups and payload extraction.

mod directory;
mod entry;
mod error;
mod scan;

pub use directory::{RomDir, RomFile};
pub use entry::RomdirEntry;
pub use error::{Result, RomdirError};
pub use scan::{VersionScan, scan_version};

/// ROMDIR format constants
pub mod constants {
    /// Size of one directory record in bytes.
    pub const ENTRY_SIZE: usize = 16;

    /// Width of the record name field in bytes.
    pub const NAME_LEN: usize = 10;

    /// Alignment grid for component data in the image.
    pub const DATA_ALIGN: u64 = 16;

    /// Name prefix of the boot record that anchors the table.
    pub const RESET_SENTINEL: &[u8; 5] = b"RESET";

    /// Name of the record whose payload is the version string.
    pub const ROMVER_NAME: &str = "ROMVER";

    /// Ceiling on records examined while searching for the sentinel.
    ///
    /// 512 Ki records of 16 bytes spans 8 MiB, past the 4 MiB boot ROM
    /// capacity of any shipped console.
    pub const MAX_SENTINEL_SCAN: u64 = 512 * 1024;
}
