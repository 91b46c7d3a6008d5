//! Loading of the primary BIOS image and its optional sidecar ROMs.
//!
//! The primary image is read into the boot ROM region and identified via
//! its ROMDIR directory; that identification alone decides success.
//! Sidecar images (`rom1`, `rom2`, `erom`) are discovered next to the
//! primary file and loaded on a best-effort basis.

use std::ffi::OsString;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use ps2bios_formats::checksum;
use ps2bios_formats::romdir::scan_version;
use tracing::{debug, info, warn};

use crate::config::BiosConfig;
use crate::memory::{ROM_SIZE, RomRegions};
use crate::{BiosError, Result};

/// Smallest file the probe will consider (512 KiB).
///
/// Every shipped boot ROM is at least this large; anything smaller is
/// rejected before the directory is even parsed.
pub const MIN_BIOS_SIZE: u64 = 512 * 1024;

/// Identity of a successfully loaded BIOS image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiosInfo {
    /// Version packed as `(major << 8) | minor`.
    pub version: u32,
    /// XOR checksum over the full boot ROM capacity.
    pub checksum: u32,
    /// Identity line, e.g. `"USA     v2.00(14/06/2004)  Console"`.
    pub description: String,
    /// Decoded region name.
    pub zone: String,
}

/// Load the configured BIOS image and its sidecars into the ROM regions.
///
/// The primary image must exist and parse as a valid BIOS. Sidecars are
/// optional: a missing one leaves its region zeroed, and a failing read
/// is logged and skipped.
///
/// # Errors
///
/// - [`BiosError::FileNotFound`] if no path is configured or the path is
///   not an existing, non-empty regular file
/// - [`BiosError::LoadFailed`] if the image fails directory parsing
/// - [`BiosError::Io`] if reading the primary image fails
pub fn load_bios(config: &BiosConfig, regions: &mut RomRegions<'_>) -> Result<BiosInfo> {
    let Some(path) = config.path() else {
        return Err(BiosError::FileNotFound("no BIOS path configured".into()));
    };

    let loaded = load_rom_file(path, regions.rom)?;

    // The region past the file stays zero-filled, so summing the whole
    // capacity gives the same checksum for padded and unpadded dumps.
    let sum = checksum::checksum(regions.rom);

    let scan = scan_version(&mut Cursor::new(&regions.rom[..loaded]))?;

    let info = BiosInfo {
        version: scan.version.packed(),
        checksum: sum,
        description: scan.description,
        zone: scan.version.zone.to_string(),
    };
    info!("Bios Found: {}", info.description);

    load_extra_rom(path, "rom1", regions.rom1);
    load_extra_rom(path, "rom2", regions.rom2);
    load_extra_rom(path, "erom", regions.erom);

    Ok(info)
}

/// Probe whether `path` holds a valid BIOS image.
///
/// Runs the same load-and-scan as [`load_bios`] against a private scratch
/// buffer, so no caller state is touched. Files shorter than
/// [`MIN_BIOS_SIZE`] are rejected outright. Returns the decoded
/// description on success, `None` on any failure.
pub fn is_bios<P: AsRef<Path>>(path: P) -> Option<String> {
    let path = path.as_ref();

    let size = rom_file_size(path)?;
    if size < MIN_BIOS_SIZE {
        debug!(
            "{} is too small for a BIOS image ({} bytes)",
            path.display(),
            size
        );
        return None;
    }

    let mut scratch = vec![0u8; ROM_SIZE];
    match probe(path, &mut scratch) {
        Ok(description) => Some(description),
        Err(e) => {
            debug!("{} is not a BIOS image: {e}", path.display());
            None
        }
    }
}

fn probe(path: &Path, scratch: &mut [u8]) -> Result<String> {
    let loaded = load_rom_file(path, scratch)?;
    let scan = scan_version(&mut Cursor::new(&scratch[..loaded]))?;
    Ok(scan.description)
}

/// Read `min(capacity, file size)` bytes of `path` into `dest`.
///
/// Returns the number of bytes read. A path that is missing, a
/// directory, or zero-length reports [`BiosError::FileNotFound`].
fn load_rom_file(path: &Path, dest: &mut [u8]) -> Result<usize> {
    let Some(size) = rom_file_size(path) else {
        return Err(BiosError::FileNotFound(path.display().to_string()));
    };

    let len = usize::try_from(size).map_or(dest.len(), |s| s.min(dest.len()));

    let mut file = File::open(path)?;
    file.read_exact(&mut dest[..len])?;
    debug!("Loaded {} bytes from {}", len, path.display());
    Ok(len)
}

/// Size of a usable ROM file: an existing, non-empty regular file.
fn rom_file_size(path: &Path) -> Option<u64> {
    let meta = std::fs::metadata(path).ok()?;
    if !meta.is_file() || meta.len() == 0 {
        return None;
    }
    Some(meta.len())
}

/// Load an optional sidecar ROM discovered next to the primary image.
///
/// Tries `<primary>.<ext>` first, then the primary path with its
/// extension replaced by `ext`. A missing sidecar is normal; a failing
/// read is logged and skipped, and may leave a partial prefix in the
/// region.
fn load_extra_rom(primary: &Path, ext: &str, dest: &mut [u8]) {
    let Some((candidate, size)) = find_sidecar(primary, ext) else {
        debug!("no {} image found next to {}", ext, primary.display());
        return;
    };

    match load_rom_file(&candidate, dest) {
        Ok(len) => info!("Loaded {} ({} bytes) from {}", ext, len, candidate.display()),
        Err(e) => warn!(
            "failed to load {} from {} ({} bytes): {e}",
            ext,
            candidate.display(),
            size
        ),
    }
}

fn find_sidecar(primary: &Path, ext: &str) -> Option<(PathBuf, u64)> {
    let appended = append_extension(primary, ext);
    if let Some(size) = rom_file_size(&appended) {
        return Some((appended, size));
    }

    let replaced = primary.with_extension(ext);
    rom_file_size(&replaced).map(|size| (replaced, size))
}

/// `<path>.<ext>`, keeping any existing extension in place.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
