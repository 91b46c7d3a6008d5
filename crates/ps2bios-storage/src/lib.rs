//! BIOS image loading and ROM memory management for PlayStation 2 emulation.
//!
//! This crate owns the boot ROM side of machine bring-up: it allocates the
//! four ROM regions the console maps, loads a configured BIOS image into
//! them, and identifies the image via its embedded ROMDIR directory:
//!
//! - **ROM** (4 MiB): the boot ROM proper, holding the kernel and ROMVER
//! - **ROM1** (256 KiB): DVD player extensions, loaded from a sidecar file
//! - **ROM2** (512 KiB): Chinese-region extensions, loaded from a sidecar
//! - **EROM** (1.75 MiB): encrypted DVD player data, loaded from a sidecar
//!
//! Sidecar files are optional; a missing one leaves its region zeroed.
//!
//! # Example
//!
//! ```rust,ignore
//! use ps2bios_storage::{BiosConfig, BiosMemory, load_bios};
//!
//! let config = BiosConfig::new("/path/to/scph39001.bin");
//! let mut memory = BiosMemory::new();
//!
//! let info = load_bios(&config, &mut memory.regions())?;
//! println!("{} (checksum {:08x})", info.description, info.checksum);
//! # Ok::<(), ps2bios_storage::BiosError>(())
//! ```

#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]

use thiserror::Error;

// Configuration
pub mod config;

// ROM region allocation
pub mod memory;

// Image and sidecar loading
pub mod loader;

pub use config::BiosConfig;
pub use loader::{BiosInfo, is_bios, load_bios};
pub use memory::{BiosMemory, RomRegions};

/// Result type for BIOS loading operations.
pub type Result<T> = std::result::Result<T, BiosError>;

/// Errors that can occur while locating and loading a BIOS image.
#[derive(Debug, Error)]
pub enum BiosError {
    /// The configured path is missing, empty, or not a regular file.
    #[error("BIOS file not found: {0}")]
    FileNotFound(String),

    /// The file exists but does not carry a valid BIOS image.
    #[error("BIOS load failed: {0}")]
    LoadFailed(#[from] ps2bios_formats::romdir::RomdirError),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BiosError {
    /// Stable, user-facing explanation suitable for a configuration dialog.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::FileNotFound(_) => {
                "The configured BIOS file does not exist. Please re-configure."
            }
            Self::LoadFailed(_) => {
                "The selected BIOS file is not a valid PS2 BIOS. Please re-configure."
            }
            Self::Io(_) => "The configured BIOS file could not be read. Please re-configure.",
        }
    }
}

/// Version information for the loader.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
