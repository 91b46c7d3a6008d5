//! Configuration for the BIOS loader

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the BIOS loader
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BiosConfig {
    /// Path to the primary BIOS image, if one has been configured
    pub bios_path: Option<PathBuf>,
}

impl BiosConfig {
    /// Create a configuration pointing at the given BIOS image
    pub fn new<P: AsRef<Path>>(bios_path: P) -> Self {
        Self {
            bios_path: Some(bios_path.as_ref().to_path_buf()),
        }
    }

    /// Set the primary BIOS image path
    #[must_use]
    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.bios_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// The configured BIOS path, if any
    pub fn path(&self) -> Option<&Path> {
        self.bios_path.as_deref()
    }
}
