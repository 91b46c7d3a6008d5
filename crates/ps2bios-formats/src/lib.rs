//! Binary format parsers for PlayStation 2 BIOS images
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred
#![allow(clippy::doc_markdown)] // ROMDIR/ROMVER terms don't need backticks
//! This crate parses the structures every PS2 BIOS image carries: the
//! ROMDIR component directory, the ROMVER version payload, and the XOR
//! word checksum used to fingerprint dumps.
//!
//! # Supported Formats
//!
//! - **ROMDIR**: packed component directory anchored by the `RESET` record
//! - **ROMVER**: 14-byte version payload (version, region, build kind, date)
//! - **Checksum**: XOR fold of an image's 32-bit words
//!
//! Everything here operates on in-memory bytes or a `Read + Seek` view;
//! nothing touches the filesystem. Loading images into emulated ROM
//! regions lives in `ps2bios-storage`.

#![warn(missing_docs)]

/// XOR word checksum over ROM regions
pub mod checksum;
/// ROMDIR component directory parsing
///
/// The directory is a run of packed 16-byte records located by searching
/// the image for the `RESET` boot record. See the [`romdir`] module for
/// the layout and the offset accumulation rules.
pub mod romdir;
/// ROMVER version payload decoding
pub mod romver;
