#![allow(clippy::expect_used, clippy::panic)]

//! Identify a BIOS image and list its ROMDIR components.
//!
//! Usage:
//!   cargo run --example bios_info -p ps2bios-storage -- /path/to/bios.bin

use ps2bios_formats::romdir::RomDir;
use ps2bios_storage::{BiosConfig, BiosMemory, load_bios};

fn main() {
    tracing_subscriber::fmt::init();

    let path = std::env::args_os()
        .nth(1)
        .expect("usage: bios_info <path-to-bios>");

    let config = BiosConfig::new(&path);
    let mut memory = BiosMemory::new();

    let info = load_bios(&config, &mut memory.regions()).expect("failed to load BIOS");

    println!("Description: {}", info.description);
    println!("Zone:        {}", info.zone);
    println!("Version:     {:#06x}", info.version);
    println!("Checksum:    {:08x}", info.checksum);
    println!();

    let dir = RomDir::parse(memory.rom()).expect("failed to parse ROMDIR");
    println!("Components ({}):", dir.files().len());
    for file in dir.files() {
        println!(
            "  {:<10} {:>8} bytes @ {:#010x}",
            file.name, file.size, file.offset
        );
    }
}
