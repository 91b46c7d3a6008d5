//! Backing storage for the console's ROM address ranges.
//!
//! The machine maps four read-only regions; each is allocated at its full
//! hardware capacity and zero-filled, so a region without a loaded image
//! reads as zeros rather than garbage.

/// Capacity of the boot ROM region (4 MiB).
pub const ROM_SIZE: usize = 0x40_0000;

/// Capacity of the ROM1 region holding DVD player extensions (256 KiB).
pub const ROM1_SIZE: usize = 0x4_0000;

/// Capacity of the ROM2 region holding Chinese-region extensions (512 KiB).
pub const ROM2_SIZE: usize = 0x8_0000;

/// Capacity of the EROM region holding encrypted DVD player data (1.75 MiB).
pub const EROM_SIZE: usize = 0x1C_0000;

/// Mutable views over all four ROM regions, handed to the loader.
///
/// Borrowing the regions together keeps the loader free of any knowledge
/// of how the backing memory is allocated.
#[derive(Debug)]
pub struct RomRegions<'a> {
    /// Boot ROM region.
    pub rom: &'a mut [u8],
    /// ROM1 region.
    pub rom1: &'a mut [u8],
    /// ROM2 region.
    pub rom2: &'a mut [u8],
    /// EROM region.
    pub erom: &'a mut [u8],
}

/// Owned, heap-allocated backing memory for the four ROM regions.
#[derive(Debug, Clone)]
pub struct BiosMemory {
    rom: Vec<u8>,
    rom1: Vec<u8>,
    rom2: Vec<u8>,
    erom: Vec<u8>,
}

impl BiosMemory {
    /// Allocate all regions at hardware capacity, zero-filled.
    pub fn new() -> Self {
        Self {
            rom: vec![0; ROM_SIZE],
            rom1: vec![0; ROM1_SIZE],
            rom2: vec![0; ROM2_SIZE],
            erom: vec![0; EROM_SIZE],
        }
    }

    /// Borrow all four regions mutably for loading.
    pub fn regions(&mut self) -> RomRegions<'_> {
        RomRegions {
            rom: &mut self.rom,
            rom1: &mut self.rom1,
            rom2: &mut self.rom2,
            erom: &mut self.erom,
        }
    }

    /// The boot ROM region.
    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    /// The ROM1 region.
    pub fn rom1(&self) -> &[u8] {
        &self.rom1
    }

    /// The ROM2 region.
    pub fn rom2(&self) -> &[u8] {
        &self.rom2
    }

    /// The EROM region.
    pub fn erom(&self) -> &[u8] {
        &self.erom
    }

    /// Zero every region, as on console reset.
    pub fn reset(&mut self) {
        self.rom.fill(0);
        self.rom1.fill(0);
        self.rom2.fill(0);
        self.erom.fill(0);
    }
}

impl Default for BiosMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn regions_have_hardware_capacities() {
        let mut memory = BiosMemory::new();
        let regions = memory.regions();

        assert_eq!(regions.rom.len(), ROM_SIZE);
        assert_eq!(regions.rom1.len(), ROM1_SIZE);
        assert_eq!(regions.rom2.len(), ROM2_SIZE);
        assert_eq!(regions.erom.len(), EROM_SIZE);
    }

    #[test]
    fn fresh_memory_reads_as_zeros() {
        let memory = BiosMemory::new();

        assert!(memory.rom().iter().all(|&b| b == 0));
        assert!(memory.rom1().iter().all(|&b| b == 0));
    }

    #[test]
    fn reset_clears_written_regions() {
        let mut memory = BiosMemory::new();
        memory.regions().rom[0x100] = 0xAB;
        memory.regions().erom[0] = 0xCD;

        memory.reset();

        assert!(memory.rom().iter().all(|&b| b == 0));
        assert!(memory.erom().iter().all(|&b| b == 0));
    }

    #[test]
    fn writes_through_regions_are_visible_in_accessors() {
        let mut memory = BiosMemory::new();
        let regions = memory.regions();
        regions.rom[0] = 0x01;
        regions.rom2[1] = 0x02;

        assert_eq!(memory.rom()[0], 0x01);
        assert_eq!(memory.rom2()[1], 0x02);
    }
}
