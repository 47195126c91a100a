use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::GameBoyBus;
use crate::machine::InterruptFlags;

/// Fixed seed for the power-on RAM pattern.
const RAM_SEED: u64 = 0xC0DE_1234;

impl GameBoyBus {
    /// Put the bus into the state the DMG boot ROM leaves behind at 0x0100.
    ///
    /// Timer, PPU, APU and serial start in their own post-boot state; what
    /// remains here is IF and the internal RAM.
    pub(super) fn apply_dmg_initial_state(&mut self, randomize_ram: bool) {
        // IF reads 0xE1: the boot ROM exits with VBlank requested.
        self.iflags = InterruptFlags::VBLANK;
        self.ie = 0x00;

        if randomize_ram {
            self.randomize_internal_ram();
        }
    }

    /// Fill WRAM and HRAM with pseudo-random bytes.
    ///
    /// Real hardware powers up with garbage there. A fixed seed keeps runs
    /// reproducible while software still cannot rely on zeros.
    fn randomize_internal_ram(&mut self) {
        let mut rng = StdRng::seed_from_u64(RAM_SEED);
        rng.fill(&mut self.wram[..]);
        rng.fill(&mut self.hram[..]);
    }
}
