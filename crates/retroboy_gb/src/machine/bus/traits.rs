use crate::cpu::Bus;
use crate::machine::InterruptFlags;

use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        let value = self.cpu_read(addr);
        self.tick_mcycle();
        value
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.cpu_write(addr, value);
        self.tick_mcycle();
    }

    fn idle_mcycle(&mut self) {
        self.tick_mcycle();
    }

    fn pending_interrupts(&self) -> u8 {
        self.ie & self.iflags.bits() & 0x1F
    }

    fn acknowledge_interrupt(&mut self, index: u8) {
        self.iflags
            .remove(InterruptFlags::from_bits_truncate(1 << index));
    }

    fn begin_instruction(&mut self) {
        // Button changes from other threads become visible here.
        self.joypad.latch_input(&mut self.iflags);
    }
}
