use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) -> u32 {
        if !self.ime && bus.pending_interrupts() != 0 {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next fetch fails to advance PC.
            self.halt_bug = true;
            return 4;
        }
        self.halted = true;
        4
    }

    /// STOP is two bytes long; the padding byte is fetched and discarded.
    /// The CPU then idles until a joypad line goes low (see `step`).
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let _padding = self.fetch8(bus);
        self.stopped = true;
        self.halted = false;
        8
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // IME is set only after the following instruction completes.
        self.ime_enable_pending = true;
        4
    }

    /// Opcode holes hard-lock the CPU until reset.
    pub(super) fn exec_illegal(&mut self, opcode: u8) -> u32 {
        if !self.locked {
            log::error!(
                "GB CPU locked: invalid opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                pc = self.regs.pc.wrapping_sub(1),
                sp = self.regs.sp,
                af = self.regs.af(),
                bc = self.regs.bc(),
                de = self.regs.de(),
                hl = self.regs.hl(),
            );
        }
        self.locked = true;
        4
    }
}
