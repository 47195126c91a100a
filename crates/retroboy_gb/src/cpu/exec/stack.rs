use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// PUSH/POP use the `rp2` table, where index 3 is AF instead of SP.
    pub(super) fn exec_push_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let rp2 = (opcode >> 4) & 0x03;
        let value = if rp2 == 3 {
            self.regs.af()
        } else {
            self.regs.rp(rp2)
        };
        self.push_u16(bus, value);
        16
    }

    pub(super) fn exec_pop_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        let rp2 = (opcode >> 4) & 0x03;
        if rp2 == 3 {
            self.regs.set_af(value);
        } else {
            self.regs.set_rp(rp2, value);
        }
        12
    }
}
