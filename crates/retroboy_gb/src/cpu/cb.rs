use super::{Bus, Cpu, Flag};

impl Cpu {
    /// CB-prefixed instructions: rotates, shifts, SWAP, BIT, RES and SET.
    ///
    /// Register forms take 8 cycles. The (HL) forms read and write memory,
    /// so they take 16, except BIT which only reads (12).
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let op = self.fetch8(bus);
        let x = op >> 6;
        let y = (op >> 3) & 0x07;
        let z = op & 0x07;
        let on_hl = z == 6;

        let value = self.read_reg8(bus, z);
        match x {
            0 => {
                let result = self.rotate_shift(y, value);
                self.write_reg8(bus, z, result);
            }
            1 => {
                // BIT b,r: Z from the tested bit, H set, C preserved.
                let carry = self.get_flag(Flag::C);
                self.set_flags(value & (1 << y) == 0, false, true, carry);
                return if on_hl { 12 } else { 8 };
            }
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }

        if on_hl {
            16
        } else {
            8
        }
    }

    /// The eight rotate/shift operations selected by `y`. All of them set
    /// Z from the result and clear N and H.
    fn rotate_shift(&mut self, y: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry_out) = match y {
            // RLC
            0 => (value.rotate_left(1), value & 0x80 != 0),
            // RRC
            1 => (value.rotate_right(1), value & 0x01 != 0),
            // RL
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            // RR
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            // SLA
            4 => (value << 1, value & 0x80 != 0),
            // SRA
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            // SWAP
            6 => (value.rotate_left(4), false),
            // SRL
            _ => (value >> 1, value & 0x01 != 0),
        };
        self.set_flags(result == 0, false, false, carry_out);
        result
    }
}
