use super::{Cpu, Flag};

impl Cpu {
    /// Overwrite all four flags at once.
    #[inline]
    pub(super) fn set_flags(&mut self, z: bool, n: bool, h: bool, c: bool) {
        self.regs.f = (u8::from(z) << Flag::Z as u8)
            | (u8::from(n) << Flag::N as u8)
            | (u8::from(h) << Flag::H as u8)
            | (u8::from(c) << Flag::C as u8);
    }

    /// 8-bit ADD (`with_carry == false`) or ADC on A.
    pub(super) fn alu_add(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let carry = u8::from(with_carry && self.get_flag(Flag::C));

        let sum = u16::from(a) + u16::from(value) + u16::from(carry);
        let half = (a & 0x0F) + (value & 0x0F) + carry > 0x0F;
        let result = sum as u8;

        self.regs.a = result;
        self.set_flags(result == 0, false, half, sum > 0xFF);
    }

    /// 8-bit SUB (`with_carry == false`) or SBC on A.
    pub(super) fn alu_sub(&mut self, value: u8, with_carry: bool) {
        let result = self.sub_flags(value, with_carry);
        self.regs.a = result;
    }

    /// CP: flags of `A - value`, A is left untouched.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(value, false);
    }

    fn sub_flags(&mut self, value: u8, with_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry = i16::from(with_carry && self.get_flag(Flag::C));

        let diff = i16::from(a) - i16::from(value) - carry;
        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry < 0;
        let result = diff as u8;

        self.set_flags(result == 0, true, half, diff < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.set_flags(self.regs.a == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.set_flags(self.regs.a == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.set_flags(self.regs.a == 0, false, false, false);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// The correction is derived from C, H and N. N is preserved, H is
    /// cleared, C is set whenever the high digit needed adjusting.
    pub(super) fn alu_daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) || (!subtract && (self.regs.a & 0x0F) > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtract && self.regs.a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        self.regs.a = if subtract {
            self.regs.a.wrapping_sub(correction)
        } else {
            self.regs.a.wrapping_add(correction)
        };

        self.set_flags(self.regs.a == 0, subtract, false, carry);
    }

    /// INC r / INC (HL): updates Z N H, C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, false, value & 0x0F == 0x0F, carry);
        result
    }

    /// DEC r / DEC (HL): updates Z N H, C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let carry = self.get_flag(Flag::C);
        self.set_flags(result == 0, true, value & 0x0F == 0, carry);
        result
    }

    /// ADD HL,rr. Z is preserved; H and C come from bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let zero = self.get_flag(Flag::Z);
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let (result, carry) = hl.overflowing_add(value);

        self.set_flags(zero, false, half, carry);
        self.regs.set_hl(result);
    }

    /// `base + (imm8 as i8)` for ADD SP,e8 and LD HL,SP+e8.
    ///
    /// Z and N are cleared; H and C are computed on the low byte as an
    /// unsigned addition.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as u16;
        let half = (base & 0x000F) + (offset & 0x000F) > 0x000F;
        let carry = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset)
    }
}
