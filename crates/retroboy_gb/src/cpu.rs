//! Sharp LR35902 CPU core.
//!
//! The core is tick-driven: every memory transaction goes through [`Bus`]
//! and costs one M-cycle, so peripherals observe reads and writes at the
//! cycle they happen on. Instructions that spend extra internal cycles
//! (16-bit arithmetic, taken branches, ...) idle the bus for the remainder
//! of their documented cost.

mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;
mod step;

pub use bus::Bus;
pub use regs::Registers;

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

/// Game Boy CPU state.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// STOP low-power state. Left when a joypad input line goes low.
    stopped: bool,
    /// Set by HALT with IME clear and an interrupt already pending: the next
    /// opcode fetch does not advance PC.
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// An illegal opcode hard-locks the CPU until reset.
    locked: bool,
    /// M-cycles spent on the bus during the current step.
    mcycles: u32,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & (1 << flag as u8)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let mask = 1 << flag as u8;
        if value {
            self.regs.f |= mask;
        } else {
            self.regs.f &= !mask;
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

#[cfg(test)]
mod tests;
