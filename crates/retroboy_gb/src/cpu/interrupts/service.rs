use super::super::{Bus, Cpu};
use crate::machine::Interrupt;

impl Cpu {
    /// Dispatch a maskable interrupt if IME is set and one is pending.
    ///
    /// The sequence takes five M-cycles: two internal cycles, the high byte
    /// push, the low byte push, and one more internal cycle while PC is
    /// loaded with the vector. Returns `Some(20)` when an interrupt was
    /// taken.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        if !self.interrupt_ready(bus) {
            return None;
        }

        self.ime = false;
        self.halted = false;
        self.idle_cycle(bus);
        self.idle_cycle(bus);

        // EI; HALT with a request already pending: the HALT bug left PC one
        // past the HALT, and the handler returns to the HALT itself.
        let pc = if self.halt_bug {
            self.halt_bug = false;
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        let [hi, lo] = pc.to_be_bytes();

        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, hi);

        let selection = self.select_interrupt_after_high_push(bus);

        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write_cycle(bus, self.regs.sp, lo);

        match selection.and_then(Interrupt::from_index) {
            Some(interrupt) => {
                let vector = interrupt.vector();
                bus.acknowledge_interrupt(interrupt as u8);
                log::debug!(
                    "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
                    interrupt,
                    vector,
                    pc,
                    self.regs.sp,
                );
                self.regs.pc = vector;
            }
            None => {
                // Every pending line was masked by the high-byte push: the
                // dispatch is cancelled and execution continues at 0x0000.
                self.regs.pc = 0x0000;
            }
        }

        Some(20)
    }
}
