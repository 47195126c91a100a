use super::{Bus, Cpu};

impl Cpu {
    /// Execute one step and return the T-cycles it took.
    ///
    /// A step is either an interrupt dispatch, one instruction, or a single
    /// idle M-cycle while the CPU is halted, stopped or locked. The bus is
    /// always advanced by exactly the returned number of cycles.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.mcycles = 0;
        bus.begin_instruction();

        if self.locked {
            self.idle_cycle(bus);
            return 4;
        }

        if self.stopped {
            // Leave STOP once any selected P10-P13 line reads low.
            let p1 = self.read_cycle(bus, 0xFF00);
            if p1 & 0x0F != 0x0F {
                self.stopped = false;
            }
            return 4;
        }

        if self.halted {
            if bus.pending_interrupts() == 0 {
                self.idle_cycle(bus);
                return 4;
            }
            // With IME clear the CPU wakes up and simply carries on with the
            // next instruction.
            self.halted = false;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return self.settle(bus, cycles);
        }

        let opcode = self.fetch8(bus);
        let cycles = self.exec_opcode(bus, opcode);
        let cycles = self.settle(bus, cycles);
        self.apply_ime_delay();
        cycles
    }

    /// Pad the step with internal cycles up to its documented cost.
    fn settle<B: Bus>(&mut self, bus: &mut B, cycles: u32) -> u32 {
        let expected = cycles / 4;
        debug_assert!(
            self.mcycles <= expected,
            "GB CPU: step used {} M-cycles but costs {}",
            self.mcycles,
            expected
        );
        while self.mcycles < expected {
            self.idle_cycle(bus);
        }
        cycles
    }
}
