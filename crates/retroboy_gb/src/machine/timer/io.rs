use super::Timer;

impl Timer {
    /// Read DIV/TIMA/TMA/TAC (0xFF04-0xFF07).
    pub(in super::super) fn read(&self, addr: u16) -> u8 {
        match addr {
            0xFF04 => (self.counter >> 8) as u8,
            0xFF05 => self.tima,
            0xFF06 => self.tma,
            0xFF07 => self.tac | 0b1111_1000,
            _ => 0xFF,
        }
    }

    pub(in super::super) fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0xFF04 => self.write_div(),
            0xFF05 => self.write_tima(value),
            0xFF06 => self.tma = value,
            0xFF07 => self.write_tac(value),
            _ => {}
        }
    }

    /// Any write clears the whole system counter. If the selected input bit
    /// was high this is a falling edge and TIMA increments.
    fn write_div(&mut self) {
        if self.input() {
            self.increment_tima();
        }
        self.counter = 0;
    }

    /// A TIMA write while a reload is pending cancels the reload and the
    /// interrupt.
    fn write_tima(&mut self, value: u8) {
        self.reload_delay = 0;
        self.tima = value;
    }

    /// Disabling the timer or switching to a clock bit that is low while the
    /// old one was high counts as a falling edge.
    fn write_tac(&mut self, value: u8) {
        let before = self.input();
        self.tac = value & 0x07;
        if before && !self.input() {
            self.increment_tima();
        }
    }
}
