/// Timer / divider unit.
///
/// A 16-bit system counter advances every T-cycle and DIV exposes its upper
/// byte. TIMA increments on the falling edge of the counter bit selected by
/// TAC, gated by the TAC enable bit. Because the edge detector sees the AND
/// of both, writes to DIV or TAC can produce an extra increment ("Timer
/// obscure behaviour" in Pandocs).
mod io;

use super::InterruptFlags;

/// T-cycles between TIMA overflowing and the TMA reload.
const RELOAD_DELAY: u8 = 4;

pub(super) struct Timer {
    /// Hidden system counter; DIV is bits 15:8.
    counter: u16,
    tima: u8,
    tma: u8,
    /// TAC raw value (lower 3 bits meaningful).
    tac: u8,
    /// T-cycles until TIMA is reloaded from TMA and the interrupt is
    /// requested. Zero when no overflow is pending; TIMA reads 0 meanwhile.
    reload_delay: u8,
}

impl Timer {
    /// Power-on state after the DMG boot ROM: DIV reads 0xAB at 0x0100.
    pub(super) fn new() -> Self {
        Self {
            counter: 0xABCC,
            tima: 0x00,
            tma: 0x00,
            tac: 0x00,
            reload_delay: 0,
        }
    }

    /// Counter bit feeding the TIMA edge detector, by TAC[1:0]:
    /// 00 → bit 9 (4096 Hz), 01 → bit 3 (262144 Hz),
    /// 10 → bit 5 (65536 Hz), 11 → bit 7 (16384 Hz).
    #[inline]
    fn input(&self) -> bool {
        let bit = match self.tac & 0x03 {
            0x00 => 9,
            0x01 => 3,
            0x02 => 5,
            _ => 7,
        };
        self.tac & 0x04 != 0 && self.counter & (1 << bit) != 0
    }

    #[inline]
    fn increment_tima(&mut self) {
        let (next, overflow) = self.tima.overflowing_add(1);
        self.tima = next;
        if overflow {
            self.reload_delay = RELOAD_DELAY;
        }
    }

    /// Advance the timer by one T-cycle.
    pub(super) fn tick_tcycle(&mut self, iflags: &mut InterruptFlags) {
        if self.reload_delay > 0 {
            self.reload_delay -= 1;
            if self.reload_delay == 0 {
                self.tima = self.tma;
                *iflags |= InterruptFlags::TIMER;
            }
        }

        let before = self.input();
        self.counter = self.counter.wrapping_add(1);
        if before && !self.input() {
            self.increment_tima();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(timer: &mut Timer, tcycles: u32, iflags: &mut InterruptFlags) {
        for _ in 0..tcycles {
            timer.tick_tcycle(iflags);
        }
    }

    #[test]
    fn div_counts_every_256_tcycles() {
        let mut timer = Timer::new();
        let mut iflags = InterruptFlags::empty();
        timer.write(0xFF04, 0x00);
        assert_eq!(timer.read(0xFF04), 0x00);
        run(&mut timer, 255, &mut iflags);
        assert_eq!(timer.read(0xFF04), 0x00);
        run(&mut timer, 1, &mut iflags);
        assert_eq!(timer.read(0xFF04), 0x01);
    }

    #[test]
    fn overflow_reloads_after_delay_and_requests_interrupt_once() {
        let mut timer = Timer::new();
        let mut iflags = InterruptFlags::empty();
        timer.write(0xFF04, 0x00);
        timer.write(0xFF06, 0xF0); // TMA
        timer.write(0xFF05, 0x00); // TIMA
        timer.write(0xFF07, 0x05); // enabled, 16 T-cycles per increment

        // 256 increments of 16 T-cycles each: the last one overflows.
        run(&mut timer, 255 * 16, &mut iflags);
        assert_eq!(timer.read(0xFF05), 0xFF);
        run(&mut timer, 16, &mut iflags);
        assert_eq!(timer.read(0xFF05), 0x00);
        assert!(iflags.is_empty());

        run(&mut timer, u32::from(RELOAD_DELAY), &mut iflags);
        assert_eq!(timer.read(0xFF05), 0xF0);
        assert_eq!(iflags, InterruptFlags::TIMER);

        iflags = InterruptFlags::empty();
        run(&mut timer, 8, &mut iflags);
        assert!(iflags.is_empty());
    }

    #[test]
    fn tima_write_during_reload_delay_cancels_reload() {
        let mut timer = Timer::new();
        let mut iflags = InterruptFlags::empty();
        timer.write(0xFF04, 0x00);
        timer.write(0xFF06, 0x80);
        timer.write(0xFF05, 0xFF);
        timer.write(0xFF07, 0x05);

        run(&mut timer, 16, &mut iflags);
        assert_eq!(timer.read(0xFF05), 0x00);
        timer.write(0xFF05, 0x33);
        run(&mut timer, 8, &mut iflags);
        assert_eq!(timer.read(0xFF05), 0x33);
        assert!(iflags.is_empty());
    }

    #[test]
    fn div_write_with_selected_bit_high_increments_tima() {
        let mut timer = Timer::new();
        let mut iflags = InterruptFlags::empty();
        timer.write(0xFF04, 0x00);
        timer.write(0xFF05, 0x10);
        timer.write(0xFF07, 0x05); // bit 3

        run(&mut timer, 8, &mut iflags); // bit 3 now set
        timer.write(0xFF04, 0x00);
        assert_eq!(timer.read(0xFF05), 0x11);
    }

    #[test]
    fn disabling_tac_with_bit_high_increments_tima() {
        let mut timer = Timer::new();
        let mut iflags = InterruptFlags::empty();
        timer.write(0xFF04, 0x00);
        timer.write(0xFF05, 0x00);
        timer.write(0xFF07, 0x05);
        run(&mut timer, 8, &mut iflags);

        timer.write(0xFF07, 0x01);
        assert_eq!(timer.read(0xFF05), 0x01);
        assert_eq!(timer.read(0xFF07), 0xF9);
    }
}
