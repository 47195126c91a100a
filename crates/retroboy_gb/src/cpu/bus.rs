/// Abstraction over the Game Boy bus (memory, IO and interrupt lines).
///
/// Every `read8`/`write8` is one memory transaction. System buses advance
/// their peripherals by one M-cycle (4 T-cycles) per transaction, which is
/// what keeps the CPU, PPU, APU and timer in lockstep.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Spend one M-cycle without a memory access (CPU-internal delay).
    fn idle_mcycle(&mut self);

    /// `IE & IF`, limited to the five interrupt sources.
    ///
    /// Sampling the interrupt lines is free: it does not advance time.
    fn pending_interrupts(&self) -> u8;

    /// Clear the IF bit of interrupt `index` (0 = VBlank .. 4 = Joypad).
    fn acknowledge_interrupt(&mut self, index: u8);

    /// Hook that marks the beginning of a CPU step.
    ///
    /// System buses use it to latch input that arrived from other threads,
    /// so that it becomes visible at an instruction boundary. The default
    /// implementation is a no-op.
    fn begin_instruction(&mut self) {}
}
