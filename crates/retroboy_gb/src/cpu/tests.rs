use super::*;

const Z: u8 = 0x80;
const N: u8 = 0x40;
const H: u8 = 0x20;
const C: u8 = 0x10;

/// Flat 64 KiB memory. IE and IF live at their real addresses, so stack
/// writes that land on 0xFFFF change the enabled set like on hardware.
struct TestBus {
    memory: Box<[u8; 0x10000]>,
    mcycles: u32,
}

impl TestBus {
    /// Memory with `program` at 0x0100, where a fresh [`Cpu`] starts.
    fn with_program(program: &[u8]) -> Self {
        let mut memory = Box::new([0u8; 0x10000]);
        memory[0x0100..0x0100 + program.len()].copy_from_slice(program);
        Self { memory, mcycles: 0 }
    }

    fn request(&mut self, ie: u8, iflag: u8) {
        self.memory[0xFFFF] = ie;
        self.memory[0xFF0F] = iflag;
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.mcycles += 1;
        self.memory[usize::from(addr)]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.mcycles += 1;
        self.memory[usize::from(addr)] = value;
    }

    fn idle_mcycle(&mut self) {
        self.mcycles += 1;
    }

    fn pending_interrupts(&self) -> u8 {
        self.memory[0xFFFF] & self.memory[0xFF0F] & 0x1F
    }

    fn acknowledge_interrupt(&mut self, index: u8) {
        self.memory[0xFF0F] &= !(1 << index);
    }
}

/// Step once and check the bus saw exactly the reported cycles.
fn step(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    let before = bus.mcycles;
    let cycles = cpu.step(bus);
    assert_eq!((bus.mcycles - before) * 4, cycles, "bus time out of step");
    cycles
}

/// Run a single instruction with the given flags.
fn run_one(program: &[u8], flags: u8) -> (Cpu, TestBus, u32) {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(program);
    cpu.regs.f = flags;
    let cycles = step(&mut cpu, &mut bus);
    (cpu, bus, cycles)
}

#[test]
fn power_on_registers() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
}

#[test]
fn nop_takes_one_mcycle() {
    let (cpu, bus, cycles) = run_one(&[0x00], 0);
    assert_eq!(cycles, 4);
    assert_eq!(bus.mcycles, 1);
    assert_eq!(cpu.regs.pc, 0x0101);
}

#[test]
fn loads_and_hl_post_increment() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0x21, 0x00, 0xC0, // LD HL,0xC000
        0x06, 0x12, // LD B,0x12
        0x70, // LD (HL),B
        0x2A, // LD A,(HL+)
        0x32, // LD (HL-),A
        0x4F, // LD C,A
        0x36, 0x99, // LD (HL),0x99
        0xEA, 0x00, 0xD0, // LD (0xD000),A
        0x08, 0x10, 0xD0, // LD (0xD010),SP
    ]);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC000);
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x12);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(bus.memory[0xC001], 0x12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.c, 0x12);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x99);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xD000], 0x12);

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(bus.memory[0xD010], 0xFE);
    assert_eq!(bus.memory[0xD011], 0xFF);
}

#[test]
fn ldh_reaches_high_page() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0xE0, 0x80, // LDH (0x80),A
        0x0E, 0x81, // LD C,0x81
        0xF2, // LD A,(C)
    ]);
    cpu.regs.a = 0x5A;
    bus.memory[0xFF81] = 0xA5;

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x5A);
    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0xA5);
}

#[test]
fn add_and_adc_flags() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0xC6, 0x01, // ADD A,0x01
        0x37, // SCF
        0xCE, 0x00, // ADC A,0x00
        0x80, // ADD A,B
    ]);
    cpu.regs.a = 0x0F;
    cpu.regs.b = 0xF0;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x10);
    assert_eq!(cpu.regs.f, H);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(cpu.regs.f, 0);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, C);
}

#[test]
fn sub_sbc_and_cp_flags() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0xD6, 0x01, // SUB 0x01
        0x37, // SCF
        0xDE, 0x00, // SBC A,0x00
        0xFE, 0xFE, // CP 0xFE
    ]);
    cpu.regs.a = 0x01;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Z | N);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, N | H | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.regs.f, N);
}

#[test]
fn logic_ops_set_half_carry_only_for_and() {
    let (cpu, _, _) = run_one(&[0xE6, 0x0F], C); // AND 0x0F
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.f, H);

    let (cpu, _, _) = run_one(&[0xAF], C); // XOR A
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, Z);

    let (cpu, _, _) = run_one(&[0xF6, 0x80], Z); // OR 0x80
    assert_eq!(cpu.regs.a, 0x81);
    assert_eq!(cpu.regs.f, 0);
}

#[test]
fn inc_dec_preserve_carry() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0x04, // INC B
        0x05, // DEC B
        0x05, // DEC B
        0x34, // INC (HL)
    ]);
    cpu.regs.b = 0x0F;
    cpu.regs.f = C;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x10);
    assert_eq!(cpu.regs.f, H | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x0F);
    assert_eq!(cpu.regs.f, N | H | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x0E);
    assert_eq!(cpu.regs.f, N | C);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert_eq!(cpu.regs.f, Z | H | C);
}

#[test]
fn sixteen_bit_arithmetic() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0x09, // ADD HL,BC
        0x03, // INC BC
        0xE8, 0x08, // ADD SP,8
        0xF8, 0xFF, // LD HL,SP-1
    ]);
    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.f = Z;
    cpu.regs.sp = 0xFFF8;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x0FFE);
    assert_eq!(cpu.regs.f, Z | H | C);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.f, Z | H | C);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(cpu.regs.f, H | C);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFF);
    assert_eq!(cpu.regs.f, 0);
}

#[test]
fn daa_adjusts_after_add_and_sub() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0xC6, 0x38, // ADD A,0x38
        0x27, // DAA
        0xD6, 0x15, // SUB 0x15
        0x27, // DAA
    ]);
    cpu.regs.a = 0x45;

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x83);
    assert_eq!(cpu.regs.f, 0);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x68);
    assert_eq!(cpu.regs.f, N);
}

#[test]
fn cpl_scf_ccf() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x42;
    cpu.regs.f = Z;

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xBD);
    assert_eq!(cpu.regs.f, Z | N | H);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.f, Z | C);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.f, Z);
}

#[test]
fn accumulator_rotates_always_clear_zero() {
    let (cpu, _, cycles) = run_one(&[0x07], 0); // RLCA
    assert_eq!(cycles, 4);
    assert_eq!(cpu.regs.a, 0x02);

    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x17, 0x1F]); // RLA, RRA
    cpu.regs.a = 0x80;
    cpu.regs.f = 0;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.regs.f, C);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.f, 0);
}

#[test]
fn cb_prefixed_ops_and_hl_timing() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0xCB, 0x37, // SWAP A
        0xCB, 0x7E, // BIT 7,(HL)
        0xCB, 0xC6, // SET 0,(HL)
        0xCB, 0xBE, // RES 7,(HL)
        0xCB, 0x3F, // SRL A
    ]);
    cpu.regs.a = 0xF1;
    cpu.regs.f = C;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x80;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x1F);
    assert_eq!(cpu.regs.f, 0);

    cpu.regs.f = C;
    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.f, H | C);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x81);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(bus.memory[0xC000], 0x01);

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert_eq!(cpu.regs.a, 0x0F);
    assert_eq!(cpu.regs.f, C);
}

#[test]
fn push_pop_and_af_low_nibble() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[
        0x01, 0xFF, 0x12, // LD BC,0x12FF
        0xC5, // PUSH BC
        0xF1, // POP AF
    ]);

    step(&mut cpu, &mut bus);
    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0xFF);

    assert_eq!(step(&mut cpu, &mut bus), 12);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f, 0xF0);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_branch_timing() {
    // JR NZ,+2
    let (cpu, _, cycles) = run_one(&[0x20, 0x02], 0);
    assert_eq!((cycles, cpu.regs.pc), (12, 0x0104));
    let (cpu, _, cycles) = run_one(&[0x20, 0x02], Z);
    assert_eq!((cycles, cpu.regs.pc), (8, 0x0102));

    // JR -2 loops onto itself
    let (cpu, _, cycles) = run_one(&[0x18, 0xFE], 0);
    assert_eq!((cycles, cpu.regs.pc), (12, 0x0100));

    // JP Z,0x2000
    let (cpu, _, cycles) = run_one(&[0xCA, 0x00, 0x20], Z);
    assert_eq!((cycles, cpu.regs.pc), (16, 0x2000));
    let (cpu, _, cycles) = run_one(&[0xCA, 0x00, 0x20], 0);
    assert_eq!((cycles, cpu.regs.pc), (12, 0x0103));

    // CALL NC,0x2000
    let (cpu, bus, cycles) = run_one(&[0xD4, 0x00, 0x20], 0);
    assert_eq!((cycles, cpu.regs.pc, cpu.regs.sp), (24, 0x2000, 0xFFFC));
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    let (cpu, _, cycles) = run_one(&[0xD4, 0x00, 0x20], C);
    assert_eq!((cycles, cpu.regs.pc, cpu.regs.sp), (12, 0x0103, 0xFFFE));
}

#[test]
fn returns_and_restarts() {
    let ret_from = |opcode: u8, flags: u8| {
        let mut cpu = Cpu::new();
        let mut bus = TestBus::with_program(&[opcode]);
        cpu.regs.f = flags;
        cpu.regs.sp = 0xC000;
        bus.memory[0xC000] = 0x34;
        bus.memory[0xC001] = 0x12;
        let cycles = step(&mut cpu, &mut bus);
        (cycles, cpu.regs.pc)
    };

    assert_eq!(ret_from(0xD8, C), (20, 0x1234)); // RET C taken
    assert_eq!(ret_from(0xD8, 0), (8, 0x0101)); // RET C not taken
    assert_eq!(ret_from(0xC9, 0), (16, 0x1234)); // RET

    let (cpu, bus, cycles) = run_one(&[0xFF], 0); // RST 38
    assert_eq!((cycles, cpu.regs.pc), (16, 0x0038));
    assert_eq!(bus.memory[0xFFFC], 0x01);
    assert_eq!(bus.memory[0xFFFD], 0x01);

    let (cpu, _, cycles) = run_one(&[0xE9], 0); // JP HL
    assert_eq!((cycles, cpu.regs.pc), (4, 0x014D));
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0xFB, 0x00, 0x00]);
    bus.request(0x04, 0x04);

    step(&mut cpu, &mut bus);
    assert!(!cpu.ime);
    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(cpu.ime);

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[0xFF0F], 0x00);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x02);
}

#[test]
fn di_right_after_ei_keeps_interrupts_off() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0xFB, 0xF3, 0x00, 0x00]);
    bus.request(0x01, 0x01);

    for _ in 0..4 {
        assert_eq!(step(&mut cpu, &mut bus), 4);
    }
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0104);
}

#[test]
fn dispatch_takes_highest_priority_and_clears_only_its_bit() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x00]);
    cpu.ime = true;
    bus.request(0x1F, 0x14);

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[0xFF0F], 0x10);
}

#[test]
fn reti_enables_ime_immediately() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0xD9]);
    cpu.regs.sp = 0xC000;
    bus.memory[0xC000] = 0x00;
    bus.memory[0xC001] = 0x20;
    bus.memory[0x2000] = 0x00;
    bus.request(0x02, 0x02);

    assert_eq!(step(&mut cpu, &mut bus), 16);
    assert!(cpu.ime);
    // The pending STAT request is taken straight away.
    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0048);
}

#[test]
fn ie_overwritten_by_dispatch_push_cancels_it() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[]);
    cpu.ime = true;
    cpu.regs.sp = 0x0000;
    cpu.regs.pc = 0x0200;
    bus.request(0x01, 0x01);

    // The high byte of PC (0x02) lands on IE and masks VBlank.
    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0000);
    assert_eq!(bus.memory[0xFFFF], 0x02);
    assert_eq!(bus.memory[0xFF0F], 0x01);
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x76, 0x3C]); // HALT; INC A
    let a = cpu.regs.a;

    step(&mut cpu, &mut bus);
    assert!(cpu.halted);
    for _ in 0..10 {
        assert_eq!(step(&mut cpu, &mut bus), 4);
        assert_eq!(cpu.regs.pc, 0x0101);
    }

    // With IME clear the CPU just resumes; nothing is dispatched.
    bus.request(0x04, 0x04);
    step(&mut cpu, &mut bus);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.a, a.wrapping_add(1));
    assert_eq!(bus.memory[0xFF0F], 0x04);
}

#[test]
fn halt_with_ime_dispatches_on_wake() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x76]);
    cpu.ime = true;

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    bus.request(0x08, 0x08);
    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0058);
    assert!(!cpu.halted);
}

#[test]
fn halt_bug_executes_next_byte_twice() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x76, 0x3C, 0x00]); // HALT; INC A; NOP
    cpu.regs.a = 0x00;
    bus.request(0x01, 0x01);

    step(&mut cpu, &mut bus);
    assert!(!cpu.halted);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x01);
    assert_eq!(cpu.regs.pc, 0x0101);

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x02);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn ei_then_halt_with_pending_request_returns_to_the_halt() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0xFB, 0x76, 0x3C]); // EI; HALT; INC A
    bus.memory[0x0040] = 0x04; // INC B
    bus.memory[0x0041] = 0x00; // NOP
    cpu.regs.b = 0x00;
    bus.request(0x01, 0x01);

    step(&mut cpu, &mut bus);
    step(&mut cpu, &mut bus);
    assert!(cpu.ime);

    assert_eq!(step(&mut cpu, &mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x01);

    // The handler's first instruction runs once.
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x01);
    assert_eq!(cpu.regs.pc, 0x0041);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x01);
    assert_eq!(cpu.regs.pc, 0x0042);
}

#[test]
fn stop_waits_for_a_joypad_line() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0x10, 0x00, 0x3C]);
    bus.memory[0xFF00] = 0xFF;

    assert_eq!(step(&mut cpu, &mut bus), 8);
    assert!(cpu.is_stopped());
    assert_eq!(cpu.regs.pc, 0x0102);

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.is_stopped());

    bus.memory[0xFF00] = 0xE7; // Start held, buttons selected
    step(&mut cpu, &mut bus);
    assert!(!cpu.is_stopped());
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn illegal_opcode_locks_until_reset() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::with_program(&[0xDD, 0x3C]);
    cpu.ime = true;

    assert_eq!(step(&mut cpu, &mut bus), 4);
    assert!(cpu.is_locked());

    bus.request(0x01, 0x01);
    for _ in 0..8 {
        assert_eq!(step(&mut cpu, &mut bus), 4);
    }
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(bus.memory[0xFF0F], 0x01);

    cpu.reset();
    assert!(!cpu.is_locked());
    assert_eq!(cpu.regs.pc, 0x0100);
}
