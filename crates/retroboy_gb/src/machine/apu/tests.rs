use super::*;

fn apu() -> Apu {
    Apu::new(SampleBuffer::new(65535))
}

fn run(apu: &mut Apu, tcycles: u32) {
    for _ in 0..tcycles {
        apu.tick();
    }
}

#[test]
fn post_boot_register_readback() {
    let apu = apu();
    assert_eq!(apu.read_register(0xFF26), 0xF1);
    assert_eq!(apu.read_register(0xFF10), 0x80);
    assert_eq!(apu.read_register(0xFF11), 0xBF);
    assert_eq!(apu.read_register(0xFF13), 0xFF);
    assert_eq!(apu.read_register(0xFF24), 0x77);
    assert_eq!(apu.read_register(0xFF25), 0xF3);
}

#[test]
fn unused_addresses_read_ff() {
    let apu = apu();
    for addr in [0xFF15, 0xFF1F, 0xFF27, 0xFF2B, 0xFF2F] {
        assert_eq!(apu.read_register(addr), 0xFF, "{addr:#06X}");
    }
}

#[test]
fn power_off_clears_registers_and_keeps_wave_ram() {
    let mut apu = apu();
    apu.write_register(0xFF30, 0x5A);
    apu.write_register(0xFF26, 0x00);

    assert_eq!(apu.read_register(0xFF26), 0x70);
    assert_eq!(apu.read_register(0xFF24), 0x00);
    assert_eq!(apu.read_register(0xFF11), 0x3F);
    assert_eq!(apu.read_register(0xFF30), 0x5A);

    // Register writes are dropped until power returns; wave RAM still works.
    apu.write_register(0xFF24, 0x77);
    apu.write_register(0xFF31, 0xC3);
    assert_eq!(apu.read_register(0xFF24), 0x00);
    assert_eq!(apu.read_register(0xFF31), 0xC3);

    apu.write_register(0xFF26, 0x80);
    apu.write_register(0xFF24, 0x77);
    assert_eq!(apu.read_register(0xFF24), 0x77);
    assert_eq!(apu.read_register(0xFF26), 0xF0);
}

#[test]
fn pulse_channel_plays_its_duty_cycle() {
    let mut apu = apu();
    let samples = apu.sample_buffer().clone();

    apu.write_register(0xFF16, 0x80); // 50% duty
    apu.write_register(0xFF17, 0xF0); // volume 15, no envelope
    apu.write_register(0xFF18, 0x00);
    apu.write_register(0xFF19, 0x87); // trigger, frequency 0x700
    assert_eq!(apu.read_register(0xFF26) & 0x02, 0x02);

    assert!(samples.is_empty());
    run(&mut apu, SAMPLE_PERIOD * 400);
    let mut out = vec![0i16; 800];
    assert_eq!(samples.fill(&mut out), 800);

    // NR51 0xF3 routes channel 2 to both sides; NR50 0x77 is full volume.
    let loudest = 15 * 8 * VOLUME_FACTOR;
    assert_eq!(out.iter().copied().max(), Some(loudest));
    assert_eq!(out.iter().copied().min(), Some(0));
    assert!(out.chunks_exact(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn length_counter_silences_channel() {
    let mut apu = apu();
    apu.write_register(0xFF17, 0xF0);
    apu.write_register(0xFF16, 0x3F); // one length tick left
    apu.write_register(0xFF19, 0xC0); // trigger with length enabled

    run(&mut apu, u32::from(FRAME_SEQUENCER_PERIOD) - 1);
    assert_eq!(apu.read_register(0xFF26) & 0x02, 0x02);
    run(&mut apu, 1);
    assert_eq!(apu.read_register(0xFF26) & 0x02, 0x00);
}

#[test]
fn clearing_the_dac_disables_the_channel() {
    let mut apu = apu();
    apu.write_register(0xFF17, 0xF0);
    apu.write_register(0xFF19, 0x80);
    assert_eq!(apu.read_register(0xFF26) & 0x02, 0x02);

    apu.write_register(0xFF17, 0x00);
    assert_eq!(apu.read_register(0xFF26) & 0x02, 0x00);
}

#[test]
fn trigger_without_dac_stays_off() {
    let mut apu = apu();
    apu.write_register(0xFF21, 0x00);
    apu.write_register(0xFF23, 0x80);
    assert_eq!(apu.read_register(0xFF26) & 0x08, 0x00);
}

#[test]
fn noise_lfsr_shifts_once_per_period() {
    let mut apu = apu();
    apu.write_register(0xFF21, 0xF0);
    apu.write_register(0xFF22, 0x00); // divisor 8, shift 0
    apu.write_register(0xFF23, 0x80);
    assert_eq!(apu.ch4.lfsr(), 0x7FFF);

    run(&mut apu, 7);
    assert_eq!(apu.ch4.lfsr(), 0x7FFF);
    run(&mut apu, 1);
    assert_eq!(apu.ch4.lfsr(), 0x3FFF);
}

#[test]
fn wave_channel_reads_nibbles_and_applies_level() {
    let mut apu = apu();
    apu.write_register(0xFF30, 0xA5);
    apu.write_register(0xFF1A, 0x80);
    apu.write_register(0xFF1C, 0x20); // 100%
    apu.write_register(0xFF1D, 0xFF);
    apu.write_register(0xFF1E, 0x87); // trigger, frequency 2047: period 2

    assert_eq!(apu.ch3.output(), 0x0A);
    run(&mut apu, 2);
    assert_eq!(apu.ch3.output(), 0x05);

    apu.write_register(0xFF1C, 0x40); // 50%
    assert_eq!(apu.ch3.output(), 0x02);
    apu.write_register(0xFF1C, 0x00); // mute
    assert_eq!(apu.ch3.output(), 0x00);
}

#[test]
fn sweep_overflow_turns_channel_one_off() {
    let mut apu = apu();
    apu.write_register(0xFF10, 0x11); // period 1, add, shift 1
    apu.write_register(0xFF12, 0xF0);
    apu.write_register(0xFF13, 0x00);
    apu.write_register(0xFF14, 0x85); // frequency 0x500
    assert_eq!(apu.read_register(0xFF26) & 0x01, 0x01);

    // The first sweep clock lands on sequencer step 2.
    run(&mut apu, 3 * u32::from(FRAME_SEQUENCER_PERIOD));
    assert_eq!(apu.read_register(0xFF26) & 0x01, 0x00);
}

#[test]
fn powered_off_apu_still_emits_silence() {
    let mut apu = apu();
    apu.write_register(0xFF26, 0x00);
    run(&mut apu, SAMPLE_PERIOD * 10);

    let mut out = [1i16; 20];
    assert_eq!(apu.sample_buffer().fill(&mut out), 20);
    assert!(out.iter().all(|&s| s == 0));
}
