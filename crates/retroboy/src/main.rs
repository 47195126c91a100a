use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use retroboy::{Report, RunMode, Suite};
use retroboy_gb::{GameBoyConfig, Pacing, Palette, Verdict, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Protocol {
    Blargg,
    Mooneye,
}

/// Run a Game Boy ROM headless.
#[derive(Parser, Debug)]
#[command(name = "retroboy", version, about, long_about = None)]
struct Args {
    /// Path to the .gb ROM
    rom: PathBuf,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u32,

    /// Run until the ROM reports pass/fail over serial
    #[arg(long, value_enum)]
    check: Option<Protocol>,

    /// Cycle budget for --check
    #[arg(long, default_value_t = 2_000_000_000)]
    max_cycles: u64,

    /// Run on the emulation thread for this many seconds instead of by frames
    #[arg(long, conflicts_with = "check")]
    seconds: Option<u64>,

    /// Do not pace the emulation thread to real time
    #[arg(long)]
    unthrottled: bool,

    /// Use a neutral grey palette instead of DMG green
    #[arg(long)]
    grayscale: bool,

    /// Leave work RAM zeroed at power-on
    #[arg(long)]
    zero_ram: bool,

    /// Write the last frame as raw 160x144 RGBA
    #[arg(long, value_name = "PATH")]
    dump_frame: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let config = GameBoyConfig::builder()
        .pacing(if args.unthrottled {
            Pacing::Unthrottled
        } else {
            Pacing::RealTime
        })
        .palette(if args.grayscale {
            Palette::GRAYSCALE
        } else {
            Palette::DMG_GREEN
        })
        .randomize_internal_ram(!args.zero_ram)
        .build();

    let mode = match (args.check, args.seconds) {
        (Some(protocol), _) => RunMode::Check {
            suite: match protocol {
                Protocol::Blargg => Suite::Blargg,
                Protocol::Mooneye => Suite::Mooneye,
            },
            max_cycles: args.max_cycles,
        },
        (None, Some(seconds)) => RunMode::RealTime(Duration::from_secs(seconds)),
        (None, None) => RunMode::Frames(args.frames),
    };

    let report = retroboy::run(&args.rom, config, mode)?;
    print_report(&report);

    if let Some(path) = &args.dump_frame {
        std::fs::write(path, &report.pixels)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        println!(
            "Wrote {} bytes ({}x{} rgba) to '{}'",
            report.pixels.len(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            path.display()
        );
    }

    Ok(match report.verdict {
        None | Some(Verdict::Passed) => ExitCode::SUCCESS,
        Some(Verdict::Failed) => ExitCode::from(1),
        Some(Verdict::Pending) => ExitCode::from(2),
    })
}

fn print_report(report: &Report) {
    println!("\"{}\": {} frames", report.title, report.frames);
    if !report.serial.is_empty() {
        println!("--- serial ---");
        println!("{}", String::from_utf8_lossy(&report.serial));
    }
    if let Some(verdict) = report.verdict {
        println!("Result: {verdict:?}");
    }
}
