//! Headless frontend for the n64sim core.
//!
//! Stands in for the GUI collaborator: loads a ROM (or a built-in test
//! image), runs a number of frames on the system, and prints the trace lines
//! plus a final register/cycle summary.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use n64sim_core::config::Config;
use n64sim_core::sim::System;

/// Fallback image: one real instruction word and a page of zeros, enough
/// to exercise the core without a ROM on disk.
const TEST_ROM_HEAD: [u8; 4] = [0x37, 0x82, 0x00, 0x08];

#[derive(Parser, Debug)]
#[command(
    name = "n64sim",
    version,
    about = "Instruction-level N64-style CPU/bus simulator",
    long_about = "Runs the simulated system for a number of video frames and prints a \
                  state summary.\n\nWithout --rom a built-in test image is loaded. \
                  Configuration is JSON (see n64sim_core::config::Config); the CLI uses \
                  built-in defaults when --config is not given."
)]
struct Cli {
    /// Path to a ROM image file.
    #[arg(short, long)]
    rom: Option<String>,

    /// Number of frames to run.
    #[arg(short, long, default_value_t = 60)]
    frames: u64,

    /// Path to a JSON configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the core's periodic trace lines to stdout.
    #[arg(short, long)]
    trace: bool,

    /// Use the unpipelined (single-stage, direct-fetch) core preset.
    #[arg(long)]
    unpipelined: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match (&cli.config, cli.unpipelined) {
        (Some(path), _) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[!] {e}");
                process::exit(1);
            }
        },
        (None, true) => Config::unpipelined(),
        (None, false) => Config::default(),
    };

    let mut system = System::new(&config);

    let info = if let Some(rom_path) = &cli.rom {
        match system.load_rom_file(rom_path) {
            Ok(info) => info,
            Err(e) => {
                eprintln!("[!] {e}");
                process::exit(1);
            }
        }
    } else {
        let mut test_rom = TEST_ROM_HEAD.to_vec();
        test_rom.resize(TEST_ROM_HEAD.len() + 100, 0);
        println!("[*] No ROM given; using built-in test image");
        system.load_rom(&test_rom)
    };

    println!("[*] ROM: {} ({} bytes)", info.name, info.size);
    println!(
        "    region={} crc1={:08X} crc2={:08X} cic={}",
        info.region, info.crc1, info.crc2, info.cic
    );

    system.reset();

    let mut stdout_sink = |line: &str| println!("{line}");
    for _ in 0..cli.frames {
        let sink: Option<&mut dyn FnMut(&str)> = if cli.trace {
            Some(&mut stdout_sink)
        } else {
            None
        };
        system.step_frame(sink);
    }

    let cpu = &system.cpu;
    println!();
    println!(
        "[*] Ran {} frames ({} cycles/frame)",
        cli.frames,
        system.cycles_per_frame()
    );
    println!(
        "    cycles={} instructions={} pc={:#010X}",
        cpu.cycles, cpu.instructions_executed, cpu.regs.pc
    );
    println!(
        "    hi={:#010X} lo={:#010X} status={:#010X}",
        cpu.regs.hi, cpu.regs.lo, cpu.regs.cp0.status
    );
    for i in (0..8).step_by(4) {
        println!(
            "    r{:<2}={:#010X} r{:<2}={:#010X} r{:<2}={:#010X} r{:<2}={:#010X}",
            i,
            cpu.regs.gpr.read(i),
            i + 1,
            cpu.regs.gpr.read(i + 1),
            i + 2,
            cpu.regs.gpr.read(i + 2),
            i + 3,
            cpu.regs.gpr.read(i + 3)
        );
    }
}
