//! CPU core unit tests.
//!
//! Verifies the one-way boot transition, fetch-address compensation, reset
//! postconditions, and the trace sink contract.

use n64sim_core::config::{CpuConfig, FetchStrategy};
use n64sim_core::core::Cpu;
use n64sim_core::soc::interconnect::Bus;

use crate::common::ProbeDevice;

const BOOT_VECTOR: u32 = 0x8000_0400;

fn probe_bus() -> (Bus, std::rc::Rc<std::cell::RefCell<Vec<u32>>>) {
    // Probe the entire physical window so any fetch is visible.
    let probe = ProbeDevice::new(0, 0x1FFF_FFFF, 0);
    let (reads, _) = probe.logs();
    let mut bus = Bus::new();
    bus.add_device(Box::new(probe));
    (bus, reads)
}

// ══════════════════════════════════════════════════════════
// 1. Boot transition
// ══════════════════════════════════════════════════════════

#[test]
fn first_step_boots_to_entry_vector_without_fetching() {
    let (mut bus, reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());
    assert!(!cpu.booted);

    cpu.step(&mut bus, None);

    assert!(cpu.booted);
    // The pipeline pre-increments past the freshly installed vector.
    assert_eq!(cpu.regs.pc, BOOT_VECTOR + 4);
    assert!(reads.borrow().is_empty(), "unbooted fetch is synthesized");
}

#[test]
fn second_step_performs_a_real_bus_fetch() {
    let (mut bus, reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());

    cpu.step(&mut bus, None);
    cpu.step(&mut bus, None);

    // Fetch address is pc - 4 through the segment mask: the word right
    // before the pre-incremented PC.
    assert_eq!(*reads.borrow(), vec![BOOT_VECTOR & 0x1FFF_FFFF]);
}

#[test]
fn boot_happens_only_once() {
    let (mut bus, reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());

    for _ in 0..10 {
        cpu.step(&mut bus, None);
    }
    assert_eq!(cpu.cycles, 10);
    assert_eq!(reads.borrow().len(), 9, "every step after boot fetches once");
    assert_eq!(cpu.regs.pc, BOOT_VECTOR + 4 * 10);
}

// ══════════════════════════════════════════════════════════
// 2. Reset postconditions
// ══════════════════════════════════════════════════════════

#[test]
fn reset_restores_construction_defaults() {
    let (mut bus, _reads) = probe_bus();
    let config = CpuConfig::default();
    let mut cpu = Cpu::new(&config);

    for _ in 0..25 {
        cpu.step(&mut bus, None);
    }
    cpu.reset();

    assert_eq!(cpu.cycles, 0);
    assert_eq!(cpu.instructions_executed, 0);
    assert_eq!(cpu.regs.pc, config.reset_pc);
    assert!(!cpu.booted);
    assert!(!cpu.exception_pending);
    assert_eq!(cpu.regs.cp0.status, 0x3400_0000);
}

#[test]
fn reset_then_step_boots_again() {
    let (mut bus, _reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());

    for _ in 0..3 {
        cpu.step(&mut bus, None);
    }
    cpu.reset();
    cpu.step(&mut bus, None);

    assert!(cpu.booted);
    assert_eq!(cpu.regs.pc, BOOT_VECTOR + 4);
}

// ══════════════════════════════════════════════════════════
// 3. Counters and trace sink
// ══════════════════════════════════════════════════════════

#[test]
fn counters_advance_every_cycle() {
    let (mut bus, _reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());

    for _ in 0..7 {
        cpu.step(&mut bus, None);
    }
    assert_eq!(cpu.cycles, 7);
    assert_eq!(cpu.instructions_executed, 7);
}

#[test]
fn trace_sink_fires_every_500_cycles() {
    let (mut bus, _reads) = probe_bus();
    let mut cpu = Cpu::new(&CpuConfig::default());

    let mut lines: Vec<String> = Vec::new();
    {
        let mut sink = |line: &str| lines.push(line.to_string());
        for _ in 0..1000 {
            cpu.step(&mut bus, Some(&mut sink));
        }
    }

    // One boot line plus one trace line at cycles 500 and 1000.
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("booted"));
    assert!(lines[1].contains("00000500"));
    assert!(lines[2].contains("00001000"));
}

#[test]
fn absent_logger_changes_nothing() {
    let (mut bus_a, _ra) = probe_bus();
    let (mut bus_b, _rb) = probe_bus();
    let mut with_sink = Cpu::new(&CpuConfig::default());
    let mut without_sink = Cpu::new(&CpuConfig::default());

    let mut sink = |_: &str| {};
    for _ in 0..600 {
        with_sink.step(&mut bus_a, Some(&mut sink));
        without_sink.step(&mut bus_b, None);
    }
    assert_eq!(with_sink.regs.pc, without_sink.regs.pc);
    assert_eq!(with_sink.cycles, without_sink.cycles);
}

// ══════════════════════════════════════════════════════════
// 4. Fetch strategies
// ══════════════════════════════════════════════════════════

#[test]
fn direct_strategy_bypasses_range_dispatch() {
    let mut bus = Bus::new();
    let probe = ProbeDevice::new(0x8000_0000, 0x1000, 0);
    let (probe_reads, _) = probe.logs();
    bus.add_device(Box::new(probe));

    let config = CpuConfig {
        fetch: FetchStrategy::Direct,
        ..CpuConfig::default()
    };
    let mut cpu = Cpu::new(&config);
    cpu.step(&mut bus, None);
    cpu.step(&mut bus, None);

    // No RAM device registered: the direct path reads 0 and dispatches to
    // no range-mapped device at all.
    assert!(probe_reads.borrow().is_empty());
    assert_eq!(cpu.regs.pc, BOOT_VECTOR + 8);
}
