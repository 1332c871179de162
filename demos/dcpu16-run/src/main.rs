//! Tiny host loop around the [`dcpu16`] core.
//!
//! Loads a flat big-endian memory image (the usual DCPU-16 object file
//! layout: one 16-bit word per cell, high byte first) and steps the machine
//! until it either self-loops (the conventional `:halt SET PC, halt` idiom)
//! or a step budget is exhausted. No modules are attached — this binary
//! exists to exercise the core end to end, not to be a usable emulator;
//! program loading, assembling, and peripheral devices are the host's job.

use dcpu16::Dcpu;
use std::fs;
use std::process::ExitCode;

const DEFAULT_MAX_STEPS: u64 = 10_000_000;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: dcpu16-run <image.bin> [max-steps]");
        return ExitCode::FAILURE;
    };
    let max_steps = args
        .next()
        .map(|s| s.parse().expect("max-steps must be a non-negative integer"))
        .unwrap_or(DEFAULT_MAX_STEPS);

    let bytes = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut cpu = Dcpu::new();
    cpu.load(0, &words_from_big_endian(&bytes));

    let mut steps = 0u64;
    let mut last_pc = cpu.pc;
    let mut repeats = 0u32;

    loop {
        if steps >= max_steps {
            println!("stopped after reaching the step budget ({max_steps})");
            break;
        }

        cpu.step();
        steps += 1;

        if cpu.pc == last_pc {
            repeats += 1;
            if repeats >= 3 {
                println!("halted: pc settled at {:#06x} after {steps} steps", cpu.pc);
                break;
            }
        } else {
            repeats = 0;
        }
        last_pc = cpu.pc;
    }

    println!("pc={:#06x} sp={:#06x} ov={:#06x}", cpu.pc, cpu.sp, cpu.ov);
    for (i, r) in cpu.r.iter().enumerate() {
        println!("r{i}={r:#06x}");
    }

    ExitCode::SUCCESS
}

/// Pack a big-endian byte stream into 16-bit words, padding a trailing odd
/// byte with zero.
fn words_from_big_endian(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks(2)
        .map(|chunk| {
            let hi = chunk[0];
            let lo = chunk.get(1).copied().unwrap_or(0);
            u16::from_be_bytes([hi, lo])
        })
        .collect()
}
