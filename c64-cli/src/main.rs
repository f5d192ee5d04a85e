use std::fs;
use std::path::PathBuf;

use colored::*;
use structopt::StructOpt;
use thiserror::Error;

use c64_core::cpu_6510::{Cpu6510, StatusFlag};
use c64_core::memory::MEMORY_SIZE;
use c64_core::opcodes::{OpCode, OPCODE_STRING_TABLE};

/// Host harness for the 6510 interpreter: build a processor, seed its
/// memory, step the executor and print what happened.
#[derive(StructOpt)]
#[structopt(name = "c64-cli")]
struct Options {
    /// Raw program image loaded at --origin. Without one, a small
    /// built-in demo program runs instead.
    #[structopt(parse(from_os_str))]
    program: Option<PathBuf>,

    /// Load address and initial program counter, decimal or 0x-hex.
    #[structopt(long, default_value = "0x1000", parse(try_from_str = parse_address))]
    origin: u16,

    /// Number of instructions to execute.
    #[structopt(long, default_value = "1")]
    steps: u32,
}

#[derive(Debug, Error)]
enum HostError {
    #[error("unable to read program image {path}: {source}")]
    UnreadableImage {
        path: String,
        source: std::io::Error,
    },
    #[error("program image is {size} bytes and does not fit at ${origin:04x}")]
    ImageTooLarge { size: usize, origin: u16 },
}

fn parse_address(text: &str) -> Result<u16, std::num::ParseIntError> {
    match text.strip_prefix("0x") {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse(),
    }
}

fn demo_program() -> Vec<u8> {
    vec![
        OpCode::LDA_imm as u8,
        0xC0,
        OpCode::TAX as u8,
        OpCode::INX as u8,
        OpCode::ADC_imm as u8,
        0xC4,
        OpCode::BRK as u8,
    ]
}

fn main() -> Result<(), HostError> {
    env_logger::init();
    let options = Options::from_args();

    let program = match &options.program {
        Some(path) => fs::read(path).map_err(|source| HostError::UnreadableImage {
            path: path.display().to_string(),
            source,
        })?,
        None => demo_program(),
    };
    if program.len() > MEMORY_SIZE - options.origin as usize {
        return Err(HostError::ImageTooLarge {
            size: program.len(),
            origin: options.origin,
        });
    }

    let mut cpu = Cpu6510::new();
    cpu.memory.load(options.origin, &program);
    cpu.pc = options.origin;

    let mut total_cycles = 0;
    for step in 0..options.steps {
        let opcode = cpu.memory.read_u8(cpu.pc);
        let mnemonic = OPCODE_STRING_TABLE[opcode as usize];
        let cycles = cpu.execute();
        total_cycles += cycles;
        println!(
            "{} {} {}",
            format!("{:4}", step).dimmed(),
            format!("{} (${:02x})", mnemonic, opcode).cyan(),
            format!("{} cycles", cycles).dimmed(),
        );
    }

    print_state(&cpu, total_cycles);
    Ok(())
}

fn print_state(cpu: &Cpu6510, total_cycles: u32) {
    println!();
    println!(
        "  A={} X={} Y={}",
        format!("{:02x}", cpu.a).green(),
        format!("{:02x}", cpu.x).green(),
        format!("{:02x}", cpu.y).green(),
    );
    println!(
        "  PC={} SP={} P={} {}{}{}{}{}{}{}",
        format!("{:04x}", cpu.pc).green(),
        format!("{:02x}", cpu.sp).green(),
        format!("{:08b}", cpu.p).green(),
        flag(cpu, StatusFlag::Negative, "N"),
        flag(cpu, StatusFlag::Overflow, "V"),
        flag(cpu, StatusFlag::Decimal, "D"),
        flag(cpu, StatusFlag::InterruptDisable, "I"),
        flag(cpu, StatusFlag::Zero, "Z"),
        flag(cpu, StatusFlag::Carry, "C"),
        format!("  {} cycles total", total_cycles).dimmed(),
    );
}

fn flag(cpu: &Cpu6510, status_flag: StatusFlag, letter: &str) -> ColoredString {
    if cpu.is_status_flag_set(status_flag) {
        letter.green()
    } else {
        letter.dimmed()
    }
}
