use crate::cpu_6510::*;

use log::warn;

/// The constant the immediate LAX mixes into the accumulator. On real
/// NMOS silicon it depends on temperature and the individual unit;
/// $EE is the conventional choice.
pub const LAX_MAGIC: u8 = 0xEE;

/// Undocumented load into A and X at once. The memory forms are plain
/// deterministic loads. The immediate form goes through the internal
/// bus contention that gives the opcode its reputation:
/// result = (A | magic) & operand.
/// Function: A,X:={adr}
/// Flags: N Z
pub fn lax(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = match mode {
        Mode::Immediate => {
            let operand = cpu.fetch_byte(cycles);
            (cpu.a | LAX_MAGIC) & operand
        }
        _ => cpu.read_operand(mode, cycles),
    };
    cpu.a = value;
    cpu.x = value;
    cpu.update_zero_and_negative_flag(value);
}

/// Dispatch target for every opcode byte with no modeled behavior:
/// the gaps in the matrix and the JAM group. Costs only the opcode
/// fetch and leaves registers and memory untouched; the diagnostic
/// goes through the log facade so hosts without a logger see nothing.
pub fn unhandled(cpu: &mut Cpu6510, _mode: Mode, _cycles: &mut u32) {
    let opcode = cpu.memory.read_u8(cpu.pc.wrapping_sub(1));
    warn!("unhandled opcode ${:02x}, treating as inert", opcode);
}
