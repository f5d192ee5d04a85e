use crate::cpu_6510::*;

/// Apply the logical "or" operator on the accumulator.
/// Function: A:=A or {adr}
/// Flags: N Z
pub fn ora(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    cpu.a |= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Apply the logical "and" operator on the accumulator.
/// Function: A:=A&{adr}
/// Flags: N Z
pub fn and(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    cpu.a &= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Logical Exclusive OR
/// Function: A:=A exor {adr}
/// Flags: N Z
pub fn eor(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    cpu.a ^= value;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Bit test: the operand is ANDed with the accumulator for the zero
/// flag only; bits 7 and 6 of the operand land in N and V directly.
/// The accumulator is never modified.
/// Function: N:=b7 V:=b6 Z:=A&{adr}
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    cpu.set_status_flag(StatusFlag::Zero, cpu.a & value == 0);
    cpu.set_status_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    cpu.set_status_flag(StatusFlag::Overflow, value & 0b0100_0000 != 0);
}

/// The nine-bit binary add shared by ADC and SBC: accumulator plus
/// operand plus the incoming carry, with the carry flag receiving
/// bit 8 of the sum.
fn add_binary(cpu: &mut Cpu6510, value: u8) {
    let sum = cpu.a as u16 + value as u16 + cpu.get_carry() as u16;
    let result = sum as u8;

    cpu.set_status_flag(StatusFlag::Carry, sum > 0xFF);
    // Signed overflow: the operands agree on a sign bit that the
    // result lost.
    cpu.set_status_flag(
        StatusFlag::Overflow,
        (!(cpu.a ^ value) & (cpu.a ^ result)) & 0b1000_0000 != 0,
    );

    cpu.a = result;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Nibble-wise BCD add with digit correction. N, V and Z still follow
/// the uncorrected binary sum; only the value stored in A and the
/// carry come from the corrected digits.
fn add_decimal(cpu: &mut Cpu6510, value: u8) {
    let a = cpu.a;
    let carry = cpu.get_carry() as u16;
    let binary_sum = a as u16 + value as u16 + carry;

    cpu.set_status_flag(
        StatusFlag::Overflow,
        (!(a ^ value) & (a ^ binary_sum as u8)) & 0b1000_0000 != 0,
    );

    let mut lo = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
    if lo > 0x09 {
        lo += 0x06;
    }
    let mut hi = (a >> 4) as u16 + (value >> 4) as u16 + u16::from(lo > 0x0F);
    if hi > 0x09 {
        hi += 0x06;
    }
    cpu.set_status_flag(StatusFlag::Carry, hi > 0x0F);

    cpu.a = ((hi << 4) | (lo & 0x0F)) as u8;
    cpu.update_zero_and_negative_flag(binary_sum as u8);
}

/// Nibble-wise BCD subtract with borrow. Carry set means "no borrow";
/// N, Z and V follow the binary difference while A receives the
/// corrected digits.
fn subtract_decimal(cpu: &mut Cpu6510, value: u8) {
    let a = cpu.a;
    let borrow = 1 - cpu.get_carry() as i16;
    let binary_diff = a as i16 - value as i16 - borrow;

    let mut lo = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut hi = (a >> 4) as i16 - (value >> 4) as i16;
    if lo < 0 {
        lo -= 0x06;
        hi -= 1;
    }
    if hi < 0 {
        hi -= 0x06;
    }

    cpu.set_status_flag(StatusFlag::Carry, binary_diff >= 0);
    cpu.set_status_flag(
        StatusFlag::Overflow,
        ((a ^ value) & (a ^ binary_diff as u8)) & 0b1000_0000 != 0,
    );

    cpu.a = (((hi << 4) | (lo & 0x0F)) & 0xFF) as u8;
    cpu.update_zero_and_negative_flag(binary_diff as u8);
}

/// Add with Carry. In decimal mode the digits are corrected nibble by
/// nibble while the flags keep their binary-sum quirks.
/// Function: A:=A+{adr}+C
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
}

/// Subtract with Carry; carry set means "no borrow". The binary form
/// is the complement trick: A + !m + C.
/// Function: A:=A-{adr}+C-1
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    if cpu.is_status_flag_set(StatusFlag::Decimal) {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }
}

/// Sets the processor flags as if a subtraction had been carried out;
/// no register changes.
fn compare(cpu: &mut Cpu6510, register: u8, value: u8) {
    cpu.set_status_flag(StatusFlag::Carry, register >= value);
    cpu.update_zero_and_negative_flag(register.wrapping_sub(value));
}

/// Compare A with source
/// http://6502.org/tutorials/compare_instructions.html
/// Function: A-{adr}
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    compare(cpu, cpu.a, value);
}

/// Compare X with source
/// Function: X-{adr}
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    compare(cpu, cpu.x, value);
}

/// Compare Y with source
/// Function: Y-{adr}
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let value = cpu.read_operand(mode, cycles);
    compare(cpu, cpu.y, value);
}

/// The read-modify-write scaffold. Memory forms read the operand,
/// write the stale byte straight back (the hardware really does), then
/// write the result; accumulator forms spend their cycle on a dummy
/// read instead.
fn modify(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32, operation: fn(&mut Cpu6510, u8) -> u8) {
    if mode == Mode::Accumulator {
        cpu.burn_cycle(cycles);
        let value = cpu.a;
        cpu.a = operation(cpu, value);
        return;
    }

    let address = cpu.operand_address(mode, cycles, true);
    let value = cpu.read_byte(address, cycles);
    cpu.write_byte(address, value, cycles);
    let result = operation(cpu, value);
    cpu.write_byte(address, result, cycles);
}

// The four shift kernels below all put the bit shifted out into the
// carry flag and finish with N and Z from the result.

fn shift_left(cpu: &mut Cpu6510, value: u8) -> u8 {
    cpu.set_status_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = value << 1;
    cpu.update_zero_and_negative_flag(result);
    result
}

fn shift_right(cpu: &mut Cpu6510, value: u8) -> u8 {
    cpu.set_status_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    // N is cleared by construction: bit 7 of the result is always 0.
    let result = value >> 1;
    cpu.update_zero_and_negative_flag(result);
    result
}

fn rotate_left(cpu: &mut Cpu6510, value: u8) -> u8 {
    let old_carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, value & 0b1000_0000 != 0);
    let result = (value << 1) | old_carry;
    cpu.update_zero_and_negative_flag(result);
    result
}

fn rotate_right(cpu: &mut Cpu6510, value: u8) -> u8 {
    let old_carry = cpu.get_carry();
    cpu.set_status_flag(StatusFlag::Carry, value & 0b0000_0001 != 0);
    let result = (value >> 1) | (old_carry << 7);
    cpu.update_zero_and_negative_flag(result);
    result
}

/// Arithmetic shift left
/// Function: {adr}:={adr}*2
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, shift_left);
}

/// Logical shift right
/// Function: {adr}:={adr}/2
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, shift_right);
}

/// Rotate left
/// Function: {adr}:={adr}*2+C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, rotate_left);
}

/// Rotate right
/// Function: {adr}:={adr}/2+C*128
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, rotate_right);
}

/// Increment at an address
/// Function: {adr}:={adr}+1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, |cpu, value| {
        let result = value.wrapping_add(1);
        cpu.update_zero_and_negative_flag(result);
        result
    });
}

/// Decrement at an address
/// Function: {adr}:={adr}-1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    modify(cpu, mode, cycles, |cpu, value| {
        let result = value.wrapping_sub(1);
        cpu.update_zero_and_negative_flag(result);
        result
    });
}

/// Increment X
/// Function: X:=X+1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Increment Y
/// Function: Y:=Y+1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Decrement X
/// Function: X:=X-1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Decrement Y
/// Function: Y:=Y-1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative_flag(cpu.y);
}
