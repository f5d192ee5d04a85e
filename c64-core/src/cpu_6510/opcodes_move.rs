use crate::cpu_6510::*;

/// Load the value into register A
/// Function: A:={adr}
/// Flags: N Z
pub fn lda(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    cpu.a = cpu.read_operand(mode, cycles);
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Load register X with the value
/// Function: X:={adr}
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    cpu.x = cpu.read_operand(mode, cycles);
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Load register Y with the value
/// Function: Y:={adr}
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    cpu.y = cpu.read_operand(mode, cycles);
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Store register A at address. Stores always pay the indexing
/// penalty: the chip cannot take back a write to a half-fixed address,
/// so it reads first and spends the cycle either way.
/// Function: {adr}:=A
/// Flags:
pub fn sta(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let address = cpu.operand_address(mode, cycles, true);
    cpu.write_byte(address, cpu.a, cycles);
}

/// Store register X at address
/// Function: {adr}:=X
/// Flags:
pub fn stx(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let address = cpu.operand_address(mode, cycles, true);
    cpu.write_byte(address, cpu.x, cycles);
}

/// Store register Y at address
/// Function: {adr}:=Y
/// Flags:
pub fn sty(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    let address = cpu.operand_address(mode, cycles, true);
    cpu.write_byte(address, cpu.y, cycles);
}

/// Transfer A to X
/// Function: X:=A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.x = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer A to Y
/// Function: Y:=A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.y = cpu.a;
    cpu.update_zero_and_negative_flag(cpu.y);
}

/// Transfer X to A
/// Function: A:=X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.a = cpu.x;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer Y to A
/// Function: A:=Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.a = cpu.y;
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Transfer S to X
/// Function: X:=S
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative_flag(cpu.x);
}

/// Transfer X to S. The one transfer that touches no flags.
/// Function: S:=X
/// Flags:
pub fn txs(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.sp = cpu.x;
}

/// Push A to the stack
/// Function: (S)-:=A
/// Flags:
pub fn pha(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.push_stack(cpu.a, cycles);
}

/// Push the status register to the stack. The stacked copy always
/// carries bits 4 and 5 set, whatever the live register holds.
/// Function: (S)-:=P|$30
/// Flags:
pub fn php(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.push_stack(
        cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8,
        cycles,
    );
}

/// Pull A
/// Function: A:=+(S)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.burn_cycle(cycles);
    cpu.a = cpu.pull_stack(cycles);
    cpu.update_zero_and_negative_flag(cpu.a);
}

/// Pull the status register from the stack. Bit 4 never lands in the
/// live register and bit 5 always reads back as set.
/// Function: P:=+(S)
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.burn_cycle(cycles);
    let status = cpu.pull_stack(cycles);
    cpu.p = (status & !(StatusFlag::Break as u8)) | StatusFlag::Unused as u8;
}
