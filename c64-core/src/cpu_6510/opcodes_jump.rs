use crate::constants::InterruptVectors;
use crate::cpu_6510::*;

/// Shared tail for the relative branches. The offset fetch is one
/// cycle, a taken branch burns another, and landing on a different
/// page than the instruction after the branch burns a third.
fn branch(cpu: &mut Cpu6510, cycles: &mut u32, condition: bool) {
    let offset = cpu.fetch_byte(cycles) as i8;
    if condition {
        cpu.burn_cycle(cycles);
        let base = cpu.pc;
        // Adding the sign-extended offset subtracts when negative.
        cpu.pc = base.wrapping_add(offset as u16);
        if crosses_page(base, cpu.pc) {
            cpu.burn_cycle(cycles);
        }
    }
}

/// Branch if plus
/// Function: branch on N=0
pub fn bpl(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, !cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if minus
/// Function: branch on N=1
pub fn bmi(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, cpu.is_status_flag_set(StatusFlag::Negative));
}

/// Branch if overflow clear
/// Function: branch on V=0
pub fn bvc(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, !cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if overflow set
/// Function: branch on V=1
pub fn bvs(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, cpu.is_status_flag_set(StatusFlag::Overflow));
}

/// Branch if carry clear
/// Function: branch on C=0
pub fn bcc(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, !cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if carry set
/// Function: branch on C=1
pub fn bcs(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, cpu.is_status_flag_set(StatusFlag::Carry));
}

/// Branch if not equal
/// Function: branch on Z=0
pub fn bne(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, !cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Branch if equal
/// Function: branch on Z=1
pub fn beq(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    branch(cpu, cycles, cpu.is_status_flag_set(StatusFlag::Zero));
}

/// Jump. The absolute form sets `PC` from the operand word; the
/// indirect form dereferences it with the NMOS page-wrap behavior of
/// the pointer fetch.
/// Function: PC:={adr}
/// Flags:
pub fn jmp(cpu: &mut Cpu6510, mode: Mode, cycles: &mut u32) {
    cpu.pc = cpu.operand_address(mode, cycles, false);
}

/// Jump to subroutine. The stacked return address points at the last
/// operand byte of the JSR itself; RTS compensates with its own +1.
/// Function: (S)-:=PC PC:={adr}
/// Flags:
pub fn jsr(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    let lo = cpu.fetch_byte(cycles);
    cpu.burn_cycle(cycles);
    let [pcl, pch] = cpu.pc.to_le_bytes();
    cpu.push_stack(pch, cycles);
    cpu.push_stack(pcl, cycles);
    let hi = cpu.fetch_byte(cycles);
    cpu.pc = u16::from_le_bytes([lo, hi]);
}

/// Return from subroutine
/// Function: PC:=+(S)+1
/// Flags:
pub fn rts(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.burn_cycle(cycles);
    let lo = cpu.pull_stack(cycles);
    let hi = cpu.pull_stack(cycles);
    cpu.burn_cycle(cycles);
    cpu.pc = u16::from_le_bytes([lo, hi]).wrapping_add(1);
}

/// Software interrupt. The padding byte after the opcode is skipped,
/// the stacked status copy carries bits 4 and 5, and control moves to
/// the vector at $FFFE/$FFFF.
/// Function: (S)-:=PC,P PC:=($FFFE)
/// Flags: B I
pub fn brk(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.pc = cpu.pc.wrapping_add(1);

    let [pcl, pch] = cpu.pc.to_le_bytes();
    cpu.push_stack(pch, cycles);
    cpu.push_stack(pcl, cycles);
    cpu.push_stack(
        cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8,
        cycles,
    );
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);

    let vector = InterruptVectors::IrqBrkVector as u16;
    let lo = cpu.read_byte(vector, cycles);
    let hi = cpu.read_byte(vector.wrapping_add(1), cycles);
    cpu.pc = u16::from_le_bytes([lo, hi]);
}

/// Return from interrupt. Status comes off the stack first, with bit 4
/// dropped and bit 5 forced, then `PC` - with no +1, unlike RTS: the
/// stacked address is the real one.
/// Flags: N V D I Z C
pub fn rti(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.burn_cycle(cycles);

    let status = cpu.pull_stack(cycles);
    cpu.p = (status & !(StatusFlag::Break as u8)) | StatusFlag::Unused as u8;

    let lo = cpu.pull_stack(cycles);
    let hi = cpu.pull_stack(cycles);
    cpu.pc = u16::from_le_bytes([lo, hi]);
}

/// Clear carry flag
/// Function: C:=0
pub fn clc(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::Carry, false);
}

/// Set carry flag
/// Function: C:=1
pub fn sec(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::Carry, true);
}

/// Clear decimal flag
/// Function: D:=0
pub fn cld(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::Decimal, false);
}

/// Set decimal flag
/// Function: D:=1
pub fn sed(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::Decimal, true);
}

/// Clear interrupt disable
/// Function: I:=0
pub fn cli(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::InterruptDisable, false);
}

/// Set interrupt disable
/// Function: I:=1
pub fn sei(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::InterruptDisable, true);
}

/// Clear overflow flag
/// Function: V:=0
pub fn clv(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
    cpu.set_status_flag(StatusFlag::Overflow, false);
}

/// No operation
/// Function:
/// Flags:
pub fn nop(cpu: &mut Cpu6510, _mode: Mode, cycles: &mut u32) {
    cpu.burn_cycle(cycles);
}
