use crate::constants::{memory_range, InterruptVectors};
use crate::memory::Memory;
use crate::opcodes::{self, Mode};

pub mod opcodes_illegal;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
mod test_helpers;


/// The status register comes out of reset with the unused bit and the
/// interrupt-disable bit set, everything else clear.
pub const RESET_STATUS_FLAG: u8 = 0b0010_0100;

#[rustfmt::skip]
pub enum StatusFlag {
    Carry            = 0b0000_0001,
    Zero             = 0b0000_0010,
    InterruptDisable = 0b0000_0100,
    Decimal          = 0b0000_1000,
    Break            = 0b0001_0000,
    Unused           = 0b0010_0000,
    Overflow         = 0b0100_0000,
    Negative         = 0b1000_0000,
}

/// Two addresses are on the same page when they agree on the high
/// byte. Indexed reads pay an extra cycle only when this fails.
fn crosses_page(base: u16, effective: u16) -> bool {
    base & 0xFF00 != effective & 0xFF00
}

/// This struct implements the MOS Technology 6510, the 6502 derivative
/// at the heart of the Commodore 64.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6510
pub struct Cpu6510 {
    /// "A" register - The accumulator. Typical results of operations are
    /// stored here. In combination with the status register, supports
    /// carrying, overflow detection, and so on.
    pub a: u8,
    /// "X" index register. Feeds several addressing modes and works as a
    /// loop counter with INX/DEX and the branch instructions.
    pub x: u8,
    /// "Y" index register.
    pub y: u8,

    /// "PC" - Program counter. Always points at the next byte to fetch
    /// and wraps modulo 2^16.
    pub pc: u16,

    /// "S" - Stack pointer into the hardcoded stack page $0100-$01FF.
    /// The stack grows downwards: push decrements, pull increments,
    /// both wrapping silently within the page.
    pub sp: u8,

    /// "P" - Status register.
    ///
    ///   7  bit  0
    /// ---- ----
    /// NV-B DIZC
    /// |||| ||||
    /// |||| |||+- Carry
    /// |||| ||+-- Zero
    /// |||| |+--- Interrupt Disable
    /// |||| +---- Decimal
    /// |||+------ Break: only ever meaningful in stacked copies
    /// ||+------- Unused: reads back as 1 in every stacked copy
    /// |+-------- Overflow
    /// +--------- Negative
    pub p: u8,

    /// The flat 64 KiB address space, owned exclusively by this
    /// processor. Hosts may read and write it freely between calls to
    /// `execute`; nothing else aliases it.
    pub memory: Memory,
}

impl Cpu6510 {
    pub fn new() -> Cpu6510 {
        let mut cpu = Cpu6510 {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            p: 0,
            memory: Memory::new(),
        };
        cpu.reset();
        cpu
    }

    /// Put the processor back into its post-reset state: registers
    /// cleared, `PC` at the reset vector, memory zeroed apart from the
    /// two 6510 port bytes. The kernal init sequence and cartridge
    /// detection belong to the host, not to this core.
    pub fn reset(&mut self) {
        self.pc = InterruptVectors::ResetVector as u16;
        self.sp = 0xFF;

        self.a = 0;
        self.x = 0;
        self.y = 0;

        self.p = RESET_STATUS_FLAG;

        self.memory.initialize();
    }

    /// Read the byte at `PC` and advance it. One bus cycle.
    fn fetch_byte(&mut self, cycles: &mut u32) -> u8 {
        let value = self.memory.read_u8(self.pc);
        self.pc = self.pc.wrapping_add(1);
        *cycles += 1;
        value
    }

    /// Fetch a little-endian word operand, low byte first. Two bus
    /// cycles.
    fn fetch_word(&mut self, cycles: &mut u32) -> u16 {
        let lo = self.fetch_byte(cycles);
        let hi = self.fetch_byte(cycles);
        u16::from_le_bytes([lo, hi])
    }

    fn read_byte(&mut self, address: u16, cycles: &mut u32) -> u8 {
        *cycles += 1;
        self.memory.read_u8(address)
    }

    fn write_byte(&mut self, address: u16, value: u8, cycles: &mut u32) {
        *cycles += 1;
        self.memory.set_u8(address, value);
    }

    /// The hardware spends several cycles of many instructions on bus
    /// reads it throws away; model them as a discarded read of `PC`.
    fn burn_cycle(&mut self, cycles: &mut u32) {
        let _ = self.memory.read_u8(self.pc);
        *cycles += 1;
    }

    /// Resolve the effective address for `mode`, spending exactly the
    /// cycles the address-computation phase of the real instruction
    /// does.
    ///
    /// Write and read-modify-write instructions pass `force_penalty`:
    /// the hardware cannot back out of a committed write, so their
    /// indexed forms spend the fix-up cycle whether or not the page
    /// boundary was actually crossed. Read instructions pass false and
    /// pay only on a real crossing.
    fn operand_address(&mut self, mode: Mode, cycles: &mut u32, force_penalty: bool) -> u16 {
        match mode {
            Mode::Absolute => self.fetch_word(cycles),
            Mode::AbsoluteIndexedX => {
                let base = self.fetch_word(cycles);
                let effective = base.wrapping_add(self.x as u16);
                if force_penalty || crosses_page(base, effective) {
                    *cycles += 1;
                }
                effective
            }
            Mode::AbsoluteIndexedY => {
                let base = self.fetch_word(cycles);
                let effective = base.wrapping_add(self.y as u16);
                if force_penalty || crosses_page(base, effective) {
                    *cycles += 1;
                }
                effective
            }
            Mode::ZeroPage => self.fetch_byte(cycles) as u16,
            Mode::ZeroPageX => {
                // The index add happens inside the zero page; a carry
                // out of the low byte is discarded, never propagated
                // into $01xx.
                let address = self.fetch_byte(cycles).wrapping_add(self.x);
                *cycles += 1;
                address as u16
            }
            Mode::ZeroPageY => {
                let address = self.fetch_byte(cycles).wrapping_add(self.y);
                *cycles += 1;
                address as u16
            }
            Mode::IndirectX => {
                let pointer = self.fetch_byte(cycles).wrapping_add(self.x);
                *cycles += 1;
                let lo = self.read_byte(pointer as u16, cycles);
                let hi = self.read_byte(pointer.wrapping_add(1) as u16, cycles);
                u16::from_le_bytes([lo, hi])
            }
            Mode::IndirectY => {
                let pointer = self.fetch_byte(cycles);
                let lo = self.read_byte(pointer as u16, cycles);
                let hi = self.read_byte(pointer.wrapping_add(1) as u16, cycles);
                let base = u16::from_le_bytes([lo, hi]);
                let effective = base.wrapping_add(self.y as u16);
                if force_penalty || crosses_page(base, effective) {
                    *cycles += 1;
                }
                effective
            }
            Mode::Indirect => {
                // The NMOS pointer fetch never carries into the high
                // byte: a pointer at $xxFF reads its high byte from
                // $xx00, not from the next page.
                let pointer = self.fetch_word(cycles);
                let lo = self.read_byte(pointer, cycles);
                let hi_address = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let hi = self.read_byte(hi_address, cycles);
                u16::from_le_bytes([lo, hi])
            }
            Mode::Accumulator | Mode::Immediate | Mode::Implied | Mode::Relative | Mode::None => {
                unreachable!("no address resolution is defined for {:?}", mode)
            }
        }
    }

    /// Fetch the operand value for a read instruction. Immediate mode
    /// is the operand byte itself; every other mode resolves an address
    /// and reads through it, paying the page-cross penalty only when
    /// the boundary is actually crossed.
    fn read_operand(&mut self, mode: Mode, cycles: &mut u32) -> u8 {
        match mode {
            Mode::Immediate => self.fetch_byte(cycles),
            _ => {
                let address = self.operand_address(mode, cycles, false);
                self.read_byte(address, cycles)
            }
        }
    }

    /// Push a byte onto the stack page and grow downwards. The stack
    /// pointer wraps within page $01.
    fn push_stack(&mut self, value: u8, cycles: &mut u32) {
        let address = memory_range::STACK.min + self.sp as u16;
        self.write_byte(address, value, cycles);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pull a byte off the stack page, incrementing first.
    fn pull_stack(&mut self, cycles: &mut u32) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = memory_range::STACK.min + self.sp as u16;
        self.read_byte(address, cycles)
    }

    /// These flags are commonly set together.
    fn update_zero_and_negative_flag(&mut self, value: u8) {
        self.set_status_flag(StatusFlag::Zero, value == 0);
        self.set_status_flag(StatusFlag::Negative, value & 0b1000_0000 != 0);
    }

    fn set_status_flag(&mut self, status_flag: StatusFlag, value: bool) {
        if value {
            self.p |= status_flag as u8;
        } else {
            self.p &= !(status_flag as u8);
        }
    }

    pub fn is_status_flag_set(&self, status_flag: StatusFlag) -> bool {
        let flag = status_flag as u8;
        self.p & flag == flag
    }

    /// The carry flag as a 0 or 1 value, for the arithmetic and rotate
    /// kernels that fold it into their result.
    fn get_carry(&self) -> u8 {
        self.p & StatusFlag::Carry as u8
    }

    /// Fetch, decode and run exactly one instruction, returning the
    /// number of bus cycles it consumed. The call is atomic from the
    /// host's perspective: between two calls the host may freely
    /// inspect or rewrite registers and memory.
    pub fn execute(&mut self) -> u32 {
        let mut cycles = 0;
        let opcode = self.fetch_byte(&mut cycles);

        // The operations are all contained in tables that match up the
        // opcode to its implementation details.
        let operation = opcodes::OPERATION_FN_TABLE[opcode as usize];
        let mode = opcodes::ADDRESSING_MODE_TABLE[opcode as usize];
        operation(self, mode, &mut cycles);

        cycles
    }
}
