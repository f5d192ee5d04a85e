use crate::cpu_6510::opcodes_illegal::*;
use crate::cpu_6510::opcodes_jump::*;
use crate::cpu_6510::opcodes_logical::*;
use crate::cpu_6510::opcodes_move::*;
use crate::cpu_6510::Cpu6510;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Absolute,         // abs
    AbsoluteIndexedX, // abx
    AbsoluteIndexedY, // aby
    Accumulator,      // a
    Immediate,        // imm
    Implied,          // imp
    Indirect,         // ind
    IndirectX,        // izx
    IndirectY,        // izy
    Relative,         // rel
    ZeroPage,         // zp
    ZeroPageX,        // zpx
    ZeroPageY,        // zpy
    None,             // unmapped entries
}

/// Every opcode byte the interpreter models: the documented matrix
/// plus the LAX family. Everything else dispatches to the inert
/// `unhandled` entry.
#[allow(non_camel_case_types)]
pub enum OpCode {
    BRK = 0x00,
    ORA_izx = 0x01,
    ORA_zp = 0x05,
    ASL_zp = 0x06,
    PHP = 0x08,
    ORA_imm = 0x09,
    ASL_acc = 0x0A,
    ORA_abs = 0x0D,
    ASL_abs = 0x0E,
    BPL_rel = 0x10,
    ORA_izy = 0x11,
    ORA_zpx = 0x15,
    ASL_zpx = 0x16,
    CLC = 0x18,
    ORA_aby = 0x19,
    ORA_abx = 0x1D,
    ASL_abx = 0x1E,
    JSR_abs = 0x20,
    AND_izx = 0x21,
    BIT_zp = 0x24,
    AND_zp = 0x25,
    ROL_zp = 0x26,
    PLP = 0x28,
    AND_imm = 0x29,
    ROL_acc = 0x2A,
    BIT_abs = 0x2C,
    AND_abs = 0x2D,
    ROL_abs = 0x2E,
    BMI_rel = 0x30,
    AND_izy = 0x31,
    AND_zpx = 0x35,
    ROL_zpx = 0x36,
    SEC = 0x38,
    AND_aby = 0x39,
    AND_abx = 0x3D,
    ROL_abx = 0x3E,
    RTI = 0x40,
    EOR_izx = 0x41,
    EOR_zp = 0x45,
    LSR_zp = 0x46,
    PHA = 0x48,
    EOR_imm = 0x49,
    LSR_acc = 0x4A,
    JMP_abs = 0x4C,
    EOR_abs = 0x4D,
    LSR_abs = 0x4E,
    BVC_rel = 0x50,
    EOR_izy = 0x51,
    EOR_zpx = 0x55,
    LSR_zpx = 0x56,
    CLI = 0x58,
    EOR_aby = 0x59,
    EOR_abx = 0x5D,
    LSR_abx = 0x5E,
    RTS = 0x60,
    ADC_izx = 0x61,
    ADC_zp = 0x65,
    ROR_zp = 0x66,
    PLA = 0x68,
    ADC_imm = 0x69,
    ROR_acc = 0x6A,
    JMP_ind = 0x6C,
    ADC_abs = 0x6D,
    ROR_abs = 0x6E,
    BVS_rel = 0x70,
    ADC_izy = 0x71,
    ADC_zpx = 0x75,
    ROR_zpx = 0x76,
    SEI = 0x78,
    ADC_aby = 0x79,
    ADC_abx = 0x7D,
    ROR_abx = 0x7E,
    STA_izx = 0x81,
    STY_zp = 0x84,
    STA_zp = 0x85,
    STX_zp = 0x86,
    DEY = 0x88,
    TXA = 0x8A,
    STY_abs = 0x8C,
    STA_abs = 0x8D,
    STX_abs = 0x8E,
    BCC_rel = 0x90,
    STA_izy = 0x91,
    STY_zpx = 0x94,
    STA_zpx = 0x95,
    STX_zpy = 0x96,
    TYA = 0x98,
    STA_aby = 0x99,
    TXS = 0x9A,
    STA_abx = 0x9D,
    LDY_imm = 0xA0,
    LDA_izx = 0xA1,
    LDX_imm = 0xA2,
    LAX_izx = 0xA3,
    LDY_zp = 0xA4,
    LDA_zp = 0xA5,
    LDX_zp = 0xA6,
    LAX_zp = 0xA7,
    TAY = 0xA8,
    LDA_imm = 0xA9,
    TAX = 0xAA,
    LAX_imm = 0xAB,
    LDY_abs = 0xAC,
    LDA_abs = 0xAD,
    LDX_abs = 0xAE,
    LAX_abs = 0xAF,
    BCS_rel = 0xB0,
    LDA_izy = 0xB1,
    LAX_izy = 0xB3,
    LDY_zpx = 0xB4,
    LDA_zpx = 0xB5,
    LDX_zpy = 0xB6,
    LAX_zpy = 0xB7,
    CLV = 0xB8,
    LDA_aby = 0xB9,
    TSX = 0xBA,
    LDY_abx = 0xBC,
    LDA_abx = 0xBD,
    LDX_aby = 0xBE,
    LAX_aby = 0xBF,
    CPY_imm = 0xC0,
    CMP_izx = 0xC1,
    CPY_zp = 0xC4,
    CMP_zp = 0xC5,
    DEC_zp = 0xC6,
    INY = 0xC8,
    CMP_imm = 0xC9,
    DEX = 0xCA,
    CPY_abs = 0xCC,
    CMP_abs = 0xCD,
    DEC_abs = 0xCE,
    BNE_rel = 0xD0,
    CMP_izy = 0xD1,
    CMP_zpx = 0xD5,
    DEC_zpx = 0xD6,
    CLD = 0xD8,
    CMP_aby = 0xD9,
    CMP_abx = 0xDD,
    DEC_abx = 0xDE,
    CPX_imm = 0xE0,
    SBC_izx = 0xE1,
    CPX_zp = 0xE4,
    SBC_zp = 0xE5,
    INC_zp = 0xE6,
    INX = 0xE8,
    SBC_imm = 0xE9,
    NOP = 0xEA,
    CPX_abs = 0xEC,
    SBC_abs = 0xED,
    INC_abs = 0xEE,
    BEQ_rel = 0xF0,
    SBC_izy = 0xF1,
    SBC_zpx = 0xF5,
    INC_zpx = 0xF6,
    SED = 0xF8,
    SBC_aby = 0xF9,
    SBC_abx = 0xFD,
    INC_abx = 0xFE,
}

pub type OperationFn = fn(&mut Cpu6510, Mode, &mut u32);

#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    // $00
    brk, ora, unhandled, unhandled, unhandled, ora, asl, unhandled,
    php, ora, asl, unhandled, unhandled, ora, asl, unhandled,
    // $10
    bpl, ora, unhandled, unhandled, unhandled, ora, asl, unhandled,
    clc, ora, unhandled, unhandled, unhandled, ora, asl, unhandled,
    // $20
    jsr, and, unhandled, unhandled, bit, and, rol, unhandled,
    plp, and, rol, unhandled, bit, and, rol, unhandled,
    // $30
    bmi, and, unhandled, unhandled, unhandled, and, rol, unhandled,
    sec, and, unhandled, unhandled, unhandled, and, rol, unhandled,
    // $40
    rti, eor, unhandled, unhandled, unhandled, eor, lsr, unhandled,
    pha, eor, lsr, unhandled, jmp, eor, lsr, unhandled,
    // $50
    bvc, eor, unhandled, unhandled, unhandled, eor, lsr, unhandled,
    cli, eor, unhandled, unhandled, unhandled, eor, lsr, unhandled,
    // $60
    rts, adc, unhandled, unhandled, unhandled, adc, ror, unhandled,
    pla, adc, ror, unhandled, jmp, adc, ror, unhandled,
    // $70
    bvs, adc, unhandled, unhandled, unhandled, adc, ror, unhandled,
    sei, adc, unhandled, unhandled, unhandled, adc, ror, unhandled,
    // $80
    unhandled, sta, unhandled, unhandled, sty, sta, stx, unhandled,
    dey, unhandled, txa, unhandled, sty, sta, stx, unhandled,
    // $90
    bcc, sta, unhandled, unhandled, sty, sta, stx, unhandled,
    tya, sta, txs, unhandled, unhandled, sta, unhandled, unhandled,
    // $A0
    ldy, lda, ldx, lax, ldy, lda, ldx, lax,
    tay, lda, tax, lax, ldy, lda, ldx, lax,
    // $B0
    bcs, lda, unhandled, lax, ldy, lda, ldx, lax,
    clv, lda, tsx, unhandled, ldy, lda, ldx, lax,
    // $C0
    cpy, cmp, unhandled, unhandled, cpy, cmp, dec, unhandled,
    iny, cmp, dex, unhandled, cpy, cmp, dec, unhandled,
    // $D0
    bne, cmp, unhandled, unhandled, unhandled, cmp, dec, unhandled,
    cld, cmp, unhandled, unhandled, unhandled, cmp, dec, unhandled,
    // $E0
    cpx, sbc, unhandled, unhandled, cpx, sbc, inc, unhandled,
    inx, sbc, nop, unhandled, cpx, sbc, inc, unhandled,
    // $F0
    beq, sbc, unhandled, unhandled, unhandled, sbc, inc, unhandled,
    sed, sbc, unhandled, unhandled, unhandled, sbc, inc, unhandled,
];

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    // $00
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::None,
    Mode::None, Mode::Absolute, Mode::Absolute, Mode::None,
    // $10
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
    // $20
    Mode::Absolute, Mode::IndirectX, Mode::None, Mode::None,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::None,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    // $30
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
    // $40
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::None,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    // $50
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
    // $60
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Accumulator, Mode::None,
    Mode::Indirect, Mode::Absolute, Mode::Absolute, Mode::None,
    // $70
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
    // $80
    Mode::None, Mode::IndirectX, Mode::None, Mode::None,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::None, Mode::Implied, Mode::None,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    // $90
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::None, Mode::None,
    // $A0
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    // $B0
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY,
    Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::ZeroPageY,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::None,
    Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedY,
    // $C0
    Mode::Immediate, Mode::IndirectX, Mode::None, Mode::None,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::None,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    // $D0
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
    // $E0
    Mode::Immediate, Mode::IndirectX, Mode::None, Mode::None,
    Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::None,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::None,
    Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::None,
    // $F0
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::None,
    Mode::None, Mode::ZeroPageX, Mode::ZeroPageX, Mode::None,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::None, Mode::None,
    Mode::None, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::None,
];

/// Mnemonics for diagnostics and trace output. Unmapped entries render
/// as "???".
#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    // $00
    "brk", "ora", "???", "???", "???", "ora", "asl", "???",
    "php", "ora", "asl", "???", "???", "ora", "asl", "???",
    // $10
    "bpl", "ora", "???", "???", "???", "ora", "asl", "???",
    "clc", "ora", "???", "???", "???", "ora", "asl", "???",
    // $20
    "jsr", "and", "???", "???", "bit", "and", "rol", "???",
    "plp", "and", "rol", "???", "bit", "and", "rol", "???",
    // $30
    "bmi", "and", "???", "???", "???", "and", "rol", "???",
    "sec", "and", "???", "???", "???", "and", "rol", "???",
    // $40
    "rti", "eor", "???", "???", "???", "eor", "lsr", "???",
    "pha", "eor", "lsr", "???", "jmp", "eor", "lsr", "???",
    // $50
    "bvc", "eor", "???", "???", "???", "eor", "lsr", "???",
    "cli", "eor", "???", "???", "???", "eor", "lsr", "???",
    // $60
    "rts", "adc", "???", "???", "???", "adc", "ror", "???",
    "pla", "adc", "ror", "???", "jmp", "adc", "ror", "???",
    // $70
    "bvs", "adc", "???", "???", "???", "adc", "ror", "???",
    "sei", "adc", "???", "???", "???", "adc", "ror", "???",
    // $80
    "???", "sta", "???", "???", "sty", "sta", "stx", "???",
    "dey", "???", "txa", "???", "sty", "sta", "stx", "???",
    // $90
    "bcc", "sta", "???", "???", "sty", "sta", "stx", "???",
    "tya", "sta", "txs", "???", "???", "sta", "???", "???",
    // $A0
    "ldy", "lda", "ldx", "lax", "ldy", "lda", "ldx", "lax",
    "tay", "lda", "tax", "lax", "ldy", "lda", "ldx", "lax",
    // $B0
    "bcs", "lda", "???", "lax", "ldy", "lda", "ldx", "lax",
    "clv", "lda", "tsx", "???", "ldy", "lda", "ldx", "lax",
    // $C0
    "cpy", "cmp", "???", "???", "cpy", "cmp", "dec", "???",
    "iny", "cmp", "dex", "???", "cpy", "cmp", "dec", "???",
    // $D0
    "bne", "cmp", "???", "???", "???", "cmp", "dec", "???",
    "cld", "cmp", "???", "???", "???", "cmp", "dec", "???",
    // $E0
    "cpx", "sbc", "???", "???", "cpx", "sbc", "inc", "???",
    "inx", "sbc", "nop", "???", "cpx", "sbc", "inc", "???",
    // $F0
    "beq", "sbc", "???", "???", "???", "sbc", "inc", "???",
    "sed", "sbc", "???", "???", "???", "sbc", "inc", "???",
];
