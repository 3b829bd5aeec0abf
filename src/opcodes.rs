//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode metadata table, the single source of truth
//! for 6502 instruction information: mnemonic, addressing mode, cycle cost,
//! and encoded size.
//!
//! - **151 documented opcodes** carry accurate metadata and are dispatched
//!   by the execute loop.
//! - **105 undocumented opcodes** are tagged [`Mnemonic::ILL`]; fetching one
//!   is a fatal decode error.
//!
//! `base_cycles` is the cost with no dynamic penalty applied: indexed loads
//! add one cycle on a page cross, and taken branches add one cycle plus one
//! more on a page cross. The listed costs follow this core's accounting
//! rules (every byte moved through a CPU accessor is one cycle, plus the
//! per-family extras), so read-modify-write INC/DEC cost one cycle more
//! than NMOS silicon.

use crate::addressing::AddressingMode;

/// Instruction mnemonic tag used for dispatch.
///
/// One variant per documented 6502 instruction, plus [`Mnemonic::ILL`] for
/// the undocumented encodings this core refuses to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mnemonic {
    ADC, AND, ASL, BCC, BCS, BEQ, BIT, BMI, BNE, BPL, BRK, BVC, BVS, CLC,
    CLD, CLI, CLV, CMP, CPX, CPY, DEC, DEX, DEY, EOR, INC, INX, INY, JMP,
    JSR, LDA, LDX, LDY, LSR, NOP, ORA, PHA, PHP, PLA, PLP, ROL, ROR, RTI,
    RTS, SBC, SEC, SED, SEI, STA, STX, STY, TAX, TAY, TSX, TXA, TXS, TYA,
    /// Undocumented opcode; fetching one aborts the run.
    ILL,
}

/// Metadata for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic, or [`Mnemonic::ILL`] for undocumented bytes.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this encoding.
    pub mode: AddressingMode,

    /// Cycle cost before any dynamic page-cross or branch penalty.
    pub base_cycles: u8,

    /// Total encoded size in bytes (opcode plus operands, 1-3).
    pub size_bytes: u8,
}

const fn op(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8, size_bytes: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        mode,
        base_cycles,
        size_bytes,
    }
}

/// Placeholder entry for the 105 undocumented opcodes.
const ILLEGAL: OpcodeMetadata = op(Mnemonic::ILL, AddressingMode::Implicit, 0, 1);

/// Complete opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use cycle6502::{Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::LDA);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        op(BRK, Implicit, 7, 1),    // 0x00
        op(ORA, IndirectX, 6, 2),   // 0x01
        ILLEGAL,                    // 0x02
        ILLEGAL,                    // 0x03
        ILLEGAL,                    // 0x04
        op(ORA, ZeroPage, 3, 2),    // 0x05
        op(ASL, ZeroPage, 5, 2),    // 0x06
        ILLEGAL,                    // 0x07
        op(PHP, Implicit, 3, 1),    // 0x08
        op(ORA, Immediate, 2, 2),   // 0x09
        op(ASL, Accumulator, 2, 1), // 0x0A
        ILLEGAL,                    // 0x0B
        ILLEGAL,                    // 0x0C
        op(ORA, Absolute, 4, 3),    // 0x0D
        op(ASL, Absolute, 6, 3),    // 0x0E
        ILLEGAL,                    // 0x0F
        op(BPL, Relative, 2, 2),    // 0x10
        op(ORA, IndirectY, 5, 2),   // 0x11
        ILLEGAL,                    // 0x12
        ILLEGAL,                    // 0x13
        ILLEGAL,                    // 0x14
        op(ORA, ZeroPageX, 4, 2),   // 0x15
        op(ASL, ZeroPageX, 6, 2),   // 0x16
        ILLEGAL,                    // 0x17
        op(CLC, Implicit, 2, 1),    // 0x18
        op(ORA, AbsoluteY, 4, 3),   // 0x19
        ILLEGAL,                    // 0x1A
        ILLEGAL,                    // 0x1B
        ILLEGAL,                    // 0x1C
        op(ORA, AbsoluteX, 4, 3),   // 0x1D
        op(ASL, AbsoluteX, 7, 3),   // 0x1E
        ILLEGAL,                    // 0x1F
        op(JSR, Absolute, 6, 3),    // 0x20
        op(AND, IndirectX, 6, 2),   // 0x21
        ILLEGAL,                    // 0x22
        ILLEGAL,                    // 0x23
        op(BIT, ZeroPage, 3, 2),    // 0x24
        op(AND, ZeroPage, 3, 2),    // 0x25
        op(ROL, ZeroPage, 5, 2),    // 0x26
        ILLEGAL,                    // 0x27
        op(PLP, Implicit, 4, 1),    // 0x28
        op(AND, Immediate, 2, 2),   // 0x29
        op(ROL, Accumulator, 2, 1), // 0x2A
        ILLEGAL,                    // 0x2B
        op(BIT, Absolute, 4, 3),    // 0x2C
        op(AND, Absolute, 4, 3),    // 0x2D
        op(ROL, Absolute, 6, 3),    // 0x2E
        ILLEGAL,                    // 0x2F
        op(BMI, Relative, 2, 2),    // 0x30
        op(AND, IndirectY, 5, 2),   // 0x31
        ILLEGAL,                    // 0x32
        ILLEGAL,                    // 0x33
        ILLEGAL,                    // 0x34
        op(AND, ZeroPageX, 4, 2),   // 0x35
        op(ROL, ZeroPageX, 6, 2),   // 0x36
        ILLEGAL,                    // 0x37
        op(SEC, Implicit, 2, 1),    // 0x38
        op(AND, AbsoluteY, 4, 3),   // 0x39
        ILLEGAL,                    // 0x3A
        ILLEGAL,                    // 0x3B
        ILLEGAL,                    // 0x3C
        op(AND, AbsoluteX, 4, 3),   // 0x3D
        op(ROL, AbsoluteX, 7, 3),   // 0x3E
        ILLEGAL,                    // 0x3F
        op(RTI, Implicit, 6, 1),    // 0x40
        op(EOR, IndirectX, 6, 2),   // 0x41
        ILLEGAL,                    // 0x42
        ILLEGAL,                    // 0x43
        ILLEGAL,                    // 0x44
        op(EOR, ZeroPage, 3, 2),    // 0x45
        op(LSR, ZeroPage, 5, 2),    // 0x46
        ILLEGAL,                    // 0x47
        op(PHA, Implicit, 3, 1),    // 0x48
        op(EOR, Immediate, 2, 2),   // 0x49
        op(LSR, Accumulator, 2, 1), // 0x4A
        ILLEGAL,                    // 0x4B
        op(JMP, Absolute, 3, 3),    // 0x4C
        op(EOR, Absolute, 4, 3),    // 0x4D
        op(LSR, Absolute, 6, 3),    // 0x4E
        ILLEGAL,                    // 0x4F
        op(BVC, Relative, 2, 2),    // 0x50
        op(EOR, IndirectY, 5, 2),   // 0x51
        ILLEGAL,                    // 0x52
        ILLEGAL,                    // 0x53
        ILLEGAL,                    // 0x54
        op(EOR, ZeroPageX, 4, 2),   // 0x55
        op(LSR, ZeroPageX, 6, 2),   // 0x56
        ILLEGAL,                    // 0x57
        op(CLI, Implicit, 2, 1),    // 0x58
        op(EOR, AbsoluteY, 4, 3),   // 0x59
        ILLEGAL,                    // 0x5A
        ILLEGAL,                    // 0x5B
        ILLEGAL,                    // 0x5C
        op(EOR, AbsoluteX, 4, 3),   // 0x5D
        op(LSR, AbsoluteX, 7, 3),   // 0x5E
        ILLEGAL,                    // 0x5F
        op(RTS, Implicit, 6, 1),    // 0x60
        op(ADC, IndirectX, 6, 2),   // 0x61
        ILLEGAL,                    // 0x62
        ILLEGAL,                    // 0x63
        ILLEGAL,                    // 0x64
        op(ADC, ZeroPage, 3, 2),    // 0x65
        op(ROR, ZeroPage, 5, 2),    // 0x66
        ILLEGAL,                    // 0x67
        op(PLA, Implicit, 4, 1),    // 0x68
        op(ADC, Immediate, 2, 2),   // 0x69
        op(ROR, Accumulator, 2, 1), // 0x6A
        ILLEGAL,                    // 0x6B
        op(JMP, Indirect, 5, 3),    // 0x6C
        op(ADC, Absolute, 4, 3),    // 0x6D
        op(ROR, Absolute, 6, 3),    // 0x6E
        ILLEGAL,                    // 0x6F
        op(BVS, Relative, 2, 2),    // 0x70
        op(ADC, IndirectY, 5, 2),   // 0x71
        ILLEGAL,                    // 0x72
        ILLEGAL,                    // 0x73
        ILLEGAL,                    // 0x74
        op(ADC, ZeroPageX, 4, 2),   // 0x75
        op(ROR, ZeroPageX, 6, 2),   // 0x76
        ILLEGAL,                    // 0x77
        op(SEI, Implicit, 2, 1),    // 0x78
        op(ADC, AbsoluteY, 4, 3),   // 0x79
        ILLEGAL,                    // 0x7A
        ILLEGAL,                    // 0x7B
        ILLEGAL,                    // 0x7C
        op(ADC, AbsoluteX, 4, 3),   // 0x7D
        op(ROR, AbsoluteX, 7, 3),   // 0x7E
        ILLEGAL,                    // 0x7F
        ILLEGAL,                    // 0x80
        op(STA, IndirectX, 6, 2),   // 0x81
        ILLEGAL,                    // 0x82
        ILLEGAL,                    // 0x83
        op(STY, ZeroPage, 3, 2),    // 0x84
        op(STA, ZeroPage, 3, 2),    // 0x85
        op(STX, ZeroPage, 3, 2),    // 0x86
        ILLEGAL,                    // 0x87
        op(DEY, Implicit, 2, 1),    // 0x88
        ILLEGAL,                    // 0x89
        op(TXA, Implicit, 2, 1),    // 0x8A
        ILLEGAL,                    // 0x8B
        op(STY, Absolute, 4, 3),    // 0x8C
        op(STA, Absolute, 4, 3),    // 0x8D
        op(STX, Absolute, 4, 3),    // 0x8E
        ILLEGAL,                    // 0x8F
        op(BCC, Relative, 2, 2),    // 0x90
        op(STA, IndirectY, 6, 2),   // 0x91
        ILLEGAL,                    // 0x92
        ILLEGAL,                    // 0x93
        op(STY, ZeroPageX, 4, 2),   // 0x94
        op(STA, ZeroPageX, 4, 2),   // 0x95
        op(STX, ZeroPageY, 4, 2),   // 0x96
        ILLEGAL,                    // 0x97
        op(TYA, Implicit, 2, 1),    // 0x98
        op(STA, AbsoluteY, 5, 3),   // 0x99
        op(TXS, Implicit, 2, 1),    // 0x9A
        ILLEGAL,                    // 0x9B
        ILLEGAL,                    // 0x9C
        op(STA, AbsoluteX, 5, 3),   // 0x9D
        ILLEGAL,                    // 0x9E
        ILLEGAL,                    // 0x9F
        op(LDY, Immediate, 2, 2),   // 0xA0
        op(LDA, IndirectX, 6, 2),   // 0xA1
        op(LDX, Immediate, 2, 2),   // 0xA2
        ILLEGAL,                    // 0xA3
        op(LDY, ZeroPage, 3, 2),    // 0xA4
        op(LDA, ZeroPage, 3, 2),    // 0xA5
        op(LDX, ZeroPage, 3, 2),    // 0xA6
        ILLEGAL,                    // 0xA7
        op(TAY, Implicit, 2, 1),    // 0xA8
        op(LDA, Immediate, 2, 2),   // 0xA9
        op(TAX, Implicit, 2, 1),    // 0xAA
        ILLEGAL,                    // 0xAB
        op(LDY, Absolute, 4, 3),    // 0xAC
        op(LDA, Absolute, 4, 3),    // 0xAD
        op(LDX, Absolute, 4, 3),    // 0xAE
        ILLEGAL,                    // 0xAF
        op(BCS, Relative, 2, 2),    // 0xB0
        op(LDA, IndirectY, 5, 2),   // 0xB1
        ILLEGAL,                    // 0xB2
        ILLEGAL,                    // 0xB3
        op(LDY, ZeroPageX, 4, 2),   // 0xB4
        op(LDA, ZeroPageX, 4, 2),   // 0xB5
        op(LDX, ZeroPageY, 4, 2),   // 0xB6
        ILLEGAL,                    // 0xB7
        op(CLV, Implicit, 2, 1),    // 0xB8
        op(LDA, AbsoluteY, 4, 3),   // 0xB9
        op(TSX, Implicit, 2, 1),    // 0xBA
        ILLEGAL,                    // 0xBB
        op(LDY, AbsoluteX, 4, 3),   // 0xBC
        op(LDA, AbsoluteX, 4, 3),   // 0xBD
        op(LDX, AbsoluteY, 4, 3),   // 0xBE
        ILLEGAL,                    // 0xBF
        op(CPY, Immediate, 2, 2),   // 0xC0
        op(CMP, IndirectX, 6, 2),   // 0xC1
        ILLEGAL,                    // 0xC2
        ILLEGAL,                    // 0xC3
        op(CPY, ZeroPage, 3, 2),    // 0xC4
        op(CMP, ZeroPage, 3, 2),    // 0xC5
        op(DEC, ZeroPage, 6, 2),    // 0xC6
        ILLEGAL,                    // 0xC7
        op(INY, Implicit, 2, 1),    // 0xC8
        op(CMP, Immediate, 2, 2),   // 0xC9
        op(DEX, Implicit, 2, 1),    // 0xCA
        ILLEGAL,                    // 0xCB
        op(CPY, Absolute, 4, 3),    // 0xCC
        op(CMP, Absolute, 4, 3),    // 0xCD
        op(DEC, Absolute, 7, 3),    // 0xCE
        ILLEGAL,                    // 0xCF
        op(BNE, Relative, 2, 2),    // 0xD0
        op(CMP, IndirectY, 5, 2),   // 0xD1
        ILLEGAL,                    // 0xD2
        ILLEGAL,                    // 0xD3
        ILLEGAL,                    // 0xD4
        op(CMP, ZeroPageX, 4, 2),   // 0xD5
        op(DEC, ZeroPageX, 7, 2),   // 0xD6
        ILLEGAL,                    // 0xD7
        op(CLD, Implicit, 2, 1),    // 0xD8
        op(CMP, AbsoluteY, 4, 3),   // 0xD9
        ILLEGAL,                    // 0xDA
        ILLEGAL,                    // 0xDB
        ILLEGAL,                    // 0xDC
        op(CMP, AbsoluteX, 4, 3),   // 0xDD
        op(DEC, AbsoluteX, 8, 3),   // 0xDE
        ILLEGAL,                    // 0xDF
        op(CPX, Immediate, 2, 2),   // 0xE0
        op(SBC, IndirectX, 6, 2),   // 0xE1
        ILLEGAL,                    // 0xE2
        ILLEGAL,                    // 0xE3
        op(CPX, ZeroPage, 3, 2),    // 0xE4
        op(SBC, ZeroPage, 3, 2),    // 0xE5
        op(INC, ZeroPage, 6, 2),    // 0xE6
        ILLEGAL,                    // 0xE7
        op(INX, Implicit, 2, 1),    // 0xE8
        op(SBC, Immediate, 2, 2),   // 0xE9
        op(NOP, Implicit, 2, 1),    // 0xEA
        ILLEGAL,                    // 0xEB
        op(CPX, Absolute, 4, 3),    // 0xEC
        op(SBC, Absolute, 4, 3),    // 0xED
        op(INC, Absolute, 7, 3),    // 0xEE
        ILLEGAL,                    // 0xEF
        op(BEQ, Relative, 2, 2),    // 0xF0
        op(SBC, IndirectY, 5, 2),   // 0xF1
        ILLEGAL,                    // 0xF2
        ILLEGAL,                    // 0xF3
        ILLEGAL,                    // 0xF4
        op(SBC, ZeroPageX, 4, 2),   // 0xF5
        op(INC, ZeroPageX, 7, 2),   // 0xF6
        ILLEGAL,                    // 0xF7
        op(SED, Implicit, 2, 1),    // 0xF8
        op(SBC, AbsoluteY, 4, 3),   // 0xF9
        ILLEGAL,                    // 0xFA
        ILLEGAL,                    // 0xFB
        ILLEGAL,                    // 0xFC
        op(SBC, AbsoluteX, 4, 3),   // 0xFD
        op(INC, AbsoluteX, 8, 3),   // 0xFE
        ILLEGAL,                    // 0xFF
    ]
};
