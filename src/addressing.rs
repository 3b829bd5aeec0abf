//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. Each mode determines how the CPU
//! interprets the operand bytes that follow an opcode and how the effective
//! address is formed. Resolution (operand fetch, index arithmetic, cycle
//! charging) lives on [`crate::CPU`]; this enum is the shared vocabulary
//! between the opcode table and the instruction handlers.

/// 6502 addressing mode enumeration.
///
/// Operand sizes:
/// - **0 bytes**: `Implicit`, `Accumulator`
/// - **1 byte**: `Immediate`, `ZeroPage`, `ZeroPageX`, `ZeroPageY`,
///   `Relative`, `IndirectX`, `IndirectY`
/// - **2 bytes**: `Absolute`, `AbsoluteX`, `AbsoluteY`, `Indirect`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction (CLC, RTS).
    Implicit,

    /// Operates directly on the accumulator (ASL A, ROR A).
    Accumulator,

    /// The operand byte is the value itself (LDA #$10).
    Immediate,

    /// One-byte address into the zero page (LDA $80).
    ZeroPage,

    /// Zero page address plus X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address plus Y, wrapping within the zero page.
    ZeroPageY,

    /// Signed 8-bit displacement used by the branch instructions.
    Relative,

    /// Full little-endian 16-bit address (JMP $1234).
    Absolute,

    /// 16-bit address plus X. Loads pay one extra cycle on a page cross;
    /// stores and read-modify-write operations always pay it.
    AbsoluteX,

    /// 16-bit address plus Y, same penalty rules as `AbsoluteX`.
    AbsoluteY,

    /// 16-bit pointer dereference; used only by JMP.
    Indirect,

    /// Indexed indirect: the operand plus X selects a zero-page pointer,
    /// which is dereferenced to the effective address.
    IndirectX,

    /// Indirect indexed: the operand selects a zero-page pointer whose value
    /// plus Y is the effective address. Loads pay one extra cycle on a page
    /// cross; stores always pay it.
    IndirectY,
}
