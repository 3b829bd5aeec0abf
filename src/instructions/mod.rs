//! # Instruction Implementations
//!
//! Per-family handlers for the 6502 instruction set. Each handler runs after
//! the opcode fetch has been charged and PC points at the first operand
//! byte; it resolves its addressing mode through the CPU's cycle-charging
//! accessors, applies the operation, and updates flags.
//!
//! ## Families
//!
//! - **alu**: ADC, SBC, CMP, CPX, CPY, AND, ORA, EOR, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **stack**: PHA, PHP, PLA, PLP
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
