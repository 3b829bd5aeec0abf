//! # Load and Store Instructions
//!
//! - LDA/LDX/LDY: read a byte through the addressing mode into a register,
//!   updating Z and N.
//! - STA/STX/STY: write a register to the effective address. Stores never
//!   touch flags, and the indexed absolute and indirect,Y forms always pay
//!   the page-cross penalty cycle.

use crate::{AddressingMode, MemoryBus, CPU};

/// LDA: load the accumulator. Sets Z and N.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.a = cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.a);
}

/// LDX: load the X register. Sets Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.x = cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.x);
}

/// LDY: load the Y register. Sets Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.y = cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.y);
}

/// STA: store the accumulator. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.store_address(mode, memory);
    cpu.write_byte(addr, cpu.a, memory);
}

/// STX: store the X register. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.store_address(mode, memory);
    cpu.write_byte(addr, cpu.x, memory);
}

/// STY: store the Y register. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.store_address(mode, memory);
    cpu.write_byte(addr, cpu.y, memory);
}
