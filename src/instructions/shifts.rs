//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. The accumulator variants transform A in place; the
//! memory variants read through the addressing mode, transform, and write
//! back (indexed absolute uses the always-penalty address flavor). Each
//! transform charges one cycle for the shifter pass.

use crate::{AddressingMode, MemoryBus, CPU};

/// Arithmetic shift left: bit 7 into carry, zero into bit 0.
fn asl_value(cpu: &mut CPU, operand: u8) -> u8 {
    let result = operand << 1;
    cpu.flag_c = (operand & 0x80) != 0;
    cpu.set_nz(result);
    cpu.cycles -= 1;
    result
}

/// Logical shift right: bit 0 into carry, zero into bit 7. N is always
/// cleared.
fn lsr_value(cpu: &mut CPU, operand: u8) -> u8 {
    let result = operand >> 1;
    cpu.flag_c = (operand & 0x01) != 0;
    cpu.set_nz(result);
    cpu.cycles -= 1;
    result
}

/// Rotate left through carry: old carry into bit 0, bit 7 into carry.
fn rol_value(cpu: &mut CPU, operand: u8) -> u8 {
    let result = (operand << 1) | (cpu.flag_c as u8);
    cpu.flag_c = (operand & 0x80) != 0;
    cpu.set_nz(result);
    cpu.cycles -= 1;
    result
}

/// Rotate right through carry: old carry into bit 7, bit 0 into carry.
fn ror_value(cpu: &mut CPU, operand: u8) -> u8 {
    let result = (operand >> 1) | ((cpu.flag_c as u8) << 7);
    cpu.flag_c = (operand & 0x01) != 0;
    cpu.set_nz(result);
    cpu.cycles -= 1;
    result
}

/// Applies a shift or rotate through the addressing mode: on the
/// accumulator directly, or as a read-modify-write against memory.
fn shift_with<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    transform: fn(&mut CPU, u8) -> u8,
) {
    if mode == AddressingMode::Accumulator {
        let operand = cpu.a;
        cpu.a = transform(cpu, operand);
    } else {
        let addr = cpu.store_address(mode, memory);
        let operand = cpu.read_byte(addr, memory);
        let result = transform(cpu, operand);
        cpu.write_byte(addr, result, memory);
    }
}

/// ASL: arithmetic shift left.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    shift_with(cpu, memory, mode, asl_value);
}

/// LSR: logical shift right.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    shift_with(cpu, memory, mode, lsr_value);
}

/// ROL: rotate left through carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    shift_with(cpu, memory, mode, rol_value);
}

/// ROR: rotate right through carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    shift_with(cpu, memory, mode, ror_value);
}
