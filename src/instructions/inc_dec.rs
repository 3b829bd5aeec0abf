//! # Increment and Decrement Instructions
//!
//! INC/DEC operate on memory as read-modify-write through the addressing
//! mode (indexed absolute uses the always-penalty flavor) and charge two
//! extra cycles beyond the addressing cost. INX/INY/DEX/DEY adjust an index
//! register in 2 cycles total. All of them wrap modulo 256 and set Z and N.

use crate::{AddressingMode, MemoryBus, CPU};

/// Shared read-modify-write path for INC and DEC.
fn modify_memory<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    transform: fn(u8) -> u8,
) {
    let addr = cpu.store_address(mode, memory);
    let operand = cpu.read_byte(addr, memory);
    let result = transform(operand);
    cpu.write_byte(addr, result, memory);
    cpu.set_nz(result);
    cpu.cycles -= 2;
}

/// INC: increment a memory cell.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify_memory(cpu, memory, mode, |v| v.wrapping_add(1));
}

/// DEC: decrement a memory cell.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify_memory(cpu, memory, mode, |v| v.wrapping_sub(1));
}

/// INX: increment the X register.
pub(crate) fn execute_inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_nz(cpu.x);
    cpu.cycles -= 1;
}

/// INY: increment the Y register.
pub(crate) fn execute_iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_nz(cpu.y);
    cpu.cycles -= 1;
}

/// DEX: decrement the X register.
pub(crate) fn execute_dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_nz(cpu.x);
    cpu.cycles -= 1;
}

/// DEY: decrement the Y register.
pub(crate) fn execute_dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_nz(cpu.y);
    cpu.cycles -= 1;
}
