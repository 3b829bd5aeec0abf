//! # ALU Instructions
//!
//! Arithmetic and logic: ADC, SBC, CMP, CPX, CPY, AND, ORA, EOR, BIT.
//!
//! SBC is ADC of the operand's bitwise complement, so both share one adder.
//! Decimal mode is not implemented: when the D flag is set a diagnostic is
//! emitted once per reset and the addition proceeds with binary semantics.

use crate::{AddressingMode, MemoryBus, CPU};

/// Core of ADC and SBC: A + operand + carry as a 9-bit sum.
///
/// - C: set when the sum exceeds 0xFF
/// - V: set when both inputs share a sign bit that differs from the
///   result's, i.e. `(a ^ result) & (operand ^ result) & 0x80`
/// - Z, N: from the 8-bit result
fn add_with_carry(cpu: &mut CPU, operand: u8) {
    if cpu.flag_d && !cpu.decimal_warned {
        tracing::warn!("decimal mode is not implemented; ADC/SBC use binary arithmetic");
        cpu.decimal_warned = true;
    }

    let a = cpu.a;
    let carry_in = if cpu.flag_c { 1u16 } else { 0 };
    let sum = a as u16 + operand as u16 + carry_in;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = ((a ^ result) & (operand ^ result) & 0x80) != 0;
    cpu.a = result;
    cpu.set_nz(result);
}

/// Shared comparison for CMP/CPX/CPY: reg - operand without storing.
///
/// C means the register is >= the operand (unsigned); Z means equality;
/// N is bit 7 of the wrapped difference.
fn compare(cpu: &mut CPU, reg: u8, operand: u8) {
    let diff = reg.wrapping_sub(operand);
    cpu.flag_c = reg >= operand;
    cpu.flag_z = reg == operand;
    cpu.flag_n = (diff & 0x80) != 0;
}

/// ADC: add operand and carry to the accumulator.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    add_with_carry(cpu, operand);
}

/// SBC: subtract operand and borrow from the accumulator.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    add_with_carry(cpu, !operand);
}

/// CMP: compare operand against the accumulator.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    let reg = cpu.a;
    compare(cpu, reg, operand);
}

/// CPX: compare operand against the X register.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    let reg = cpu.x;
    compare(cpu, reg, operand);
}

/// CPY: compare operand against the Y register.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    let reg = cpu.y;
    compare(cpu, reg, operand);
}

/// AND: bitwise AND into the accumulator. Sets Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.a &= cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.a);
}

/// ORA: bitwise OR into the accumulator. Sets Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.a |= cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.a);
}

/// EOR: bitwise exclusive OR into the accumulator. Sets Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    cpu.a ^= cpu.read_operand(mode, memory);
    cpu.set_nz(cpu.a);
}

/// BIT: test accumulator bits against memory without storing.
///
/// Z from A AND operand; N and V copied from bits 7 and 6 of the operand.
/// The accumulator is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let operand = cpu.read_operand(mode, memory);
    cpu.flag_z = (cpu.a & operand) == 0;
    cpu.flag_n = (operand & 0x80) != 0;
    cpu.flag_v = (operand & 0x40) != 0;
}
