//! # Branch Instructions
//!
//! BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS. All use relative addressing: a
//! signed 8-bit displacement added to the PC that follows the operand byte.
//!
//! Cycle timing: 2 cycles when not taken, +1 when taken, +1 more when the
//! target lies on a different page than the instruction's end.

use crate::cpu::page_crossed;
use crate::{MemoryBus, CPU};

/// Fetches the displacement and redirects PC when `taken`.
///
/// The displacement is sign-extended before the add, and the page-cross
/// penalty compares the would-be next instruction address against the
/// branch target.
fn branch_if<M: MemoryBus>(cpu: &mut CPU, memory: &M, taken: bool) {
    let offset = cpu.fetch_byte(memory) as i8;
    if taken {
        let old_pc = cpu.pc;
        cpu.pc = old_pc.wrapping_add_signed(offset as i16);
        cpu.cycles -= 1;
        if page_crossed(old_pc, cpu.pc) {
            cpu.cycles -= 1;
        }
    }
}

/// BEQ: branch when the Zero flag is set.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_z;
    branch_if(cpu, memory, taken);
}

/// BNE: branch when the Zero flag is clear.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_z;
    branch_if(cpu, memory, taken);
}

/// BCC: branch when the Carry flag is clear.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_c;
    branch_if(cpu, memory, taken);
}

/// BCS: branch when the Carry flag is set.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_c;
    branch_if(cpu, memory, taken);
}

/// BMI: branch when the Negative flag is set.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_n;
    branch_if(cpu, memory, taken);
}

/// BPL: branch when the Negative flag is clear.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_n;
    branch_if(cpu, memory, taken);
}

/// BVC: branch when the Overflow flag is clear.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_v;
    branch_if(cpu, memory, taken);
}

/// BVS: branch when the Overflow flag is set.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_v;
    branch_if(cpu, memory, taken);
}
