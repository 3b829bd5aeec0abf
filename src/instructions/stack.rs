//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP against the hardware stack page at 0x0100-0x01FF.
//!
//! PHP pushes the status byte with B and the unused bit forced set; PLP
//! loads the popped byte but forces B clear (neither bit is architectural
//! state restored by a pop).

use crate::{MemoryBus, CPU};

/// PHA: push the accumulator.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) {
    cpu.push_byte(cpu.a, memory);
}

/// PHP: push the status byte with B and the unused bit set.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) {
    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(status, memory);
}

/// PLA: pop into the accumulator. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    cpu.a = cpu.pop_byte(memory);
    cpu.set_nz(cpu.a);
    cpu.cycles -= 1;
}

/// PLP: pop into the status register, forcing B clear.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let status = cpu.pop_byte(memory);
    cpu.set_status(status);
    cpu.flag_b = false;
    cpu.cycles -= 1;
}
