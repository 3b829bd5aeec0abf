//! Fuzz target for the budgeted execute loop.
//!
//! Builds arbitrary CPU state and memory images, then runs a short cycle
//! budget looking for panics or broken accounting. Decode errors are
//! expected outcomes, not failures.

#![no_main]

use arbitrary::Arbitrary;
use cycle6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary starting register file.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    flag_c: bool,
    flag_z: bool,
    flag_i: bool,
    flag_d: bool,
    flag_v: bool,
    flag_n: bool,
}

/// Arbitrary memory regions the interpreter is most likely to touch.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at the entry point
    program: [u8; 16],
    /// Zero page contents (pointers for the indirect modes)
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(0x8000, &mut memory);

    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_flag_c(input.cpu_state.flag_c);
    cpu.set_flag_z(input.cpu_state.flag_z);
    cpu.set_flag_i(input.cpu_state.flag_i);
    cpu.set_flag_d(input.cpu_state.flag_d);
    cpu.set_flag_v(input.cpu_state.flag_v);
    cpu.set_flag_n(input.cpu_state.flag_n);

    // Unknown opcodes surface as decode errors; nothing here may panic.
    let budget = input.budget as i32;
    if let Ok(consumed) = cpu.execute(budget, &mut memory) {
        assert!(consumed >= 0);
        // One instruction overshoots by at most its own cost.
        assert!(consumed <= budget + 8);
    }
});
