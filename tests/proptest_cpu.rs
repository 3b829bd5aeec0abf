//! Property-based tests for CPU invariants.
//!
//! These use proptest to check that the execute loop maintains its
//! fundamental contracts across arbitrary operands and initial state.

use cycle6502::{FlatMemory, MemoryBus, Mnemonic, CPU, OPCODE_TABLE};
use proptest::prelude::*;

/// Helper to build a CPU reset to 0x8000 with zeroed memory.
fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(0x8000, &mut memory);
    (cpu, memory)
}

/// All documented opcodes.
fn documented_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| m.mnemonic != Mnemonic::ILL)
        .map(|(i, _)| i as u8)
        .collect()
}

/// Documented opcodes that advance PC by their encoded size (everything
/// except branches, jumps, calls, returns, and BRK).
fn sequential_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.mnemonic,
                Mnemonic::ILL
                    | Mnemonic::BCC
                    | Mnemonic::BCS
                    | Mnemonic::BEQ
                    | Mnemonic::BNE
                    | Mnemonic::BMI
                    | Mnemonic::BPL
                    | Mnemonic::BVC
                    | Mnemonic::BVS
                    | Mnemonic::JMP
                    | Mnemonic::JSR
                    | Mnemonic::RTS
                    | Mnemonic::RTI
                    | Mnemonic::BRK
            )
        })
        .map(|(i, _)| i as u8)
        .collect()
}

proptest! {
    /// For straight-line instructions, PC advances by exactly size_bytes.
    #[test]
    fn prop_pc_advances_by_instruction_size(
        opcode in prop::sample::select(sequential_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let (mut cpu, mut memory) = setup();
        let expected_size = OPCODE_TABLE[opcode as usize].size_bytes as u16;

        memory.write(0x8000, opcode);
        memory.write(0x8001, operand1);
        memory.write(0x8002, operand2);

        cpu.execute(1, &mut memory).unwrap();

        prop_assert_eq!(cpu.pc(), 0x8000u16.wrapping_add(expected_size));
    }

    /// A single instruction consumes between 2 and 8 cycles, and the
    /// return value is never negative.
    #[test]
    fn prop_single_instruction_cycle_bounds(
        opcode in prop::sample::select(documented_opcodes()),
        operand1 in any::<u8>(),
        operand2 in any::<u8>(),
    ) {
        let (mut cpu, mut memory) = setup();

        memory.write(0x8000, opcode);
        memory.write(0x8001, operand1);
        memory.write(0x8002, operand2);

        let consumed = cpu.execute(1, &mut memory).unwrap();

        prop_assert!((2..=8).contains(&consumed), "consumed {}", consumed);
    }

    /// LDA immediate always leaves Z == (value == 0) and N == bit 7.
    #[test]
    fn prop_lda_immediate_flag_invariant(value in any::<u8>()) {
        let (mut cpu, mut memory) = setup();

        memory.write(0x8000, 0xA9);
        memory.write(0x8001, value);

        cpu.execute(2, &mut memory).unwrap();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.flag_z(), value == 0);
        prop_assert_eq!(cpu.flag_n(), value & 0x80 != 0);
    }

    /// ADC agrees with 16-bit addition for every operand pair and carry.
    #[test]
    fn prop_adc_matches_wide_addition(
        a in any::<u8>(),
        operand in any::<u8>(),
        carry in any::<bool>(),
    ) {
        let (mut cpu, mut memory) = setup();

        memory.write(0x8000, 0x69);
        memory.write(0x8001, operand);
        cpu.set_a(a);
        cpu.set_flag_c(carry);

        cpu.execute(2, &mut memory).unwrap();

        let wide = a as u16 + operand as u16 + carry as u16;
        prop_assert_eq!(cpu.a(), wide as u8);
        prop_assert_eq!(cpu.flag_c(), wide > 0xFF);
        prop_assert_eq!(cpu.flag_z(), wide as u8 == 0);
    }

    /// PHA then PLA restores the accumulator and the stack pointer.
    #[test]
    fn prop_pha_pla_round_trip(a in any::<u8>(), sp in any::<u8>()) {
        let (mut cpu, mut memory) = setup();

        memory.write(0x8000, 0x48); // PHA
        memory.write(0x8001, 0x68); // PLA
        cpu.set_a(a);
        cpu.set_sp(sp);

        let consumed = cpu.execute(7, &mut memory).unwrap();

        prop_assert_eq!(consumed, 7);
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.flag_z(), a == 0);
        prop_assert_eq!(cpu.flag_n(), a & 0x80 != 0);
    }

    /// SBC is exactly ADC of the complemented operand.
    #[test]
    fn prop_sbc_is_adc_of_complement(
        a in any::<u8>(),
        operand in any::<u8>(),
        carry in any::<bool>(),
    ) {
        let (mut cpu_sbc, mut mem_sbc) = setup();
        mem_sbc.write(0x8000, 0xE9);
        mem_sbc.write(0x8001, operand);
        cpu_sbc.set_a(a);
        cpu_sbc.set_flag_c(carry);
        cpu_sbc.execute(2, &mut mem_sbc).unwrap();

        let (mut cpu_adc, mut mem_adc) = setup();
        mem_adc.write(0x8000, 0x69);
        mem_adc.write(0x8001, !operand);
        cpu_adc.set_a(a);
        cpu_adc.set_flag_c(carry);
        cpu_adc.execute(2, &mut mem_adc).unwrap();

        prop_assert_eq!(cpu_sbc.a(), cpu_adc.a());
        prop_assert_eq!(cpu_sbc.flag_c(), cpu_adc.flag_c());
        prop_assert_eq!(cpu_sbc.flag_v(), cpu_adc.flag_v());
        prop_assert_eq!(cpu_sbc.flag_n(), cpu_adc.flag_n());
        prop_assert_eq!(cpu_sbc.flag_z(), cpu_adc.flag_z());
    }
}
