//! Tests for the CMP, CPX, and CPY (Compare) instructions.
//!
//! Compares subtract without storing: C reports register >= operand
//! (unsigned), Z reports equality, N is bit 7 of the wrapped difference.

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(0x8000, &mut memory);
    (cpu, memory)
}

#[test]
fn test_cmp_equal() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC9);
    memory.write(0x8001, 0x42);
    cpu.set_a(0x42);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(consumed, 2);
    assert_eq!(cpu.a(), 0x42); // untouched
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_greater() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC9);
    memory.write(0x8001, 0x30);
    cpu.set_a(0x50);

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n()); // diff 0x20
}

#[test]
fn test_cmp_less() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC9);
    memory.write(0x8001, 0x50);
    cpu.set_a(0x30);

    cpu.execute(2, &mut memory).unwrap();

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // diff 0xE0
}

#[test]
fn test_cmp_zero_page() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC5);
    memory.write(0x8001, 0x10);
    memory.write(0x0010, 0x01);
    cpu.set_a(0x01);

    let consumed = cpu.execute(3, &mut memory).unwrap();

    assert_eq!(consumed, 3);
    assert!(cpu.flag_z());
}

#[test]
fn test_cpx_immediate() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xE0);
    memory.write(0x8001, 0x10);
    cpu.set_x(0x20);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(consumed, 2);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_cpx_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xEC);
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x30);
    memory.write(0x3000, 0x05);
    cpu.set_x(0x04);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n()); // diff 0xFF
}

#[test]
fn test_cpy_immediate() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC0);
    memory.write(0x8001, 0x42);
    cpu.set_y(0x42);

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.y(), 0x42);
}

#[test]
fn test_compare_does_not_modify_registers() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0xC9);
    memory.write(0x8001, 0xFF);
    cpu.set_a(0x01);
    cpu.set_x(0x02);
    cpu.set_y(0x03);

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x01);
    assert_eq!(cpu.x(), 0x02);
    assert_eq!(cpu.y(), 0x03);
}
