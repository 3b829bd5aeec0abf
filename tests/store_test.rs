//! Tests for the STA, STX, and STY (Store Register) instructions.
//!
//! Stores never modify flags, and the indexed absolute and indirect,Y
//! forms always pay the page-cross penalty cycle regardless of the
//! effective address.

use cycle6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    let mut cpu = CPU::new();
    cpu.reset(0x8000, &mut memory);
    (cpu, memory)
}

#[test]
fn test_sta_zero_page() {
    let (mut cpu, mut memory) = setup();

    // STA $10
    memory.write(0x8000, 0x85);
    memory.write(0x8001, 0x10);
    cpu.set_a(0x42);

    let consumed = cpu.execute(3, &mut memory).unwrap();

    assert_eq!(consumed, 3);
    assert_eq!(memory.read(0x0010), 0x42);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_sta_zero_page_x() {
    let (mut cpu, mut memory) = setup();

    // STA $10,X with X = 5
    memory.write(0x8000, 0x95);
    memory.write(0x8001, 0x10);
    cpu.set_a(0x42);
    cpu.set_x(0x05);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(memory.read(0x0015), 0x42);
}

#[test]
fn test_sta_absolute() {
    let (mut cpu, mut memory) = setup();

    // STA $1234
    memory.write(0x8000, 0x8D);
    memory.write(0x8001, 0x34);
    memory.write(0x8002, 0x12);
    cpu.set_a(0x42);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(memory.read(0x1234), 0x42);
}

#[test]
fn test_sta_absolute_x_always_pays_penalty() {
    let (mut cpu, mut memory) = setup();

    // STA $2000,X with X = 5: no page cross, 5 cycles regardless
    memory.write(0x8000, 0x9D);
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x20);
    cpu.set_a(0x42);
    cpu.set_x(0x05);

    let consumed = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(consumed, 5);
    assert_eq!(memory.read(0x2005), 0x42);
}

#[test]
fn test_sta_absolute_y_always_pays_penalty() {
    let (mut cpu, mut memory) = setup();

    // STA $2000,Y with Y = 1
    memory.write(0x8000, 0x99);
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x20);
    cpu.set_a(0x77);
    cpu.set_y(0x01);

    let consumed = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(consumed, 5);
    assert_eq!(memory.read(0x2001), 0x77);
}

#[test]
fn test_sta_indirect_x() {
    let (mut cpu, mut memory) = setup();

    // STA ($20,X) with X = 4: pointer at 0x24/0x25
    memory.write(0x8000, 0x81);
    memory.write(0x8001, 0x20);
    memory.write(0x0024, 0x00);
    memory.write(0x0025, 0x30);
    cpu.set_a(0x42);
    cpu.set_x(0x04);

    let consumed = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(consumed, 6);
    assert_eq!(memory.read(0x3000), 0x42);
}

#[test]
fn test_sta_indirect_y_always_six_cycles() {
    let (mut cpu, mut memory) = setup();

    // STA ($20),Y with pointer 0x3000 and Y = 5: no cross, still 6
    memory.write(0x8000, 0x91);
    memory.write(0x8001, 0x20);
    memory.write(0x0020, 0x00);
    memory.write(0x0021, 0x30);
    cpu.set_a(0x42);
    cpu.set_y(0x05);

    let consumed = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(consumed, 6);
    assert_eq!(memory.read(0x3005), 0x42);
}

#[test]
fn test_stx_zero_page_y() {
    let (mut cpu, mut memory) = setup();

    // STX $10,Y with Y = 2
    memory.write(0x8000, 0x96);
    memory.write(0x8001, 0x10);
    cpu.set_x(0x42);
    cpu.set_y(0x02);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(memory.read(0x0012), 0x42);
}

#[test]
fn test_stx_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0x8E);
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x25);
    cpu.set_x(0x11);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(memory.read(0x2500), 0x11);
}

#[test]
fn test_sty_zero_page_x() {
    let (mut cpu, mut memory) = setup();

    memory.write(0x8000, 0x94);
    memory.write(0x8001, 0x30);
    cpu.set_y(0x24);
    cpu.set_x(0x01);

    let consumed = cpu.execute(4, &mut memory).unwrap();

    assert_eq!(consumed, 4);
    assert_eq!(memory.read(0x0031), 0x24);
}

#[test]
fn test_stores_do_not_touch_flags() {
    let (mut cpu, mut memory) = setup();

    // STA $10 with A = 0: Z stays clear, N stays set
    memory.write(0x8000, 0x85);
    memory.write(0x8001, 0x10);
    cpu.set_a(0x00);
    cpu.set_flag_n(true);

    cpu.execute(3, &mut memory).unwrap();

    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}
