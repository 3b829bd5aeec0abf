//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the architectural state of the 6502 (registers,
//! flags) and drives the fetch-decode-execute loop against a borrowed
//! [`MemoryBus`].
//!
//! ## Execution model
//!
//! [`CPU::execute`] takes a signed cycle budget. Every byte moved through the
//! CPU's memory accessors costs one cycle; addressing modes and individual
//! operations charge their extra cycles at the point where the hardware
//! spends them (index arithmetic, page crossings, stack pointer updates).
//! The dispatch loop runs while the remaining counter is strictly positive,
//! so the final instruction may drive it to zero or slightly negative; the
//! call returns the cycles actually consumed.
//!
//! The CPU does not own memory. The caller owns it and lends it mutably for
//! the duration of each `reset`/`execute` call.

use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::Mnemonic;
use crate::{AddressingMode, CpuError, MemoryBus, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// Address of the IRQ/BRK vector (low byte; high byte at +1).
pub(crate) const IRQ_VECTOR: u16 = 0xFFFE;

/// Returns true when `a` and `b` lie on different 256-byte pages.
pub(crate) fn page_crossed(a: u16, b: u16) -> bool {
    (a >> 8) != (b >> 8)
}

/// 6502 CPU architectural state.
///
/// Registers and flags are stored individually; [`CPU::status`] packs them
/// into the architectural NV-BDIZC byte for PHP/BRK, and
/// [`CPU::set_status`] unpacks for PLP/RTI.
///
/// # Examples
///
/// ```
/// use cycle6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// let mut cpu = CPU::new();
/// cpu.reset(0x8000, &mut memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.a(), 0);
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next instruction byte)
    pub(crate) pc: u16,

    /// Stack pointer; the effective stack address is 0x0100 + SP
    pub(crate) sp: u8,

    /// Negative flag (bit 7 of the last affecting value)
    pub(crate) flag_n: bool,

    /// Overflow flag (signed overflow in ADC/SBC, bit 6 in BIT)
    pub(crate) flag_v: bool,

    /// Break flag (set by BRK)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (BCD arithmetic is not implemented)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (last affecting value was zero)
    pub(crate) flag_z: bool,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Remaining cycle budget of the execute call in progress. Signed: the
    /// final instruction of a run may drive it below zero.
    pub(crate) cycles: i32,

    /// Whether the decimal-mode diagnostic has been emitted already.
    pub(crate) decimal_warned: bool,
}

impl CPU {
    /// Creates a CPU with all state zeroed.
    ///
    /// The result is not in a defined architectural state until
    /// [`CPU::reset`] has run.
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            decimal_warned: false,
        }
    }

    /// Resets the CPU and memory to the power-on state.
    ///
    /// Sets PC to `entry_pc`, SP to 0xFF, clears A/X/Y and every status
    /// flag, and zero-initializes `memory` via [`MemoryBus::init`]. Real
    /// hardware reads the entry address from the reset vector at 0xFFFC;
    /// here the host passes it directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0000, 0xFF);
    ///
    /// let mut cpu = CPU::new();
    /// cpu.reset(0x1000, &mut memory);
    ///
    /// assert_eq!(cpu.pc(), 0x1000);
    /// assert_eq!(memory.read(0x0000), 0x00); // memory zeroed
    /// ```
    pub fn reset<M: MemoryBus>(&mut self, entry_pc: u16, memory: &mut M) {
        self.pc = entry_pc;
        self.sp = 0xFF;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles = 0;
        self.decimal_warned = false;
        memory.init();
    }

    /// Interprets instructions until the cycle budget is exhausted.
    ///
    /// A signed counter starts at `cycle_budget` and every memory access,
    /// index computation, and stack adjustment decrements it. The loop
    /// continues while the counter is strictly positive, so the final
    /// instruction may overshoot; the return value is the non-negative
    /// count of cycles actually consumed (`cycle_budget` minus the final
    /// counter).
    ///
    /// A budget of zero or less executes nothing and returns zero.
    ///
    /// # Errors
    ///
    /// [`CpuError::Decode`] when an undocumented opcode byte is fetched.
    /// The run is aborted and its cycle accounting discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use cycle6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(0x8000, &mut memory);
    ///
    /// memory.write(0x8000, 0xEA); // NOP
    /// memory.write(0x8001, 0xEA); // NOP
    ///
    /// let consumed = cpu.execute(4, &mut memory).unwrap();
    /// assert_eq!(consumed, 4);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        cycle_budget: i32,
        memory: &mut M,
    ) -> Result<i32, CpuError> {
        self.cycles = cycle_budget;

        while self.cycles > 0 {
            let pc = self.pc;
            let opcode = self.fetch_byte(memory);
            let metadata = &OPCODE_TABLE[opcode as usize];
            let mode = metadata.mode;

            match metadata.mnemonic {
                Mnemonic::LDA => load_store::execute_lda(self, memory, mode),
                Mnemonic::LDX => load_store::execute_ldx(self, memory, mode),
                Mnemonic::LDY => load_store::execute_ldy(self, memory, mode),
                Mnemonic::STA => load_store::execute_sta(self, memory, mode),
                Mnemonic::STX => load_store::execute_stx(self, memory, mode),
                Mnemonic::STY => load_store::execute_sty(self, memory, mode),
                Mnemonic::ADC => alu::execute_adc(self, memory, mode),
                Mnemonic::SBC => alu::execute_sbc(self, memory, mode),
                Mnemonic::CMP => alu::execute_cmp(self, memory, mode),
                Mnemonic::CPX => alu::execute_cpx(self, memory, mode),
                Mnemonic::CPY => alu::execute_cpy(self, memory, mode),
                Mnemonic::AND => alu::execute_and(self, memory, mode),
                Mnemonic::ORA => alu::execute_ora(self, memory, mode),
                Mnemonic::EOR => alu::execute_eor(self, memory, mode),
                Mnemonic::BIT => alu::execute_bit(self, memory, mode),
                Mnemonic::ASL => shifts::execute_asl(self, memory, mode),
                Mnemonic::LSR => shifts::execute_lsr(self, memory, mode),
                Mnemonic::ROL => shifts::execute_rol(self, memory, mode),
                Mnemonic::ROR => shifts::execute_ror(self, memory, mode),
                Mnemonic::INC => inc_dec::execute_inc(self, memory, mode),
                Mnemonic::DEC => inc_dec::execute_dec(self, memory, mode),
                Mnemonic::INX => inc_dec::execute_inx(self),
                Mnemonic::INY => inc_dec::execute_iny(self),
                Mnemonic::DEX => inc_dec::execute_dex(self),
                Mnemonic::DEY => inc_dec::execute_dey(self),
                Mnemonic::TAX => transfer::execute_tax(self),
                Mnemonic::TAY => transfer::execute_tay(self),
                Mnemonic::TXA => transfer::execute_txa(self),
                Mnemonic::TYA => transfer::execute_tya(self),
                Mnemonic::TSX => transfer::execute_tsx(self),
                Mnemonic::TXS => transfer::execute_txs(self),
                Mnemonic::PHA => stack::execute_pha(self, memory),
                Mnemonic::PHP => stack::execute_php(self, memory),
                Mnemonic::PLA => stack::execute_pla(self, memory),
                Mnemonic::PLP => stack::execute_plp(self, memory),
                Mnemonic::JMP => control::execute_jmp(self, memory, mode),
                Mnemonic::JSR => control::execute_jsr(self, memory),
                Mnemonic::RTS => control::execute_rts(self, memory),
                Mnemonic::RTI => control::execute_rti(self, memory),
                Mnemonic::BRK => control::execute_brk(self, memory),
                Mnemonic::NOP => control::execute_nop(self),
                Mnemonic::BEQ => branches::execute_beq(self, memory),
                Mnemonic::BNE => branches::execute_bne(self, memory),
                Mnemonic::BCC => branches::execute_bcc(self, memory),
                Mnemonic::BCS => branches::execute_bcs(self, memory),
                Mnemonic::BMI => branches::execute_bmi(self, memory),
                Mnemonic::BPL => branches::execute_bpl(self, memory),
                Mnemonic::BVC => branches::execute_bvc(self, memory),
                Mnemonic::BVS => branches::execute_bvs(self, memory),
                Mnemonic::CLC => flags::execute_clc(self),
                Mnemonic::CLD => flags::execute_cld(self),
                Mnemonic::CLI => flags::execute_cli(self),
                Mnemonic::CLV => flags::execute_clv(self),
                Mnemonic::SEC => flags::execute_sec(self),
                Mnemonic::SED => flags::execute_sed(self),
                Mnemonic::SEI => flags::execute_sei(self),
                Mnemonic::ILL => {
                    tracing::error!("unknown opcode 0x{:02X} at PC 0x{:04X}", opcode, pc);
                    return Err(CpuError::Decode { opcode, pc });
                }
            }
        }

        Ok(cycle_budget - self.cycles)
    }

    // ========== Cycle-charging memory accessors ==========

    /// Fetches the byte at PC, advancing PC. Costs 1 cycle.
    pub(crate) fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        let value = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        self.cycles -= 1;
        value
    }

    /// Fetches a little-endian word at PC, advancing PC. Costs 2 cycles.
    pub(crate) fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let lo = self.fetch_byte(memory) as u16;
        let hi = self.fetch_byte(memory) as u16;
        (hi << 8) | lo
    }

    /// Reads the byte at `addr`. Costs 1 cycle.
    pub(crate) fn read_byte<M: MemoryBus>(&mut self, addr: u16, memory: &M) -> u8 {
        self.cycles -= 1;
        memory.read(addr)
    }

    /// Reads a little-endian word at `addr`. Costs 2 cycles.
    pub(crate) fn read_word<M: MemoryBus>(&mut self, addr: u16, memory: &M) -> u16 {
        let lo = self.read_byte(addr, memory) as u16;
        let hi = self.read_byte(addr.wrapping_add(1), memory) as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word from the zero page, wrapping within it.
    /// Costs 2 cycles.
    pub(crate) fn read_zp_word<M: MemoryBus>(&mut self, zp_addr: u8, memory: &M) -> u16 {
        let lo = self.read_byte(zp_addr as u16, memory) as u16;
        let hi = self.read_byte(zp_addr.wrapping_add(1) as u16, memory) as u16;
        (hi << 8) | lo
    }

    /// Writes `value` at `addr`. Costs 1 cycle.
    pub(crate) fn write_byte<M: MemoryBus>(&mut self, addr: u16, value: u8, memory: &mut M) {
        memory.write(addr, value);
        self.cycles -= 1;
    }

    // ========== Stack helpers ==========

    /// Pushes a byte: write at 0x0100+SP, then SP decrements. Costs 2
    /// cycles (the write plus the pointer update).
    pub(crate) fn push_byte<M: MemoryBus>(&mut self, value: u8, memory: &mut M) {
        self.write_byte(STACK_BASE | self.sp as u16, value, memory);
        self.sp = self.sp.wrapping_sub(1);
        self.cycles -= 1;
    }

    /// Pops a byte: SP increments, then read at 0x0100+SP. Costs 2 cycles.
    pub(crate) fn pop_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let value = self.read_byte(STACK_BASE | self.sp as u16, memory);
        self.cycles -= 1;
        value
    }

    /// Pushes a word: high byte at 0x0100+SP, low byte at 0x0100+SP-1, then
    /// SP drops by two. Costs 2 cycles.
    pub(crate) fn push_word<M: MemoryBus>(&mut self, value: u16, memory: &mut M) {
        self.write_byte(STACK_BASE | self.sp as u16, (value >> 8) as u8, memory);
        self.write_byte(STACK_BASE | self.sp.wrapping_sub(1) as u16, value as u8, memory);
        self.sp = self.sp.wrapping_sub(2);
    }

    /// Pops a word: SP rises by two, low byte read from 0x0100+SP-1, high
    /// byte from 0x0100+SP. Exact inverse of [`CPU::push_word`]. Costs 3
    /// cycles (two reads plus the pointer update).
    pub(crate) fn pop_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        self.sp = self.sp.wrapping_add(2);
        let lo = self.read_byte(STACK_BASE | self.sp.wrapping_sub(1) as u16, memory) as u16;
        let hi = self.read_byte(STACK_BASE | self.sp as u16, memory) as u16;
        self.cycles -= 1;
        (hi << 8) | lo
    }

    // ========== Addressing mode resolution ==========

    /// Zero page: the operand byte is the address.
    fn addr_zero_page<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        self.fetch_byte(memory) as u16
    }

    /// Zero page indexed: operand plus register, wrapping within the zero
    /// page. The index addition costs 1 cycle.
    fn addr_zero_page_indexed<M: MemoryBus>(&mut self, index: u8, memory: &M) -> u16 {
        let base = self.fetch_byte(memory);
        self.cycles -= 1;
        base.wrapping_add(index) as u16
    }

    /// Absolute: the operand word is the address.
    fn addr_absolute<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        self.fetch_word(memory)
    }

    /// Absolute indexed, load flavor: +1 cycle only on a page cross.
    fn addr_absolute_indexed<M: MemoryBus>(&mut self, index: u8, memory: &M) -> u16 {
        let base = self.fetch_word(memory);
        let addr = base.wrapping_add(index as u16);
        if page_crossed(base, addr) {
            self.cycles -= 1;
        }
        addr
    }

    /// Absolute indexed, store/RMW flavor: the penalty cycle is always paid.
    fn addr_absolute_indexed_store<M: MemoryBus>(&mut self, index: u8, memory: &M) -> u16 {
        let base = self.fetch_word(memory);
        self.cycles -= 1;
        base.wrapping_add(index as u16)
    }

    /// Indexed indirect: (operand + X) selects a zero-page pointer. The
    /// index addition costs 1 cycle; the pointer read costs 2.
    fn addr_indirect_x<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let zp_addr = self.fetch_byte(memory).wrapping_add(self.x);
        self.cycles -= 1;
        self.read_zp_word(zp_addr, memory)
    }

    /// Indirect indexed, load flavor: +1 cycle only on a page cross.
    fn addr_indirect_y<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let zp_addr = self.fetch_byte(memory);
        let base = self.read_zp_word(zp_addr, memory);
        let addr = base.wrapping_add(self.y as u16);
        if page_crossed(base, addr) {
            self.cycles -= 1;
        }
        addr
    }

    /// Indirect indexed, store flavor: the penalty cycle is always paid.
    fn addr_indirect_y_store<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let zp_addr = self.fetch_byte(memory);
        let base = self.read_zp_word(zp_addr, memory);
        self.cycles -= 1;
        base.wrapping_add(self.y as u16)
    }

    /// Resolves the effective address for a value-reading instruction,
    /// charging conditional page-cross penalties.
    ///
    /// `Immediate` has no address; callers use [`CPU::read_operand`].
    pub(crate) fn operand_address<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        memory: &M,
    ) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.addr_zero_page(memory),
            AddressingMode::ZeroPageX => self.addr_zero_page_indexed(self.x, memory),
            AddressingMode::ZeroPageY => self.addr_zero_page_indexed(self.y, memory),
            AddressingMode::Absolute => self.addr_absolute(memory),
            AddressingMode::AbsoluteX => self.addr_absolute_indexed(self.x, memory),
            AddressingMode::AbsoluteY => self.addr_absolute_indexed(self.y, memory),
            AddressingMode::IndirectX => self.addr_indirect_x(memory),
            AddressingMode::IndirectY => self.addr_indirect_y(memory),
            _ => unreachable!("no effective address for {:?}", mode),
        }
    }

    /// Resolves the effective address for a store or read-modify-write
    /// instruction: indexed absolute and indirect,Y always pay the penalty
    /// cycle.
    pub(crate) fn store_address<M: MemoryBus>(
        &mut self,
        mode: AddressingMode,
        memory: &M,
    ) -> u16 {
        match mode {
            AddressingMode::AbsoluteX => self.addr_absolute_indexed_store(self.x, memory),
            AddressingMode::AbsoluteY => self.addr_absolute_indexed_store(self.y, memory),
            AddressingMode::IndirectY => self.addr_indirect_y_store(memory),
            _ => self.operand_address(mode, memory),
        }
    }

    /// Reads the operand value for a value-consuming instruction through
    /// its addressing mode.
    pub(crate) fn read_operand<M: MemoryBus>(&mut self, mode: AddressingMode, memory: &M) -> u8 {
        match mode {
            AddressingMode::Immediate => self.fetch_byte(memory),
            _ => {
                let addr = self.operand_address(mode, memory);
                self.read_byte(addr, memory)
            }
        }
    }

    // ========== Flag helpers ==========

    /// Sets Z and N from a register or memory result.
    pub(crate) fn set_nz(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Returns the packed status byte.
    ///
    /// Bit layout (bit 7 to bit 0): N V U B D I Z C, where the unused bit U
    /// reads as 1.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000; // unused bit reads as set

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Loads the flags from a packed status byte.
    ///
    /// The unused bit is not stored. PLP and RTI force B clear after
    /// calling this.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = (value & 0b1000_0000) != 0;
        self.flag_v = (value & 0b0100_0000) != 0;
        self.flag_b = (value & 0b0001_0000) != 0;
        self.flag_d = (value & 0b0000_1000) != 0;
        self.flag_i = (value & 0b0000_0100) != 0;
        self.flag_z = (value & 0b0000_0010) != 0;
        self.flag_c = (value & 0b0000_0001) != 0;
    }

    // ========== Register getters ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    // ========== Status flag getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register setters ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
