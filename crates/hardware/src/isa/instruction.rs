//! Instruction encoding and decoded-instruction model.
//!
//! Provides bit extraction for the MIPS R/I/J field layout and the
//! immutable [`Decoded`] record every later pipeline stage works from.

use serde::Serialize;

/// Bit shift for the primary opcode field (bits 26-31).
const OPCODE_SHIFT: u32 = 26;
/// Bit shift for the `rs` field (bits 21-25).
const RS_SHIFT: u32 = 21;
/// Bit shift for the `rt` field (bits 16-20).
const RT_SHIFT: u32 = 16;
/// Bit shift for the `rd` field (bits 11-15).
const RD_SHIFT: u32 = 11;
/// Bit shift for the `shamt` field (bits 6-10).
const SHAMT_SHIFT: u32 = 6;

/// Bit mask for the 6-bit opcode and funct fields.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit mask for 5-bit register and shift-amount fields.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 16-bit immediate field.
pub const IMM16_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump index field.
pub const ADDR26_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting MIPS instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-type destination field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the R-type destination register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift amount (bits 6-10).
    fn shamt(&self) -> u32;

    /// Extracts the R-type function code (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), not extended.
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump index (bits 0-25).
    fn addr26(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM16_MASK
    }

    #[inline(always)]
    fn addr26(&self) -> u32 {
        self & ADDR26_MASK
    }
}

/// Encoding format of a decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register (`opcode 0`).
    R,
    /// Register-immediate, loads/stores, and conditional branches.
    I,
    /// Absolute jumps.
    J,
    /// The all-zero word and undecodable words; no operands.
    Nop,
}

/// The closed set of operations the pipeline can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operation {
    /// `rd = rs + rt`
    Add,
    /// `rd = rs - rt`
    Sub,
    /// `rd = rs & rt`
    And,
    /// `rd = rs | rt`
    Or,
    /// `rd = rs ^ rt`
    Xor,
    /// `rd = !(rs | rt)`
    Nor,
    /// `rd = (rs < rt) ? 1 : 0`, signed
    Slt,
    /// `rd = (rs > rt) ? 1 : 0`, signed
    Sgt,
    /// `rd = rt << shamt`
    Sll,
    /// `rd = rt >> shamt`, logical
    Srl,
    /// `rt = rs + sext(imm)`
    Addi,
    /// `rt = rs & zext(imm)`
    Andi,
    /// `rt = rs | zext(imm)`
    Ori,
    /// `rt = rs ^ zext(imm)`
    Xori,
    /// `rt = imm << 16`
    Lui,
    /// `rt = mem[rs + sext(imm)]`
    Lw,
    /// `mem[rs + sext(imm)] = rt`
    Sw,
    /// Branch if `rs == rt`
    Beq,
    /// Branch if `rs != rt`
    Bne,
    /// Branch if `rs < 0`
    Bltz,
    /// Branch if `rs >= 0`
    Bgez,
    /// Jump to region target
    J,
    /// Jump to region target, `$ra = pc + 4`
    Jal,
    /// No operation (the all-zero word)
    Nop,
    /// A word that matches no supported encoding
    Invalid,
}

impl Operation {
    /// Returns the lower-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Nor => "nor",
            Self::Slt => "slt",
            Self::Sgt => "sgt",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Addi => "addi",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Bltz => "bltz",
            Self::Bgez => "bgez",
            Self::J => "j",
            Self::Jal => "jal",
            Self::Nop => "nop",
            Self::Invalid => "invalid",
        }
    }

    /// Returns true for conditional branches.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne | Self::Bltz | Self::Bgez)
    }

    /// Returns true for unconditional jumps.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::J | Self::Jal)
    }
}

/// A fully decoded instruction.
///
/// Register fields are present only when the format defines them: R-type
/// carries `rs`, `rt` and `rd`; I-type carries `rs` and `rt` (only `rs` for
/// BLTZ/BGEZ, whose `rt` bits select the condition); J-type and `Nop` carry none. `immediate` is already sign- or zero-extended for the
/// operation, and `target` holds the unresolved control-flow offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// The raw 32-bit word.
    pub raw: u32,
    /// Encoding format.
    pub format: Format,
    /// Operation to perform.
    pub operation: Operation,
    /// First source register.
    pub rs: Option<usize>,
    /// Second source register, or the destination for I-type writers.
    pub rt: Option<usize>,
    /// R-type destination register.
    pub rd: Option<usize>,
    /// Shift amount (R-type only, zero otherwise).
    pub shamt: u32,
    /// Extended immediate operand (I-type only, zero otherwise).
    pub immediate: i32,
    /// Jump region offset (`addr26 << 2`) or branch byte offset (`imm << 2`).
    pub target: Option<u32>,
}

impl Decoded {
    /// The decoded form of the all-zero word.
    pub const NOP: Self = Self::empty(0, Operation::Nop);

    /// Builds an operand-less record (NOP or INVALID).
    pub(crate) const fn empty(raw: u32, operation: Operation) -> Self {
        Self {
            raw,
            format: Format::Nop,
            operation,
            rs: None,
            rt: None,
            rd: None,
            shamt: 0,
            immediate: 0,
            target: None,
        }
    }

    /// Registers this instruction reads, in operand order.
    ///
    /// # Returns
    ///
    /// Up to two register indices; unused slots are `None`.
    pub const fn sources(&self) -> [Option<usize>; 2] {
        match self.operation {
            Operation::Add
            | Operation::Sub
            | Operation::And
            | Operation::Or
            | Operation::Xor
            | Operation::Nor
            | Operation::Slt
            | Operation::Sgt
            | Operation::Sw
            | Operation::Beq
            | Operation::Bne => [self.rs, self.rt],
            Operation::Sll | Operation::Srl => [self.rt, None],
            Operation::Addi
            | Operation::Andi
            | Operation::Ori
            | Operation::Xori
            | Operation::Lw
            | Operation::Bltz
            | Operation::Bgez => [self.rs, None],
            Operation::Lui | Operation::J | Operation::Jal | Operation::Nop | Operation::Invalid => {
                [None, None]
            }
        }
    }

    /// Register this instruction writes, if any.
    ///
    /// # Returns
    ///
    /// The destination index, or `None` when nothing is written or the
    /// destination is register 0.
    pub const fn dest(&self) -> Option<usize> {
        let dest = match self.operation {
            Operation::Add
            | Operation::Sub
            | Operation::And
            | Operation::Or
            | Operation::Xor
            | Operation::Nor
            | Operation::Slt
            | Operation::Sgt
            | Operation::Sll
            | Operation::Srl => self.rd,
            Operation::Addi
            | Operation::Andi
            | Operation::Ori
            | Operation::Xori
            | Operation::Lui
            | Operation::Lw => self.rt,
            Operation::Jal => Some(crate::isa::abi::REG_RA),
            Operation::Sw
            | Operation::Beq
            | Operation::Bne
            | Operation::Bltz
            | Operation::Bgez
            | Operation::J
            | Operation::Nop
            | Operation::Invalid => None,
        };
        match dest {
            Some(0) | None => None,
            Some(r) => Some(r),
        }
    }
}
