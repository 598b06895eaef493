//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Groups operations into ALU, memory, and control classes.
//! 2. **Operand Selection:** Defines sources for ALU inputs (registers, immediates, shift amounts).
//! 3. **Signal Table:** Maps every [`Operation`] to its control signals exhaustively.

use serde::Serialize;

use crate::isa::instruction::Operation;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition (also address generation and LUI pass-through).
    #[default]
    Add,

    /// Wrapping subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Bitwise NOR.
    Nor,

    /// Set less than (signed).
    Slt,

    /// Set greater than (signed).
    Sgt,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the `rs` register value.
    #[default]
    Rs,

    /// Use the `rt` register value (shifts operate on `rt`).
    Rt,

    /// Use zero.
    Zero,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the extended immediate.
    #[default]
    Imm,

    /// Use the `rt` register value.
    Rt,

    /// Use the instruction's shift amount.
    Shamt,
}

/// Coarse instruction class used for statistics and stage dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum InstrClass {
    /// Register or immediate arithmetic/logic.
    Alu,
    /// Word load.
    Load,
    /// Word store.
    Store,
    /// Conditional branch.
    Branch,
    /// Unconditional jump.
    Jump,
    /// No architectural effect.
    #[default]
    Nop,
    /// Undecodable word.
    Invalid,
}

/// Control signals for a single instruction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// Instruction writes `pc + 4` to `$ra`.
    pub link: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source selection for ALU operand A.
    pub a_src: OpASrc,
    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,
    /// Instruction class.
    pub class: InstrClass,
}

impl ControlSignals {
    /// Signals for a register-register ALU operation.
    const fn reg(alu: AluOp) -> Self {
        Self {
            reg_write: true,
            mem_read: false,
            mem_write: false,
            branch: false,
            jump: false,
            link: false,
            alu,
            a_src: OpASrc::Rs,
            b_src: OpBSrc::Rt,
            class: InstrClass::Alu,
        }
    }

    /// Signals for a register-immediate ALU operation.
    const fn imm(alu: AluOp) -> Self {
        Self {
            b_src: OpBSrc::Imm,
            ..Self::reg(alu)
        }
    }

    /// Signals for an immediate shift of `rt`.
    const fn shift(alu: AluOp) -> Self {
        Self {
            a_src: OpASrc::Rt,
            b_src: OpBSrc::Shamt,
            ..Self::reg(alu)
        }
    }

    /// Signals for a conditional branch comparing `rs` with `rt`.
    const fn branch() -> Self {
        Self {
            reg_write: false,
            branch: true,
            class: InstrClass::Branch,
            ..Self::reg(AluOp::Sub)
        }
    }

    /// Signals for an instruction with no effect.
    const fn inert(class: InstrClass) -> Self {
        Self {
            reg_write: false,
            mem_read: false,
            mem_write: false,
            branch: false,
            jump: false,
            link: false,
            alu: AluOp::Add,
            a_src: OpASrc::Zero,
            b_src: OpBSrc::Imm,
            class,
        }
    }

    /// Derives the control signals for `op`.
    ///
    /// # Arguments
    ///
    /// * `op` - The decoded operation.
    ///
    /// # Returns
    ///
    /// The signal set driving EX, MEM and WB for this operation.
    pub const fn for_operation(op: Operation) -> Self {
        match op {
            Operation::Add => Self::reg(AluOp::Add),
            Operation::Sub => Self::reg(AluOp::Sub),
            Operation::And => Self::reg(AluOp::And),
            Operation::Or => Self::reg(AluOp::Or),
            Operation::Xor => Self::reg(AluOp::Xor),
            Operation::Nor => Self::reg(AluOp::Nor),
            Operation::Slt => Self::reg(AluOp::Slt),
            Operation::Sgt => Self::reg(AluOp::Sgt),
            Operation::Sll => Self::shift(AluOp::Sll),
            Operation::Srl => Self::shift(AluOp::Srl),
            Operation::Addi => Self::imm(AluOp::Add),
            Operation::Andi => Self::imm(AluOp::And),
            Operation::Ori => Self::imm(AluOp::Or),
            Operation::Xori => Self::imm(AluOp::Xor),
            Operation::Lui => Self {
                a_src: OpASrc::Zero,
                ..Self::imm(AluOp::Add)
            },
            Operation::Lw => Self {
                mem_read: true,
                class: InstrClass::Load,
                ..Self::imm(AluOp::Add)
            },
            Operation::Sw => Self {
                reg_write: false,
                mem_write: true,
                class: InstrClass::Store,
                ..Self::imm(AluOp::Add)
            },
            Operation::Beq | Operation::Bne | Operation::Bltz | Operation::Bgez => Self::branch(),
            Operation::J => Self {
                jump: true,
                ..Self::inert(InstrClass::Jump)
            },
            Operation::Jal => Self {
                reg_write: true,
                jump: true,
                link: true,
                ..Self::inert(InstrClass::Jump)
            },
            Operation::Nop => Self::inert(InstrClass::Nop),
            Operation::Invalid => Self::inert(InstrClass::Invalid),
        }
    }
}
