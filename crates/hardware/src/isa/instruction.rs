//! Instruction encoding and decoded instruction representation.
//!
//! Provides bit extraction functions for the three MIPS32 field layouts and the
//! closed [`Instruction`] type produced by the decoder. Each format is read with
//! explicit shift/mask extraction rather than overlaying bit-field views on the word.

use crate::common::constants::{
    FUNCT_MASK, IMM_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_FIELD_MASK, RS_SHIFT,
    RT_SHIFT, SHAMT_SHIFT, TARGET_MASK,
};
use crate::isa::abi::Register;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Fields shared between formats (`rs`, `rt`) sit at the same position in the R and I
/// formats, so one accessor serves both.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` field (bits 21-25), R and I formats.
    fn rs(&self) -> u32;

    /// Extracts the `rt` field (bits 16-20), R and I formats.
    fn rt(&self) -> u32;

    /// Extracts the `rd` field (bits 11-15), R format.
    fn rd(&self) -> u32;

    /// Extracts the shift-amount field (bits 6-10), R format.
    ///
    /// None of the supported mnemonics use it.
    fn shamt(&self) -> u32;

    /// Extracts the function code (bits 0-5), R format.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15), I format.
    fn imm16(&self) -> u16;

    /// Extracts the immediate sign-extended from bit 15, I format.
    fn simm16(&self) -> i16;

    /// Extracts the 26-bit jump target (bits 0-25), J format.
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> u32 {
        (self >> RS_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn rt(&self) -> u32 {
        (self >> RT_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u32 {
        (self >> RD_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_FIELD_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn simm16(&self) -> i16 {
        self.imm16() as i16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Broad instruction class, used for statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// Register or immediate arithmetic/logic.
    Alu,
    /// `mult`, `div`, `mfhi`, `mflo`.
    MulDiv,
    /// `lw`.
    Load,
    /// `sw`.
    Store,
    /// `beq`, `bne`.
    Branch,
    /// `j`.
    Jump,
    /// `syscall`.
    System,
}

/// A decoded instruction.
///
/// One variant per supported mnemonic, each carrying exactly the operands that mnemonic
/// uses. Immediates are stored sign-extended; branch offsets count instructions relative
/// to the branch itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Service request selected by `$v0`.
    Syscall,
    /// `rd = hi`.
    Mfhi {
        /// Destination register.
        rd: Register,
    },
    /// `rd = lo`.
    Mflo {
        /// Destination register.
        rd: Register,
    },
    /// `hi:lo = rs * rt` (signed, 64-bit product).
    Mult {
        /// Multiplicand.
        rs: Register,
        /// Multiplier.
        rt: Register,
    },
    /// `lo = rs / rt`, `hi = rs % rt`.
    Div {
        /// Dividend.
        rs: Register,
        /// Divisor.
        rt: Register,
    },
    /// `rd = rs + rt`, wrapping.
    Addu {
        /// Destination register.
        rd: Register,
        /// First operand.
        rs: Register,
        /// Second operand.
        rt: Register,
    },
    /// `rd = rs - rt`, wrapping.
    Subu {
        /// Destination register.
        rd: Register,
        /// Minuend.
        rs: Register,
        /// Subtrahend.
        rt: Register,
    },
    /// `rd = rs & rt`.
    And {
        /// Destination register.
        rd: Register,
        /// First operand.
        rs: Register,
        /// Second operand.
        rt: Register,
    },
    /// `rd = rs | rt`.
    Or {
        /// Destination register.
        rd: Register,
        /// First operand.
        rs: Register,
        /// Second operand.
        rt: Register,
    },
    /// `rd = (rs < rt) ? 1 : 0`, signed.
    Slt {
        /// Destination register.
        rd: Register,
        /// Left operand.
        rs: Register,
        /// Right operand.
        rt: Register,
    },
    /// Jump to an absolute instruction index.
    J {
        /// 26-bit instruction index.
        target: u32,
    },
    /// Branch to `pc + offset` when `rs == rt`.
    Beq {
        /// Left operand.
        rs: Register,
        /// Right operand.
        rt: Register,
        /// Displacement in instructions from the branch itself.
        offset: i16,
    },
    /// Branch to `pc + offset` when `rs != rt`.
    Bne {
        /// Left operand.
        rs: Register,
        /// Right operand.
        rt: Register,
        /// Displacement in instructions from the branch itself.
        offset: i16,
    },
    /// `rt = rs + imm`, wrapping.
    Addiu {
        /// Destination register.
        rt: Register,
        /// Source register.
        rs: Register,
        /// Sign-extended immediate.
        imm: i16,
    },
    /// `rt = data[offset + base - instruction_count]`.
    Lw {
        /// Destination register.
        rt: Register,
        /// Base register.
        base: Register,
        /// Sign-extended offset.
        offset: i16,
    },
    /// `data[offset + base - instruction_count] = rt`.
    Sw {
        /// Source register.
        rt: Register,
        /// Base register.
        base: Register,
        /// Sign-extended offset.
        offset: i16,
    },
}

impl Instruction {
    /// Assembly mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Syscall => "syscall",
            Instruction::Mfhi { .. } => "mfhi",
            Instruction::Mflo { .. } => "mflo",
            Instruction::Mult { .. } => "mult",
            Instruction::Div { .. } => "div",
            Instruction::Addu { .. } => "addu",
            Instruction::Subu { .. } => "subu",
            Instruction::And { .. } => "and",
            Instruction::Or { .. } => "or",
            Instruction::Slt { .. } => "slt",
            Instruction::J { .. } => "j",
            Instruction::Beq { .. } => "beq",
            Instruction::Bne { .. } => "bne",
            Instruction::Addiu { .. } => "addiu",
            Instruction::Lw { .. } => "lw",
            Instruction::Sw { .. } => "sw",
        }
    }

    /// Statistics class of this instruction.
    pub const fn class(&self) -> InstructionClass {
        match self {
            Instruction::Syscall => InstructionClass::System,
            Instruction::Mfhi { .. }
            | Instruction::Mflo { .. }
            | Instruction::Mult { .. }
            | Instruction::Div { .. } => InstructionClass::MulDiv,
            Instruction::Addu { .. }
            | Instruction::Subu { .. }
            | Instruction::And { .. }
            | Instruction::Or { .. }
            | Instruction::Slt { .. }
            | Instruction::Addiu { .. } => InstructionClass::Alu,
            Instruction::J { .. } => InstructionClass::Jump,
            Instruction::Beq { .. } | Instruction::Bne { .. } => InstructionClass::Branch,
            Instruction::Lw { .. } => InstructionClass::Load,
            Instruction::Sw { .. } => InstructionClass::Store,
        }
    }
}
