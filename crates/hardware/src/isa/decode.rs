//! MIPS32 Instruction Decoder.
//!
//! This module maps a raw 32-bit instruction word onto a typed [`Instruction`]. It:
//! 1. Extracts the 6-bit opcode to select the R, J or I format.
//! 2. Dispatches R-format words on the function code and I-format words on the opcode.
//! 3. Resolves 5-bit register fields through the fixed ABI register table.
//!
//! Decoding is pure and stateless. Any opcode or function code outside the supported
//! subset is rejected; nothing is silently mis-decoded.

use thiserror::Error;

use crate::isa::abi::Register;
use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::mips32::{funct, opcodes};

/// Reasons a word fails to decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The opcode field does not select a supported format or mnemonic.
    #[error("invalid opcode {opcode} in word {word:#010x}")]
    UnsupportedOpcode {
        /// Extracted opcode.
        opcode: u32,
        /// The offending word.
        word: u32,
    },

    /// An R-format word carries an unsupported function code.
    #[error("invalid function {funct} in word {word:#010x}")]
    UnsupportedFunction {
        /// Extracted function code.
        funct: u32,
        /// The offending word.
        word: u32,
    },

    /// A register field falls outside the register table.
    #[error("invalid register index {index}")]
    InvalidRegister {
        /// Extracted register index.
        index: u32,
    },
}

/// Resolves a 5-bit register field.
#[inline]
fn reg(index: u32) -> Result<Register, DecodeError> {
    Register::from_gpr_index(index).ok_or(DecodeError::InvalidRegister { index })
}

/// Decodes a 32-bit MIPS32 instruction word.
///
/// # Arguments
///
/// * `word` - The raw instruction encoding.
///
/// # Returns
///
/// The decoded instruction.
///
/// # Errors
///
/// Returns a [`DecodeError`] for any opcode, function code or register index outside
/// the supported set.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    match word.opcode() {
        opcodes::OP_SPECIAL => decode_register(word),
        opcodes::OP_J => Ok(Instruction::J {
            target: word.target(),
        }),
        op if op > opcodes::IMM_FORMAT_FLOOR => decode_immediate(word),
        opcode => Err(DecodeError::UnsupportedOpcode { opcode, word }),
    }
}

/// Decodes an R-format word (opcode 0) by function code.
fn decode_register(word: u32) -> Result<Instruction, DecodeError> {
    let rs = || reg(word.rs());
    let rt = || reg(word.rt());
    let rd = || reg(word.rd());

    let inst = match word.funct() {
        funct::SYSCALL => Instruction::Syscall,
        funct::MFHI => Instruction::Mfhi { rd: rd()? },
        funct::MFLO => Instruction::Mflo { rd: rd()? },
        funct::MULT => Instruction::Mult {
            rs: rs()?,
            rt: rt()?,
        },
        funct::DIV => Instruction::Div {
            rs: rs()?,
            rt: rt()?,
        },
        funct::ADDU => Instruction::Addu {
            rd: rd()?,
            rs: rs()?,
            rt: rt()?,
        },
        funct::SUBU => Instruction::Subu {
            rd: rd()?,
            rs: rs()?,
            rt: rt()?,
        },
        funct::AND => Instruction::And {
            rd: rd()?,
            rs: rs()?,
            rt: rt()?,
        },
        funct::OR => Instruction::Or {
            rd: rd()?,
            rs: rs()?,
            rt: rt()?,
        },
        funct::SLT => Instruction::Slt {
            rd: rd()?,
            rs: rs()?,
            rt: rt()?,
        },
        funct => return Err(DecodeError::UnsupportedFunction { funct, word }),
    };
    Ok(inst)
}

/// Decodes an I-format word (opcode > 3) by opcode.
fn decode_immediate(word: u32) -> Result<Instruction, DecodeError> {
    let rs = reg(word.rs())?;
    let rt = reg(word.rt())?;
    let imm = word.simm16();

    let inst = match word.opcode() {
        opcodes::OP_BEQ => Instruction::Beq {
            rs,
            rt,
            offset: imm,
        },
        opcodes::OP_BNE => Instruction::Bne {
            rs,
            rt,
            offset: imm,
        },
        opcodes::OP_ADDIU => Instruction::Addiu { rt, rs, imm },
        opcodes::OP_LW => Instruction::Lw {
            rt,
            base: rs,
            offset: imm,
        },
        opcodes::OP_SW => Instruction::Sw {
            rt,
            base: rs,
            offset: imm,
        },
        opcode => return Err(DecodeError::UnsupportedOpcode { opcode, word }),
    };
    Ok(inst)
}
