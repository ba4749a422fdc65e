//! Data Memory.
//!
//! A fixed-length array of signed 32-bit words. Load/store addresses are translated
//! relative to a base equal to the instruction count, so the first data word sits at
//! address `instruction_count` in the program's address space:
//!
//! `effective_index = offset + base_register - instruction_count`
//!
//! Any index outside `[0, len)` is a fatal [`Fault::InvalidDataAddress`]; nothing is clamped.

use tracing::trace;

use crate::common::Fault;

/// Word-addressed data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataMemory {
    words: Vec<i32>,
    base: usize,
}

impl DataMemory {
    /// Creates data memory holding `words`, addressed from `base`.
    ///
    /// # Arguments
    ///
    /// * `words` - Initial contents; the length is fixed from here on.
    /// * `base` - Address of the first word (the instruction count).
    pub fn new(words: Vec<i32>, base: usize) -> Self {
        Self { words, base }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether memory holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Address of the first word.
    pub fn base(&self) -> usize {
        self.base
    }

    /// Read-only view of every word.
    pub fn words(&self) -> &[i32] {
        &self.words
    }

    /// Translates an `offset(base)` operand into a word index.
    ///
    /// Arithmetic is done at 64-bit width so no combination of operands can wrap.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidDataAddress`] when the index falls outside memory.
    pub fn translate(&self, offset: i16, base_value: i32) -> Result<usize, Fault> {
        let index = i64::from(offset) + i64::from(base_value) - self.base as i64;
        usize::try_from(index)
            .ok()
            .filter(|&idx| idx < self.words.len())
            .ok_or(Fault::InvalidDataAddress { index })
    }

    /// Reads the word at a translated index.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidDataAddress`] when `index` is out of range.
    pub fn load(&self, index: usize) -> Result<i32, Fault> {
        self.words
            .get(index)
            .copied()
            .ok_or(Fault::InvalidDataAddress {
                index: index as i64,
            })
    }

    /// Writes the word at a translated index.
    ///
    /// # Errors
    ///
    /// Returns [`Fault::InvalidDataAddress`] when `index` is out of range.
    pub fn store(&mut self, index: usize, val: i32) -> Result<(), Fault> {
        let slot = self
            .words
            .get_mut(index)
            .ok_or(Fault::InvalidDataAddress {
                index: index as i64,
            })?;
        trace!(index, val, "data write");
        *slot = val;
        Ok(())
    }
}
