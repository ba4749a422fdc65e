//! # ISA Unit Tests
//!
//! This module contains unit tests for the Instruction Set Architecture (ISA) layer.
//! It covers field extraction, per-mnemonic decoding, rejection of unsupported words
//! and the listing syntax.
