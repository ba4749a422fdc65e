//! # Error and Fault Tests
//!
//! This module contains unit tests for fault messages, error wrapping and the
//! process exit status assigned to each error.

use std::io;

use mipsim_core::isa::DecodeError;
use mipsim_core::{Fault, SimError};

#[test]
fn test_fault_display_messages() {
    assert_eq!(
        Fault::InvalidSyscall { code: 7 }.to_string(),
        "invalid syscall code 7"
    );
    assert_eq!(Fault::DivideByZero.to_string(), "cannot divide by 0");
    assert_eq!(
        Fault::InvalidJumpTarget { target: 40 }.to_string(),
        "invalid jump address 40"
    );
    assert_eq!(
        Fault::InvalidBranchTarget { target: -1 }.to_string(),
        "invalid branch address -1"
    );
    assert_eq!(
        Fault::InvalidDataAddress { index: 3 }.to_string(),
        "invalid data address 3"
    );
    assert_eq!(Fault::ZeroRegisterWrite.to_string(), "write to $zero");
    assert_eq!(
        Fault::StepLimitExceeded { limit: 10 }.to_string(),
        "step limit of 10 instructions exceeded"
    );
}

#[test]
fn test_fault_error_carries_pc() {
    let err = SimError::Fault {
        pc: 12,
        fault: Fault::DivideByZero,
    };
    assert_eq!(err.to_string(), "cannot divide by 0 on PC 12");
    assert_eq!(err.fault(), Some(&Fault::DivideByZero));
}

#[test]
fn test_decode_error_carries_position_and_source() {
    let err = SimError::Decode {
        position: 3,
        source: DecodeError::UnsupportedOpcode {
            opcode: 1,
            word: 0x0400_0000,
        },
    };
    assert_eq!(
        err.to_string(),
        "invalid opcode 1 in word 0x04000000 at line 3"
    );
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("invalid opcode 1 in word 0x04000000")
    );
    assert_eq!(err.fault(), None);
}

#[test]
fn test_exit_codes_distinguish_error_kinds() {
    let fault = SimError::Fault {
        pc: 0,
        fault: Fault::ZeroRegisterWrite,
    };
    let decode = SimError::Decode {
        position: 1,
        source: DecodeError::UnsupportedFunction {
            funct: 63,
            word: 63,
        },
    };
    let malformed = SimError::MalformedInput {
        line: 1,
        reason: "missing header line".into(),
    };
    let io_err = SimError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let trace = SimError::Trace(io::Error::other("disk full"));
    let config = SimError::Config {
        path: "sim.json".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "gone"),
    };

    assert_eq!(fault.exit_code(), 1);
    assert_eq!(decode.exit_code(), 2);
    assert_eq!(malformed.exit_code(), 3);
    assert_eq!(io_err.exit_code(), 3);
    assert_eq!(trace.exit_code(), 4);
    assert_eq!(config.exit_code(), 3);
    assert_eq!(config.to_string(), "could not read config sim.json: gone");
}
