//! # Simulation Tests



/// Run driver: halting, faults and the step limit.
pub mod simulator;
