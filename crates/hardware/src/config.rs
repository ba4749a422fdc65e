//! Configuration system for the simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Faulting `$zero` writes and zero-operand divides, and the conventional log file name.
//! 2. **Structures:** Hierarchical config for general execution, trace output and the console.
//! 3. **Enums:** `$zero` write policy, divide-by-zero policy and trace format.
//!
//! Configuration is supplied as JSON (`--config` on the CLI) or built with `Config::default()`.
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// File the textual trace is written to when no path is given.
    pub const TRACE_PATH: &str = "log.txt";

    /// Prompt printed before a syscall 5 read.
    pub const CONSOLE_PROMPT: &str = "Syscall input: ";
}

/// What a write to `$zero` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ZeroRegisterPolicy {
    /// Any write to `$zero` is a fatal [`Fault::ZeroRegisterWrite`](crate::common::Fault).
    #[default]
    Fault,
    /// Writes to `$zero` are silently discarded (conventional ISA semantics).
    Ignore,
}

/// Which `div` operands are treated as a divide-by-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum DividePolicy {
    /// Fault when either the dividend or the divisor is zero.
    #[default]
    EitherOperand,
    /// Fault only when the divisor is zero.
    DivisorOnly,
}

/// Execution trace output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum TraceFormat {
    /// Human-readable log in the `log.txt` layout.
    #[default]
    Text,
    /// One JSON object per trace event.
    #[serde(alias = "JSON")]
    Json,
    /// No trace output.
    None,
}

/// Root configuration structure.
///
/// # Example
///
/// ```
/// use mipsim_core::config::{Config, TraceFormat, ZeroRegisterPolicy};
///
/// let json = r#"{
///     "general": { "max_steps": 5000, "zero_register_policy": "Ignore" },
///     "trace": { "format": "Json", "path": "run.jsonl" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(5000));
/// assert_eq!(config.general.zero_register_policy, ZeroRegisterPolicy::Ignore);
/// assert_eq!(config.trace.format, TraceFormat::Json);
/// assert_eq!(config.console.prompt, "Syscall input: ");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General execution settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Trace output settings
    #[serde(default)]
    pub trace: TraceConfig,
    /// Syscall console settings
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedInput`] with the line reported by `serde_json`.
    pub fn from_json(text: &str) -> Result<Self, SimError> {
        serde_json::from_str(text).map_err(|e| SimError::MalformedInput {
            line: e.line(),
            reason: format!("config: {e}"),
        })
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General execution settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Upper bound on executed instructions. `None` runs until the program halts.
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// What a write to `$zero` does.
    #[serde(default)]
    pub zero_register_policy: ZeroRegisterPolicy,

    /// Which zero operands make `div` fault.
    #[serde(default)]
    pub divide_policy: DividePolicy,
}

/// Trace output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Output format.
    #[serde(default)]
    pub format: TraceFormat,

    /// Destination file.
    #[serde(default = "TraceConfig::default_path")]
    pub path: PathBuf,
}

impl TraceConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(defaults::TRACE_PATH)
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            format: TraceFormat::default(),
            path: Self::default_path(),
        }
    }
}

/// Syscall console settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Text printed before reading an integer for syscall 5.
    #[serde(default = "ConsoleConfig::default_prompt")]
    pub prompt: String,
}

impl ConsoleConfig {
    fn default_prompt() -> String {
        defaults::CONSOLE_PROMPT.to_string()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: Self::default_prompt(),
        }
    }
}
