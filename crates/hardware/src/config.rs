//! Configuration system for the MIPS pipeline simulator.
//!
//! This module defines all configuration structures and enums used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (memory size, register count, issue width).
//! 2. **Structures:** Hierarchical config for general, memory, and pipeline settings.
//! 3. **Policies:** How the pipeline treats words that decode to no known operation.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Data memory size in bytes (4 KiB).
    pub const MEMORY_SIZE: usize = 4096;

    /// Number of general-purpose registers.
    pub const REGISTER_COUNT: usize = 32;

    /// Upper bound on the register count; register fields are 5 bits wide.
    pub const MAX_REGISTER_COUNT: usize = 32;

    /// Instructions fetched and issued per cycle.
    pub const ISSUE_WIDTH: usize = 2;

    /// Address of the first program word.
    pub const ENTRY_PC: u32 = 0;
}

/// Root simulator configuration.
///
/// Every section and field is optional in JSON; missing values take their defaults.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, InvalidInstructionPolicy};
///
/// let json = r#"{
///     "memory": { "size_bytes": 1024 },
///     "pipeline": { "issue_width": 1, "invalid_instruction": "Nop" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.memory.size_bytes, 1024);
/// assert_eq!(config.pipeline.issue_width, 1);
/// assert_eq!(config.pipeline.register_count, 32);
/// assert_eq!(config.pipeline.invalid_instruction, InvalidInstructionPolicy::Nop);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Data memory configuration
    pub memory: MemoryConfig,
    /// Pipeline shape and behaviour
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON document.
    ///
    /// # Returns
    ///
    /// The validated configuration, or a [`ConfigError`] if parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter describes a machine the simulator can build.
    ///
    /// # Returns
    ///
    /// `Ok(())` when valid, otherwise [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.issue_width == 0 {
            return Err(ConfigError::Invalid(
                "pipeline.issue_width must be at least 1".to_string(),
            ));
        }
        if !(1..=defaults::MAX_REGISTER_COUNT).contains(&self.pipeline.register_count) {
            return Err(ConfigError::Invalid(format!(
                "pipeline.register_count must be between 1 and {}, got {}",
                defaults::MAX_REGISTER_COUNT,
                self.pipeline.register_count
            )));
        }
        if self.memory.size_bytes == 0 || self.memory.size_bytes % 4 != 0 {
            return Err(ConfigError::Invalid(format!(
                "memory.size_bytes must be a non-zero multiple of 4, got {}",
                self.memory.size_bytes
            )));
        }
        if self.general.entry_pc % 4 != 0 {
            return Err(ConfigError::Invalid(format!(
                "general.entry_pc must be word aligned, got {:#x}",
                self.general.entry_pc
            )));
        }
        if self.pipeline.history_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "pipeline.history_limit must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Address of the first program word; fetch starts here
    #[serde(default = "GeneralConfig::default_entry_pc")]
    pub entry_pc: u32,

    /// Emit the per-cycle pipeline occupancy line at `info` level instead of `debug`
    #[serde(default)]
    pub trace_pipeline: bool,
}

impl GeneralConfig {
    /// Returns the default entry program counter.
    const fn default_entry_pc() -> u32 {
        defaults::ENTRY_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            entry_pc: defaults::ENTRY_PC,
            trace_pipeline: false,
        }
    }
}

/// Data memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Size of byte-addressable data memory
    #[serde(default = "MemoryConfig::default_size_bytes")]
    pub size_bytes: usize,
}

impl MemoryConfig {
    /// Returns the default data memory size.
    const fn default_size_bytes() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: defaults::MEMORY_SIZE,
        }
    }
}

/// What the pipeline does when an invalid instruction reaches EX.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum InvalidInstructionPolicy {
    /// Stop the run with a decode error.
    #[default]
    Halt,
    /// Retire the instruction with no architectural effect.
    Nop,
}

/// Pipeline shape and behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Superscalar width (instructions fetched and issued per cycle)
    #[serde(default = "PipelineConfig::default_issue_width")]
    pub issue_width: usize,

    /// Number of general-purpose registers
    #[serde(default = "PipelineConfig::default_register_count")]
    pub register_count: usize,

    /// Treatment of words that decode to no known operation
    #[serde(default)]
    pub invalid_instruction: InvalidInstructionPolicy,

    /// Maximum number of cycle snapshots retained by the simulator (`None` keeps all)
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl PipelineConfig {
    /// Returns the default issue width.
    const fn default_issue_width() -> usize {
        defaults::ISSUE_WIDTH
    }

    /// Returns the default register count.
    const fn default_register_count() -> usize {
        defaults::REGISTER_COUNT
    }
}

impl Default for PipelineConfig {
    /// Creates a dual-issue, 32-register pipeline that halts on invalid instructions.
    fn default() -> Self {
        Self {
            issue_width: defaults::ISSUE_WIDTH,
            register_count: defaults::REGISTER_COUNT,
            invalid_instruction: InvalidInstructionPolicy::default(),
            history_limit: None,
        }
    }
}
