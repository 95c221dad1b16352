//! Tuning configuration for the arithmetic engine.
//!
//! Values are layered: built-in defaults, then an optional `genfun.toml`
//! in the working directory, then `GENFUN_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default truncation length for series built without an explicit length.
pub const DEFAULT_LENGTH: usize = 20;

/// Operand length at which multiplication switches to Karatsuba.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 100;

/// Default size of precomputed factorial tables.
pub const DEFAULT_FACTORIAL_BOUND: usize = 256;

/// Kernel tuning parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Truncation length used when the caller does not supply one.
    pub default_length: usize,

    /// Operand length at or above which series multiplication uses Karatsuba.
    pub karatsuba_threshold: usize,

    /// Number of entries in factorial / inverse-factorial tables.
    pub factorial_bound: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        KernelConfig {
            default_length: DEFAULT_LENGTH,
            karatsuba_threshold: DEFAULT_KARATSUBA_THRESHOLD,
            factorial_bound: DEFAULT_FACTORIAL_BOUND,
        }
    }
}

impl KernelConfig {
    /// Load configuration with precedence: env vars → `genfun.toml` → defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but cannot be parsed into
    /// the expected shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("genfun.toml")
    }

    /// Load configuration from a custom file path (skipped if absent).
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but cannot be parsed into
    /// the expected shape.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            debug!("loading kernel config from {}", path.as_ref().display());
            builder = builder.add_source(File::from(path.as_ref()));
        }

        builder = builder.add_source(
            Environment::with_prefix("GENFUN")
                .prefix_separator("_")
                .try_parsing(true),
        );

        let config: KernelConfig = builder.build()?.try_deserialize()?;
        debug!("kernel config: {config:?}");
        Ok(config)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("default_length", DEFAULT_LENGTH as i64)?
            .set_default("karatsuba_threshold", DEFAULT_KARATSUBA_THRESHOLD as i64)?
            .set_default("factorial_bound", DEFAULT_FACTORIAL_BOUND as i64)
    }
}
