//! Configuration loading for the statusbar toolchain.
//!
//! `defaults/statusbar.default.toml` is embedded into every binary. Callers
//! layer their own files and overrides on top through [`Loader`] before the
//! result is deserialized into [`BarConfig`] and checked.
//!
//! The parsers themselves never read configuration; they take the relevant
//! values (default color, separator, registry) as arguments.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::statusbar::command::{Command, CommandRegistry};
use crate::statusbar::error::{InvalidConfig, LoadError};

const DEFAULT_TOML: &str = include_str!("../../defaults/statusbar.default.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarConfig {
    pub default_color: String,
    pub sep_char: String,
    pub align_sep: String,
    pub template: String,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl BarConfig {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.sep_char.chars().count() != 1 {
            return Err(InvalidConfig::SeparatorLength(self.sep_char.clone()));
        }
        if self.align_sep.chars().count() != 2 {
            return Err(InvalidConfig::AlignSepLength(self.align_sep.clone()));
        }
        Ok(())
    }

    /// The template separator. Falls back to `%` on an unvalidated config.
    pub fn separator(&self) -> char {
        let mut chars = self.sep_char.chars();
        match (chars.next(), chars.next()) {
            (Some(sep), None) => sep,
            _ => crate::statusbar::template::DEFAULT_SEP_CHAR,
        }
    }

    pub fn registry(&self) -> CommandRegistry<Command> {
        self.commands.iter().cloned().collect()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer configuration given as TOML text.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the configuration.
    pub fn build(self) -> Result<BarConfig, LoadError> {
        let config: BarConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        log::debug!(
            "loaded configuration with {} commands",
            config.commands.len()
        );
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BarConfig, LoadError> {
    Loader::new().build()
}
