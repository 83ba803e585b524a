//! Command descriptions and alias resolution for templates
//!
//! The template parser only names commands; running them is someone else's
//! job. What it needs from a command is its alias, which is captured by the
//! [`Runnable`] trait. [`CommandRegistry`] maps aliases to runnables and never
//! fails a lookup: unknown names resolve to an inert [`Command`] so a typo in a
//! template shows up as a blank slot instead of breaking the bar.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Refresh interval, in tenths of a second, given to fallback commands.
pub const DEFAULT_INTERVAL: u32 = 10;

/// Anything a template can refer to by alias.
pub trait Runnable {
    /// Name used to refer to this runnable from a template.
    fn alias(&self) -> String;
}

/// Description of an external command that periodically produces text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: Vec<(String, String)>,
    /// Template name. Defaults to `program` when absent.
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default = "default_interval")]
    pub interval: u32,
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            alias: None,
            interval: DEFAULT_INTERVAL,
        }
    }

    /// Inert command standing in for an unknown alias: runs `name` with no
    /// arguments and no environment every [`DEFAULT_INTERVAL`] ticks.
    pub fn fallback(name: impl Into<String>) -> Self {
        Self::new(name)
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }
}

impl Runnable for Command {
    fn alias(&self) -> String {
        match &self.alias {
            Some(alias) if !alias.is_empty() => alias.clone(),
            _ => self.program.clone(),
        }
    }
}

/// Outcome of resolving a template reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "command", rename_all = "snake_case")]
pub enum ResolvedCommand<R> {
    /// The alias matched a registered runnable.
    Registered(R),
    /// Nothing was registered under the alias.
    Fallback(Command),
}

impl<R: Runnable> ResolvedCommand<R> {
    pub fn alias(&self) -> String {
        match self {
            ResolvedCommand::Registered(runnable) => runnable.alias(),
            ResolvedCommand::Fallback(command) => command.alias(),
        }
    }
}

impl<R> ResolvedCommand<R> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedCommand::Fallback(_))
    }

    pub fn registered(&self) -> Option<&R> {
        match self {
            ResolvedCommand::Registered(runnable) => Some(runnable),
            ResolvedCommand::Fallback(_) => None,
        }
    }
}

/// Alias → runnable mapping. Lookup is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct CommandRegistry<R> {
    by_alias: HashMap<String, R>,
}

impl<R> Default for CommandRegistry<R> {
    fn default() -> Self {
        Self {
            by_alias: HashMap::new(),
        }
    }
}

impl<R: Runnable + Clone> CommandRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `runnable` under its alias, replacing any earlier entry.
    pub fn register(&mut self, runnable: R) {
        self.by_alias.insert(runnable.alias(), runnable);
    }

    /// Resolve `alias`, substituting [`Command::fallback`] on a miss.
    pub fn lookup(&self, alias: &str) -> ResolvedCommand<R> {
        match self.by_alias.get(alias) {
            Some(runnable) => ResolvedCommand::Registered(runnable.clone()),
            None => {
                log::debug!("no command registered as {:?}, using an inert one", alias);
                ResolvedCommand::Fallback(Command::fallback(alias))
            }
        }
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.by_alias.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.by_alias.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_alias.is_empty()
    }
}

impl<R: Runnable + Clone> FromIterator<R> for CommandRegistry<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut registry = Self::new();
        for runnable in iter {
            registry.register(runnable);
        }
        registry
    }
}
