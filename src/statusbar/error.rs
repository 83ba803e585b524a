//! Error types for the statusbar parsers and configuration

use chumsky::error::{Simple, SimpleReason};
use std::ops::Range;
use thiserror::Error;

pub use config::ConfigError;

/// Why a markup string could not be parsed.
///
/// Only surfaced by [`try_parse_markup`](crate::statusbar::markup::try_parse_markup);
/// [`parse_markup`](crate::statusbar::markup::parse_markup) turns it into a
/// diagnostic segment instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("invalid markup at {}..{}: {reason}", span.start, span.end)]
    Grammar { span: Range<usize>, reason: String },
}

/// Why a layout template could not be split into command references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("invalid template at {}..{}: {reason}", span.start, span.end)]
    Grammar { span: Range<usize>, reason: String },
}

/// Problems with a configuration that deserialized but cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("sep_char must be exactly one character, got {0:?}")]
    SeparatorLength(String),
    #[error("align_sep must be exactly two characters, got {0:?}")]
    AlignSepLength(String),
}

/// Everything that can go wrong while loading configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Invalid(#[from] InvalidConfig),
}

/// Errors rendering parse results.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown output format {0:?} (expected json, yaml or tag)")]
    UnknownFormat(String),
    #[error("the {0} format only applies to segment lists")]
    Unsupported(&'static str),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Reduce chumsky's error list to its first entry.
pub(crate) fn first_error(errors: Vec<Simple<char>>) -> (Range<usize>, String) {
    match errors.into_iter().next() {
        Some(error) => {
            let reason = match error.reason() {
                SimpleReason::Custom(message) => message.clone(),
                _ => error.to_string(),
            };
            (error.span(), reason)
        }
        None => (0..0, "unknown parse failure".to_string()),
    }
}

impl MarkupError {
    pub(crate) fn from_simple(errors: Vec<Simple<char>>) -> Self {
        let (span, reason) = first_error(errors);
        MarkupError::Grammar { span, reason }
    }
}

impl TemplateError {
    pub(crate) fn from_simple(errors: Vec<Simple<char>>) -> Self {
        let (span, reason) = first_error(errors);
        TemplateError::Grammar { span, reason }
    }
}
