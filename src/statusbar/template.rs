//! Template parser for bar layouts
//!
//! A template interleaves literal text with command references between
//! separator characters:
//!
//!     "%cpu% | %memory% }{ <fc=#ee9a00>%date%</fc>"
//!
//! Parsing yields `(reference, prefix, suffix)` groups in order, which are then
//! resolved against a [`CommandRegistry`]. A template that does not fit the
//! grammar becomes one literal group with an empty reference, and unknown
//! references resolve to an inert command. Neither step ever fails.
//!
//! Markup inside the literal text is left alone; it is the markup parser's job
//! once command output has been substituted.

pub mod parser;

use chumsky::Parser;
use serde::Serialize;

use crate::statusbar::command::{CommandRegistry, ResolvedCommand, Runnable};
use crate::statusbar::error::TemplateError;

/// Separator used when none is configured.
pub const DEFAULT_SEP_CHAR: char = '%';

/// Alignment separator used when the configured one is unusable.
pub const DEFAULT_ALIGN_SEP: &str = "}{";

/// One `(reference, prefix, suffix)` group of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSegment {
    pub reference: String,
    pub prefix: String,
    pub suffix: String,
}

impl TemplateSegment {
    /// The group standing in for a template that failed to parse.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            reference: String::new(),
            prefix: text.into(),
            suffix: String::new(),
        }
    }
}

/// A template group with its reference resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSegment<R> {
    pub command: ResolvedCommand<R>,
    pub prefix: String,
    pub suffix: String,
}

/// Split a template into groups, or report why it does not fit the grammar.
pub fn try_parse_template(sep: char, text: &str) -> Result<Vec<TemplateSegment>, TemplateError> {
    parser::template_document(sep)
        .parse(text)
        .map_err(TemplateError::from_simple)
}

/// Split a template into groups, treating unparsable input as one literal.
pub fn parse_template_segments(sep: char, text: &str) -> Vec<TemplateSegment> {
    try_parse_template(sep, text).unwrap_or_else(|err| {
        log::debug!("template {:?} taken literally: {}", text, err);
        vec![TemplateSegment::literal(text)]
    })
}

/// Resolve every group's reference against `registry`.
pub fn resolve<R: Runnable + Clone>(
    segments: Vec<TemplateSegment>,
    registry: &CommandRegistry<R>,
) -> Vec<ResolvedSegment<R>> {
    segments
        .into_iter()
        .map(|segment| ResolvedSegment {
            command: registry.lookup(&segment.reference),
            prefix: segment.prefix,
            suffix: segment.suffix,
        })
        .collect()
}

/// Parse `text` and resolve its references against `registry`.
pub fn parse_template<R: Runnable + Clone>(
    sep: char,
    registry: &CommandRegistry<R>,
    text: &str,
) -> Vec<ResolvedSegment<R>> {
    resolve(parse_template_segments(sep, text), registry)
}

/// Like [`parse_template`], building the alias mapping from `commands` first.
pub fn parse_template_with<R: Runnable + Clone>(
    sep: char,
    commands: &[R],
    text: &str,
) -> Vec<ResolvedSegment<R>> {
    let registry: CommandRegistry<R> = commands.iter().cloned().collect();
    parse_template(sep, &registry, text)
}

/// Left, center and right parts of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alignment<'a> {
    pub left: &'a str,
    pub center: &'a str,
    pub right: &'a str,
}

/// Split `template` at the two characters of `align_sep`.
///
/// Left runs up to the first occurrence of the first character, center up to
/// the next occurrence of the second. When either is missing the whole
/// template is left-aligned. An `align_sep` that is not exactly two characters
/// is replaced by [`DEFAULT_ALIGN_SEP`].
pub fn split_alignment<'a>(align_sep: &str, template: &'a str) -> Alignment<'a> {
    let mut chars = align_sep.chars();
    let (open, close) = match (chars.next(), chars.next(), chars.next()) {
        (Some(open), Some(close), None) => (open, close),
        _ => ('}', '{'),
    };

    let split = template.split_once(open).and_then(|(left, rest)| {
        rest.split_once(close)
            .map(|(center, right)| Alignment {
                left,
                center,
                right,
            })
    });

    split.unwrap_or(Alignment {
        left: template,
        center: "",
        right: "",
    })
}
