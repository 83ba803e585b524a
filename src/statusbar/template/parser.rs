//! Grammar for separator-delimited layout templates
//!
//!     template = group* EOF
//!     group    = chunk SEP chunk SEP chunk
//!     chunk    = [^SEP]*
//!
//! The first and last chunks of a group are literal text, the middle one is a
//! command reference. The trailing chunk swallows everything up to the next
//! separator, so every group after the first starts with an empty prefix.

use chumsky::prelude::*;

use crate::statusbar::template::TemplateSegment;

/// Type alias for parser error
pub(crate) type ParserError = Simple<char>;

/// Run of characters other than `sep`.
pub(crate) fn chunk(sep: char) -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(move |c: &char| *c != sep)
        .repeated()
        .collect::<String>()
}

/// `SEP name SEP`
pub(crate) fn reference(sep: char) -> impl Parser<char, String, Error = ParserError> + Clone {
    chunk(sep).delimited_by(just(sep), just(sep))
}

/// One `(prefix, reference, suffix)` group.
pub(crate) fn group(sep: char) -> impl Parser<char, TemplateSegment, Error = ParserError> + Clone {
    chunk(sep)
        .then(reference(sep))
        .then(chunk(sep))
        .map(|((prefix, reference), suffix)| TemplateSegment {
            reference,
            prefix,
            suffix,
        })
}

/// A whole template: groups up to end of input.
pub(crate) fn template_document(
    sep: char,
) -> impl Parser<char, Vec<TemplateSegment>, Error = ParserError> + Clone {
    group(sep).repeated().then_ignore(end())
}
