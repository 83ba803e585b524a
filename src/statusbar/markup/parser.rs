//! Recursive assembly of the markup grammar
//!
//! Every position tries the same six alternatives in a fixed order: plain
//! text, icon, raw, action, font, color. Each alternative rewinds on failure,
//! so a half-matched tag falls through to the next one. Container tags recurse
//! into the same alternation for their bodies.

use chumsky::prelude::*;

use super::combinators::{
    action_tag, color_tag, font_tag, icon_tag, raw_tag, text_run, ParserError,
};
use crate::statusbar::markup::ir::MarkupNode;

/// Build the parser for a sequence of markup items (possibly empty).
pub(crate) fn build_markup_parser(
) -> impl Parser<char, Vec<MarkupNode>, Error = ParserError> + Clone {
    recursive(|items| {
        choice((
            text_run().map(MarkupNode::Text),
            icon_tag(),
            raw_tag(),
            action_tag(items.clone()),
            font_tag(items.clone()),
            color_tag(items),
        ))
        .repeated()
    })
}

/// A whole markup string: items up to end of input.
pub(crate) fn markup_document() -> impl Parser<char, Vec<MarkupNode>, Error = ParserError> + Clone
{
    build_markup_parser().then_ignore(end())
}
