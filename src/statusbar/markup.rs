//! Markup parser for status strings
//!
//! Turns a string such as
//!
//!     <fc=#ff0000>cpu <action=`top` button=3>42%</action></fc>
//!
//! into styled segments, each carrying the color, font index and click actions
//! of the regions enclosing it.
//!
//! Grammar (first match wins at every position):
//!
//!     item   = text | icon | raw | action | font | color
//!     text   = ( [^<] | "<" !reserved )+
//!     icon   = "<icon=" [^>]* "/>"
//!     raw    = "<raw=" digits ":" <exactly LEN chars> "/>"
//!     action = "<action=" cmd ( ">" | ws+ "button=" [1-5] ">" ) item* "</action>"
//!     font   = "<fn=" token ">" item* "</fn>"
//!     color  = "<fc=" token ">" item* "</fc>"
//!
//! Parsing happens in two steps: the grammar builds a [`MarkupNode`] tree
//! ([`parser`]), which is then flattened with inherited attributes
//! ([`flatten`]).
//!
//! Malformed input never reaches the caller as an error through
//! [`parse_markup`]: the whole string is replaced by a single diagnostic
//! segment. Use [`try_parse_markup`] to see why.

pub mod combinators;
pub mod flatten;
pub mod ir;
pub mod parser;

use chumsky::Parser;

use crate::statusbar::error::MarkupError;
use crate::statusbar::segment::{Segment, StyledSegment, TextContext};

pub use combinators::RESERVED_PREFIXES;
pub use flatten::flatten;
pub use ir::MarkupNode;

/// Prefix of the diagnostic text substituted for unparsable markup.
pub const PARSE_FAILURE_PREFIX: &str = "Could not parse string: ";

/// Parse markup into its tag tree without resolving attributes.
pub fn parse_markup_tree(text: &str) -> Result<Vec<MarkupNode>, MarkupError> {
    parser::markup_document()
        .parse(text)
        .map_err(MarkupError::from_simple)
}

/// Parse markup under an explicit starting context.
pub fn parse_markup_in(context: TextContext, text: &str) -> Result<Vec<StyledSegment>, MarkupError> {
    let nodes = parse_markup_tree(text)?;
    let segments = flatten(nodes, context);
    log::trace!("parsed markup {:?} into {} segments", text, segments.len());
    Ok(segments)
}

/// Parse markup with `default_color`, font 0 and no actions as the initial context.
pub fn try_parse_markup(default_color: &str, text: &str) -> Result<Vec<StyledSegment>, MarkupError> {
    parse_markup_in(TextContext::new(default_color), text)
}

/// Parse markup, degrading to a single diagnostic segment on failure.
///
/// The diagnostic is `Text("Could not parse string: <text>")` in the default
/// color, font 0, with no actions. Partial results are never returned.
pub fn parse_markup(default_color: &str, text: &str) -> Vec<StyledSegment> {
    match try_parse_markup(default_color, text) {
        Ok(segments) => segments,
        Err(err) => {
            log::debug!("falling back to diagnostic segment for {:?}: {}", text, err);
            vec![diagnostic_segment(default_color, text)]
        }
    }
}

/// The segment shown in place of markup that failed to parse.
pub fn diagnostic_segment(default_color: &str, text: &str) -> StyledSegment {
    TextContext::new(default_color).style(Segment::Text(format!(
        "{}{}",
        PARSE_FAILURE_PREFIX, text
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_segment() {
        let segments = parse_markup("white", "just text");
        assert_eq!(segments, vec![StyledSegment::plain("just text", "white")]);
    }

    #[test]
    fn failure_discards_partial_results() {
        let segments = parse_markup("white", "ok <fc=red>unterminated");
        assert_eq!(
            segments,
            vec![StyledSegment::plain(
                "Could not parse string: ok <fc=red>unterminated",
                "white"
            )]
        );
    }

    #[test]
    fn try_parse_reports_error() {
        let err = try_parse_markup("white", "<fn=x>a</fn>").unwrap_err();
        assert!(matches!(err, MarkupError::Grammar { .. }));
    }

    #[test]
    fn explicit_context_is_inherited() {
        let context = TextContext::new("white").with_font(2);
        let segments = parse_markup_in(context, "<fc=red>a</fc>").unwrap();
        assert_eq!(segments[0].font, 2);
        assert_eq!(segments[0].color, "red");
    }
}
