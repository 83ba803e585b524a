//! Parser combinators for the individual markup forms
//!
//! Each tag form gets its own combinator. Container tags (`action`, `fn`,
//! `fc`) take the recursive item parser for their body so the assembly in
//! [`parser`](super::parser) can tie the knot.
//!
//! All combinators work on `char` input, so spans and raw lengths count
//! characters, not bytes.

use chumsky::prelude::*;
use chumsky::BoxedParser;

use crate::statusbar::markup::ir::MarkupNode;
use crate::statusbar::segment::{Action, Button, FontIndex};

/// Type alias for parser error
pub(crate) type ParserError = Simple<char>;

/// What may follow `<` for it to start a tag rather than be literal text.
pub const RESERVED_PREFIXES: [&str; 8] = [
    "fc=", "fn=", "action=", "/action>", "icon=", "raw=", "/fn>", "/fc>",
];

/// Match any of [`RESERVED_PREFIXES`].
pub(crate) fn reserved_prefix() -> impl Parser<char, &'static str, Error = ParserError> + Clone {
    choice((
        just("fc="),
        just("fn="),
        just("action="),
        just("/action>"),
        just("icon="),
        just("raw="),
        just("/fn>"),
        just("/fc>"),
    ))
}

/// Parse a maximal run of plain text.
///
/// A `<` belongs to the run unless a reserved prefix follows it; the lookahead
/// is rewound either way.
pub(crate) fn text_run() -> impl Parser<char, String, Error = ParserError> + Clone {
    let literal_open = just('<')
        .then(reserved_prefix().rewind().or_not())
        .try_map(|(open, reserved), span| match reserved {
            None => Ok(open),
            Some(prefix) => Err(Simple::custom(span, format!("`<{}` opens a tag", prefix))),
        });

    filter(|c: &char| *c != '<')
        .or(literal_open)
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Color-syntax token: alphanumerics, `,` and `#`.
///
/// Used for both `fc=` colors and `fn=` indices.
pub(crate) fn color_token() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| c.is_alphanumeric() || *c == ',' || *c == '#')
        .repeated()
        .at_least(1)
        .collect::<String>()
}

/// Parse `<icon=PATH/>`.
///
/// PATH holds no `>`, so the first `/>` is the one closing the tag: take every
/// non-`>` character and require the run to end in `/`.
pub(crate) fn icon_tag() -> impl Parser<char, MarkupNode, Error = ParserError> + Clone {
    just("<icon=")
        .ignore_then(filter(|c: &char| *c != '>').repeated().collect::<String>())
        .then_ignore(just('>'))
        .try_map(|body, span| match body.strip_suffix('/') {
            Some(path) => Ok(MarkupNode::Icon(path.to_string())),
            None => Err(Simple::custom(span, "icon tag must be closed with `/>`")),
        })
}

/// Parse `<raw=LEN:DATA/>`, taking exactly LEN characters of DATA.
pub(crate) fn raw_tag() -> BoxedParser<'static, char, MarkupNode, ParserError> {
    let length = filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<isize>()
                .ok()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| Simple::custom(span, format!("raw length {} is out of range", digits)))
        });

    just("<raw=")
        .ignore_then(length)
        .then_ignore(just(':'))
        .then_with(|len| any().repeated().exactly(len).collect::<String>())
        .then_ignore(just("/>"))
        .map(MarkupNode::Raw)
        .boxed()
}

/// Parse the opening `<action=...>` marker into its binding.
///
/// CMD is either backtick-quoted, which allows spaces and `>`, or a bare word
/// ending at whitespace or `>`. It is followed by `>` (button 1) or by
/// whitespace and `button=D>`.
///
/// D is a single digit; several buttons need several nested tags.
pub(crate) fn action_open() -> impl Parser<char, Action, Error = ParserError> + Clone {
    let quoted = filter(|c: &char| *c != '`')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('`'), just('`'));

    let word = filter(|c: &char| *c != '>' && !c.is_whitespace())
        .repeated()
        .at_least(1)
        .collect::<String>();

    let explicit_button = filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignore_then(just("button="))
        .ignore_then(one_of("12345"))
        .then_ignore(just('>'))
        .try_map(|digit, span| {
            Button::from_digit(digit)
                .ok_or_else(|| Simple::custom(span, format!("no mouse button {}", digit)))
        });

    let default_button = just('>').to(Button::Left);

    just("<action=")
        .ignore_then(quoted.or(word))
        .then(explicit_button.or(default_button))
        .map(|(command, button)| Action::single(button, command))
}

/// Parse `<action=...>BODY</action>`.
pub(crate) fn action_tag<P>(items: P) -> impl Parser<char, MarkupNode, Error = ParserError> + Clone
where
    P: Parser<char, Vec<MarkupNode>, Error = ParserError> + Clone,
{
    action_open()
        .then(items)
        .then_ignore(just("</action>"))
        .map(|(action, children)| MarkupNode::Action { action, children })
}

/// Parse `<fn=N>BODY</fn>`. N must be a non-negative integer.
pub(crate) fn font_tag<P>(items: P) -> impl Parser<char, MarkupNode, Error = ParserError> + Clone
where
    P: Parser<char, Vec<MarkupNode>, Error = ParserError> + Clone,
{
    just("<fn=")
        .ignore_then(color_token())
        .try_map(|token, span| {
            token.parse::<FontIndex>().map_err(|err| {
                Simple::custom(span, format!("font index {:?}: {}", token, err))
            })
        })
        .then_ignore(just('>'))
        .then(items)
        .then_ignore(just("</fn>"))
        .map(|(index, children)| MarkupNode::Font { index, children })
}

/// Parse `<fc=C>BODY</fc>`. C is not validated.
pub(crate) fn color_tag<P>(items: P) -> impl Parser<char, MarkupNode, Error = ParserError> + Clone
where
    P: Parser<char, Vec<MarkupNode>, Error = ParserError> + Clone,
{
    just("<fc=")
        .ignore_then(color_token())
        .then_ignore(just('>'))
        .then(items)
        .then_ignore(just("</fc>"))
        .map(|(color, children)| MarkupNode::Color { color, children })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete<O>(
        parser: impl Parser<char, O, Error = ParserError>,
        input: &str,
    ) -> Result<O, Vec<ParserError>> {
        parser.then_ignore(end()).parse(input)
    }

    #[test]
    fn text_run_keeps_literal_brackets() {
        assert_eq!(complete(text_run(), "a < b <b>"), Ok("a < b <b>".to_string()));
        assert_eq!(complete(text_run(), "tail<"), Ok("tail<".to_string()));
    }

    #[test]
    fn text_run_stops_before_tags() {
        let parsed = text_run().parse("abc<fc=red>");
        assert_eq!(parsed, Ok("abc".to_string()));
        assert!(complete(text_run(), "abc</fn>").is_err());
    }

    #[test]
    fn text_run_needs_content() {
        assert!(complete(text_run(), "").is_err());
        assert!(complete(text_run(), "<icon=x/>").is_err());
    }

    #[test]
    fn color_token_charset() {
        assert_eq!(complete(color_token(), "#ff00aa,blue"), Ok("#ff00aa,blue".to_string()));
        assert!(complete(color_token(), "red green").is_err());
    }

    #[test]
    fn icon_paths() {
        assert_eq!(
            complete(icon_tag(), "<icon=/usr/share/icons/cpu.xbm/>"),
            Ok(MarkupNode::Icon("/usr/share/icons/cpu.xbm".to_string()))
        );
        assert_eq!(
            complete(icon_tag(), "<icon=/>"),
            Ok(MarkupNode::Icon(String::new()))
        );
        assert_eq!(
            complete(icon_tag(), "<icon=dir//>"),
            Ok(MarkupNode::Icon("dir/".to_string()))
        );
        assert!(complete(icon_tag(), "<icon=cpu.xbm>").is_err());
        assert!(complete(icon_tag(), "<icon=cpu.xbm/").is_err());
    }

    #[test]
    fn raw_takes_exact_length() {
        assert_eq!(
            complete(raw_tag(), "<raw=5:ab<c//>"),
            Ok(MarkupNode::Raw("ab<c/".to_string()))
        );
        assert_eq!(
            complete(raw_tag(), "<raw=4:a/>b/>"),
            Ok(MarkupNode::Raw("a/>b".to_string()))
        );
        assert_eq!(complete(raw_tag(), "<raw=0:/>"), Ok(MarkupNode::Raw(String::new())));
    }

    #[test]
    fn raw_counts_characters() {
        assert_eq!(
            complete(raw_tag(), "<raw=2:éü/>"),
            Ok(MarkupNode::Raw("éü".to_string()))
        );
    }

    #[test]
    fn raw_rejects_bad_lengths() {
        assert!(complete(raw_tag(), "<raw=3:ab/>").is_err());
        assert!(complete(raw_tag(), "<raw=1:ab/>").is_err());
        assert!(complete(raw_tag(), "<raw=:ab/>").is_err());
        assert!(complete(raw_tag(), "<raw=99999999999999999999999:x/>").is_err());
    }

    #[test]
    fn action_forms() {
        assert_eq!(
            complete(action_open(), "<action=`echo > file` button=3>"),
            Ok(Action::single(Button::Right, "echo > file"))
        );
        assert_eq!(
            complete(action_open(), "<action=`xterm`>"),
            Ok(Action::single(Button::Left, "xterm"))
        );
        assert_eq!(
            complete(action_open(), "<action=myscript button=2>"),
            Ok(Action::single(Button::Middle, "myscript"))
        );
        assert_eq!(
            complete(action_open(), "<action=myscript  button=5>"),
            Ok(Action::single(Button::ScrollDown, "myscript"))
        );
        assert_eq!(
            complete(action_open(), "<action=`notify-send hi`>"),
            Ok(Action::single(Button::Left, "notify-send hi"))
        );
    }

    #[test]
    fn bare_commands_end_at_whitespace() {
        assert!(complete(action_open(), "<action=notify-send hi>").is_err());
    }

    #[test]
    fn action_takes_a_single_button_digit() {
        assert!(complete(action_open(), "<action=`cmd` button=12>").is_err());
        assert!(complete(action_open(), "<action=`cmd` button=6>").is_err());
        assert!(complete(action_open(), "<action=>").is_err());
    }
}
