//! Integration tests for the markup parser
//!
//! Covers the documented behaviors of each tag form, attribute inheritance
//! and the whole-input fallback for malformed markup.

use rstest::rstest;
use statusbar::statusbar::formats::to_tag_string;
use statusbar::statusbar::markup::{parse_markup, try_parse_markup, PARSE_FAILURE_PREFIX};
use statusbar::{Action, Button, Segment, StyledSegment};

fn dump(markup: &str) -> String {
    to_tag_string(&parse_markup("grey", markup))
        .trim_end()
        .to_string()
}

fn text(content: &str, color: &str) -> StyledSegment {
    StyledSegment::plain(content, color)
}

#[rstest]
#[case::words("hello world")]
#[case::lone_bracket("a < b")]
#[case::html_like("<b>bold</b>")]
#[case::near_miss("<fc red> <fn> <action >")]
#[case::trailing_bracket("50%<")]
#[case::unicode("température 21°C")]
fn plain_text_is_a_single_segment(#[case] input: &str) {
    assert_eq!(parse_markup("white", input), vec![text(input, "white")]);
}

#[test]
fn color_region() {
    assert_eq!(
        parse_markup("white", "<fc=#ff0000>hello</fc>"),
        vec![text("hello", "#ff0000")]
    );
}

#[rstest]
#[case::explicit("<action=myscript button=2>click me</action>", Button::Middle)]
#[case::default("<action=myscript>click me</action>", Button::Left)]
#[case::quoted("<action=`myscript` button=4>click me</action>", Button::ScrollUp)]
fn action_region(#[case] input: &str, #[case] button: Button) {
    let segments = parse_markup("white", input);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].segment, Segment::Text("click me".into()));
    assert_eq!(segments[0].actions, vec![Action::single(button, "myscript")]);
}

#[test]
fn inner_color_overrides_then_outer_resumes() {
    assert_eq!(
        parse_markup("white", "<fc=red><fc=blue>x</fc>y</fc>"),
        vec![text("x", "blue"), text("y", "red")]
    );
}

#[test]
fn raw_content_is_not_markup() {
    assert_eq!(parse_markup("white", "<raw=4:ab<c/>"), vec![text("ab<c", "white")]);
}

#[test]
fn raw_length_is_exact() {
    // Five characters of DATA leave no room for the closing marker.
    assert_eq!(
        parse_markup("white", "<raw=5:ab<c/>"),
        vec![text("Could not parse string: <raw=5:ab<c/>", "white")]
    );
}

#[test]
fn raw_can_hold_closing_tags() {
    assert_eq!(
        parse_markup("white", "<fc=red><raw=5:</fc>/></fc>"),
        vec![text("</fc>", "red")]
    );
}

#[rstest]
#[case::unterminated_color("<fc=red>unterminated")]
#[case::unterminated_action("<action=`x`>click")]
#[case::bad_font("<fn=big>x</fn>")]
#[case::stray_closer("text</fc>")]
#[case::crossed("<fc=red><fn=1>x</fc></fn>")]
#[case::short_raw("<raw=10:abc/>")]
#[case::huge_raw("<raw=99999999999999999999:abc/>")]
#[case::two_buttons("<action=`x` button=12>y</action>")]
#[case::bare_command_with_space("<action=echo hi>y</action>")]
fn malformed_input_falls_back(#[case] input: &str) {
    let segments = parse_markup("white", input);
    assert_eq!(
        segments,
        vec![text(&format!("{}{}", PARSE_FAILURE_PREFIX, input), "white")]
    );
    assert!(try_parse_markup("white", input).is_err());
}

#[test]
fn nested_actions_accumulate_innermost_first() {
    let segments = parse_markup(
        "white",
        "<action=`outer` button=1>a<action=`inner` button=3>b</action></action>",
    );
    assert_eq!(segments[0].actions, vec![Action::single(Button::Left, "outer")]);
    assert_eq!(
        segments[1].actions,
        vec![
            Action::single(Button::Right, "inner"),
            Action::single(Button::Left, "outer"),
        ]
    );
}

#[test]
fn multiple_buttons_need_nested_tags() {
    let segments = parse_markup(
        "white",
        "<action=`mpc toggle` button=1><action=`mpc toggle` button=3>play</action></action>",
    );
    let left: Vec<_> = segments[0].commands_for(Button::Left).collect();
    let right: Vec<_> = segments[0].commands_for(Button::Right).collect();
    assert_eq!(left, vec!["mpc toggle"]);
    assert_eq!(right, vec!["mpc toggle"]);
}

#[test]
fn empty_input_has_no_segments() {
    assert!(parse_markup("white", "").is_empty());
}

#[test]
fn kitchen_sink() {
    insta::assert_snapshot!(
        dump("cpu <icon=cpu.xbm/> <fc=#00ff00,#000000><fn=1>42%</fn> <action=`htop` button=3>load <raw=3:<>>/></action></fc>!"),
        @r###"
    text "cpu " color=grey
    icon "cpu.xbm" color=grey
    text " " color=grey
    text "42%" color=#00ff00,#000000 font=1
    text " " color=#00ff00,#000000
    text "load " color=#00ff00,#000000 actions=[3:`htop`]
    text "<>>" color=#00ff00,#000000 actions=[3:`htop`]
    text "!" color=grey
    "###
    );
}

#[test]
fn icon_inside_every_container() {
    insta::assert_snapshot!(
        dump("<fc=red><fn=2><action=`eject`><icon=/icons/disk.xbm/></action></fn></fc>"),
        @r###"icon "/icons/disk.xbm" color=red font=2 actions=[1:`eject`]"###
    );
}
