//! Output formats for parsed segments
//!
//! - [`to_markup`] rebuilds markup that parses back to the same segments.
//! - [`to_tag_string`] is a compact one-line-per-segment dump, handy in tests.
//! - [`serialize`] renders any serializable result as JSON or YAML.

use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

use crate::statusbar::error::FormatError;
use crate::statusbar::segment::{Segment, StyledSegment};

/// Formats understood by [`serialize`] and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Tag,
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "tag" => Ok(OutputFormat::Tag),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render `value` as JSON or YAML.
///
/// [`OutputFormat::Tag`] only applies to segment lists; see [`render_segments`].
pub fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Tag => Err(FormatError::Unsupported("tag")),
    }
}

/// Render segments in any [`OutputFormat`].
pub fn render_segments(
    segments: &[StyledSegment],
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Tag => Ok(to_tag_string(segments)),
        other => serialize(&segments, other),
    }
}

/// One line per segment: kind, quoted content, then non-default attributes.
///
///     text "cpu " color=red
///     icon "cpu.xbm" color=red font=1 actions=[3:`top`, 1:`xterm`]
pub fn to_tag_string(segments: &[StyledSegment]) -> String {
    let mut out = String::new();
    for styled in segments {
        let (kind, content) = match &styled.segment {
            Segment::Text(text) => ("text", text),
            Segment::Icon(path) => ("icon", path),
        };
        let _ = write!(out, "{} {:?} color={}", kind, content, styled.color);
        if styled.font != 0 {
            let _ = write!(out, " font={}", styled.font);
        }
        if !styled.actions.is_empty() {
            let bindings: Vec<String> = styled
                .actions
                .iter()
                .map(|action| {
                    let buttons: Vec<String> =
                        action.buttons.iter().map(|b| b.to_string()).collect();
                    format!("{}:`{}`", buttons.join(","), action.command)
                })
                .collect();
            let _ = write!(out, " actions=[{}]", bindings.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Rebuild markup for `segments` as parsed with `default_color`.
///
/// Each segment is wrapped in its own tags. Text goes through `<raw=...>` when
/// it contains `<`, is empty, or would merge with a preceding bare text run.
/// Only the lowest button of each action is written, and colors and commands
/// are emitted as-is, so they must be expressible in markup to round-trip.
pub fn to_markup(segments: &[StyledSegment], default_color: &str) -> String {
    let mut out = String::new();
    let mut previous_bare_text = false;

    for styled in segments {
        let bare = styled.color == default_color && styled.font == 0 && styled.actions.is_empty();

        let mut piece = match &styled.segment {
            Segment::Icon(path) => format!("<icon={}/>", path),
            Segment::Text(text) if text.is_empty() || text.contains('<') => raw(text),
            Segment::Text(text) if bare && previous_bare_text => raw(text),
            Segment::Text(text) => text.clone(),
        };

        for action in &styled.actions {
            let button = action.buttons.iter().next().map(|b| b.number()).unwrap_or(1);
            piece = format!(
                "<action=`{}` button={}>{}</action>",
                action.command, button, piece
            );
        }
        if styled.font != 0 {
            piece = format!("<fn={}>{}</fn>", styled.font, piece);
        }
        if styled.color != default_color {
            piece = format!("<fc={}>{}</fc>", styled.color, piece);
        }

        previous_bare_text = bare && !piece.starts_with('<');
        out.push_str(&piece);
    }

    out
}

fn raw(text: &str) -> String {
    format!("<raw={}:{}/>", text.chars().count(), text)
}
