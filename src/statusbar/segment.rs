//! Segment model shared by the markup parser and its consumers.
//!
//! A parse produces a flat, ordered list of [`StyledSegment`]s. Each one carries
//! the display attributes that were in effect where it appeared in the markup:
//! a color string, a font index and the stack of click actions enclosing it.
//! These attributes travel down the markup tree in a [`TextContext`], which is
//! passed by value so nested regions can override them without affecting their
//! siblings.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Index into the renderer's font table. `0` is the primary font.
pub type FontIndex = usize;

/// One displayable unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Segment {
    /// A run of text, rendered with the segment's color and font.
    Text(String),
    /// An icon, named by path or bitmap name. Carries color structurally only.
    Icon(String),
}

impl Segment {
    /// Text content or icon path.
    pub fn content(&self) -> &str {
        match self {
            Segment::Text(text) | Segment::Icon(text) => text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text(_))
    }

    pub fn is_icon(&self) -> bool {
        matches!(self, Segment::Icon(_))
    }
}

/// Mouse button an action can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Button {
    Left = 1,
    Middle = 2,
    Right = 3,
    ScrollUp = 4,
    ScrollDown = 5,
}

impl Button {
    /// Parse a single button digit (`'1'..='5'`).
    pub fn from_digit(digit: char) -> Option<Self> {
        digit
            .to_digit(10)
            .and_then(|n| u8::try_from(n).ok())
            .and_then(|n| Button::try_from(n).ok())
    }

    /// The X11 button number.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Button {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Button::Left),
            2 => Ok(Button::Middle),
            3 => Ok(Button::Right),
            4 => Ok(Button::ScrollUp),
            5 => Ok(Button::ScrollDown),
            other => Err(other),
        }
    }
}

impl From<Button> for u8 {
    fn from(button: Button) -> Self {
        button.number()
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A command bound to one or more mouse buttons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Action {
    pub buttons: BTreeSet<Button>,
    pub command: String,
}

impl Action {
    pub fn new(buttons: impl IntoIterator<Item = Button>, command: impl Into<String>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            command: command.into(),
        }
    }

    /// Action bound to a single button, the only shape the markup grammar produces.
    pub fn single(button: Button, command: impl Into<String>) -> Self {
        Self::new([button], command)
    }

    pub fn is_bound_to(&self, button: Button) -> bool {
        self.buttons.contains(&button)
    }
}

/// Attributes inherited by everything inside a markup region.
///
/// `actions` is ordered innermost first: entering an `<action>` region puts
/// its binding at the front, ahead of every enclosing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContext {
    pub color: String,
    pub font: FontIndex,
    pub actions: Vec<Action>,
}

impl TextContext {
    /// Top-level context: the given color, primary font, no actions.
    pub fn new(default_color: impl Into<String>) -> Self {
        Self {
            color: default_color.into(),
            font: 0,
            actions: Vec::new(),
        }
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..self
        }
    }

    pub fn with_font(self, font: FontIndex) -> Self {
        Self { font, ..self }
    }

    /// Context for the body of a nested action region.
    pub fn with_action(self, action: Action) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.push(action);
        actions.extend(self.actions);
        Self { actions, ..self }
    }

    /// Emit a segment carrying this context's attributes.
    pub fn style(&self, segment: Segment) -> StyledSegment {
        StyledSegment {
            segment,
            color: self.color.clone(),
            font: self.font,
            actions: self.actions.clone(),
        }
    }
}

/// A segment together with the attributes it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyledSegment {
    pub segment: Segment,
    pub color: String,
    pub font: FontIndex,
    /// Innermost binding first. Empty when the segment is not clickable.
    pub actions: Vec<Action>,
}

impl StyledSegment {
    /// Plain text in the top-level context for `color`.
    pub fn plain(text: impl Into<String>, color: impl Into<String>) -> Self {
        TextContext::new(color).style(Segment::Text(text.into()))
    }

    pub fn is_clickable(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Commands to run for a click with `button`, innermost first.
    pub fn commands_for(&self, button: Button) -> impl Iterator<Item = &str> {
        self.actions
            .iter()
            .filter(move |action| action.is_bound_to(button))
            .map(|action| action.command.as_str())
    }
}
