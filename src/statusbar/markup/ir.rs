//! Intermediate tree produced by the markup grammar.
//!
//! The grammar only recognizes structure. Attribute inheritance happens
//! afterwards in [`flatten`](super::flatten), which walks this tree with a
//! [`TextContext`](crate::statusbar::segment::TextContext).

use crate::statusbar::segment::{Action, FontIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupNode {
    /// Maximal run of plain text.
    Text(String),
    /// `<icon=PATH/>`
    Icon(String),
    /// `<raw=LEN:DATA/>`, DATA verbatim.
    Raw(String),
    /// `<action=CMD button=B>...</action>`
    Action {
        action: Action,
        children: Vec<MarkupNode>,
    },
    /// `<fn=N>...</fn>`
    Font {
        index: FontIndex,
        children: Vec<MarkupNode>,
    },
    /// `<fc=C>...</fc>`
    Color {
        color: String,
        children: Vec<MarkupNode>,
    },
}

impl MarkupNode {
    pub fn children(&self) -> &[MarkupNode] {
        match self {
            MarkupNode::Action { children, .. }
            | MarkupNode::Font { children, .. }
            | MarkupNode::Color { children, .. } => children,
            MarkupNode::Text(_) | MarkupNode::Icon(_) | MarkupNode::Raw(_) => &[],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            MarkupNode::Text(_) | MarkupNode::Icon(_) | MarkupNode::Raw(_)
        )
    }
}
