//! Flattening of the markup tree into styled segments
//!
//! Walks the tree left to right. Every container node derives a new
//! [`TextContext`] for its children; siblings after it keep the context they
//! had before, which is how an outer color resumes after an inner one closes.

use crate::statusbar::markup::ir::MarkupNode;
use crate::statusbar::segment::{Segment, StyledSegment, TextContext};

/// Flatten `nodes` under `context` into document-ordered segments.
pub fn flatten(nodes: Vec<MarkupNode>, context: TextContext) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    flatten_into(nodes, &context, &mut segments);
    segments
}

fn flatten_into(nodes: Vec<MarkupNode>, context: &TextContext, out: &mut Vec<StyledSegment>) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) | MarkupNode::Raw(text) => {
                out.push(context.style(Segment::Text(text)))
            }
            MarkupNode::Icon(path) => out.push(context.style(Segment::Icon(path))),
            MarkupNode::Action { action, children } => {
                flatten_into(children, &context.clone().with_action(action), out)
            }
            MarkupNode::Font { index, children } => {
                flatten_into(children, &context.clone().with_font(index), out)
            }
            MarkupNode::Color { color, children } => {
                flatten_into(children, &context.clone().with_color(color), out)
            }
        }
    }
}
