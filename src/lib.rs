//! # statusbar
//!
//! Parsers for status bar text.
//!
//! Two independent passes live here:
//!
//! - The **markup** parser turns an annotated status string such as
//!   `<fc=#ff0000><action=`xterm`>cpu</action></fc>` into an ordered sequence
//!   of styled, clickable segments.
//! - The **template** parser turns a layout template such as `"A %date% B"`
//!   into literal text interleaved with references to data-producing commands,
//!   resolved against a caller supplied registry.
//!
//! Layout
//!
//! src/statusbar
//!   ├── segment      Shared attribute model (segments, actions, context)
//!   ├── markup       Tag grammar → tree → flattened segments
//!   ├── template     Separator grammar and alignment splitting
//!   ├── command      Runnable trait, registry and default-on-miss lookup
//!   ├── config       Layered configuration over embedded defaults
//!   └── formats      Markup reconstruction and serialization
//!
//! Both parsers are pure functions: no I/O, no shared state, safe to call from
//! any number of threads.

#![allow(rustdoc::invalid_html_tags)]

pub mod statusbar;

pub use statusbar::command::{Command, CommandRegistry, ResolvedCommand, Runnable};
pub use statusbar::markup::{parse_markup, try_parse_markup};
pub use statusbar::segment::{Action, Button, FontIndex, Segment, StyledSegment, TextContext};
pub use statusbar::template::{parse_template, split_alignment, try_parse_template};
