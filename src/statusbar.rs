//! Main module for statusbar library functionality

pub mod command;
pub mod config;
pub mod error;
pub mod formats;
pub mod markup;
pub mod segment;
pub mod template;
