// src/commands/mod.rs
//! Command handlers for the printconv CLI

mod completions;
mod convert;

pub use completions::cmd_completions;
pub use convert::cmd_convert;
