// src/lib.rs

//! printconv: statement-to-call `print` migration
//!
//! Walks a directory tree and rewrites lines of the form `print x, y` into
//! `print(x, y)` in every file with the selected suffix (`.py` by default).
//!
//! # Architecture
//!
//! - Line-oriented: each line is matched against one anchored pattern, with
//!   no state carried between lines
//! - Write-if-changed: a file is rewritten in full only when some line
//!   changed; untouched files are never opened for writing
//! - Pluggable notices: progress goes through the `ConvertProgress` trait

pub mod convert;
mod error;
pub mod progress;

pub use convert::{
    convert_file, convert_text, convert_tree, is_call_style, transform_line, ConvertOptions,
    ConvertReport, ConvertedText, FileFailure, FileOutcome, DEFAULT_SUFFIX,
};
pub use error::{Error, Result};
pub use progress::{
    CallbackProgress, ConsoleProgress, ConvertEvent, ConvertProgress, LogProgress,
    SilentProgress,
};
