// src/convert/mod.rs

//! Statement-to-call `print` conversion
//!
//! Conversion is line-oriented and stateless across lines:
//!
//! - [`transform_line`] rewrites one line (or leaves it alone)
//! - [`convert_text`] applies it to every line of a file's contents
//! - [`convert_file`] reads, converts and conditionally rewrites one file
//! - [`convert_tree`] walks a directory and converts every selected file
//!
//! A file is written back only if at least one line changed. Unchanged
//! files are never opened for writing, so their bytes and timestamps stay
//! as they were.

mod line;
mod tree;

pub use line::{is_call_style, is_line_space, split_lines, transform_line};
pub use tree::{convert_tree, is_selected};

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of files selected by default
pub const DEFAULT_SUFFIX: &str = ".py";

/// Options controlling a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory the traversal starts from
    pub root: PathBuf,
    /// File name suffix that selects candidate files
    pub suffix: String,
    /// Compute changes without writing anything
    pub dry_run: bool,
    /// Record per-file failures and continue instead of aborting
    pub keep_going: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            dry_run: false,
            keep_going: false,
        }
    }
}

impl ConvertOptions {
    /// Create options for the given root with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Set the file name suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Enable or disable dry-run mode
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enable or disable per-file failure isolation
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Reject options that cannot describe a valid run
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(Error::InvalidSuffix(self.suffix.clone()));
        }
        if !self.root.is_dir() {
            return Err(Error::InvalidRoot(self.root.clone()));
        }
        Ok(())
    }
}

/// Result of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path of the file
    pub path: PathBuf,
    /// Number of lines whose text changed
    pub lines_converted: usize,
    /// Whether the file was (or in dry-run, would be) rewritten
    pub updated: bool,
}

/// A file that could not be converted in keep-going mode
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Summary of a conversion run
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Selected files that were processed (including failures)
    pub files_scanned: usize,
    /// Files rewritten, in visiting order
    pub files_updated: Vec<PathBuf>,
    /// Total number of converted lines across all files
    pub lines_converted: usize,
    /// Files that failed; only populated when keep-going is enabled
    pub failures: Vec<FileFailure>,
}

impl ConvertReport {
    /// True if every selected file was processed without error
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converted contents of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedText {
    pub text: String,
    pub lines_converted: usize,
}

/// Convert every line of `text` independently
///
/// Lines are compared after terminator normalization, so a file whose only
/// difference is `\r\n` endings counts as unchanged. Returns `None` if no
/// line changed; otherwise the new text uses `\n` throughout.
pub fn convert_text(text: &str) -> Option<ConvertedText> {
    let mut out = String::with_capacity(text.len() + 16);
    let mut lines_converted = 0;

    for line in split_lines(text) {
        let new_line = transform_line(&line);
        if new_line != line {
            lines_converted += 1;
        }
        out.push_str(&new_line);
    }

    (lines_converted > 0).then_some(ConvertedText {
        text: out,
        lines_converted,
    })
}

/// Read a file as UTF-8 text
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}

/// Convert a single file, rewriting it in full if any line changed
pub fn convert_file(path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let text = read_text(path)?;

    let Some(converted) = convert_text(&text) else {
        debug!("No statement prints in {}", path.display());
        return Ok(FileOutcome {
            path: path.to_path_buf(),
            lines_converted: 0,
            updated: false,
        });
    };

    if dry_run {
        debug!(
            "Dry run: {} line(s) would change in {}",
            converted.lines_converted,
            path.display()
        );
    } else {
        fs::write(path, converted.text.as_bytes()).map_err(|e| Error::io(path, e))?;
        debug!(
            "Rewrote {} line(s) in {}",
            converted.lines_converted,
            path.display()
        );
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        lines_converted: converted.lines_converted,
        updated: true,
    })
}
