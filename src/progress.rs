// src/progress.rs

//! Progress notices for conversion runs
//!
//! A run reports a fixed sequence of events: a start banner, a
//! "processing" notice before each selected file is read, an "updated"
//! notice after each rewrite, and a completion banner. Where those notices
//! go is decided by the `ConvertProgress` implementation:
//!
//! - `ConsoleProgress`: human-readable lines on stdout (CLI default)
//! - `LogProgress`: tracing events at info level (CLI quiet mode)
//! - `SilentProgress`: no-op
//! - `CallbackProgress`: forwards `ConvertEvent`s to a closure

use crate::convert::ConvertReport;
use crate::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Receiver for conversion progress notices
pub trait ConvertProgress {
    /// The run is starting at `root`
    fn on_start(&self, root: &Path);

    /// A selected file is about to be read
    fn on_processing(&self, path: &Path);

    /// A file was rewritten (or would be, in a dry run)
    fn on_updated(&self, path: &Path, dry_run: bool);

    /// A file failed and the run is continuing
    fn on_failed(&self, path: &Path, error: &Error);

    /// The run completed
    fn on_finish(&self, report: &ConvertReport);
}

/// Silent progress (no-op)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ConvertProgress for SilentProgress {
    fn on_start(&self, _root: &Path) {}
    fn on_processing(&self, _path: &Path) {}
    fn on_updated(&self, _path: &Path, _dry_run: bool) {}
    fn on_failed(&self, _path: &Path, _error: &Error) {}
    fn on_finish(&self, _report: &ConvertReport) {}
}

/// Console progress printing one line per notice to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ConvertProgress for ConsoleProgress {
    fn on_start(&self, root: &Path) {
        println!("{}", ConvertEvent::Started(root.to_path_buf()));
    }

    fn on_processing(&self, path: &Path) {
        println!("{}", ConvertEvent::Processing(path.to_path_buf()));
    }

    fn on_updated(&self, path: &Path, dry_run: bool) {
        let event = ConvertEvent::Updated {
            path: path.to_path_buf(),
            dry_run,
        };
        println!("{}", event);
    }

    fn on_failed(&self, path: &Path, error: &Error) {
        eprintln!("{}", ConvertEvent::failed(path, error));
    }

    fn on_finish(&self, report: &ConvertReport) {
        println!("{}", ConvertEvent::finished(report));
    }
}

/// Logging progress
///
/// Emits every notice as a tracing event, for non-interactive runs.
#[derive(Debug)]
pub struct LogProgress {
    name: String,
}

impl LogProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ConvertProgress for LogProgress {
    fn on_start(&self, root: &Path) {
        info!("{}: starting in {}", self.name, root.display());
    }

    fn on_processing(&self, path: &Path) {
        info!("{}: processing {}", self.name, path.display());
    }

    fn on_updated(&self, path: &Path, dry_run: bool) {
        if dry_run {
            info!("{}: would update {}", self.name, path.display());
        } else {
            info!("{}: updated {}", self.name, path.display());
        }
    }

    fn on_failed(&self, path: &Path, error: &Error) {
        warn!("{}: failed {}: {}", self.name, path.display(), error);
    }

    fn on_finish(&self, report: &ConvertReport) {
        info!(
            "{}: complete ({} scanned, {} updated, {} failed)",
            self.name,
            report.files_scanned,
            report.files_updated.len(),
            report.failures.len()
        );
    }
}

/// Events emitted by `CallbackProgress`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertEvent {
    /// Run started at the given root
    Started(PathBuf),
    /// File about to be read
    Processing(PathBuf),
    /// File rewritten, or would be when `dry_run` is set
    Updated { path: PathBuf, dry_run: bool },
    /// File failed with the rendered error message
    Failed { path: PathBuf, message: String },
    /// Run finished
    Finished {
        scanned: usize,
        updated: usize,
        failed: usize,
    },
}

impl ConvertEvent {
    fn failed(path: &Path, error: &Error) -> Self {
        Self::Failed {
            path: error.path().unwrap_or(path).to_path_buf(),
            message: error.to_string(),
        }
    }

    fn finished(report: &ConvertReport) -> Self {
        Self::Finished {
            scanned: report.files_scanned,
            updated: report.files_updated.len(),
            failed: report.failures.len(),
        }
    }
}

/// Console wording of each notice
impl fmt::Display for ConvertEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started(_) => write!(f, "Converting statement prints to call-style prints"),
            Self::Processing(path) => write!(f, "Processing {}...", path.display()),
            Self::Updated {
                path,
                dry_run: false,
            } => write!(f, "Updated print statements in {}", path.display()),
            Self::Updated {
                path,
                dry_run: true,
            } => write!(f, "Would update print statements in {}", path.display()),
            Self::Failed { path, message } => write!(f, "Failed {}: {}", path.display(), message),
            Self::Finished { failed: 0, .. } => write!(f, "Conversion complete."),
            Self::Finished { failed, .. } => write!(
                f,
                "{} file(s) could not be converted\nConversion complete.",
                failed
            ),
        }
    }
}

/// Callback-based progress
///
/// Calls a user-provided function for each event.
pub struct CallbackProgress<F>
where
    F: Fn(ConvertEvent),
{
    callback: F,
}

impl<F> CallbackProgress<F>
where
    F: Fn(ConvertEvent),
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> ConvertProgress for CallbackProgress<F>
where
    F: Fn(ConvertEvent),
{
    fn on_start(&self, root: &Path) {
        (self.callback)(ConvertEvent::Started(root.to_path_buf()));
    }

    fn on_processing(&self, path: &Path) {
        (self.callback)(ConvertEvent::Processing(path.to_path_buf()));
    }

    fn on_updated(&self, path: &Path, dry_run: bool) {
        (self.callback)(ConvertEvent::Updated {
            path: path.to_path_buf(),
            dry_run,
        });
    }

    fn on_failed(&self, path: &Path, error: &Error) {
        (self.callback)(ConvertEvent::failed(path, error));
    }

    fn on_finish(&self, report: &ConvertReport) {
        (self.callback)(ConvertEvent::finished(report));
    }
}
