// src/convert/tree.rs

//! Directory traversal and per-file conversion

use super::{convert_file, ConvertOptions, ConvertReport, FileFailure};
use crate::error::Result;
use crate::progress::ConvertProgress;
use std::path::Path;
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Check whether a walked entry is a candidate file for conversion
///
/// Only the file name is matched against the suffix. Symlinks are selected
/// unless they resolve to a directory, so a dangling link fails on read.
pub fn is_selected(entry: &DirEntry, suffix: &str) -> bool {
    // Byte comparison so non-UTF-8 names are still matched
    if !entry
        .file_name()
        .as_encoded_bytes()
        .ends_with(suffix.as_bytes())
    {
        return false;
    }

    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Convert every selected file below `options.root`
///
/// Files are visited in file-name order. Without keep-going, the first
/// read, decode or write failure aborts the run; files already rewritten
/// stay rewritten.
pub fn convert_tree(
    options: &ConvertOptions,
    progress: &dyn ConvertProgress,
) -> Result<ConvertReport> {
    options.validate()?;

    info!(
        "Converting print statements under {} (suffix {})",
        options.root.display(),
        options.suffix
    );
    progress.on_start(&options.root);

    let mut report = ConvertReport::default();

    let walker = WalkDir::new(&options.root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !is_selected(&entry, &options.suffix) {
            continue;
        }

        process_entry(entry.path(), options, progress, &mut report)?;
    }

    info!(
        "Scanned {} file(s), updated {}, converted {} line(s)",
        report.files_scanned,
        report.files_updated.len(),
        report.lines_converted
    );
    progress.on_finish(&report);

    Ok(report)
}

fn process_entry(
    path: &Path,
    options: &ConvertOptions,
    progress: &dyn ConvertProgress,
    report: &mut ConvertReport,
) -> Result<()> {
    progress.on_processing(path);
    report.files_scanned += 1;

    match convert_file(path, options.dry_run) {
        Ok(outcome) => {
            if outcome.updated {
                progress.on_updated(path, options.dry_run);
                report.lines_converted += outcome.lines_converted;
                report.files_updated.push(outcome.path);
            }
            Ok(())
        }
        Err(error) if options.keep_going => {
            warn!("Failed to convert {}: {}", path.display(), error);
            progress.on_failed(path, &error);
            report.failures.push(FileFailure {
                path: path.to_path_buf(),
                error,
            });
            Ok(())
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_selected_by_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "").unwrap();
        fs::write(dir.path().join("a.pyc"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("pkg.py")).unwrap();

        let mut selected: Vec<String> = WalkDir::new(dir.path())
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| is_selected(e, ".py"))
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        selected.sort();

        assert_eq!(selected, vec!["a.py".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_selected() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, "print x\n").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.py")).unwrap();

        let report = convert_tree(&ConvertOptions::new(dir.path()), &SilentProgress).unwrap();
        assert_eq!(report.files_updated.len(), 1);
        assert_eq!(fs::read_to_string(&target).unwrap(), "print(x)\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_fails_on_read() {
        use crate::error::Error;
        use crate::progress::{CallbackProgress, ConvertEvent};
        use std::cell::RefCell;

        let dir = TempDir::new().unwrap();
        let link = dir.path().join("gone.py");
        std::os::unix::fs::symlink(dir.path().join("missing.txt"), &link).unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("dir.py")).unwrap();

        let events = RefCell::new(Vec::new());
        let progress = CallbackProgress::new(|event| events.borrow_mut().push(event));
        let err = convert_tree(&ConvertOptions::new(dir.path()), &progress).unwrap_err();

        assert!(matches!(&err, Error::Io { path, .. } if *path == link));
        // The directory link is never selected, the dangling one is
        let processing: Vec<_> = events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                ConvertEvent::Processing(p) => Some(p.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(processing, vec![link]);
    }

    #[test]
    fn test_invalid_root_rejected() {
        let dir = TempDir::new().unwrap();
        let options = ConvertOptions::new(dir.path().join("nope"));
        assert!(convert_tree(&options, &SilentProgress).is_err());
    }
}
