// src/commands/convert.rs

//! Convert command: rewrite statement prints across a directory tree

use crate::cli::ConvertArgs;
use anyhow::Result;
use printconv::{ConsoleProgress, ConvertOptions, ConvertProgress, LogProgress};
use tracing::debug;

/// Build conversion options from command-line arguments
pub fn options_from_args(args: &ConvertArgs) -> ConvertOptions {
    ConvertOptions::new(&args.root)
        .with_suffix(&args.suffix)
        .dry_run(args.dry_run)
        .keep_going(args.keep_going)
}

/// Convert every selected file below the root
pub fn cmd_convert(args: &ConvertArgs) -> Result<()> {
    let options = options_from_args(args);
    debug!("Convert options: {:?}", options);

    // Quiet mode keeps the notices, but only as info-level log events
    let log_progress;
    let progress: &dyn ConvertProgress = if args.quiet {
        log_progress = LogProgress::new("convert");
        &log_progress
    } else {
        &ConsoleProgress
    };

    let report = printconv::convert_tree(&options, progress).map_err(|e| {
        let location = e.path().unwrap_or(options.root.as_path()).display().to_string();
        anyhow::Error::new(e).context(format!("Conversion aborted at {}", location))
    })?;

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} file(s) could not be converted",
            report.failures.len(),
            report.files_scanned
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(root: PathBuf) -> ConvertArgs {
        ConvertArgs {
            root,
            suffix: ".py".to_string(),
            dry_run: false,
            keep_going: false,
            quiet: true,
        }
    }

    #[test]
    fn test_options_from_args() {
        let mut a = args(PathBuf::from("src"));
        a.dry_run = true;
        a.suffix = ".pyw".to_string();

        let options = options_from_args(&a);
        assert_eq!(options.root, PathBuf::from("src"));
        assert_eq!(options.suffix, ".pyw");
        assert!(options.dry_run);
        assert!(!options.keep_going);
    }

    #[test]
    fn test_cmd_convert_rewrites_tree() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "print 'a'\n").unwrap();

        cmd_convert(&args(dir.path().to_path_buf())).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("a.py")).unwrap(),
            "print('a')\n"
        );
    }

    #[test]
    fn test_cmd_convert_names_failing_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.py"), [0xFF, b'\n']).unwrap();

        let err = cmd_convert(&args(dir.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("bad.py"));
    }

    #[test]
    fn test_cmd_convert_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let err = cmd_convert(&args(dir.path().join("missing"))).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Conversion aborted at"));
        assert!(message.contains("missing"));
        assert!(message.contains("not a directory"));
    }
}
