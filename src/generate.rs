//! JSON output writing: the serialize stage.
//!
//! Stage 3 of the build pipeline. Takes the assembled [`Manifest`] and
//! writes the output files the site's scripts fetch:
//!
//! ```text
//! data/
//! ├── street.json        # one JSON array per category
//! ├── landscape.json
//! ├── architecture.json
//! ├── home.json          # home slideshow array
//! └── manifest.json      # combined object: { <category>: [...], home: [...] }
//! ```
//!
//! The output directory is created if absent; existing files are overwritten
//! unconditionally (no merge, no backup). Writes are independent: a failed
//! write is recorded in the report and the remaining files are still
//! attempted, so one bad file never suppresses the others. Only failing to
//! create the output directory itself aborts the stage.

use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One successfully written output file.
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Number of path entries in the file (categories and home); the
    /// combined manifest reports its total across all keys.
    pub entries: usize,
}

/// One failed output file, with the underlying cause.
#[derive(Debug)]
pub struct WriteFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of the write pass. `failures` being non-empty means the run
/// should exit non-zero, but only after every file was attempted.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenFile>,
    pub failures: Vec<WriteFailure>,
}

/// Write all manifest files into `out_dir`.
///
/// Re-running with an unchanged manifest produces byte-identical files.
pub fn write_manifests(manifest: &Manifest, out_dir: &Path) -> Result<WriteReport, GenerateError> {
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = WriteReport::default();

    for cat in &manifest.categories {
        let path = out_dir.join(format!("{}.json", cat.name));
        let json = serde_json::to_string_pretty(&cat.paths)?;
        write_file(&mut report, path, &json, cat.paths.len());
    }

    let home_path = out_dir.join("home.json");
    let json = serde_json::to_string_pretty(&manifest.home)?;
    write_file(&mut report, home_path, &json, manifest.home.len());

    let combined = manifest.combined();
    let total: usize = manifest.categories.iter().map(|c| c.paths.len()).sum::<usize>()
        + manifest.home.len();
    let json = serde_json::to_string_pretty(&combined)?;
    write_file(&mut report, out_dir.join("manifest.json"), &json, total);

    Ok(report)
}

fn write_file(report: &mut WriteReport, path: PathBuf, json: &str, entries: usize) {
    match fs::write(&path, json) {
        Ok(()) => report.written.push(WrittenFile { path, entries }),
        Err(err) => report.failures.push(WriteFailure {
            path,
            error: err.to_string(),
        }),
    }
}
