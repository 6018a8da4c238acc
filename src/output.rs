//! CLI output formatting.
//!
//! Each display has a pure `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes it out, so formatting is unit testable
//! without capturing stdout. Results go to stdout; diagnostic notes go to
//! stderr and never affect the exit code.

use crate::generate::WriteReport;
use crate::manifest::Manifest;
use crate::rename::RenameOp;
use crate::scan::ScanNote;

/// Format the per-category summary of an assembled manifest.
///
/// ```text
/// street (24 images)
/// landscape (18 images)
/// architecture (0 images)
/// home (11 images)
/// ```
pub fn format_summary(manifest: &Manifest) -> Vec<String> {
    let mut lines: Vec<String> = manifest
        .categories
        .iter()
        .map(|cat| format!("{} ({} images)", cat.name, cat.paths.len()))
        .collect();
    lines.push(format!("home ({} images)", manifest.home.len()));
    lines
}

/// Format scan diagnostics.
pub fn format_notes(notes: &[ScanNote]) -> Vec<String> {
    notes
        .iter()
        .map(|note| match note {
            ScanNote::MissingCategory { category } => {
                format!("note: category directory missing: {category} (treated as empty)")
            }
            ScanNote::UnreadableCategory { category, error } => {
                format!("warning: could not read category {category}: {error} (treated as empty)")
            }
        })
        .collect()
}

/// Format the write pass outcome, one line per attempted file.
///
/// ```text
/// Wrote data/street.json (24 images)
/// Wrote data/home.json (11 images)
/// error: failed to write data/manifest.json: permission denied
/// ```
pub fn format_write_report(report: &WriteReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .written
        .iter()
        .map(|w| format!("Wrote {} ({} images)", w.path.display(), w.entries))
        .collect();
    lines.extend(
        report
            .failures
            .iter()
            .map(|f| format!("error: failed to write {}: {}", f.path.display(), f.error)),
    );
    lines
}

/// Format a rename plan, one line per file.
pub fn format_rename_ops(ops: &[RenameOp], dry_run: bool) -> Vec<String> {
    let verb = if dry_run { "Would rename" } else { "Renamed" };
    ops.iter()
        .map(|op| format!("{verb}: {}: {} -> {}", op.pool, op.from, op.to))
        .collect()
}

/// Print a manifest summary to stdout.
pub fn print_summary(manifest: &Manifest) {
    for line in format_summary(manifest) {
        println!("{}", line);
    }
}

/// Print scan diagnostics to stderr.
pub fn print_notes(notes: &[ScanNote]) {
    for line in format_notes(notes) {
        eprintln!("{}", line);
    }
}

/// Print the write report: successes to stdout, failures to stderr.
pub fn print_write_report(report: &WriteReport) {
    for w in &report.written {
        println!("Wrote {} ({} images)", w.path.display(), w.entries);
    }
    for f in &report.failures {
        eprintln!("error: failed to write {}: {}", f.path.display(), f.error);
    }
}

/// Print a rename plan to stdout.
pub fn print_rename_ops(ops: &[RenameOp], dry_run: bool) {
    for line in format_rename_ops(ops, dry_run) {
        println!("{}", line);
    }
}
