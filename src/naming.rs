//! Numeric-suffix parsing for image filenames.
//!
//! The renaming convention puts a running index at the end of every filename,
//! directly before the extension: `strt01-03.jpg`, `arch01-12.JPG`,
//! `anything-7.png`. The manifest sort uses that index so `img9.jpg` orders
//! before `img10.jpg` — numerically, not lexicographically.
//!
//! A name with no digit run in that position (including extensionless names)
//! gets key 0; the sort is stable, so zero-keyed files keep their listing
//! order relative to each other.

/// Extract the sort key from a filename: the last run of ASCII digits
/// immediately preceding the extension.
///
/// - `"strt01-03.jpg"` → 3 (the `01` earlier in the name is ignored)
/// - `"anything-7.png"` → 7
/// - `"cover.jpg"` → 0 (no digits before the extension)
/// - `"img12x.jpg"` → 0 (digits not directly before the dot)
/// - `"notes"` → 0 (no extension)
pub fn numeric_suffix(filename: &str) -> u64 {
    let Some((stem, _ext)) = filename.rsplit_once('.') else {
        return 0;
    };
    let bytes = stem.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    let run = &stem[start..];
    if run.is_empty() {
        return 0;
    }
    // A digit run too long for u64 still has to sort after everything with a
    // parseable key
    run.parse::<u64>().unwrap_or(u64::MAX)
}
