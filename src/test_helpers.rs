//! Shared test utilities for the photo-manifest test suite.
//!
//! Builds throwaway `images/` trees in temp directories so unit tests can
//! exercise the pipeline without fixture files checked into the repo.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::scan::ImageFile;

/// Build a temp directory that acts as the `images/` root.
///
/// `categories` maps folder names to the files created inside them; `home`
/// lists files created directly under the root. File contents are
/// placeholders — the pipeline only ever looks at names and metadata.
///
/// ```ignore
/// let tmp = image_root(
///     &[("street", &["strt01-01.jpg", "strt01-02.jpg"])],
///     &["home01-01.jpg"],
/// );
/// let listing = scan(tmp.path(), &config).unwrap();
/// ```
pub fn image_root(categories: &[(&str, &[&str])], home: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (cat, files) in categories {
        let dir = tmp.path().join(cat);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            touch(&dir.join(file));
        }
    }
    for file in home {
        touch(&tmp.path().join(file));
    }
    tmp
}

/// Create a placeholder file.
pub fn touch(path: &Path) {
    fs::write(path, "fake image").unwrap();
}

/// Extract just the filenames from a listing.
pub fn names(files: &[ImageFile]) -> Vec<String> {
    files.iter().map(|f| f.name.clone()).collect()
}
