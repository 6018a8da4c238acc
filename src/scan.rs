//! Filesystem scanning: the enumerate and filter stages.
//!
//! Stage 1 of the manifest build pipeline. Lists the direct entries of each
//! configured category directory under `images/`, plus the root-level "home"
//! pool, and filters them to recognized image extensions.
//!
//! ## Directory Structure
//!
//! ```text
//! <root>/images/                   # Image root (missing = fatal)
//! ├── home01-01.jpg                # Home pool (root-level files)
//! ├── home01-02.jpg
//! ├── street/                      # Category folder
//! │   ├── strt01-01.jpg
//! │   └── strt01-02.jpg
//! ├── landscape/
//! │   └── lanscp01-01.jpg
//! └── architecture/                # Missing folder = empty category
//! ```
//!
//! Directories, hidden files, and anything with an unrecognized extension
//! are silently skipped; that is filtering, not an error. A missing category
//! directory yields an empty listing plus an informational [`ScanNote`]. An
//! unreadable one is a warning note too, unless `strict` is set in config.
//!
//! Listings come out sorted byte-wise by filename so the ordering stage's
//! stable sort (and therefore the written JSON) is reproducible across runs
//! and filesystems regardless of `read_dir` order.

use crate::config::BuildConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("image root not found: {0}")]
    MissingRoot(PathBuf),
    #[error("failed to read {path}: {source}")]
    DirRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A recognized image file from a directory listing.
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Filename only, no directory components.
    pub name: String,
    /// Modification time; captured only when the modified-time sort policy
    /// is active.
    pub modified: Option<SystemTime>,
}

/// One category's filtered listing, possibly empty.
#[derive(Debug)]
pub struct CategoryListing {
    pub name: String,
    pub files: Vec<ImageFile>,
}

/// Non-fatal diagnostics collected during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanNote {
    /// The category directory does not exist; treated as an empty category.
    MissingCategory { category: String },
    /// The category directory exists but could not be read (lenient mode
    /// only; `strict = true` turns this into a [`ScanError::DirRead`]).
    UnreadableCategory { category: String, error: String },
}

/// Everything the scan found: per-category listings in configured order,
/// the home pool, and any diagnostic notes.
#[derive(Debug)]
pub struct Listing {
    pub categories: Vec<CategoryListing>,
    pub home: Vec<ImageFile>,
    pub notes: Vec<ScanNote>,
}

/// Scan the image root for all configured categories and the home pool.
///
/// `images_root` is the `images/` directory itself. Its absence is the only
/// fatal condition here besides an unreadable root; per-category problems
/// degrade to empty listings with notes (unless `strict`).
pub fn scan(images_root: &Path, config: &BuildConfig) -> Result<Listing, ScanError> {
    if !images_root.is_dir() {
        return Err(ScanError::MissingRoot(images_root.to_path_buf()));
    }

    let want_mtime = config.sort_policy == crate::config::SortPolicy::ModifiedDesc;
    let mut categories = Vec::with_capacity(config.categories.len());
    let mut notes = Vec::new();

    for cat in &config.categories {
        let dir = images_root.join(cat);
        if !dir.is_dir() {
            notes.push(ScanNote::MissingCategory {
                category: cat.clone(),
            });
            categories.push(CategoryListing {
                name: cat.clone(),
                files: Vec::new(),
            });
            continue;
        }
        match list_images(&dir, config, want_mtime) {
            Ok(files) => categories.push(CategoryListing {
                name: cat.clone(),
                files,
            }),
            Err(err) if config.strict => {
                return Err(ScanError::DirRead {
                    path: dir,
                    source: err,
                });
            }
            Err(err) => {
                notes.push(ScanNote::UnreadableCategory {
                    category: cat.clone(),
                    error: err.to_string(),
                });
                categories.push(CategoryListing {
                    name: cat.clone(),
                    files: Vec::new(),
                });
            }
        }
    }

    // Home pool: root-level files only, never anything named like a category
    let mut home = list_images(images_root, config, want_mtime).map_err(|err| {
        ScanError::DirRead {
            path: images_root.to_path_buf(),
            source: err,
        }
    })?;
    home.retain(|f| !config.categories.iter().any(|c| c == &f.name));

    Ok(Listing {
        categories,
        home,
        notes,
    })
}

/// List the direct image files of one directory, filtered by extension and
/// sorted byte-wise by name.
fn list_images(
    dir: &Path,
    config: &BuildConfig,
    want_mtime: bool,
) -> Result<Vec<ImageFile>, std::io::Error> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let recognized = path
            .extension()
            .map(|e| config.allows_extension(&e.to_string_lossy()))
            .unwrap_or(false);
        if !recognized {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let modified = if want_mtime {
            entry.metadata().and_then(|m| m.modified()).ok()
        } else {
            None
        };
        files.push(ImageFile { name, modified });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
