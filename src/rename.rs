//! Filename normalization: the `rename` subcommand.
//!
//! Rewrites the image files of each prefixed category (and the root-level
//! home pool) to the uniform `<prefix>-NN.<ext>` scheme that the
//! numeric-suffix sort policy keys on:
//!
//! ```text
//! images/street/DSC_4711.JPG   ->  images/street/strt01-01.jpg
//! images/street/DSC_4802.jpg   ->  images/street/strt01-02.jpg
//! images/home-shot.png         ->  images/home01-01.png
//! ```
//!
//! Files are taken in the same filtered, name-sorted order the scan stage
//! uses, indexed 1-based with two-digit zero padding, and the extension is
//! lowercased. Categories without a `[prefixes]` entry are left untouched.
//!
//! Planning is conservative: any target name that already exists as a
//! different file aborts with an error instead of clobbering it. That means
//! the command is meant for folders that have not been renamed under the
//! same prefix before; re-running on an already-conforming folder is a
//! no-op (every file maps to its own name and is skipped).

use crate::config::BuildConfig;
use crate::scan::{self, ImageFile};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error(transparent)]
    Scan(#[from] scan::ScanError),
    #[error("rename target already exists: {0}")]
    TargetExists(PathBuf),
    #[error("failed to rename {from} -> {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// One planned rename inside a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    /// Category name, or `home` for the root-level pool.
    pub pool: String,
    /// Directory containing both names.
    pub dir: PathBuf,
    pub from: String,
    pub to: String,
}

impl RenameOp {
    pub fn from_path(&self) -> PathBuf {
        self.dir.join(&self.from)
    }

    pub fn to_path(&self) -> PathBuf {
        self.dir.join(&self.to)
    }
}

/// Plan the renames for every prefixed pool without touching the filesystem.
///
/// Files already bearing their target name are omitted from the plan.
pub fn plan(images_root: &Path, config: &BuildConfig) -> Result<Vec<RenameOp>, RenameError> {
    let listing = scan::scan(images_root, config)?;
    let mut ops = Vec::new();

    for cat in &listing.categories {
        if let Some(prefix) = config.prefixes.get(&cat.name) {
            plan_pool(
                &cat.name,
                &images_root.join(&cat.name),
                &cat.files,
                prefix,
                &mut ops,
            )?;
        }
    }
    if let Some(prefix) = config.prefixes.get("home") {
        plan_pool("home", images_root, &listing.home, prefix, &mut ops)?;
    }

    Ok(ops)
}

fn plan_pool(
    pool: &str,
    dir: &Path,
    files: &[ImageFile],
    prefix: &str,
    ops: &mut Vec<RenameOp>,
) -> Result<(), RenameError> {
    for (i, file) in files.iter().enumerate() {
        // The extension filter guarantees a dot is present
        let ext = file
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let target = format!("{prefix}-{:02}.{ext}", i + 1);
        if target == file.name {
            continue;
        }
        let target_path = dir.join(&target);
        if target_path.exists() {
            return Err(RenameError::TargetExists(target_path));
        }
        ops.push(RenameOp {
            pool: pool.to_string(),
            dir: dir.to_path_buf(),
            from: file.name.clone(),
            to: target,
        });
    }
    Ok(())
}

/// Execute a plan. Returns the number of files renamed.
pub fn apply(ops: &[RenameOp]) -> Result<usize, RenameError> {
    for op in ops {
        fs::rename(op.from_path(), op.to_path()).map_err(|source| RenameError::Rename {
            from: op.from_path(),
            to: op.to_path(),
            source,
        })?;
    }
    Ok(ops.len())
}

/// Convenience: which pools actually have a prefix configured.
pub fn prefixed_pools(config: &BuildConfig) -> Vec<&str> {
    let mut pools: Vec<&str> = config
        .categories
        .iter()
        .filter(|c| config.prefixes.contains_key(*c))
        .map(|c| c.as_str())
        .collect();
    if config.prefixes.contains_key("home") {
        pools.push("home");
    }
    pools
}
