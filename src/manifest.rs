//! Manifest assembly: the order and encode stages.
//!
//! Stage 2 of the build pipeline. Takes the scan listings, applies the
//! configured sort policy, converts each filename into a web-relative path,
//! and assembles the per-category arrays, the (optionally capped) home
//! array, and the combined manifest object.
//!
//! ## Path encoding
//!
//! Emitted paths look like `images/street/strt01-01.jpg`. Only the filename
//! segment is percent-encoded — a name with a space becomes
//! `images/street/my%20shot.jpg` — while the `images/` prefix and the
//! category segment are emitted verbatim. Decoding the segment reconstructs
//! the original filename exactly, which is what the gallery and slideshow
//! scripts rely on when they fetch these paths.

use crate::config::{BuildConfig, SortPolicy};
use crate::naming;
use crate::scan::{ImageFile, Listing};
use std::cmp::Reverse;
use std::time::UNIX_EPOCH;

/// Ordered, encoded manifest data, ready for serialization.
#[derive(Debug)]
pub struct Manifest {
    /// Per-category path arrays, in configured category order.
    pub categories: Vec<CategoryManifest>,
    /// Home slideshow paths, capped at `home_cap` when configured.
    pub home: Vec<String>,
}

#[derive(Debug)]
pub struct CategoryManifest {
    pub name: String,
    pub paths: Vec<String>,
}

impl Manifest {
    /// The combined manifest object: one key per category plus the reserved
    /// `home` key, in that order.
    pub fn combined(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for cat in &self.categories {
            map.insert(cat.name.clone(), serde_json::json!(cat.paths));
        }
        map.insert("home".to_string(), serde_json::json!(self.home));
        serde_json::Value::Object(map)
    }
}

/// Assemble the manifest from scan listings.
pub fn build(listing: &Listing, config: &BuildConfig) -> Manifest {
    let categories = listing
        .categories
        .iter()
        .map(|cat| CategoryManifest {
            name: cat.name.clone(),
            paths: order(&cat.files, config.sort_policy)
                .into_iter()
                .map(|f| web_path(Some(&cat.name), &f.name))
                .collect(),
        })
        .collect();

    let mut home: Vec<String> = order(&listing.home, config.sort_policy)
        .into_iter()
        .map(|f| web_path(None, &f.name))
        .collect();
    if let Some(cap) = config.home_cap {
        home.truncate(cap);
    }

    Manifest { categories, home }
}

/// Apply the sort policy to a listing, preserving listing order on ties.
///
/// Both branches are stable sorts over the name-sorted scan listing, so
/// zero-keyed files (numeric policy) and equal timestamps (modified policy)
/// keep their relative order.
fn order(files: &[ImageFile], policy: SortPolicy) -> Vec<&ImageFile> {
    let mut sorted: Vec<&ImageFile> = files.iter().collect();
    match policy {
        SortPolicy::NumericSuffix => {
            sorted.sort_by_key(|f| naming::numeric_suffix(&f.name));
        }
        SortPolicy::ModifiedDesc => {
            sorted.sort_by_key(|f| Reverse(f.modified.unwrap_or(UNIX_EPOCH)));
        }
    }
    sorted
}

/// Build a web-relative path for a filename, percent-encoding the filename
/// segment only.
pub fn web_path(category: Option<&str>, filename: &str) -> String {
    let encoded = urlencoding::encode(filename);
    match category {
        Some(cat) => format!("images/{cat}/{encoded}"),
        None => format!("images/{encoded}"),
    }
}
