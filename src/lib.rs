//! # Photo Manifest
//!
//! A build-time JSON manifest generator for photo portfolio websites. Your
//! filesystem is the data source: each category folder under `images/`
//! becomes a manifest file, root-level images become the home slideshow, and
//! the site's gallery scripts fetch the results from `data/`.
//!
//! # Architecture: Linear Pipeline
//!
//! One pass, no state between runs:
//!
//! ```text
//! enumerate -> filter -> order -> encode -> serialize
//! ```
//!
//! ```text
//! images/street/*.jpg      ->  data/street.json      (array of web paths)
//! images/landscape/*.jpg   ->  data/landscape.json
//! images/*.jpg             ->  data/home.json        (optionally capped)
//! all of the above         ->  data/manifest.json    (combined object)
//! ```
//!
//! Re-running over an unchanged tree produces byte-identical output, so the
//! command can sit in any build script without dirtying deploys.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | enumerate + filter — lists category folders and the home pool, extension-filtered |
//! | [`manifest`] | order + encode — sort policy, web path encoding, manifest assembly |
//! | [`generate`] | serialize — writes the JSON files with independent per-file failure handling |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`naming`] | numeric-suffix sort key parser (`strt01-03.jpg` → 3) |
//! | [`rename`] | `<prefix>-NN.<ext>` filename normalization for the `rename` subcommand |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## One Sort Policy Per Run
//!
//! Two orderings exist in the wild for galleries like this: ascending by the
//! numeric suffix baked into renamed filenames, and newest-modified first.
//! They produce materially different manifests, so the policy is a single
//! config value ([`config::SortPolicy`]) applied uniformly to every category
//! and the home pool — never mixed within a run. The default is
//! `numeric-suffix`, which matches the filename convention the [`rename`]
//! subcommand produces.
//!
//! ## Missing Is Not Broken
//!
//! A category folder that does not exist is an empty category and a note on
//! stderr, not an error — manifests for the other categories are still
//! written, and the empty one gets a valid `[]`. Only a missing `images/`
//! root, an uncreatable output directory, or (in `strict` mode) an
//! unreadable category aborts the run.
//!
//! ## Encode the Filename, Never the Structure
//!
//! Consumers fetch the emitted strings verbatim, so the filename segment is
//! percent-encoded for URL safety while the `images/` prefix and category
//! segment stay literal. Decoding a segment always reconstructs the original
//! filename.

pub mod config;
pub mod generate;
pub mod manifest;
pub mod naming;
pub mod output;
pub mod rename;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
