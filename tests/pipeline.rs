//! End-to-end pipeline tests: scan -> manifest -> generate over real
//! directory trees, checking the written JSON rather than intermediate
//! structures.

use photo_manifest::config::BuildConfig;
use photo_manifest::{generate, manifest, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lay out a site root: `<tmp>/images/` with category folders and
/// root-level home files.
fn site_root(categories: &[(&str, &[&str])], home: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    fs::create_dir_all(&images).unwrap();
    for (cat, files) in categories {
        let dir = images.join(cat);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            fs::write(dir.join(file), "fake image").unwrap();
        }
    }
    for file in home {
        fs::write(images.join(file), "fake image").unwrap();
    }
    tmp
}

fn run_build(root: &Path, config: &BuildConfig) -> generate::WriteReport {
    let listing = scan::scan(&root.join("images"), config).unwrap();
    let m = manifest::build(&listing, config);
    generate::write_manifests(&m, &root.join("data")).unwrap()
}

fn read_array(path: &Path) -> Vec<String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn numeric_suffix_example_from_street() {
    let tmp = site_root(
        &[(
            "street",
            &["strt01-10.jpg", "strt01-01.jpg", "strt01-02.jpg"],
        )],
        &[],
    );
    let config = BuildConfig::default();
    run_build(tmp.path(), &config);

    let street = read_array(&tmp.path().join("data/street.json"));
    assert_eq!(
        street,
        vec![
            "images/street/strt01-01.jpg",
            "images/street/strt01-02.jpg",
            "images/street/strt01-10.jpg",
        ]
    );
}

#[test]
fn two_runs_are_byte_identical() {
    let tmp = site_root(
        &[
            ("street", &["strt01-02.jpg", "strt01-01.jpg"]),
            ("landscape", &["lanscp01-01.jpg"]),
        ],
        &["home01-01.jpg", "home01-02.jpg"],
    );
    let config = BuildConfig::default();

    run_build(tmp.path(), &config);
    let first: Vec<(String, Vec<u8>)> = ["street", "landscape", "architecture", "home", "manifest"]
        .iter()
        .map(|n| {
            let p = tmp.path().join(format!("data/{n}.json"));
            (n.to_string(), fs::read(p).unwrap())
        })
        .collect();

    run_build(tmp.path(), &config);
    for (name, bytes) in first {
        let again = fs::read(tmp.path().join(format!("data/{name}.json"))).unwrap();
        assert_eq!(bytes, again, "{name}.json changed between identical runs");
    }
}

#[test]
fn missing_category_writes_empty_array_and_run_succeeds() {
    let tmp = site_root(&[("street", &["strt01-01.jpg"])], &[]);
    let config = BuildConfig::default();
    let report = run_build(tmp.path(), &config);

    assert!(report.failures.is_empty());
    assert_eq!(
        fs::read_to_string(tmp.path().join("data/landscape.json"))
            .unwrap()
            .trim(),
        "[]"
    );
    assert_eq!(
        read_array(&tmp.path().join("data/street.json")).len(),
        1
    );
}

#[test]
fn home_cap_of_11_from_15_files() {
    let home: Vec<String> = (1..=15).map(|i| format!("home01-{i:02}.jpg")).collect();
    let home_refs: Vec<&str> = home.iter().map(|s| s.as_str()).collect();
    let tmp = site_root(&[], &home_refs);
    let config = BuildConfig {
        home_cap: Some(11),
        ..BuildConfig::default()
    };
    run_build(tmp.path(), &config);

    let home = read_array(&tmp.path().join("data/home.json"));
    assert_eq!(home.len(), 11);
    assert_eq!(home[0], "images/home01-01.jpg");
    assert_eq!(home[10], "images/home01-11.jpg");
}

#[test]
fn unrecognized_files_produce_no_entries() {
    let tmp = site_root(
        &[("street", &["strt01-01.jpg", "readme.txt", "clip.mov"])],
        &["notes.md"],
    );
    let config = BuildConfig::default();
    run_build(tmp.path(), &config);

    assert_eq!(
        read_array(&tmp.path().join("data/street.json")),
        vec!["images/street/strt01-01.jpg"]
    );
    assert!(read_array(&tmp.path().join("data/home.json")).is_empty());
}

#[test]
fn home_never_contains_category_names() {
    let tmp = site_root(
        &[("street", &["strt01-01.jpg"]), ("landscape", &[])],
        &["home01-01.jpg"],
    );
    let config = BuildConfig::default();
    run_build(tmp.path(), &config);

    let home = read_array(&tmp.path().join("data/home.json"));
    assert_eq!(home, vec!["images/home01-01.jpg"]);
    for entry in &home {
        assert!(!entry.ends_with("/street"));
        assert!(!entry.ends_with("/landscape"));
    }
}

#[test]
fn encoded_paths_decode_to_original_names() {
    let tmp = site_root(&[("street", &["my shot 01.jpg"])], &["cover image.png"]);
    let config = BuildConfig::default();
    run_build(tmp.path(), &config);

    let street = read_array(&tmp.path().join("data/street.json"));
    assert_eq!(street, vec!["images/street/my%20shot%2001.jpg"]);
    let decoded = urlencoding_decode(street[0].strip_prefix("images/street/").unwrap());
    assert_eq!(decoded, "my shot 01.jpg");

    let home = read_array(&tmp.path().join("data/home.json"));
    assert_eq!(home, vec!["images/cover%20image.png"]);
}

// Minimal percent-decoder so the test does not depend on the crate's own
// encoding helper to check itself.
fn urlencoding_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
            out.push(u8::from_str_radix(hex, 16).unwrap());
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn combined_manifest_matches_individual_files() {
    let tmp = site_root(
        &[
            ("street", &["strt01-01.jpg"]),
            ("landscape", &["lanscp01-01.jpg"]),
            ("architecture", &[]),
        ],
        &["home01-01.jpg"],
    );
    let config = BuildConfig::default();
    run_build(tmp.path(), &config);

    let combined: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(tmp.path().join("data/manifest.json")).unwrap())
            .unwrap();
    let obj = combined.as_object().unwrap();
    let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["street", "landscape", "architecture", "home"]);

    for name in ["street", "landscape", "architecture", "home"] {
        let individual = read_array(&tmp.path().join(format!("data/{name}.json")));
        assert_eq!(obj[name], serde_json::json!(individual), "{name} mismatch");
    }
}

#[test]
fn missing_images_root_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let config = BuildConfig::default();
    let result = scan::scan(&tmp.path().join("images"), &config);
    assert!(matches!(result, Err(scan::ScanError::MissingRoot(_))));
}
