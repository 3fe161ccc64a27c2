//! Property-based tests for canonical resolution against a real filesystem.

use super::canonicalize::canonicalize;
use super::PathResolver;
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn components_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_component_strategy(), 1..6)
}

/// Create `parts` as nested directories under a fresh temp dir.
///
/// Returns the temp dir guard, its canonical root and the canonical leaf.
fn make_tree(parts: &[String]) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(dir.path()).unwrap();
    let leaf = parts.iter().fold(root.clone(), |acc, p| acc.join(p));
    fs::create_dir_all(&leaf).unwrap();
    (dir, root, leaf)
}

/// Create `root/p1/p1`, `root/p1/p2/p2`, ... so every detour in
/// [`noisy_spelling`] passes through an existing directory.
fn make_detours(root: &Path, parts: &[String]) {
    let mut cursor = root.to_path_buf();
    for part in parts {
        cursor.push(part);
        fs::create_dir_all(cursor.join(part)).unwrap();
    }
}

/// Spell `leaf` with a `./` after every component and an `x/..` detour
/// through each existing intermediate directory.
fn noisy_spelling(root: &Path, parts: &[String]) -> PathBuf {
    let mut noisy = root.to_path_buf();
    for part in parts {
        noisy.push(".");
        noisy.push(part);
        noisy.push(part);
        noisy.push("..");
    }
    noisy
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // An already-canonical path resolves to itself
    #[test]
    fn canonical_path_is_fixed_point(parts in components_strategy()) {
        let (_dir, _root, leaf) = make_tree(&parts);
        let resolved = PathResolver::new().resolve(&leaf).unwrap();
        prop_assert_eq!(resolved.as_path(), leaf.as_path());
    }

    // Cancelling `.` and `x/..` segments do not change the result
    #[test]
    fn cancelling_segments_are_invariant(parts in components_strategy()) {
        let (_dir, root, leaf) = make_tree(&parts);
        make_detours(&root, &parts);

        let noisy = noisy_spelling(&root, &parts);
        prop_assert_eq!(canonicalize(&noisy).unwrap(), leaf);
    }

    // Resolution output never contains dot segments and is absolute
    #[test]
    fn resolved_paths_are_clean(parts in components_strategy()) {
        let (_dir, root, _leaf) = make_tree(&parts);
        make_detours(&root, &parts);
        let resolved = canonicalize(&noisy_spelling(&root, &parts)).unwrap();
        prop_assert!(resolved.is_absolute());
        prop_assert!(resolved
            .components()
            .all(|c| !matches!(c, std::path::Component::CurDir | std::path::Component::ParentDir)));
    }

    // A missing child of an existing directory is reported as not found
    #[test]
    fn missing_leaf_is_not_found(parts in components_strategy(), missing in path_component_strategy()) {
        let (_dir, _root, leaf) = make_tree(&parts);
        let target = leaf.join(format!("{missing}.missing"));
        let err = canonicalize(&target).unwrap_err();
        prop_assert!(err.is_not_found());
        prop_assert_eq!(err.path(), Some(target.as_path()));
    }
}

#[cfg(unix)]
proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    // A symlink to a directory resolves to the directory, never the link
    #[test]
    fn symlinks_are_dereferenced(parts in components_strategy(), name in path_component_strategy()) {
        use std::os::unix::fs::symlink;

        let (_dir, root, leaf) = make_tree(&parts);
        let link = root.join(format!("{name}.link"));
        symlink(&leaf, &link).unwrap();

        let resolved = canonicalize(&link).unwrap();
        prop_assert_eq!(&resolved, &leaf);
        prop_assert!(!fs::symlink_metadata(&resolved).unwrap().file_type().is_symlink());
    }
}
