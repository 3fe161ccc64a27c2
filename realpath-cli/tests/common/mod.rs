//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated scratch directory with helpers for building fixtures.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// `root` is canonicalized up front so expectations are not thrown off
    /// by a symlinked temp location (e.g. `/var` on macOS).
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        Self { temp_dir, root }
    }

    /// A command for the realpath binary with no arguments.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("realpath").expect("Failed to find realpath binary");
        cmd.env_remove("REALPATH_LOG_MODE");
        cmd
    }

    /// A command that runs inside the test directory.
    pub fn command_in_root(&self) -> Command {
        let mut cmd = self.command();
        cmd.current_dir(&self.root);
        cmd
    }

    /// Create a directory (and parents) under the root.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file under the root.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, "fixture").expect("Failed to create test file");
        path
    }

    /// Create a symlink `name` under the root pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &Path, name: &str) -> PathBuf {
        let link = self.root.join(name);
        std::os::unix::fs::symlink(target, &link).expect("Failed to create symlink");
        link
    }
}

/// Expected stdout for a resolved path.
#[allow(dead_code)]
pub fn line(path: &Path) -> String {
    format!("{}\n", path.display())
}
