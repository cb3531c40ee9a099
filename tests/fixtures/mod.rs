//! Test fixtures for resolution tests
//!
//! - A checked-in page directory with a complete `vbit.conf`
//! - Temporary page directories with caller-supplied config files

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the checked-in page directory fixture
pub fn pages_fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pages")
}

/// Temporary page directory, removed on drop
pub struct PageDir {
    dir: TempDir,
}

impl PageDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp page dir"),
        }
    }

    /// Page directory with `vbit.conf` set to `contents`
    pub fn with_base(contents: &str) -> Self {
        let pages = Self::new();
        pages.write_base(contents);
        pages
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_base(&self, contents: &str) {
        fs::write(self.path().join("vbit.conf"), contents).expect("write vbit.conf");
    }

    pub fn write_override(&self, contents: &str) {
        fs::write(self.path().join("vbit.conf.override"), contents)
            .expect("write vbit.conf.override");
    }

    /// `--dir <path>` followed by `extra`
    pub fn argv(&self, extra: &[&str]) -> Vec<String> {
        let mut argv = vec!["--dir".to_string(), self.path().display().to_string()];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv
    }
}
