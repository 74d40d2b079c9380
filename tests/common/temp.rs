use std::{
    fs,
    path::{Path, PathBuf},
};

/// Temp directory fixture; removed when dropped.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

#[allow(dead_code)]
impl TempDir {
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.inner.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
