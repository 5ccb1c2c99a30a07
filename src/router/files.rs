//! Filesystem access for `/files/*` routes.

use std::io;
use std::path::{Path, PathBuf};

/// Reads and writes files under a root directory.
///
/// Names are joined onto the root as given. There is no canonicalization,
/// so a name containing `..` can reach outside the root.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    root: Option<PathBuf>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A store with no root. Every read and write fails.
    pub fn disabled() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(name))
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no file directory configured"))
    }

    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self.resolve(name)?;
        tokio::fs::read(path).await
    }

    /// Creates or truncates the file and writes `contents` to it. Missing
    /// parent directories are not created.
    pub async fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(name)?;
        tokio::fs::write(path, contents).await
    }
}
