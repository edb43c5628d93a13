//! Named resource lookup.
//!
//! The installer payload is addressed by flat names (`info`, `packs.info`, ...).
//! A provider answers with the raw bytes or `None` when the name is unknown.

use crate::codec;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::trace;

pub trait ResourceProvider {
    /// Raw bytes of `name`, or `None` if the resource does not exist.
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>>;

    fn require(&self, name: &str) -> Result<Vec<u8>> {
        self.open(name)?.ok_or_else(|| Error::NotFound {
            name: name.to_string(),
        })
    }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for &P {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> { (**self).open(name) }
}

impl<P: ResourceProvider + ?Sized> ResourceProvider for Box<P> {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> { (**self).open(name) }
}

/// Resources stored as plain files below a root directory.
#[derive(Debug, Clone)]
pub struct DirResources {
    root: PathBuf,
}

impl DirResources {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let rel = Path::new(name.trim_start_matches('/'));
        let escapes = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            return Err(Error::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.root.join(rel))
    }
}

impl ResourceProvider for DirResources {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.resolve(name)?;
        trace!(name, path = %path.display(), "opening resource");
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(Error::Read {
                name: name.to_string(),
                path,
                source,
            }),
        }
    }
}

/// In-memory resources, mostly for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryResources {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryResources {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Adds `data` wrapped in the current envelope version.
    pub fn with_record<T: Serialize>(self, name: impl Into<String>, data: &T) -> Result<Self> {
        let bytes = codec::encode(data)?;
        Ok(self.with(name, bytes))
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<u8>> { self.entries.remove(name) }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl ResourceProvider for MemoryResources {
    fn open(&self, name: &str) -> Result<Option<Vec<u8>>> { Ok(self.entries.get(name).cloned()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_open_missing_is_none() {
        let res = MemoryResources::new();
        assert!(res.open("info").unwrap().is_none());
    }

    #[test]
    fn test_require_missing_is_not_found() {
        let res = MemoryResources::new();
        assert!(matches!(res.require("vars"), Err(Error::NotFound { name }) if name == "vars"));
    }

    #[test]
    fn test_memory_with_bytes() {
        let res = MemoryResources::new().with("blob", vec![1u8, 2, 3]);
        assert_eq!(res.require("blob").unwrap(), vec![1, 2, 3]);
        assert_eq!(res.len(), 1);
    }

    #[test]
    fn test_dir_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("info"), b"{}").unwrap();
        let res = DirResources::new(dir.path());
        assert_eq!(res.open("info").unwrap().as_deref(), Some(&b"{}"[..]));
        assert!(res.open("vars").unwrap().is_none());
    }

    #[test]
    fn test_dir_strips_leading_slash() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("win32-defaultpaths.properties"), b"en=Program Files").unwrap();
        let res = DirResources::new(dir.path());
        assert!(res.open("/win32-defaultpaths.properties").unwrap().is_some());
    }

    #[test]
    fn test_dir_rejects_parent_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let res = DirResources::new(dir.path());
        assert!(matches!(res.open("../secret"), Err(Error::InvalidName { .. })));
        assert!(matches!(res.open(""), Err(Error::InvalidName { .. })));
    }

    #[test]
    fn test_provider_through_reference() {
        let res = MemoryResources::new().with("a", "x");
        let boxed: Box<dyn ResourceProvider> = Box::new(res);
        assert!(boxed.open("a").unwrap().is_some());
    }
}
