//! In-memory filesystem.
//!
//! Useful for dictionaries embedded in the binary and for tests, where no
//! file should touch the disk.

use std::io::{Cursor, Error, ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;

use super::Filesystem;

#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    files: HashMap<PathBuf, Arc<[u8]>>,
}

impl MemoryFs {
    pub fn new() -> MemoryFs {
        MemoryFs::default()
    }

    /// Stores `contents` under `path`, replacing any previous file.
    pub fn insert<P: Into<PathBuf>, B: Into<Vec<u8>>>(&mut self, path: P, contents: B) {
        self.files
            .insert(path.into(), Arc::from(contents.into().into_boxed_slice()));
    }

    pub fn with_file<P: Into<PathBuf>, B: Into<Vec<u8>>>(mut self, path: P, contents: B) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filesystem for MemoryFs {
    type File = Cursor<Arc<[u8]>>;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        let path = path.as_ref();
        match self.files.get(path) {
            Some(contents) => Ok(Cursor::new(Arc::clone(contents))),
            None => Err(Error::new(
                ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )),
        }
    }
}
