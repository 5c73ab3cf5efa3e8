//! Filesystem abstraction for dictionary sources.
use std::fmt::Debug;
use std::io::{Read, Result};
use std::path::Path;

pub mod memory;

pub use self::memory::MemoryFs;

pub trait Filesystem: Debug {
    type File: Read;

    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File>;
}

/// The operating system's filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fs;

impl Filesystem for Fs {
    type File = std::fs::File;

    #[inline(always)]
    fn open<P: AsRef<Path>>(&self, path: P) -> Result<Self::File> {
        std::fs::File::open(&path)
    }
}
