//! Dictionary sources.
//!
//! A [`WordListReader`] turns a dictionary source into the ordered sequence of
//! words it contains. Duplicates are kept: how often a word appears is what
//! weights it during correction.
use std::io::Read;
use std::path::Path;

use smol_str::SmolStr;

use crate::tokenizer::Tokenize;
use crate::vfs::{Filesystem, Fs};

pub mod error;

pub use self::error::WordListError;

pub trait WordListReader: Send + Sync {
    fn word_list(&self, source: &Path) -> Result<Vec<SmolStr>, WordListError>;
}

impl<F> WordListReader for F
where
    F: Fn(&Path) -> Result<Vec<SmolStr>, WordListError> + Send + Sync,
{
    fn word_list(&self, source: &Path) -> Result<Vec<SmolStr>, WordListError> {
        self(source)
    }
}

/// Reads UTF-8 text and splits it on [`DELIMITERS`](crate::tokenizer::DELIMITERS).
#[derive(Debug, Default, Clone)]
pub struct FileWordListReader<FS: Filesystem = Fs> {
    fs: FS,
}

impl FileWordListReader<Fs> {
    pub fn new() -> FileWordListReader<Fs> {
        FileWordListReader { fs: Fs }
    }
}

impl<FS: Filesystem> FileWordListReader<FS> {
    pub fn with_filesystem(fs: FS) -> FileWordListReader<FS> {
        FileWordListReader { fs }
    }

    pub fn filesystem(&self) -> &FS {
        &self.fs
    }

    fn read_bytes(&self, source: &Path) -> Result<Vec<u8>, WordListError> {
        let name = || source.to_string_lossy().to_string();

        let mut file = self
            .fs
            .open(source)
            .map_err(|e| WordListError::Io(name(), e))?;
        let mut buf = Vec::new();
        file.read_to_end(&mut buf)
            .map_err(|e| WordListError::Io(name(), e))?;
        Ok(buf)
    }
}

impl<FS> WordListReader for FileWordListReader<FS>
where
    FS: Filesystem + Send + Sync,
{
    fn word_list(&self, source: &Path) -> Result<Vec<SmolStr>, WordListError> {
        let bytes = self.read_bytes(source)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| WordListError::Decode(source.to_string_lossy().to_string(), e))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let words: Vec<SmolStr> = text.dictionary_words().map(SmolStr::new).collect();
        log::debug!("read {} words from {}", words.len(), source.display());

        Ok(words)
    }
}
