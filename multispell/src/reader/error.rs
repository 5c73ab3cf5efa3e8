//! Word list reading errors.
use std::io::Error;
use std::str::Utf8Error;

/// Errors that can occur while reading a dictionary source.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WordListError {
    /// The source could not be opened or read
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] Error),

    /// The source is not valid UTF-8
    #[error("'{0}' is not valid UTF-8")]
    Decode(String, #[source] Utf8Error),
}
