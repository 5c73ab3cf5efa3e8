//! Error types for spell checker configuration.

use smol_str::SmolStr;

use crate::reader::WordListError;

/// Errors that can occur while configuring a [`SpellChecker`](super::SpellChecker).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpellCheckerError {
    /// A language with this code is already registered
    #[error("Language '{0}' is already registered")]
    DuplicateLanguage(SmolStr),

    /// An argument was missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The dictionary source could not be read
    #[error("Failed to read word list")]
    WordList(#[from] WordListError),
}
