use std::fmt;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use smol_str::SmolStr;

use self::language::LanguageSpeller;
use crate::alphabet::Alphabet;
use crate::config::SpellCheckerConfig;
use crate::reader::{FileWordListReader, WordListReader};
use crate::speller::suggestion::Correction;

pub mod distance;
pub mod edits;
pub mod error;
pub mod frequency;
pub mod language;
pub mod suggestion;

pub use self::error::SpellCheckerError;

/// Query side of a spell checker.
pub trait Corrector: Send + Sync {
    /// Best correction of `word` across all languages, or `word` itself when
    /// it is already known or nothing better was found.
    fn correct(&self, word: &str) -> SmolStr;

    /// Whether any language knows `word`.
    fn is_correct(&self, word: &str) -> bool;
}

/// Administration side of a spell checker.
pub trait CorrectorConfigurator: Send + Sync {
    /// Replaces the reader used by subsequent [`add_language`] calls.
    ///
    /// [`add_language`]: CorrectorConfigurator::add_language
    fn set_reader(&self, reader: Option<Arc<dyn WordListReader>>) -> Result<(), SpellCheckerError>;

    /// Reads `source` with the current reader and registers its words under
    /// `code`. Codes are unique: registering one twice fails and leaves the
    /// first registration untouched.
    fn add_language(
        &self,
        code: &str,
        alphabet: Alphabet,
        source: &Path,
    ) -> Result<(), SpellCheckerError>;

    /// Registered language codes, in registration order.
    fn languages(&self) -> Vec<SmolStr>;
}

struct SpellCheckerState {
    reader: Arc<dyn WordListReader>,
    languages: Vec<LanguageSpeller>,
}

impl SpellCheckerState {
    fn ensure_vacant(&self, code: &str) -> Result<(), SpellCheckerError> {
        if self.languages.iter().any(|l| l.code() == code) {
            return Err(SpellCheckerError::DuplicateLanguage(code.into()));
        }
        Ok(())
    }
}

/// Registry of single-language correctors answering queries across all of
/// them.
///
/// Queries share a read lock. Registration reads and indexes the dictionary
/// without holding the lock and only locks to insert the finished language.
pub struct SpellChecker {
    state: RwLock<SpellCheckerState>,
}

impl SpellChecker {
    /// Creates an empty spell checker reading dictionaries from the filesystem.
    pub fn new() -> SpellChecker {
        SpellChecker::with_reader(Arc::new(FileWordListReader::new()))
    }

    pub fn with_reader(reader: Arc<dyn WordListReader>) -> SpellChecker {
        SpellChecker {
            state: RwLock::new(SpellCheckerState {
                reader,
                languages: vec![],
            }),
        }
    }

    /// Creates a spell checker with every language of `config`, in order.
    pub fn from_config(config: &SpellCheckerConfig) -> Result<SpellChecker, SpellCheckerError> {
        let checker = SpellChecker::new();
        checker.apply_config(config)?;
        Ok(checker)
    }

    /// Registers every language of `config` with the current reader, stopping
    /// at the first failure.
    pub fn apply_config(&self, config: &SpellCheckerConfig) -> Result<(), SpellCheckerError> {
        for lang in config.languages.iter() {
            self.add_language(&lang.code, Alphabet::from(lang.alphabet.as_str()), &lang.dictionary)?;
        }
        Ok(())
    }

    /// Shares this spell checker as its administration capability.
    pub fn configurator(self: &Arc<Self>) -> Arc<dyn CorrectorConfigurator> {
        Arc::clone(self) as Arc<dyn CorrectorConfigurator>
    }

    /// Registers an in-memory word list under `code`, bypassing the reader.
    pub fn add_language_words<I, S>(
        &self,
        code: &str,
        alphabet: Alphabet,
        words: I,
    ) -> Result<(), SpellCheckerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.read().ensure_vacant(code)?;
        self.insert(LanguageSpeller::new(code, alphabet, words))
    }

    /// Best correction across all languages, with the language it came from.
    ///
    /// The smallest distance wins; among equal distances the language
    /// registered first wins. `None` when no language found anything.
    pub fn best_correction(&self, word: &str) -> Option<Correction> {
        let state = self.state.read();

        state
            .languages
            .iter()
            .filter_map(|l| l.correct(word))
            .min_by_key(|c| c.distance())
    }

    fn insert(&self, speller: LanguageSpeller) -> Result<(), SpellCheckerError> {
        let mut state = self.state.write();
        // Another registration may have won the race while the lock was free.
        state.ensure_vacant(speller.code())?;

        log::debug!(
            "registered language {} ({} words, {} symbols)",
            speller.code(),
            speller.table().len(),
            speller.alphabet().len()
        );
        state.languages.push(speller);
        Ok(())
    }
}

impl Default for SpellChecker {
    fn default() -> SpellChecker {
        SpellChecker::new()
    }
}

impl fmt::Debug for SpellChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellChecker")
            .field("languages", &self.languages())
            .finish()
    }
}

impl Corrector for SpellChecker {
    fn correct(&self, word: &str) -> SmolStr {
        match self.best_correction(word) {
            Some(c) if !c.is_exact() => c.value,
            _ => SmolStr::new(word),
        }
    }

    fn is_correct(&self, word: &str) -> bool {
        self.state.read().languages.iter().any(|l| l.is_correct(word))
    }
}

impl CorrectorConfigurator for SpellChecker {
    fn set_reader(&self, reader: Option<Arc<dyn WordListReader>>) -> Result<(), SpellCheckerError> {
        let reader = reader.ok_or(SpellCheckerError::InvalidArgument("reader must be set"))?;
        self.state.write().reader = reader;
        Ok(())
    }

    fn add_language(
        &self,
        code: &str,
        alphabet: Alphabet,
        source: &Path,
    ) -> Result<(), SpellCheckerError> {
        let reader = {
            let state = self.state.read();
            state.ensure_vacant(code)?;
            Arc::clone(&state.reader)
        };

        log::debug!("loading {} from {}", code, source.display());
        let words = reader.word_list(source)?;
        self.insert(LanguageSpeller::new(
            code,
            alphabet,
            words.iter().map(SmolStr::as_str),
        ))
    }

    fn languages(&self) -> Vec<SmolStr> {
        self.state
            .read()
            .languages
            .iter()
            .map(|l| SmolStr::new(l.code()))
            .collect()
    }
}
