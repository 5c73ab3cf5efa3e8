//! Alphabets used to generate substitution and insertion candidates.
use std::ops::RangeInclusive;

use itertools::Itertools;

/// Errors raised while building an [`Alphabet`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AlphabetError {
    /// A symbol was empty or longer than one character
    #[error("Alphabet symbol {0:?} is not a single character")]
    InvalidSymbol(String),
}

/// Ordered, duplicate-free set of single-character symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from symbols, keeping the first occurrence of each.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Alphabet {
        Alphabet {
            symbols: symbols.into_iter().unique().collect(),
        }
    }

    /// Builds an alphabet covering an inclusive range, e.g. `'a'..='z'`.
    pub fn range(range: RangeInclusive<char>) -> Alphabet {
        Alphabet::new(range)
    }

    /// Builds an alphabet from single-character strings.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Result<Alphabet, AlphabetError> {
        let chars = symbols
            .iter()
            .map(|s| {
                let s = s.as_ref();
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(AlphabetError::InvalidSymbol(s.to_string())),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Alphabet::new(chars))
    }

    #[inline(always)]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline(always)]
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&ch)
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Alphabet {
        Alphabet::new(s.chars())
    }
}

impl From<String> for Alphabet {
    fn from(s: String) -> Alphabet {
        Alphabet::from(s.as_str())
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Alphabet {
        Alphabet::new(iter)
    }
}
